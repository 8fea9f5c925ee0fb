use anyhow::Result;
use std::sync::Arc;
use stepform_core::AppConfig;
use stepform_http::{create_router, AppState};
use stepform_service::FormService;

use crate::connect_storage;

pub(crate) async fn run(config: AppConfig) -> Result<()> {
    let storage = Arc::new(connect_storage(&config).await?);
    let form_service = Arc::new(FormService::new(storage));
    let state = Arc::new(AppState::new(form_service, config.cors_origins.clone()));

    let router = create_router(state);
    let addr = config.bind_addr();
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
