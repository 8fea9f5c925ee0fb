use anyhow::Result;
use stepform_core::AppConfig;

use crate::connect_storage;

/// Connecting bootstraps the schema; nothing else to do.
pub(crate) async fn run(config: &AppConfig) -> Result<()> {
    let storage = connect_storage(config).await?;
    tracing::info!(backend = storage.kind(), "Database tables created/verified");
    Ok(())
}
