use anyhow::Result;
use std::sync::Arc;
use stepform_core::AppConfig;
use stepform_service::FormService;

use crate::connect_storage;

pub(crate) async fn run(config: &AppConfig, session_id: &str) -> Result<()> {
    let storage = Arc::new(connect_storage(config).await?);
    let service = FormService::new(storage);
    match service.get_form_data(session_id).await {
        Ok(snapshot) => {
            tracing::info!(
                session_id,
                state = %snapshot.session.state(),
                answers = snapshot.answers.len(),
                "form session loaded"
            );
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        },
        Err(e) if e.is_not_found() => anyhow::bail!("Form session not found: {session_id}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
