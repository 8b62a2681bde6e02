use crate::app_config::AppConfig;
use crate::meraki::{MerakiClientError, new_client};
use crate::report::{ReportError, build_report, write_workbook};
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::{self, JoinError};
use tracing::{info, instrument};

/// Builds the configured report and writes it. Returns the path of the spreadsheet, or `None`
/// when there was nothing to write.
#[instrument(skip_all)]
pub async fn run(config: &AppConfig) -> Result<Option<PathBuf>, RunError> {
    let api_key = config.api_key().ok_or(RunError::MissingApiKey)?;
    let client = new_client(api_key, config.meraki())?;

    let sheets = build_report(&client, config).await?;
    if sheets.is_empty() {
        info!("No data found, no spreadsheet generated");
        return Ok(None);
    }

    let path = PathBuf::from(config.report().output());
    let written = path.clone();
    task::spawn_blocking(move || write_workbook(&written, &sheets)).await??;

    Ok(Some(path))
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("API_KEY not found in the environment or .env")]
    MissingApiKey,
    #[error(transparent)]
    Client(#[from] MerakiClientError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
