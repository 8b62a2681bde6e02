mod inventory;
mod organizations;
mod row;
mod wan;
mod writer;

use crate::app_config::{AppConfig, ReportKind};
use crate::meraki::MerakiError;
use crate::migration::ReferenceError;
use reqwest::Client;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{instrument, warn};

pub use row::{Cell, Row};
pub use writer::{Sheet, write_workbook};

pub const ORGANIZATIONS_SHEET: &str = "Organizacoes";
pub const DEVICES_SHEET: &str = "Dispositivos";
pub const DEFAULT_SHEET: &str = "Sheet1";

/// Collects the sheets of the configured report. An empty result means there is nothing to write.
#[instrument(skip_all, fields(kind = ?config.report().kind()))]
pub async fn build_report(client: &Client, config: &AppConfig) -> Result<Vec<Sheet>, ReportError> {
    match config.report().kind() {
        ReportKind::Wan => wan::build(client, config).await,
        ReportKind::Organizations => organizations::build(client, config).await,
        ReportKind::Inventory => inventory::build(client, config).await,
    }
}

/// Turns the API errors a report can live with into `None`.
fn recover<T>(result: Result<T, MerakiError>) -> Result<Option<T>, MerakiError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            warn!("⚠️ {}, continuing without this data", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Meraki(#[from] MerakiError),
    #[error("could not read the migration reference: {0}")]
    Reference(#[from] ReferenceError),
    #[error("could not write the spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("sheet '{sheet}' does not fit in a spreadsheet")]
    TooLarge { sheet: String },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn recover_swallows_unexpected_statuses() {
        let result: Result<Vec<u8>, _> = Err(MerakiError::Status {
            status: StatusCode::BAD_GATEWAY,
            url: "/organizations".to_string(),
        });

        assert!(matches!(recover(result), Ok(None)));
    }

    #[test]
    fn recover_swallows_malformed_bodies() {
        let source = serde_json::from_str::<serde_json::Value>("<html>gateway</html>").unwrap_err();
        let result: Result<Vec<u8>, _> = Err(MerakiError::Decode {
            source,
            url: "/organizations/1/devices".to_string(),
        });

        assert!(matches!(recover(result), Ok(None)));
    }

    #[test]
    fn recover_keeps_authorization_failures() {
        let result: Result<Vec<u8>, _> = Err(MerakiError::Unauthorized {
            status: StatusCode::UNAUTHORIZED,
        });

        assert!(matches!(recover(result), Err(MerakiError::Unauthorized { .. })));
    }

    #[test]
    fn recover_passes_values_through() {
        assert!(matches!(recover(Ok(3)), Ok(Some(3))));
    }
}
