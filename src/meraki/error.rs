use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerakiError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Meraki rejected the API key ({status})")]
    Unauthorized { status: StatusCode },
    #[error("unexpected status {status} for '{url}'")]
    Status { status: StatusCode, url: String },
    #[error("invalid JSON for '{url}': {source}")]
    Decode { source: serde_json::Error, url: String },
    #[error("no organization is accessible with this API key")]
    NoOrganizations,
}

impl MerakiError {
    /// Errors after which a report carries on as if the call returned nothing.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MerakiError::Status { .. } | MerakiError::Decode { .. } | MerakiError::NoOrganizations
        )
    }
}
