use crate::app_config::Meraki;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;
use tracing::warn;

pub const API_KEY_HEADER: &str = "x-cisco-meraki-api-key";

pub fn new_client(api_key: &str, config: &Meraki) -> Result<Client, MerakiClientError> {
    let mut headers = header::HeaderMap::new();
    let mut api_key_value = HeaderValue::from_str(api_key)?;
    api_key_value.set_sensitive(true);
    headers.insert(API_KEY_HEADER, api_key_value);
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    if !config.verify_tls() {
        warn!("⚠️ TLS certificate verification is disabled for {}", config.url());
    }

    let client = Client::builder()
        .danger_accept_invalid_certs(!config.verify_tls())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum MerakiClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Meraki client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[tokio::test]
    async fn new_client_sets_the_api_key_and_accept_headers() -> Result<(), MerakiClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .match_header("X-Cisco-Meraki-API-Key", "key")
            .match_header("accept", "application/json")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().meraki_url(server.url()).build();
        let client = new_client("key", config.meraki())?;

        client.get(format!("{}{}", server.url(), "/")).send().await?;

        // Verify that the call came in and that the headers are set
        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn new_client_without_tls_verification_still_sends_the_api_key() -> Result<(), MerakiClientError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/organizations")
            .with_status(200)
            .match_header("X-Cisco-Meraki-API-Key", "key")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().meraki_url(server.url()).verify_tls(false).build();
        assert!(!config.meraki().verify_tls());

        let client = new_client("key", config.meraki())?;
        client.get(format!("{}/organizations", config.meraki().url())).send().await?;

        mock.assert_async().await;

        Ok(())
    }

    #[test]
    fn new_client_rejects_an_api_key_that_is_not_a_header_value() {
        let config = AppConfigBuilder::new().build();
        let result = new_client("key\nwith newline", config.meraki());

        assert!(matches!(result, Err(MerakiClientError::InvalidHeaderValue(_))));
    }
}
