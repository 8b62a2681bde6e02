use crate::meraki::MerakiError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

pub(in crate::meraki) async fn get_json<T>(client: &Client, url: &str, query: &[(&str, String)]) -> Result<T, MerakiError>
where
    T: DeserializeOwned,
{
    let response = client.get(url).query(query).send().await?;
    let status = response.status();
    debug!(status = %status, "GET {} {:?}", url, query);

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(MerakiError::Unauthorized { status });
    }
    if !status.is_success() {
        return Err(MerakiError::Status {
            status,
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| MerakiError::Decode {
        source,
        url: url.to_string(),
    })
}
