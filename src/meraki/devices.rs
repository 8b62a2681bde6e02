use crate::app_config::Meraki;
use crate::meraki::MerakiError;
use crate::meraki::domain::Device;
use crate::meraki::request::get_json;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Retrieves every device of an organization, one page at a time.
///
/// The serial of the last device on a page is the `startingAfter` cursor of the next
/// request. Paging stops at an empty page or at a page shorter than `per_page`.
#[instrument(skip(client, config))]
pub async fn get_organization_devices(
    client: &Client,
    config: &Meraki,
    organization_id: &str,
    model: Option<&str>,
) -> Result<Vec<Device>, MerakiError> {
    info!("Retrieving devices...");

    let url = format!("{}/organizations/{}/devices", config.url(), organization_id);
    let per_page = config.per_page();
    let mut devices = Vec::new();
    let mut starting_after: Option<String> = None;

    loop {
        let mut query = vec![("perPage", per_page.to_string())];
        if let Some(model) = model {
            query.push(("model", model.to_string()));
        }
        if let Some(cursor) = &starting_after {
            query.push(("startingAfter", cursor.clone()));
        }

        let page: Vec<Device> = get_json(client, &url, &query).await?;
        let page_size = page.len();
        debug!("Retrieved a page of {} device(s)", page_size);

        starting_after = page.last().and_then(Device::serial).map(str::to_string);
        devices.extend(page);

        if page_size < per_page {
            break;
        }
        if starting_after.is_none() {
            warn!("⚠️ Last device of a full page has no serial, stopping after {} device(s)", devices.len());
            break;
        }
    }

    info!("Retrieving devices... OK, {} found", devices.len());
    Ok(devices)
}
