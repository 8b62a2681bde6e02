use crate::app_config::AppConfig;
use crate::meraki::get_organizations;
use crate::report::inventory::{device_row, devices_of};
use crate::report::row::flatten_fields;
use crate::report::{DEVICES_SHEET, ORGANIZATIONS_SHEET, ReportError, Sheet, recover};
use reqwest::Client;
use tracing::{info, instrument};

/// Two sheets: the organizations themselves and all of their devices.
#[instrument(skip_all)]
pub(super) async fn build(client: &Client, config: &AppConfig) -> Result<Vec<Sheet>, ReportError> {
    let organizations = recover(get_organizations(client, config.meraki()).await)?.unwrap_or_default();
    if organizations.is_empty() {
        info!("No organization found");
        return Ok(Vec::new());
    }

    let organization_rows = organizations
        .iter()
        .map(|organization| flatten_fields(organization.fields()))
        .collect();

    let device_rows = devices_of(client, config, &organizations)
        .await?
        .iter()
        .map(|(organization_id, device)| device_row(device, organization_id))
        .collect();

    Ok(vec![
        Sheet::new(ORGANIZATIONS_SHEET, organization_rows),
        Sheet::new(DEVICES_SHEET, device_rows),
    ])
}
