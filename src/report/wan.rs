use crate::annotation::{ParserProfile, WanIds, extract_wan_ids};
use crate::app_config::AppConfig;
use crate::meraki::domain::Device;
use crate::meraki::{get_organization_devices, get_organization_id};
use crate::report::{Cell, DEFAULT_SHEET, ReportError, Row, Sheet, recover};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// One row per device of the configured models: serial, WAN addresses and the WAN identifiers
/// found in the notes.
#[instrument(skip_all)]
pub(super) async fn build(client: &Client, config: &AppConfig) -> Result<Vec<Sheet>, ReportError> {
    let Some(organization_id) = recover(get_organization_id(client, config.meraki()).await)? else {
        return Ok(Vec::new());
    };

    let mut rows = Vec::new();
    for model in config.report().models() {
        info!("🔎 Collecting WAN identifiers of {} devices...", model);
        let devices = get_organization_devices(client, config.meraki(), &organization_id, Some(model.as_str())).await;
        let devices = recover(devices)?.unwrap_or_default();

        rows.extend(
            devices
                .iter()
                .map(|device| wan_row(device, config.report().parser_profile(), config.report().wan_columns())),
        );
        info!("🔎 Collecting WAN identifiers of {} devices... OK, {} device(s)", model, devices.len());
    }

    if rows.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![Sheet::new(DEFAULT_SHEET, rows)])
}

fn wan_row(device: &Device, profile: ParserProfile, wan_columns: usize) -> Row {
    let wan_ids = extract_wan_ids(device.notes(), profile);
    if !wan_ids.is_empty() {
        debug!(serial = device.serial(), "Extracted {:?}", wan_ids.to_map());
    }

    let mut row = Row::new();
    row.insert("Serial".to_string(), Cell::from(device.serial().unwrap_or_default()));
    for wan in 1..=3 {
        row.insert(format!("wan{}Ip", wan), Cell::from(device.wan_ip(wan)));
    }
    for position in 1..=wan_columns {
        let id = wan_ids.nth(position).unwrap_or_default();
        row.insert(WanIds::label(position), Cell::from(id));
    }
    row
}
