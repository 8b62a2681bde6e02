use crate::app_config::AppConfig;
use crate::meraki::domain::{Device, Organization};
use crate::meraki::{get_organization_devices, get_organizations};
use crate::migration::{MigrationCodes, NOT_MIGRATED, load_migration_codes};
use crate::report::row::{columns, flatten_fields};
use crate::report::{Cell, DEVICES_SHEET, ReportError, Row, Sheet, recover};
use reqwest::Client;
use std::path::PathBuf;
use tokio::task;
use tracing::{info, instrument, warn};

const NOTE_SEPARATOR: &str = "\n\n";

/// Every device of every organization, with its notes split per paragraph and its migration status.
#[instrument(skip_all)]
pub(super) async fn build(client: &Client, config: &AppConfig) -> Result<Vec<Sheet>, ReportError> {
    let organizations = recover(get_organizations(client, config.meraki()).await)?.unwrap_or_default();
    let devices = devices_of(client, config, &organizations).await?;

    let reference_path = PathBuf::from(config.migration().reference_path());
    let codes = task::spawn_blocking(move || load_migration_codes(&reference_path)).await??;

    Ok(vec![Sheet::new(DEVICES_SHEET, inventory_rows(&devices, codes.as_ref()))])
}

/// Device columns first, then `note.1..N` and `migrados` last. Every row carries every column
/// so the sheet keeps that order whatever the first device looks like.
fn inventory_rows(devices: &[(String, Device)], codes: Option<&MigrationCodes>) -> Vec<Row> {
    let device_rows = devices
        .iter()
        .map(|(organization_id, device)| device_row(device, organization_id))
        .collect::<Vec<_>>();
    let device_columns = columns(&device_rows).into_iter().map(str::to_string).collect::<Vec<_>>();

    let notes = devices.iter().map(|(_, device)| note_columns(device)).collect::<Vec<_>>();
    let note_count = notes.iter().map(Vec::len).max().unwrap_or(0);

    device_rows
        .into_iter()
        .zip(notes)
        .zip(devices)
        .map(|((mut fields, notes), (_, device))| {
            let mut row = device_columns
                .iter()
                .map(|column| (column.clone(), fields.swap_remove(column).unwrap_or(Cell::Empty)))
                .collect::<Row>();

            let present = notes.len();
            row.extend(notes);
            row.extend((present + 1..=note_count).map(|index| (note_label(index), Cell::Empty)));

            row.insert("migrados".to_string(), Cell::from(migration_status(codes, device)));
            row
        })
        .collect()
}

/// Devices paired with the id of the organization they were listed under.
pub(super) async fn devices_of(
    client: &Client,
    config: &AppConfig,
    organizations: &[Organization],
) -> Result<Vec<(String, Device)>, ReportError> {
    let mut devices = Vec::new();

    for organization in organizations {
        let Some(organization_id) = organization.id() else {
            warn!("⚠️ Skipping organization '{}' without id", organization.name().unwrap_or("unknown"));
            continue;
        };

        info!("🏢 Organization '{}'", organization.name().unwrap_or(organization_id));
        let fetched = get_organization_devices(client, config.meraki(), organization_id, None).await;
        let fetched = recover(fetched)?.unwrap_or_default();
        devices.extend(fetched.into_iter().map(|device| (organization_id.to_string(), device)));
    }

    Ok(devices)
}

/// All device fields flattened, `tags` joined, `details` rendered as `name: value` pairs and
/// the organization id attached.
pub(super) fn device_row(device: &Device, organization_id: &str) -> Row {
    let mut row = flatten_fields(device.fields());
    row.insert("organizationId".to_string(), Cell::from(organization_id));

    if let Some(tags) = device.tags() {
        row.insert("tags".to_string(), Cell::from(tags.join(", ")));
    }

    if let Some(details) = device.details() {
        let details = details
            .iter()
            .map(|detail| format!("{}: {}", detail.name, detail.value))
            .collect::<Vec<_>>()
            .join("; ");
        row.insert("details".to_string(), Cell::from(details));
    }

    row
}

/// `note.1`, `note.2`, … for notes made of several paragraphs; nothing otherwise.
fn note_columns(device: &Device) -> Vec<(String, Cell)> {
    let Some(notes) = device.notes().filter(|notes| notes.contains(NOTE_SEPARATOR)) else {
        return Vec::new();
    };

    notes
        .split(NOTE_SEPARATOR)
        .enumerate()
        .map(|(index, note)| (note_label(index + 1), Cell::from(note)))
        .collect()
}

fn note_label(position: usize) -> String {
    format!("note.{}", position)
}

fn migration_status(codes: Option<&MigrationCodes>, device: &Device) -> &'static str {
    codes.map_or(NOT_MIGRATED, |codes| codes.status(device.name()))
}
