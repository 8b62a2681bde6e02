use crate::migration::MigrationCodes;
use crate::migration::matcher::PREFIX;
use calamine::{Data, Reader, open_workbook_auto};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument, warn};

const TYPE_COLUMN: &str = "TIPO 2";
const CODE_COLUMN: &str = "SIGLA";
const KIOSK_CODE_COLUMN: &str = "SIGLA REVISTA";
const RESTAURANT: &str = "RESTAURANTE";
const KIOSK: &str = "QUIOSQUE";

/// Reads the short codes of migrated sites from the first sheet of the reference spreadsheet.
///
/// Restaurants are identified by `SIGLA`, kiosks by `SIGLA REVISTA` (when that column exists),
/// both selected on `TIPO 2`. Returns `None` when the file does not exist.
#[instrument]
pub fn load_migration_codes(path: &Path) -> Result<Option<MigrationCodes>, ReferenceError> {
    if !path.exists() {
        warn!("⚠️ Migration reference '{}' not found, no device will be marked as migrated", path.display());
        return Ok(None);
    }

    info!("📁 Loading migration reference...");
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(ReferenceError::NoSheet)??;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(ReferenceError::MissingColumn(TYPE_COLUMN));
    };
    let header = header.iter().map(|cell| cell.to_string().trim().to_uppercase()).collect::<Vec<_>>();
    let column = |name: &'static str| header.iter().position(|column| column == name);

    let type_column = column(TYPE_COLUMN).ok_or(ReferenceError::MissingColumn(TYPE_COLUMN))?;
    let code_column = column(CODE_COLUMN).ok_or(ReferenceError::MissingColumn(CODE_COLUMN))?;
    let kiosk_code_column = column(KIOSK_CODE_COLUMN);

    let mut restaurants = HashSet::new();
    let mut kiosks = HashSet::new();

    for row in rows {
        let site_type = row.get(type_column).map(|cell| cell.to_string().to_uppercase());
        match site_type.as_deref() {
            Some(RESTAURANT) => restaurants.extend(prefixed_code(row.get(code_column))),
            Some(KIOSK) => kiosks.extend(kiosk_code_column.and_then(|column| prefixed_code(row.get(column)))),
            _ => {}
        }
    }

    let codes = MigrationCodes::new(restaurants, kiosks);
    info!(
        "📁 Loading migration reference... OK, {} restaurant(s), {} kiosk(s)",
        codes.restaurants().len(),
        codes.kiosks().len()
    );
    Ok(Some(codes))
}

fn prefixed_code(cell: Option<&Data>) -> Option<String> {
    let code = cell?.to_string().trim().to_uppercase();
    (!code.is_empty()).then(|| format!("{}_{}", PREFIX, code))
}

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("{0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("the spreadsheet has no sheet")]
    NoSheet,
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
}
