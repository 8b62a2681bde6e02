use crate::report::ReportError;
use crate::report::row::{Cell, Row, columns};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: &str, rows: Vec<Row>) -> Self {
        Sheet {
            name: name.to_string(),
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

/// Writes every sheet to a single `.xlsx` file: a bold header row with the column names
/// in first-seen order, then one row per record. Empty strings become blank cells. Nothing
/// is written to disk until all sheets are laid out.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_workbook(path: &Path, sheets: &[Sheet]) -> Result<(), ReportError> {
    info!("📄 Writing '{}'...", path.display());

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name())?;
        write_sheet(worksheet, sheet, &header_format)?;
        debug!("Laid out sheet '{}' with {} row(s)", sheet.name(), sheet.rows().len());
    }

    workbook.save(path)?;

    info!("📄 Writing '{}'... OK, {} sheet(s)", path.display(), sheets.len());
    Ok(())
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet, header_format: &Format) -> Result<(), ReportError> {
    let columns = columns(sheet.rows());
    let too_large = || ReportError::TooLarge {
        sheet: sheet.name().to_string(),
    };

    for (index, name) in columns.iter().enumerate() {
        let col = ColNum::try_from(index).map_err(|_| too_large())?;
        worksheet.write_string_with_format(0, col, *name, header_format)?;
    }

    for (index, row) in sheet.rows().iter().enumerate() {
        let row_number = RowNum::try_from(index + 1).map_err(|_| too_large())?;

        for (col, name) in columns.iter().enumerate() {
            let col = ColNum::try_from(col).map_err(|_| too_large())?;
            match row.get(*name) {
                Some(Cell::String(value)) if !value.is_empty() => {
                    worksheet.write_string(row_number, col, value)?;
                }
                Some(Cell::Number(value)) => {
                    worksheet.write_number(row_number, col, *value)?;
                }
                Some(Cell::Boolean(value)) => {
                    worksheet.write_boolean(row_number, col, *value)?;
                }
                Some(Cell::String(_)) | Some(Cell::Empty) | None => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{Data, Reader, Xlsx, open_workbook};
    use pretty_assertions::assert_eq;
    use std::error::Error;
    use tempfile::tempdir;

    fn row(cells: &[(&str, Cell)]) -> Row {
        cells.iter().map(|(key, cell)| (key.to_string(), cell.clone())).collect()
    }

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn written_rows_read_back_in_column_order() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("devices_wan.xlsx");

        let rows = vec![
            row(&[
                ("Serial", Cell::from("Q2XX-AAAA-0001")),
                ("wan1Ip", Cell::from("200.10.0.1")),
                ("Wan 1", Cell::from("BN_7654321")),
                ("Wan 2", Cell::from("São Paulo; ICCID")),
            ]),
            row(&[
                ("Serial", Cell::from("Q2XX-AAAA-0002")),
                ("wan1Ip", Cell::Empty),
                ("Wan 1", Cell::from("0012345")),
                ("lat", Cell::Number(-8.0476)),
                ("online", Cell::Boolean(true)),
            ]),
        ];

        write_workbook(&path, &[Sheet::new("Sheet1", rows)])?;

        let mut workbook: Xlsx<_> = open_workbook(&path)?;
        let range = workbook.worksheet_range("Sheet1")?;
        let read = range.rows().map(|row| row.to_vec()).collect::<Vec<_>>();

        assert_eq!(
            read,
            vec![
                vec![text("Serial"), text("wan1Ip"), text("Wan 1"), text("Wan 2"), text("lat"), text("online")],
                vec![
                    text("Q2XX-AAAA-0001"),
                    text("200.10.0.1"),
                    text("BN_7654321"),
                    text("São Paulo; ICCID"),
                    Data::Empty,
                    Data::Empty,
                ],
                vec![
                    text("Q2XX-AAAA-0002"),
                    Data::Empty,
                    text("0012345"),
                    Data::Empty,
                    Data::Float(-8.0476),
                    Data::Bool(true),
                ],
            ]
        );

        Ok(())
    }

    #[test]
    fn empty_strings_are_written_as_blank_cells() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("blanks.xlsx");

        let rows = vec![row(&[("address", Cell::from("")), ("serial", Cell::from("x"))])];
        write_workbook(&path, &[Sheet::new("Sheet1", rows)])?;

        let mut workbook: Xlsx<_> = open_workbook(&path)?;
        let range = workbook.worksheet_range("Sheet1")?;
        let read = range.rows().map(|row| row.to_vec()).collect::<Vec<_>>();

        assert_eq!(read, vec![vec![text("address"), text("serial")], vec![Data::Empty, text("x")]]);

        Ok(())
    }

    #[test]
    fn sheets_are_written_in_order() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("meraki_organizacoes_dispositivos.xlsx");

        let organizations = Sheet::new("Organizacoes", vec![row(&[("id", Cell::from("549236"))])]);
        let devices = Sheet::new("Dispositivos", vec![row(&[("serial", Cell::from("Q2XX-AAAA-0001"))])]);

        write_workbook(&path, &[organizations, devices])?;

        let mut workbook: Xlsx<_> = open_workbook(&path)?;
        assert_eq!(workbook.sheet_names(), vec!["Organizacoes".to_string(), "Dispositivos".to_string()]);

        let range = workbook.worksheet_range("Dispositivos")?;
        assert_eq!(range.get_value((1, 0)), Some(&text("Q2XX-AAAA-0001")));

        Ok(())
    }

    #[test]
    fn an_invalid_sheet_name_is_an_error() -> Result<(), Box<dyn Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("invalid.xlsx");

        let result = write_workbook(&path, &[Sheet::new("Dispositivos[1]", vec![])]);

        assert!(matches!(result, Err(ReportError::Xlsx(_))));
        assert!(!path.exists());

        Ok(())
    }
}
