//! Excel importer implementation - exported workbook (.xlsx) → name records

use crate::error::{TextoError, TextoResult};
use crate::types::{NameRecord, HEADERS, SHEET_NAME};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Reads back workbooks written by [`super::ExcelExporter`]
pub struct ExcelImporter {
    path: PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Every populated row of the "Datos" sheet as text, header included
    pub fn rows(&self) -> TextoResult<Vec<Vec<String>>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| TextoError::Import(format!("Failed to open Excel file: {}", e)))?;

        let range = workbook.worksheet_range(SHEET_NAME).map_err(|e| {
            TextoError::Import(format!("Worksheet '{}' not readable: {}", SHEET_NAME, e))
        })?;

        Ok(range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }

    /// Rebuild the records, checking the header and each derived full name
    pub fn import(&self) -> TextoResult<Vec<NameRecord>> {
        let rows = self.rows()?;
        let mut rows = rows.into_iter();

        let header = rows
            .next()
            .ok_or_else(|| TextoError::Import("Worksheet is empty".to_string()))?;
        if header.len() < HEADERS.len() || header[..HEADERS.len()] != HEADERS {
            return Err(TextoError::Import(format!(
                "Unexpected header row: {:?}",
                header
            )));
        }

        let mut records = Vec::new();
        for (idx, row) in rows.enumerate() {
            let excel_row = idx + 2;
            let cell = |col: usize| row.get(col).map(String::as_str).unwrap_or("");

            let record = NameRecord::new(cell(0), cell(1));
            if record.full_name() != cell(2) {
                return Err(TextoError::Import(format!(
                    "Row {}: full name '{}' does not match '{}'",
                    excel_row,
                    cell(2),
                    record.full_name()
                )));
            }
            records.push(record);
        }

        Ok(records)
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::excel::ExcelExporter;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_rows_include_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nombres.xlsx");
        let records = vec![NameRecord::new("Ana", "Lopez")];
        ExcelExporter::new(&records).export(&path).unwrap();

        let rows = ExcelImporter::new(&path).rows().unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["Nombre", "Apellido", "Nombre Completo"],
                vec!["Ana", "Lopez", "Ana Lopez"],
            ]
        );
    }

    #[test]
    fn test_import_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nombres.xlsx");
        let records = vec![
            NameRecord::new("Ana", "Lopez"),
            NameRecord::new("Carlos", "Ruiz"),
        ];
        ExcelExporter::new(&records).export(&path).unwrap();

        let imported = ExcelImporter::new(&path).import().unwrap();
        assert_eq!(imported, records);
    }

    #[test]
    fn test_import_missing_file() {
        let result = ExcelImporter::new("/no/such/file.xlsx").import();
        assert!(matches!(result, Err(TextoError::Import(_))));
    }

    #[test]
    fn test_import_wrong_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("otro.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Hoja1").unwrap();
        sheet.write_string(0, 0, "Nombre").unwrap();
        workbook.save(&path).unwrap();

        let result = ExcelImporter::new(&path).import();
        assert!(matches!(result, Err(TextoError::Import(_))));
    }

    #[test]
    fn test_import_rejects_edited_full_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("editado.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).unwrap();
        for (col, label) in HEADERS.iter().enumerate() {
            sheet.write_string(0, col as u16, *label).unwrap();
        }
        sheet.write_string(1, 0, "Ana").unwrap();
        sheet.write_string(1, 1, "Lopez").unwrap();
        sheet.write_string(1, 2, "Ana M. Lopez").unwrap();
        workbook.save(&path).unwrap();

        let err = ExcelImporter::new(&path).import().unwrap_err();
        assert!(err.to_string().contains("Row 2"));
    }
}
