//! Excel exporter implementation

use crate::error::{TextoError, TextoResult};
use crate::types::{NameRecord, EXCEL_EXTENSION, HEADERS, SHEET_NAME};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode for new workbooks before the process umask is applied
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Writes name records to a single-sheet workbook
pub struct ExcelExporter<'a> {
    records: &'a [NameRecord],
}

impl<'a> ExcelExporter<'a> {
    /// Create a new Excel exporter
    pub fn new(records: &'a [NameRecord]) -> Self {
        Self { records }
    }

    /// Export the records to an Excel .xlsx file, replacing any existing file.
    ///
    /// The workbook goes to a temporary file next to `output_path` and is
    /// renamed into place once fully written, so a failed export never
    /// leaves a partial file behind.
    pub fn export(&self, output_path: &Path) -> TextoResult<()> {
        check_extension(output_path)?;

        let buffer = self.to_buffer()?;

        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = create_temp_file(dir, output_path).map_err(|e| {
            TextoError::Export(format!(
                "Failed to create file in {}: {}",
                dir.display(),
                e
            ))
        })?;
        temp.write_all(&buffer)
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| TextoError::Export(format!("Failed to write Excel file: {}", e)))?;
        temp.persist(output_path).map_err(|e| {
            TextoError::Export(format!(
                "Failed to save Excel file {}: {}",
                output_path.display(),
                e.error
            ))
        })?;

        Ok(())
    }

    /// Build the workbook and serialize it in memory
    pub fn to_buffer(&self) -> TextoResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| TextoError::Export(format!("Failed to set worksheet name: {}", e)))?;

        Self::write_header(worksheet)?;
        self.write_records(worksheet)?;

        workbook
            .save_to_buffer()
            .map_err(|e| TextoError::Export(format!("Failed to build Excel file: {}", e)))
    }

    /// Header goes in row 0 (Excel row 1)
    fn write_header(worksheet: &mut Worksheet) -> TextoResult<()> {
        for (col_idx, label) in HEADERS.iter().enumerate() {
            worksheet
                .write_string(0, col_idx as u16, *label)
                .map_err(|e| TextoError::Export(format!("Failed to write header: {}", e)))?;
        }
        Ok(())
    }

    fn write_records(&self, worksheet: &mut Worksheet) -> TextoResult<()> {
        for (row_idx, record) in self.records.iter().enumerate() {
            let row = (row_idx + 1) as u32; // +1 for header row
            for (col_idx, value) in record.cells().iter().enumerate() {
                worksheet
                    .write_string(row, col_idx as u16, *value)
                    .map_err(|e| {
                        TextoError::Export(format!("Failed to write row {}: {}", row + 1, e))
                    })?;
            }
        }
        Ok(())
    }
}

/// Temp file in `dir` carrying the permissions the destination should end up with.
///
/// An existing destination keeps its mode; a new one gets the usual
/// `0o666` minus umask instead of the private mode temp files default to.
fn create_temp_file(dir: &Path, output_path: &Path) -> io::Result<NamedTempFile> {
    let existing = fs::metadata(output_path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let mut builder = tempfile::Builder::new();
    builder.prefix(".texto-excel-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }

    let temp = builder.tempfile_in(dir)?;
    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions)?;
    }
    Ok(temp)
}

fn check_extension(path: &Path) -> TextoResult<()> {
    let is_xlsx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(EXCEL_EXTENSION))
        .unwrap_or(false);

    if is_xlsx {
        Ok(())
    } else {
        Err(TextoError::Export(format!(
            "Extension not supported, expected .{}: {}",
            EXCEL_EXTENSION,
            path.display()
        )))
    }
}
