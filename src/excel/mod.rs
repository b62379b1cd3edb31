//! Excel import/export for name records
//!
//! - Export: records → single-sheet workbook (.xlsx)
//! - Import: exported workbook → records, for verification and round-trips

mod exporter;
mod importer;

pub use exporter::ExcelExporter;
pub use importer::ExcelImporter;
