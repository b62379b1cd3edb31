use serde::Serialize;

//==============================================================================
// Workbook layout
//==============================================================================

/// Name of the single worksheet in an exported workbook
pub const SHEET_NAME: &str = "Datos";

/// Header labels for columns A, B and C
pub const HEADERS: [&str; 3] = ["Nombre", "Apellido", "Nombre Completo"];

/// File extension accepted for exported workbooks
pub const EXCEL_EXTENSION: &str = "xlsx";

//==============================================================================
// NameRecord
//==============================================================================

/// One parsed line: first name, last name and the derived full name.
///
/// The full name is computed once at construction and cannot be edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRecord {
    first_name: String,
    last_name: String,
    full_name: String,
}

impl NameRecord {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let full_name = format!("{} {}", first_name, last_name);
        Self {
            first_name,
            last_name,
            full_name,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Cell values in column order (A, B, C)
    pub fn cells(&self) -> [&str; 3] {
        [&self.first_name, &self.last_name, &self.full_name]
    }
}
