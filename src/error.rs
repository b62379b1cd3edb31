use std::path::PathBuf;
use thiserror::Error;

pub type TextoResult<T> = Result<T, TextoError>;

/// Warning shown when no usable source file has been selected.
pub const MISSING_SOURCE_MESSAGE: &str = "Por favor, selecciona un archivo válido.";

#[derive(Error, Debug)]
pub enum TextoError {
    /// No source path set, or the path does not name an existing file.
    #[error("{}", missing_source_message(.path))]
    MissingSource { path: Option<PathBuf> },

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TextoError {
    pub fn missing_source(path: Option<PathBuf>) -> Self {
        TextoError::MissingSource { path }
    }

    pub fn is_missing_source(&self) -> bool {
        matches!(self, TextoError::MissingSource { .. })
    }
}

fn missing_source_message(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!("{} (no encontrado: {})", MISSING_SOURCE_MESSAGE, p.display()),
        None => MISSING_SOURCE_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_without_path() {
        let err = TextoError::missing_source(None);
        assert_eq!(err.to_string(), MISSING_SOURCE_MESSAGE);
        assert!(err.is_missing_source());
    }

    #[test]
    fn test_missing_source_with_path() {
        let err = TextoError::missing_source(Some(PathBuf::from("nombres.txt")));
        let msg = err.to_string();
        assert!(msg.starts_with(MISSING_SOURCE_MESSAGE));
        assert!(msg.contains("nombres.txt"));
    }

    #[test]
    fn test_export_error_carries_cause() {
        let err = TextoError::Export("Permission denied".to_string());
        assert_eq!(err.to_string(), "Export error: Permission denied");
        assert!(!err.is_missing_source());
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TextoError = io.into();
        assert!(matches!(err, TextoError::Io(_)));
    }
}
