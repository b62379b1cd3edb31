//! Source selection and the parse-then-export run
//!
//! These are the two entry points a front end calls. They never print or
//! prompt; the caller turns the result into a user-facing message.

use crate::error::{TextoError, TextoResult};
use crate::excel::ExcelExporter;
use crate::parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A source file that exists and is ready to be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSelection {
    pub path: PathBuf,
    /// File name without directories, for display
    pub file_name: String,
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Data rows written (header not counted)
    pub records: usize,
}

/// Confirm that `path` names an existing file
pub fn select_source(path: &Path) -> TextoResult<SourceSelection> {
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(TextoError::missing_source(
            (!path.as_os_str().is_empty()).then(|| path.to_path_buf()),
        ));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!(source = %path.display(), "source selected");
    Ok(SourceSelection {
        path: path.to_path_buf(),
        file_name,
    })
}

/// Parse `source` and write the records to `destination`.
///
/// Nothing is parsed or written unless the source exists.
pub fn run_export(source: Option<&Path>, destination: &Path) -> TextoResult<ExportSummary> {
    let selection = match source {
        Some(path) => select_source(path)?,
        None => return Err(TextoError::missing_source(None)),
    };

    if same_file(&selection.path, destination) {
        return Err(TextoError::Export(format!(
            "Destination is the source file: {}",
            destination.display()
        )));
    }

    let records = parser::parse_file(&selection.path)?;
    debug!(records = records.len(), "source parsed");

    ExcelExporter::new(&records).export(destination)?;
    info!(
        source = %selection.path.display(),
        destination = %destination.display(),
        records = records.len(),
        "workbook written"
    );

    Ok(ExportSummary {
        source: selection.path,
        destination: destination.to_path_buf(),
        records: records.len(),
    })
}

/// True when both paths name the same file on disk
fn same_file(source: &Path, destination: &Path) -> bool {
    if source == destination {
        return true;
    }
    match (source.canonicalize(), destination.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Holds the currently selected source between user actions.
///
/// Selecting a new file replaces the previous one, even when the new
/// selection turns out to be invalid.
#[derive(Debug, Default)]
pub struct Session {
    source: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn select_source(&mut self, path: impl Into<PathBuf>) -> TextoResult<SourceSelection> {
        let path = path.into();
        let result = select_source(&path);
        self.source = Some(path);
        result
    }

    pub fn run_export(&self, destination: &Path) -> TextoResult<ExportSummary> {
        run_export(self.source(), destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_select_source_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nombres.txt");
        fs::write(&path, "Ana Lopez\n").unwrap();

        let selection = select_source(&path).unwrap();
        assert_eq!(selection.file_name, "nombres.txt");
        assert_eq!(selection.path, path);
    }

    #[test]
    fn test_select_source_missing_file() {
        let err = select_source(Path::new("/no/such/nombres.txt")).unwrap_err();
        assert!(err.is_missing_source());
    }

    #[test]
    fn test_select_source_empty_path() {
        let err = select_source(Path::new("")).unwrap_err();
        assert!(matches!(err, TextoError::MissingSource { path: None }));
    }

    #[test]
    fn test_select_source_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let err = select_source(dir.path()).unwrap_err();
        assert!(err.is_missing_source());
    }

    #[test]
    fn test_run_export_without_source() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.xlsx");

        let err = run_export(None, &out).unwrap_err();
        assert!(err.is_missing_source());
        assert!(!out.exists());
    }

    #[test]
    fn test_run_export_counts_records() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("nombres.txt");
        let out = dir.path().join("out.xlsx");
        fs::write(&src, "Ana Lopez\nx\nCarlos Ruiz Extra\n\n").unwrap();

        let summary = run_export(Some(&src), &out).unwrap();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.destination, out);
        assert!(out.exists());
    }

    #[test]
    fn test_run_export_refuses_to_overwrite_source() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("lista.xlsx");
        fs::write(&src, "Ana Lopez\n").unwrap();

        let err = run_export(Some(&src), &src).unwrap_err();
        assert!(matches!(err, TextoError::Export(_)));
        assert_eq!(fs::read_to_string(&src).unwrap(), "Ana Lopez\n");
    }

    #[test]
    fn test_same_file_through_relative_segment() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("lista.xlsx");
        fs::write(&src, "Ana Lopez\n").unwrap();
        let indirect = dir.path().join(".").join("lista.xlsx");

        assert!(same_file(&src, &indirect));
        assert!(!same_file(&src, &dir.path().join("otra.xlsx")));
    }

    #[test]
    fn test_session_remembers_last_selection() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("nombres.txt");
        fs::write(&src, "Ana Lopez\n").unwrap();

        let mut session = Session::new();
        assert!(session.source().is_none());
        session.select_source(&src).unwrap();
        assert_eq!(session.source(), Some(src.as_path()));

        let missing = dir.path().join("otro.txt");
        assert!(session.select_source(&missing).is_err());
        assert_eq!(session.source(), Some(missing.as_path()));

        let err = session.run_export(&dir.path().join("out.xlsx")).unwrap_err();
        assert!(err.is_missing_source());
    }
}
