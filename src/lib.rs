//! Texto a Excel - name lists to Excel workbooks
//!
//! This library reads a text file with one person per line (`first last`),
//! and writes the parsed names to a single-sheet workbook with the columns
//! Nombre, Apellido and Nombre Completo.
//!
//! # Features
//!
//! - Permissive line parser: lines with fewer than two fields are skipped
//! - Excel export with atomic replacement of the destination file
//! - Read-back of exported workbooks
//! - CLI (`texto-excel`) and HTTP API (`texto-excel-server`) front ends
//!
//! # Example
//!
//! ```no_run
//! use texto_a_excel::pipeline::run_export;
//! use std::path::Path;
//!
//! let summary = run_export(Some(Path::new("nombres.txt")), Path::new("nombres.xlsx"))?;
//! println!("Rows written: {}", summary.records);
//! # Ok::<(), texto_a_excel::error::TextoError>(())
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod excel;
pub mod parser;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use error::{TextoError, TextoResult};
pub use pipeline::{run_export, select_source, ExportSummary, Session, SourceSelection};
pub use types::NameRecord;
