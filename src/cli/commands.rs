use crate::error::{TextoError, TextoResult};
use crate::excel::ExcelImporter;
use crate::pipeline;
use crate::types::EXCEL_EXTENSION;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Shown after a workbook has been written
pub const SUCCESS_MESSAGE: &str = "Archivo Excel generado exitosamente.";

/// Default destination: the source path with an `.xlsx` extension
pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension(EXCEL_EXTENSION)
}

/// Execute the check command - confirm a source file can be used
pub fn check(input: PathBuf) -> TextoResult<()> {
    let selection = pipeline::select_source(&input)?;

    println!("{}", "✅ Archivo seleccionado".bold().green());
    println!("   {}\n", selection.file_name.bright_blue());

    Ok(())
}

/// Execute the export command
pub fn export(input: PathBuf, output: Option<PathBuf>, verbose: bool) -> TextoResult<()> {
    let output = output.unwrap_or_else(|| default_output(&input));

    println!("{}", "📄 Texto a Excel - Export".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", output.display());

    if verbose {
        println!("{}", "📖 Reading names and writing workbook...".cyan());
    }

    let summary = pipeline::run_export(Some(&input), &output)?;

    if verbose {
        println!("   {} rows written\n", summary.records);
    }

    println!("{}", SUCCESS_MESSAGE.bold().green());
    println!("   Excel file: {}\n", summary.destination.display());

    Ok(())
}

/// Execute the import command - print or save the records of a workbook as YAML
pub fn import(input: PathBuf, output: Option<PathBuf>, verbose: bool) -> TextoResult<()> {
    if verbose {
        println!("{}", "📖 Reading Excel file...".cyan());
    }

    let records = ExcelImporter::new(&input).import()?;

    if verbose {
        println!("   Found {} records\n", records.len());
    }

    let yaml_string = serde_yaml::to_string(&records)?;

    match output {
        Some(path) => {
            fs::write(&path, yaml_string)?;
            println!("{}", "✅ Import Complete!".bold().green());
            println!("   YAML file: {}\n", path.display());
        }
        None => print!("{}", yaml_string),
    }

    Ok(())
}

/// Print an error the way the user should see it
pub fn report_error(err: &TextoError) {
    if err.is_missing_source() {
        eprintln!("{}", "⚠️  Archivo no encontrado".bold().yellow());
        eprintln!("   {}", err.to_string().yellow());
    } else {
        eprintln!("{}", "❌ Error".bold().red());
        eprintln!("   {}", format!("Ocurrió un error: {}", err).red());
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
