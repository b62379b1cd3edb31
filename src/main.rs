use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use texto_a_excel::cli;
use texto_a_excel::error::TextoResult;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "texto-excel")]
#[command(about = "Turn a list of names in a text file into an Excel workbook.")]
#[command(long_about = "Texto a Excel - name lists to Excel workbooks

Reads a text file with one person per line, first and last name separated
by a single space, and writes a workbook with one sheet (\"Datos\") and
three columns: Nombre, Apellido, Nombre Completo.

Lines with fewer than two fields are skipped. Extra fields are ignored.

COMMANDS:
  check   - Confirm a source file can be used
  export  - Text file to Excel (.xlsx)
  import  - Exported Excel file back to YAML

EXAMPLES:
  texto-excel check nombres.txt
  texto-excel export nombres.txt                 # writes nombres.xlsx
  texto-excel export nombres.txt salida.xlsx
  texto-excel import salida.xlsx                 # YAML on stdout")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Confirm that a source file exists and can be selected
    Check {
        /// Path to the text file
        input: PathBuf,
    },

    #[command(long_about = "Export a text file of names to Excel .xlsx format.

Each line 'first last ...' becomes one row. Row 1 is always the header
(Nombre, Apellido, Nombre Completo), even when no line is usable.

The destination is replaced only after the workbook has been fully
written; on failure any existing file is left untouched.

EXAMPLE:
  texto-excel export nombres.txt nombres.xlsx")]
    /// Export a text file of names to Excel .xlsx
    Export {
        /// Path to the text file
        input: PathBuf,

        /// Output Excel file path (.xlsx); defaults to the input with .xlsx
        output: Option<PathBuf>,

        /// Show verbose export steps
        #[arg(short, long)]
        verbose: bool,
    },

    /// Read an exported Excel file and print its records as YAML
    Import {
        /// Path to Excel file (.xlsx)
        input: PathBuf,

        /// Output YAML file path (prints to stdout when omitted)
        output: Option<PathBuf>,

        /// Show verbose import steps
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Check { .. } => false,
            Commands::Export { verbose, .. } | Commands::Import { verbose, .. } => *verbose,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "texto_a_excel=debug"
    } else {
        "texto_a_excel=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> TextoResult<()> {
    match command {
        Commands::Check { input } => cli::check(input),

        Commands::Export {
            input,
            output,
            verbose,
        } => cli::export(input, output, verbose),

        Commands::Import {
            input,
            output,
            verbose,
        } => cli::import(input, output, verbose),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.command.verbose());

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::report_error(&e);
            ExitCode::FAILURE
        }
    }
}
