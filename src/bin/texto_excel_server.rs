//! HTTP front end for texto-excel.
//!
//! Exposes the same select/export/import steps as the CLI so a web form
//! or another local program can drive them.

use clap::Parser;
use texto_a_excel::api::{run_api_server, server::ApiConfig};

#[derive(Parser, Debug)]
#[command(name = "texto-excel-server")]
#[command(version)]
#[command(about = "Serve the texto-excel name list export over HTTP")]
#[command(long_about = r#"
texto-excel-server

Runs the name list export behind a small JSON API. Paths in requests are
paths on the machine running the server.

  POST /api/v1/select   {"source_path"}                 is the text file there?
  POST /api/v1/export   {"source_path", "excel_path"}   write the workbook
  POST /api/v1/import   {"excel_path"}                  read an exported workbook
  GET  /health, /version, /

Browsers may only call the API cross-origin from origins passed with
--allow-origin (none by default).

  texto-excel-server --port 3000
  texto-excel-server --allow-origin http://localhost:5173

  curl -X POST http://127.0.0.1:8080/api/v1/export \
    -H "Content-Type: application/json" \
    -d '{"source_path": "nombres.txt", "excel_path": "nombres.xlsx"}'
"#)]
struct Args {
    /// Address to listen on
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "TEXTO_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "TEXTO_PORT")]
    port: u16,

    /// Origin allowed to make cross-origin browser requests (repeat or comma-separate)
    #[arg(long = "allow-origin", env = "TEXTO_ALLOWED_ORIGINS", value_delimiter = ',')]
    allowed_origins: Vec<String>,
}

impl From<Args> for ApiConfig {
    fn from(args: Args) -> Self {
        ApiConfig {
            host: args.host,
            port: args.port,
            allowed_origins: args.allowed_origins,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_api_server(Args::parse().into()).await
}
