//! API request handlers
//!
//! Handlers for all REST API endpoints. Pipeline failures are reported in
//! the response body, not as HTTP error statuses.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{TextoError, TextoResult};
use crate::excel::ExcelImporter;
use crate::pipeline::{run_export, select_source};
use crate::types::NameRecord;

use super::server::AppState;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data: Some(data),
        }
    }
}

/// Run blocking file work off the async executor
async fn blocking<T, F>(work: F) -> TextoResult<T>
where
    F: FnOnce() -> TextoResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .unwrap_or_else(|e| Err(TextoError::Export(format!("Worker task failed: {}", e))))
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

fn endpoint(path: &str, method: &str, description: &str) -> EndpointInfo {
    EndpointInfo {
        path: path.to_string(),
        method: method.to_string(),
        description: description.to_string(),
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        name: "Texto a Excel API Server".to_string(),
        version: state.version.clone(),
        description: "Name lists in text files to Excel workbooks".to_string(),
        endpoints: vec![
            endpoint("/health", "GET", "Health check endpoint"),
            endpoint("/version", "GET", "Get server version"),
            endpoint("/api/v1/select", "POST", "Check that a source text file exists"),
            endpoint("/api/v1/export", "POST", "Export a text file of names to Excel"),
            endpoint("/api/v1/import", "POST", "Read records back from an exported workbook"),
        ],
    };
    Json(ApiResponse::ok(response))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub features: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        features: vec![
            "select".to_string(),
            "export".to_string(),
            "import".to_string(),
        ],
    }))
}

/// Select request
#[derive(Deserialize)]
pub struct SelectRequest {
    pub source_path: String,
}

/// Select response
#[derive(Serialize, Default)]
pub struct SelectResponse {
    pub selected: bool,
    pub source_path: String,
    pub file_name: String,
    pub message: String,
}

/// POST /api/v1/select - Confirm a source file exists
pub async fn select(Json(req): Json<SelectRequest>) -> impl IntoResponse {
    let path = PathBuf::from(&req.source_path);

    match blocking(move || select_source(&path)).await {
        Ok(selection) => Json(ApiResponse::ok(SelectResponse {
            selected: true,
            source_path: req.source_path,
            file_name: selection.file_name,
            message: "Source selected".to_string(),
        })),
        Err(e) => Json(ApiResponse::ok(SelectResponse {
            selected: false,
            source_path: req.source_path,
            file_name: String::new(),
            message: e.to_string(),
        })),
    }
}

/// Export request
#[derive(Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub source_path: Option<String>,
    pub excel_path: String,
}

/// Export response
#[derive(Serialize, Default)]
pub struct ExportResponse {
    pub exported: bool,
    pub source_path: String,
    pub excel_path: String,
    pub records: usize,
    pub message: String,
}

/// POST /api/v1/export - Parse a text file and write the workbook
pub async fn export(Json(req): Json<ExportRequest>) -> impl IntoResponse {
    let source = req.source_path.clone().map(PathBuf::from);
    let excel_path = PathBuf::from(&req.excel_path);

    let result = blocking(move || run_export(source.as_deref(), &excel_path)).await;
    let source_path = req.source_path.unwrap_or_default();

    match result {
        Ok(summary) => Json(ApiResponse::ok(ExportResponse {
            exported: true,
            source_path,
            excel_path: req.excel_path,
            records: summary.records,
            message: crate::cli::commands::SUCCESS_MESSAGE.to_string(),
        })),
        Err(e) => Json(ApiResponse::ok(ExportResponse {
            exported: false,
            source_path,
            excel_path: req.excel_path,
            records: 0,
            message: e.to_string(),
        })),
    }
}

/// Import request
#[derive(Deserialize)]
pub struct ImportRequest {
    pub excel_path: String,
}

/// Import response
#[derive(Serialize, Default)]
pub struct ImportResponse {
    pub imported: bool,
    pub excel_path: String,
    pub records: Vec<NameRecord>,
    pub message: String,
}

/// POST /api/v1/import - Read records from an exported workbook
pub async fn import_excel(Json(req): Json<ImportRequest>) -> impl IntoResponse {
    let excel_path = PathBuf::from(&req.excel_path);

    match blocking(move || ExcelImporter::new(excel_path).import()).await {
        Ok(records) => Json(ApiResponse::ok(ImportResponse {
            imported: true,
            excel_path: req.excel_path,
            records,
            message: "Import completed".to_string(),
        })),
        Err(e) => Json(ApiResponse::ok(ImportResponse {
            imported: false,
            excel_path: req.excel_path,
            records: Vec::new(),
            message: e.to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_ok() {
        let response: ApiResponse<String> = ApiResponse::ok("test".to_string());
        assert!(response.success);
        assert_eq!(response.data, Some("test".to_string()));
    }

    #[test]
    fn test_api_response_request_id_is_unique() {
        let response1: ApiResponse<String> = ApiResponse::ok("a".to_string());
        let response2: ApiResponse<String> = ApiResponse::ok("b".to_string());
        assert_ne!(response1.request_id, response2.request_id);
    }

    #[test]
    fn test_export_response_default() {
        let response = ExportResponse::default();
        assert!(!response.exported);
        assert_eq!(response.records, 0);
        assert!(response.message.is_empty());
    }

    #[test]
    fn test_export_request_without_source() {
        let json = r#"{"excel_path": "out.xlsx"}"#;
        let req: ExportRequest = serde_json::from_str(json).unwrap();
        assert!(req.source_path.is_none());
        assert_eq!(req.excel_path, "out.xlsx");
    }

    #[test]
    fn test_select_request_deserialize() {
        let json = r#"{"source_path": "nombres.txt"}"#;
        let req: SelectRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.source_path, "nombres.txt");
    }

    #[tokio::test]
    async fn test_blocking_propagates_result() {
        let value = blocking(|| Ok(42)).await.unwrap();
        assert_eq!(value, 42);
    }
}
