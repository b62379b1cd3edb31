//! Texto a Excel API server module
//!
//! HTTP REST front end over the select/export pipeline.
//! Run with `texto-excel-server`.

pub mod handlers;
pub mod server;

pub use server::run_api_server;
