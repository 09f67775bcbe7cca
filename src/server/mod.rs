//! HTTP API server module

pub mod api;

pub use api::{router, run_server};
