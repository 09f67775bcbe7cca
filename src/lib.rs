//! Vaani Translator - English to Hindi translation service
//!
//! This library wraps a pretrained neural machine-translation model behind an
//! HTTP API, and can heuristically extract UI-facing string literals from
//! source files so they can be batch-translated and substituted in place.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod core;
pub mod server;

// Re-export key types for convenience
pub use crate::core::{
    backend::{HfBackend, TranslationBackend},
    config::{BackendConfig, MODEL_ID},
    errors::TranslationError,
    extract::{extract_ui_candidates, find_literals, is_ui_text, Literal},
    rewrite::{apply_mapping, TranslationMapping},
    service::TranslationService,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
