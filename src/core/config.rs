//! Configuration management

use serde::{Deserialize, Serialize};

/// Model identifier for the English to Hindi translation pipeline.
///
/// Deliberately compiled in rather than configurable: the service supports
/// exactly one language pair.
pub const MODEL_ID: &str = "Helsinki-NLP/opus-mt-en-hi";

/// Configuration for the hosted inference backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the inference endpoint; the model id is appended
    pub endpoint: String,
    /// Optional bearer token for the inference API
    pub api_token: Option<String>,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co/models".to_string(),
            api_token: None,
            timeout_ms: 30000,
        }
    }
}

impl BackendConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = std::env::var("HF_API_ENDPOINT")
            .unwrap_or_else(|_| "https://api-inference.huggingface.co/models".to_string());

        let api_token = std::env::var("HF_API_TOKEN").ok().filter(|t| !t.is_empty());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".to_string())
            .parse::<u64>()?;

        Ok(Self {
            endpoint,
            api_token,
            timeout_ms,
        })
    }

    /// Full URL the backend sends inference requests to
    pub fn model_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), MODEL_ID)
    }
}
