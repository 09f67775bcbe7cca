//! Translation backend bound to a hosted inference endpoint

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::core::config::{BackendConfig, MODEL_ID};
use crate::core::errors::{Result, TranslationError};

/// Capability of translating a batch of English texts to Hindi.
///
/// Implementations return exactly one translation per input, in input order,
/// or fail the whole call; partial results are never produced.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translate every text in `texts`, preserving order
    async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>>;
}

/// One inference result as returned by the endpoint
#[derive(Debug, Deserialize)]
struct InferenceResult {
    /// Translated text for one input
    translation_text: String,
}

/// Ready-to-use connection to the translation model
#[derive(Debug)]
struct Handle {
    /// HTTP client with the configured request timeout
    client: reqwest::Client,
    /// Fully resolved inference URL for the pinned model
    url: String,
    /// Optional bearer token sent with every request
    api_token: Option<String>,
}

impl Handle {
    /// Construct the client bound to the configured endpoint.
    ///
    /// Failures are reported as plain cause text so the backend can replay
    /// them verbatim on later translation attempts.
    fn load(config: &BackendConfig) -> std::result::Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| e.to_string())?;

        info!("Loaded translation pipeline for model {}", MODEL_ID);

        Ok(Self {
            client,
            url: config.model_url(),
            api_token: config.api_token.clone(),
        })
    }

    /// Run one inference call over the whole batch
    async fn infer(&self, texts: &[String]) -> Result<Vec<String>> {
        debug!("Translating batch of {} texts", texts.len());

        let mut request = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "inputs": texts }));

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(TranslationError::failed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::TranslationFailed {
                message: format!("{} - {}", status.as_u16(), body),
            });
        }

        let results: Vec<InferenceResult> =
            response.json().await.map_err(TranslationError::failed)?;

        if results.len() != texts.len() {
            return Err(TranslationError::TranslationFailed {
                message: format!(
                    "expected {} translations, got {}",
                    texts.len(),
                    results.len()
                ),
            });
        }

        Ok(results.into_iter().map(|r| r.translation_text).collect())
    }
}

/// Translation backend backed by the Hugging Face hosted inference API.
///
/// The underlying handle is constructed lazily on first use. Construction is
/// guarded so at most one initialization happens even under concurrent first
/// requests, and every later caller observes the same completed handle. A
/// failed load is cached with its original cause text and replayed as
/// `BackendUnavailable` on every subsequent request rather than retried.
#[derive(Debug)]
pub struct HfBackend {
    /// Endpoint configuration captured at construction
    config: BackendConfig,
    /// Lazily constructed handle, or the load failure's cause text
    handle: OnceCell<std::result::Result<Handle, String>>,
}

impl HfBackend {
    /// Create a backend that will connect using `config` on first use
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            handle: OnceCell::new(),
        }
    }

    /// Create from environment configuration
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(BackendConfig::from_env()?))
    }

    /// Create a backend whose handle already failed to load with `cause`
    #[cfg(test)]
    fn with_load_failure(cause: &str) -> Self {
        Self {
            config: BackendConfig::default(),
            handle: OnceCell::new_with(Some(Err(cause.to_string()))),
        }
    }

    /// Idempotently construct and return the inference handle
    async fn ensure_ready(&self) -> Result<&Handle> {
        let slot = self
            .handle
            .get_or_init(|| async { Handle::load(&self.config) })
            .await;

        match slot {
            Ok(handle) => Ok(handle),
            Err(cause) => Err(TranslationError::BackendUnavailable {
                cause: cause.clone(),
            }),
        }
    }
}

#[async_trait]
impl TranslationBackend for HfBackend {
    async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>> {
        let handle = self.ensure_ready().await?;
        handle.infer(texts).await
    }
}
