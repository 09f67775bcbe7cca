//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::backend::HfBackend;
use crate::core::errors::TranslationError;
use crate::core::rewrite::TranslationMapping;
use crate::core::service::TranslationService;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Shared translation service
    service: TranslationService,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Batch translation request
#[derive(Deserialize)]
pub struct TranslateRequest {
    /// English texts to translate, in order
    pub texts: Vec<String>,
}

/// Batch translation response
#[derive(Serialize)]
pub struct TranslateResponse {
    /// One Hindi translation per input text, same order
    pub translations: Vec<String>,
}

/// Single text translation request
#[derive(Deserialize)]
pub struct TranslateOneRequest {
    /// English text to translate
    pub text: String,
}

/// Single text translation response
#[derive(Serialize)]
pub struct TranslateOneResponse {
    /// Hindi translation
    pub translation: String,
}

/// Literal extraction and translation request
#[derive(Deserialize)]
pub struct ExtractRequest {
    /// Source file content to scan for UI string literals
    pub content: String,
    /// Whether to return the content with translations substituted in place
    #[serde(default)]
    pub replace: bool,
}

/// Literal extraction and translation response
#[derive(Serialize)]
pub struct ExtractResponse {
    /// Original literal text to translation, in first-occurrence order
    pub mapping: TranslationMapping,
    /// Rewritten content when `replace` was set, otherwise null
    pub translated_content: Option<String>,
}

/// Error response carrying a human-readable detail string
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Original error message
    pub detail: String,
}

/// Core errors surface at the HTTP boundary as a 500 with the original
/// message attached; nothing is retried or partially returned.
pub struct ApiError(TranslationError);

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Request failed: {}", self.0);
        let body = Json(ErrorResponse {
            detail: self.0.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Health check handler
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Batch translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let translations = state.service.translate_batch(&payload.texts).await?;
    Ok(Json(TranslateResponse { translations }))
}

/// Single text translation handler
async fn translate_one(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateOneRequest>,
) -> Result<Json<TranslateOneResponse>, ApiError> {
    let translation = state.service.translate_one(&payload.text).await?;
    Ok(Json(TranslateOneResponse { translation }))
}

/// Literal extraction and translation handler
async fn extract_and_translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let (mapping, translated_content) = state
        .service
        .extract_and_translate(&payload.content, payload.replace)
        .await?;
    Ok(Json(ExtractResponse {
        mapping,
        translated_content,
    }))
}

/// Build the application router over the given service
pub fn router(service: TranslationService) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/", get(health_check))
        .route("/translate", post(translate))
        .route("/translate_one", post(translate_one))
        .route("/extract_and_translate", post(extract_and_translate))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16) -> anyhow::Result<()> {
    // Backend loads lazily; a missing model surfaces on first translation
    let backend = Arc::new(HfBackend::from_env()?);
    let service = TranslationService::new(backend);

    let app = router(service);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::TranslationBackend;
    use crate::core::errors::Result;
    use assert_json_diff::assert_json_eq;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    /// Stub backend that uppercases instead of translating
    struct UppercaseBackend;

    #[async_trait]
    impl TranslationBackend for UppercaseBackend {
        async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>> {
            Ok(texts.iter().map(|t| t.to_uppercase()).collect())
        }
    }

    /// Stub backend that always fails
    struct FailingBackend;

    #[async_trait]
    impl TranslationBackend for FailingBackend {
        async fn translate_batch(&self, _texts: &[String]) -> Result<Vec<String>> {
            Err(TranslationError::failed("model exploded"))
        }
    }

    fn test_router(backend: Arc<dyn TranslationBackend>) -> Router {
        router(TranslationService::new(backend))
    }

    async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_translate_endpoint() {
        let app = test_router(Arc::new(UppercaseBackend));
        let (status, body) =
            post_json(app, "/translate", json!({"texts": ["Hello", "Goodbye"]})).await;
        assert_eq!(status, StatusCode::OK);
        assert_json_eq!(body, json!({"translations": ["HELLO", "GOODBYE"]}));
    }

    #[tokio::test]
    async fn test_translate_endpoint_empty_list() {
        let app = test_router(Arc::new(UppercaseBackend));
        let (status, body) = post_json(app, "/translate", json!({"texts": []})).await;
        assert_eq!(status, StatusCode::OK);
        assert_json_eq!(body, json!({"translations": []}));
    }

    #[tokio::test]
    async fn test_translate_one_endpoint() {
        let app = test_router(Arc::new(UppercaseBackend));
        let (status, body) = post_json(app, "/translate_one", json!({"text": "Hello"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_json_eq!(body, json!({"translation": "HELLO"}));
    }

    #[tokio::test]
    async fn test_extract_and_translate_endpoint() {
        let app = test_router(Arc::new(UppercaseBackend));
        let (status, body) = post_json(
            app,
            "/extract_and_translate",
            json!({"content": "Text(\"Hi\")", "replace": true}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_json_eq!(
            body,
            json!({
                "mapping": {"Hi": "HI"},
                "translated_content": "Text(\"HI\")"
            })
        );
    }

    #[tokio::test]
    async fn test_extract_and_translate_defaults_to_no_replace() {
        let app = test_router(Arc::new(UppercaseBackend));
        let (status, body) = post_json(
            app,
            "/extract_and_translate",
            json!({"content": "Text(\"Hi\")"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_json_eq!(
            body,
            json!({
                "mapping": {"Hi": "HI"},
                "translated_content": null
            })
        );
    }

    #[tokio::test]
    async fn test_backend_failure_returns_500_with_detail() {
        let app = test_router(Arc::new(FailingBackend));
        let (status, body) = post_json(app, "/translate", json!({"texts": ["Hello"]})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_json_eq!(
            body,
            json!({"detail": "translation failed: model exploded"})
        );
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = test_router(Arc::new(UppercaseBackend));
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
