//! Request orchestration over an injected translation backend

use std::sync::Arc;
use tracing::debug;

use crate::core::backend::TranslationBackend;
use crate::core::errors::{Result, TranslationError};
use crate::core::extract::extract_ui_candidates;
use crate::core::rewrite::{apply_mapping, TranslationMapping};

/// Orchestrates extraction, batch translation and substitution over a shared
/// backend. Cheap to clone; handlers hold one per process.
#[derive(Clone)]
pub struct TranslationService {
    /// Injected backend, shared across requests
    backend: Arc<dyn TranslationBackend>,
}

impl TranslationService {
    /// Create a service over the given backend
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend }
    }

    /// Translate a batch of texts, preserving order and duplicates.
    ///
    /// An empty batch short-circuits to an empty result without touching the
    /// backend.
    pub async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let translations = self.backend.translate_batch(texts).await?;
        if translations.len() != texts.len() {
            return Err(TranslationError::TranslationFailed {
                message: format!(
                    "backend returned {} translations for {} inputs",
                    translations.len(),
                    texts.len()
                ),
            });
        }

        Ok(translations)
    }

    /// Translate a single text
    pub async fn translate_one(&self, text: &str) -> Result<String> {
        let mut translations = self.translate_batch(&[text.to_string()]).await?;
        translations
            .pop()
            .ok_or_else(|| TranslationError::failed("backend returned no translation"))
    }

    /// Extract likely UI literals from `content`, translate them, and build
    /// the original-to-translated mapping.
    ///
    /// With no qualifying candidates the backend is not invoked and the
    /// mapping is empty; `replace` then yields the content unmodified. When
    /// `replace` is set the second element is the rewritten content,
    /// otherwise it is `None`.
    pub async fn extract_and_translate(
        &self,
        content: &str,
        replace: bool,
    ) -> Result<(TranslationMapping, Option<String>)> {
        let candidates = extract_ui_candidates(content);
        debug!("Extracted {} UI text candidates", candidates.len());

        if candidates.is_empty() {
            let translated = replace.then(|| content.to_string());
            return Ok((TranslationMapping::new(), translated));
        }

        let translations = self.translate_batch(&candidates).await?;
        let mapping = TranslationMapping::from_pairs(candidates.into_iter().zip(translations));

        let translated = replace.then(|| apply_mapping(content, &mapping));
        Ok((mapping, translated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Uppercases every input and counts backend invocations
    struct UppercaseBackend {
        calls: AtomicUsize,
    }

    impl UppercaseBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TranslationBackend for UppercaseBackend {
        async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts.iter().map(|t| t.to_uppercase()).collect())
        }
    }

    /// Always fails with a fixed message
    struct FailingBackend;

    #[async_trait]
    impl TranslationBackend for FailingBackend {
        async fn translate_batch(&self, _texts: &[String]) -> Result<Vec<String>> {
            Err(TranslationError::failed("model exploded"))
        }
    }

    #[tokio::test]
    async fn test_translate_batch_preserves_length_and_order() {
        let service = TranslationService::new(UppercaseBackend::new());
        let texts = vec!["Hello".to_string(), "Goodbye".to_string()];
        let translations = service.translate_batch(&texts).await.unwrap();
        assert_eq!(translations, vec!["HELLO", "GOODBYE"]);
    }

    #[tokio::test]
    async fn test_translate_batch_empty_skips_backend() {
        let backend = UppercaseBackend::new();
        let service = TranslationService::new(backend.clone());
        let translations = service.translate_batch(&[]).await.unwrap();
        assert!(translations.is_empty());
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_translate_batch_keeps_duplicates() {
        let service = TranslationService::new(UppercaseBackend::new());
        let texts = vec!["Hi".to_string(), "Hi".to_string()];
        let translations = service.translate_batch(&texts).await.unwrap();
        assert_eq!(translations, vec!["HI", "HI"]);
    }

    #[tokio::test]
    async fn test_translate_one() {
        let service = TranslationService::new(UppercaseBackend::new());
        assert_eq!(service.translate_one("hello").await.unwrap(), "HELLO");
    }

    #[tokio::test]
    async fn test_translate_one_propagates_failure() {
        let service = TranslationService::new(Arc::new(FailingBackend));
        let err = service.translate_one("hello").await.unwrap_err();
        assert!(err.to_string().contains("model exploded"));
    }

    #[tokio::test]
    async fn test_extract_and_translate_builds_ordered_mapping() {
        let service = TranslationService::new(UppercaseBackend::new());
        let content = r#"Text("Hi"), Text("Bye"), Text("Hi")"#;
        let (mapping, translated) = service.extract_and_translate(content, false).await.unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("Hi"), Some("HI"));
        assert_eq!(mapping.get("Bye"), Some("BYE"));
        assert!(translated.is_none());
    }

    #[tokio::test]
    async fn test_extract_and_translate_replace_rewrites_content() {
        let service = TranslationService::new(UppercaseBackend::new());
        let content = r#"Text("Hi")"#;
        let (_, translated) = service.extract_and_translate(content, true).await.unwrap();
        assert_eq!(translated.unwrap(), r#"Text("HI")"#);
    }

    #[tokio::test]
    async fn test_extract_and_translate_no_candidates_skips_backend() {
        let backend = UppercaseBackend::new();
        let service = TranslationService::new(backend.clone());
        let content = r#"load("/assets/logo.png")"#;

        let (mapping, translated) = service.extract_and_translate(content, false).await.unwrap();
        assert!(mapping.is_empty());
        assert!(translated.is_none());

        let (mapping, translated) = service.extract_and_translate(content, true).await.unwrap();
        assert!(mapping.is_empty());
        assert_eq!(translated.as_deref(), Some(content));

        assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
    }
}
