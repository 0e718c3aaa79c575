//! Fuzzy-memory search handler.
//!
//! Validates the request, then either serves the fixed demo payload or
//! asks a text generator to invent matching items and relays them.

pub mod demo;
pub mod parse;
pub mod prompt;

use std::sync::Arc;

use http::Method;
use vercel_runtime::{Body, Error, Request, Response};

use crate::config::{AppConfig, SearchMode};
use crate::error::{Result, SearchError, Service};
use crate::llm::{GeminiClient, TextGenerator};
use crate::models::item::ResultItem;
use crate::models::request::{body_bytes, extract_query};
use crate::response::respond;

/// Handler behind `POST /api/search`.
pub struct SearchHandler {
    mode: SearchMode,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl SearchHandler {
    /// Creates a handler with an explicit mode and generator.
    ///
    /// A `None` generator in live mode means the credential was missing at
    /// cold start; every valid request then fails without an outbound call.
    pub fn new(mode: SearchMode, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        SearchHandler { mode, generator }
    }

    /// Handler that only ever serves the demo payload.
    pub fn demo() -> Self {
        Self::new(SearchMode::Demo, None)
    }

    /// Build the handler from cold-start configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let generator = match config.mode {
            SearchMode::Demo => None,
            SearchMode::Live => GeminiClient::from_config(&config.gemini)
                .ok()
                .map(|client| Arc::new(client) as Arc<dyn TextGenerator>),
        };

        if config.mode == SearchMode::Live && generator.is_none() {
            tracing::warn!("GOOGLE_GEMINI_API_KEY is not set; live searches will fail");
        }

        Self::new(config.mode, generator)
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Run one search from a raw method and body.
    pub async fn search(&self, method: &Method, body: &[u8]) -> Result<Vec<ResultItem>> {
        let query = extract_query(method, body)?;

        match self.mode {
            SearchMode::Demo => Ok(demo::demo_items()),
            SearchMode::Live => {
                let generator = self
                    .generator
                    .as_ref()
                    .ok_or(SearchError::MissingCredential(Service::Gemini))?;

                let raw = generator.generate(&prompt::build_prompt(&query)).await?;
                parse::parse_items(&raw)
            }
        }
    }

    /// Serve one HTTP request end to end.
    pub async fn handle(&self, req: Request) -> std::result::Result<Response<Body>, Error> {
        let outcome = self.search(req.method(), body_bytes(req.body())).await;

        match &outcome {
            Ok(items) => tracing::info!(mode = %self.mode, items = items.len(), "search served"),
            Err(err) => tracing::warn!(
                mode = %self.mode,
                status = err.status_code().as_u16(),
                error = %err,
                "search failed"
            ),
        }

        respond(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Generator returning canned text and recording what it was asked.
    struct FakeGenerator {
        reply: std::result::Result<String, String>,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl FakeGenerator {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(FakeGenerator {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(FakeGenerator {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGenerator {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply.clone().map_err(SearchError::Upstream)
        }
    }

    fn live(generator: &Arc<FakeGenerator>) -> SearchHandler {
        SearchHandler::new(SearchMode::Live, Some(generator.clone() as Arc<dyn TextGenerator>))
    }

    const VALID_BODY: &[u8] = br#"{"userQuery": "office lady on a business trip"}"#;

    fn three_items() -> String {
        let items: Vec<ResultItem> = (1..=3)
            .map(|i| {
                ResultItem::new(
                    format!("架空のタイトル{i}"),
                    prompt::GENERATED_IMAGE_URL,
                    &["架空 花子"],
                    100 - i as u8,
                    "一致します",
                )
            })
            .collect();
        serde_json::to_string_pretty(&items).unwrap()
    }

    #[tokio::test]
    async fn test_demo_output_is_independent_of_query() {
        let handler = SearchHandler::demo();
        let a = handler.search(&Method::POST, VALID_BODY).await.unwrap();
        let b = handler
            .search(&Method::POST, br#"{"userQuery": "something else entirely"}"#)
            .await
            .unwrap();

        assert_eq!(a, demo::demo_items());
        assert_eq!(a, b);
        assert_eq!(a[0].score, 95);
    }

    #[tokio::test]
    async fn test_demo_still_validates_method_and_query() {
        let handler = SearchHandler::demo();
        assert!(matches!(
            handler.search(&Method::GET, VALID_BODY).await,
            Err(SearchError::MethodNotAllowed)
        ));
        assert!(matches!(
            handler.search(&Method::POST, b"{}").await,
            Err(SearchError::MissingQuery)
        ));
    }

    #[tokio::test]
    async fn test_live_without_credential_makes_no_call() {
        let handler = SearchHandler::new(SearchMode::Live, None);
        let err = handler.search(&Method::POST, VALID_BODY).await.unwrap_err();
        assert!(matches!(err, SearchError::MissingCredential(Service::Gemini)));
    }

    #[tokio::test]
    async fn test_live_missing_query_skips_generator() {
        let generator = FakeGenerator::replying("[]");
        let err = live(&generator)
            .search(&Method::POST, br#"{"userQuery": ""}"#)
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::MissingQuery));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_live_wrong_method_skips_generator() {
        let generator = FakeGenerator::replying("[]");
        let err = live(&generator).search(&Method::PUT, VALID_BODY).await.unwrap_err();

        assert!(matches!(err, SearchError::MethodNotAllowed));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_live_relays_fenced_items_unmodified() {
        let generator = FakeGenerator::replying(&format!("```json\n{}\n```", three_items()));
        let items = live(&generator).search(&Method::POST, VALID_BODY).await.unwrap();

        let expected: Vec<ResultItem> = serde_json::from_str(&three_items()).unwrap();
        assert_eq!(items, expected);
        assert_eq!(generator.calls(), 1);

        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("office lady on a business trip"));
    }

    #[tokio::test]
    async fn test_live_prompt_embeds_query_verbatim() {
        let generator = FakeGenerator::replying("[]");
        let items = live(&generator)
            .search(&Method::POST, br#"{"userQuery": "  office lady  "}"#)
            .await
            .unwrap();

        assert!(items.is_empty());
        let prompt = generator.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("\"  office lady  \""));
    }

    #[tokio::test]
    async fn test_live_unparseable_output_is_upstream_error() {
        let generator = FakeGenerator::replying("Here are some titles you might like!");
        let err = live(&generator).search(&Method::POST, VALID_BODY).await.unwrap_err();

        assert!(matches!(err, SearchError::Upstream(_)));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_live_generator_failure_is_not_retried() {
        let generator = FakeGenerator::failing("connection reset");
        let err = live(&generator).search(&Method::POST, VALID_BODY).await.unwrap_err();

        match err {
            SearchError::Upstream(msg) => assert_eq!(msg, "connection reset"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn test_from_config_without_key_has_no_generator() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        let handler = SearchHandler::from_config(&config);
        assert_eq!(handler.mode(), SearchMode::Live);
        assert!(handler.generator.is_none());
    }

    #[test]
    fn test_from_config_with_key_builds_generator() {
        let config = AppConfig::from_lookup(|key| {
            (key == "GOOGLE_GEMINI_API_KEY").then(|| "key".to_string())
        })
        .unwrap();
        let handler = SearchHandler::from_config(&config);
        assert!(handler.generator.is_some());
    }
}
