//! Error taxonomy for the search endpoints.
//!
//! Every failure a handler can hit is one variant here. The endpoint
//! boundary turns a variant into an HTTP status and a JSON body, so no
//! failure ever escapes as an unhandled fault.

use http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// External services that need a credential configured at cold start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    /// Google Gemini text generation.
    Gemini,
    /// FC2 live-channel search.
    Fc2,
}

impl Service {
    /// Localized message shown to the caller when the credential is absent.
    pub fn missing_credential_message(&self) -> &'static str {
        match self {
            Service::Gemini => "サーバーエラー: Gemini APIキーが設定されていません。",
            Service::Fc2 => "サーバーエラー: FC2 APIキーが設定されていません。",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Service::Gemini => write!(f, "gemini"),
            Service::Fc2 => write!(f, "fc2"),
        }
    }
}

/// Failures of a single search request.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Query is missing")]
    MissingQuery,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("{0} credential is not configured")]
    MissingCredential(Service),

    #[error("An error occurred: {0}")]
    Upstream(String),
}

impl SearchError {
    /// HTTP status code for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SearchError::MissingQuery | SearchError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            SearchError::MissingCredential(_) | SearchError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body returned to the caller.
    ///
    /// A missing credential is reported under `message`, everything else
    /// under `error`.
    pub fn to_body(&self) -> Value {
        match self {
            SearchError::MissingCredential(service) => json!({
                "message": service.missing_credential_message(),
            }),
            other => json!({ "error": other.to_string() }),
        }
    }
}

/// Cold-start configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown SEARCH_MODE '{0}' (expected 'demo' or 'live')")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
