use http::Method;
use serde::{Deserialize, Serialize};
use vercel_runtime::Body;

use crate::error::{Result, SearchError};

/// Inbound body of the search endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The user's fuzzy recollection of what they are looking for.
    #[serde(rename = "userQuery", default)]
    pub user_query: Option<String>,
}

/// Raw bytes of a request body.
pub fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes,
    }
}

/// Validate the method and pull the user's query out of a raw body.
///
/// Only POST is accepted. An empty body, a missing or `null` field, and a
/// blank query all count as a missing query. A body that is not JSON is
/// reported separately. A non-blank query is returned exactly as sent.
pub fn extract_query(method: &Method, body: &[u8]) -> Result<String> {
    if *method != Method::POST {
        return Err(SearchError::MethodNotAllowed);
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(SearchError::MissingQuery);
    }

    let request: SearchRequest =
        serde_json::from_slice(body).map_err(|e| SearchError::InvalidBody(e.to_string()))?;

    match request.user_query {
        Some(query) if !query.trim().is_empty() => Ok(query),
        _ => Err(SearchError::MissingQuery),
    }
}
