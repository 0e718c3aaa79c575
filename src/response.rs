//! HTTP response construction shared by all endpoints.

use serde::Serialize;
use vercel_runtime::{Body, Error, Response, StatusCode};

use crate::error::SearchError;

/// Serialize `payload` as a JSON response with the given status.
///
/// Non-ASCII text is written as-is, not `\u` escaped.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    payload: &T,
) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(payload)?;

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}

/// Convert a handler outcome into the HTTP response sent to the caller.
pub fn respond<T: Serialize>(
    outcome: Result<Vec<T>, SearchError>,
) -> Result<Response<Body>, Error> {
    match outcome {
        Ok(items) => json_response(StatusCode::OK, &items),
        Err(err) => json_response(err.status_code(), &err.to_body()),
    }
}
