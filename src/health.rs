//! Payload for `GET /api/health`.

use serde_json::{json, Value};

use crate::config::SearchMode;
use crate::version;

pub fn health_payload(mode: SearchMode) -> Value {
    json!({
        "status": "ok",
        "version": version(),
        "mode": mode.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_reports_version_and_mode() {
        let payload = health_payload(SearchMode::Demo);
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(payload["mode"], "demo");
    }
}
