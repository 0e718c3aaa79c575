//! Interpretation of generator output.

use crate::error::{Result, SearchError};
use crate::models::item::{ResultItem, MAX_SCORE};

/// Remove surrounding whitespace and markdown code-fence markers.
pub fn strip_code_fences(text: &str) -> String {
    text.trim()
        .replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse generator output into result items.
///
/// Fences are stripped first. Anything that is not a JSON array of
/// well-formed items, or an item scored above 100, is an upstream error.
pub fn parse_items(raw: &str) -> Result<Vec<ResultItem>> {
    let cleaned = strip_code_fences(raw);
    let items: Vec<ResultItem> =
        serde_json::from_str(&cleaned).map_err(|e| SearchError::Upstream(e.to_string()))?;

    if let Some(item) = items.iter().find(|item| !item.has_valid_score()) {
        return Err(SearchError::Upstream(format!(
            "score {} for '{}' exceeds {MAX_SCORE}",
            item.score, item.title
        )));
    }

    Ok(items)
}
