use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Highest relevance score an item may carry.
pub const MAX_SCORE: u8 = 100;

/// Thumbnail URLs for an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUrl {
    /// Large thumbnail URL.
    pub large: String,
}

/// A performer credited on an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Actress {
    pub name: String,
}

/// Additional item metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemInfo {
    /// Performers, in credit order.
    pub actress: Vec<Actress>,
    /// Any other metadata the generator attached.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One synthetic search result returned to the caller.
///
/// Keys beyond the fixed schema are kept in `extra` so generated items
/// are relayed without losing anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultItem {
    pub title: String,
    /// Placeholder link, always `"#"`.
    #[serde(rename = "affiliateURL")]
    pub affiliate_url: String,
    #[serde(rename = "imageURL")]
    pub image_url: ImageUrl,
    #[serde(rename = "iteminfo")]
    pub item_info: ItemInfo,
    /// Relevance to the user's query, 0–100. Higher is more relevant.
    pub score: u8,
    /// Why the item was given its score.
    pub reason: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResultItem {
    /// Build an item with the placeholder affiliate link.
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        actresses: &[&str],
        score: u8,
        reason: impl Into<String>,
    ) -> Self {
        ResultItem {
            title: title.into(),
            affiliate_url: "#".to_string(),
            image_url: ImageUrl {
                large: image_url.into(),
            },
            item_info: ItemInfo {
                actress: actresses
                    .iter()
                    .map(|name| Actress {
                        name: name.to_string(),
                    })
                    .collect(),
                extra: Map::new(),
            },
            score,
            reason: reason.into(),
            extra: Map::new(),
        }
    }

    /// Returns true if the score lies within 0–100.
    pub fn has_valid_score(&self) -> bool {
        self.score <= MAX_SCORE
    }
}
