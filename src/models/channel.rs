use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A live-stream channel returned by the FC2 search API.
///
/// The fields the front-end renders are typed; anything else the upstream
/// sends is kept in `extra` and relayed untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiveChannel {
    /// Channel id; a string or a number depending on the API version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channelid: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Broadcaster display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Top-level shape of an FC2 channel search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelSearchResponse {
    #[serde(default)]
    pub channel: Option<Vec<LiveChannel>>,
}

impl ChannelSearchResponse {
    /// The channel list, or empty when the upstream omitted it.
    pub fn into_channels(self) -> Vec<LiveChannel> {
        self.channel.unwrap_or_default()
    }
}
