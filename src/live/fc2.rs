//! FC2 live-channel search client.

use async_trait::async_trait;
use reqwest::Client;

use super::ChannelSource;
use crate::config::{Fc2Config, DEFAULT_FC2_SEARCH_URL};
use crate::error::{Result, SearchError, Service};
use crate::models::channel::{ChannelSearchResponse, LiveChannel};

/// Maximum channels requested per search.
pub const SEARCH_LIMIT: u32 = 20;

/// Client for `live.fc2.com/api/search.fc2`.
pub struct Fc2Client {
    client: Client,
    dev_id: String,
    dev_secret: String,
    search_url: String,
}

impl Fc2Client {
    pub fn new(dev_id: impl Into<String>, dev_secret: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            dev_id: dev_id.into(),
            dev_secret: dev_secret.into(),
            search_url: DEFAULT_FC2_SEARCH_URL.to_string(),
        }
    }

    /// Create from config. Both the developer id and secret are required.
    pub fn from_config(config: &Fc2Config) -> Result<Self> {
        let (dev_id, dev_secret) = config
            .credentials()
            .ok_or(SearchError::MissingCredential(Service::Fc2))?;

        Ok(Self::new(dev_id, dev_secret).with_search_url(&config.search_url))
    }

    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }
}

#[async_trait]
impl ChannelSource for Fc2Client {
    async fn search_channels(&self, keyword: &str) -> Result<Vec<LiveChannel>> {
        let limit = SEARCH_LIMIT.to_string();
        let params = [
            ("version", "2.0"),
            ("type", "channel"),
            ("devid", self.dev_id.as_str()),
            ("devkey", self.dev_secret.as_str()),
            ("keyword", keyword),
            ("limit", limit.as_str()),
        ];

        let response = self
            .client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Upstream(format!("FC2 request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Upstream(format!(
                "FC2 APIへのアクセスに失敗しました: {status}"
            )));
        }

        let result: ChannelSearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Upstream(format!("Failed to parse FC2 response: {e}")))?;

        Ok(result.into_channels())
    }
}
