//! Live-channel keyword search.
//!
//! Same request contract as the item search, but the query is passed
//! straight to the FC2 channel search and the channels are relayed as-is.

pub mod fc2;

use std::sync::Arc;

use async_trait::async_trait;
use http::Method;
use vercel_runtime::{Body, Error, Request, Response};

use crate::config::AppConfig;
use crate::error::{Result, SearchError, Service};
use crate::models::channel::LiveChannel;
use crate::models::request::{body_bytes, extract_query};
use crate::response::respond;

pub use fc2::Fc2Client;

/// A backend that finds live channels by keyword.
#[async_trait]
pub trait ChannelSource: Send + Sync {
    async fn search_channels(&self, keyword: &str) -> Result<Vec<LiveChannel>>;
}

/// Handler behind `POST /api/live`.
pub struct LiveSearchHandler {
    source: Option<Arc<dyn ChannelSource>>,
}

impl LiveSearchHandler {
    /// `None` means the FC2 credentials were missing at cold start.
    pub fn new(source: Option<Arc<dyn ChannelSource>>) -> Self {
        LiveSearchHandler { source }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let source = Fc2Client::from_config(&config.fc2)
            .ok()
            .map(|client| Arc::new(client) as Arc<dyn ChannelSource>);

        if source.is_none() {
            tracing::warn!("FC2_DEV_ID / FC2_DEV_SECRET are not set; live searches will fail");
        }

        Self::new(source)
    }

    pub async fn search(&self, method: &Method, body: &[u8]) -> Result<Vec<LiveChannel>> {
        let keyword = extract_query(method, body)?;
        let source = self
            .source
            .as_ref()
            .ok_or(SearchError::MissingCredential(Service::Fc2))?;

        source.search_channels(&keyword).await
    }

    pub async fn handle(&self, req: Request) -> std::result::Result<Response<Body>, Error> {
        let outcome = self.search(req.method(), body_bytes(req.body())).await;

        match &outcome {
            Ok(channels) => tracing::info!(channels = channels.len(), "live search served"),
            Err(err) => tracing::warn!(
                status = err.status_code().as_u16(),
                error = %err,
                "live search failed"
            ),
        }

        respond(outcome)
    }
}
