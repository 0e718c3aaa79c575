use std::sync::Arc;

use recall_search::config::AppConfig;
use recall_search::live::LiveSearchHandler;
use recall_search::{logging, version};
use vercel_runtime::{run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        e
    })?;
    let handler = Arc::new(LiveSearchHandler::from_config(&config));
    tracing::info!(version = version(), "live search function initialized");

    run(move |req| {
        let handler = Arc::clone(&handler);
        async move { handler.handle(req).await }
    })
    .await
}
