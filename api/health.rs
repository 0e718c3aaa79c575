use recall_search::config::AppConfig;
use recall_search::health::health_payload;
use recall_search::logging;
use recall_search::response::json_response;
use vercel_runtime::{run, Error, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        e
    })?;
    let mode = config.mode;

    run(move |_req| async move { json_response(StatusCode::OK, &health_payload(mode)) }).await
}
