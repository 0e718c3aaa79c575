//! Structured logging for function instances.

/// Install the JSON `tracing` subscriber.
///
/// Called once at cold start. The filter comes from `RUST_LOG` and falls
/// back to `info`. A second call is a no-op.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .json()
        .try_init()
        .ok();
}
