//! Text generation clients.
//!
//! The search handler talks to a [`TextGenerator`] rather than a concrete
//! client so tests can substitute a fake.

pub mod gemini;

use async_trait::async_trait;

use crate::error::Result;

pub use gemini::GeminiClient;

/// A service that turns a prompt into free-form text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a single prompt. One call, no retry.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
