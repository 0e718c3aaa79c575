//! Recall Search — Shared Library
//!
//! This crate contains the request handlers, models, upstream clients
//! and configuration used across all API handlers.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and logic reusable.

pub mod config;
pub mod error;
pub mod health;
pub mod live;
pub mod llm;
pub mod logging;
pub mod models;
pub mod response;
pub mod search;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
