//! Domain models for the search endpoints.
//!
//! These types are shared across all modules: handlers, clients and responses.

pub mod channel;
pub mod item;
pub mod request;
