//! Shared utilities for the chartnote backend.
//!
//! - `runtime`: Tokio runtime helpers for async-to-sync bridges

mod runtime;

pub use runtime::run_async;
