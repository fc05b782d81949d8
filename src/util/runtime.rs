//! Tokio runtime helpers for async-to-sync bridges.
//!
//! The dictionary store exposes a synchronous API (the editor's event loop is
//! single-threaded) while libsql is async. Store calls funnel through
//! `run_async`, which drives the future on one shared runtime created lazily
//! on first use, so repeated dictionary operations do not pay runtime setup
//! per call.

use std::sync::OnceLock;

use tokio::runtime::{Handle, Runtime};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Run an async future to completion from a synchronous context.
///
/// When the caller is already inside a multi-threaded Tokio runtime the
/// future is driven there via `block_in_place`; otherwise it runs on the
/// crate's shared runtime.
///
/// # Panics
/// Panics if the shared runtime cannot be created on first use.
pub fn run_async<F, T>(future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    match Handle::try_current() {
        Ok(handle) => tokio::task::block_in_place(|| handle.block_on(future)),
        Err(_) => shared_runtime().block_on(future),
    }
}

fn shared_runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        Runtime::new().expect("Failed to create shared tokio runtime for dictionary I/O")
    })
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod tests;
