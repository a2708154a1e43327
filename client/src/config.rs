//! Build-time client configuration.
//!
//! The browser bundle has no environment at runtime, so the predict endpoint
//! is baked in from `PREDICT_ENDPOINT` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint used when `PREDICT_ENDPOINT` is unset or blank at build time.
pub const DEFAULT_PREDICT_ENDPOINT: &str = "http://localhost:5000/predict";

/// The predict endpoint this bundle posts to.
pub fn predict_endpoint() -> &'static str {
    resolve_endpoint(option_env!("PREDICT_ENDPOINT"))
}

fn resolve_endpoint(raw: Option<&str>) -> &str {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_PREDICT_ENDPOINT,
    }
}
