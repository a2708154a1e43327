//! Networking modules for the predict service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the multipart `POST`, and `types` defines the selector
//! values and the prediction response schema.

pub mod api;
pub mod types;
