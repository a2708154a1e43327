//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in plain structs wrapped in `RwSignal` context providers so
//! the transition logic stays testable without a browser.

pub mod predict;
