//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render from the shared `PredictState` signal passed in by the
//! owning page.

pub mod prediction_result;
