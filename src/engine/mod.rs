//! Validation engine.
//!
//! `orchestrator` runs the checks in order, `result` holds the report and
//! the verdict.

pub mod orchestrator;
pub mod result;
