//! Integration tests for flutter-preflight.
//!
//! These tests run the checks against fixture projects on disk.

pub mod cli_tests;
pub mod output_tests;
