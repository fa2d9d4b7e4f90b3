//! Data module for flutter-preflight
//!
//! Contains the built-in expected project layout.

pub mod layout;
