//! Project check modules.
//!
//! - Structure: required directories and files exist
//! - Manifest: required dependency names appear in the manifest text
//! - Syntax: superficial well-formedness of a few Dart sources
//!
//! # Graceful Degradation
//!
//! All checks follow these rules:
//! - Missing path: recorded as missing, never an error
//! - Missing manifest: distinct `NotFound` outcome, no token scan
//! - Read failure: recorded with the error message; the manifest check
//!   fails, the syntax sniffer moves on to the next file
//!
//! Checks never panic and never return `Err`. Every condition is a variant
//! of the check's report type for the caller to render.

pub mod manifest;
pub mod structure;
pub mod syntax;

use std::path::Path;

/// Final path component for display, falling back to the whole path
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
