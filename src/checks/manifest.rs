//! Manifest dependency check.
//!
//! A dependency counts as declared when its name occurs anywhere in the
//! manifest text. No YAML parsing and no word boundaries, so `dio` is also
//! satisfied by `audio_service`.

use super::display_name;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What happened when the manifest was checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ManifestOutcome {
    /// Manifest path does not exist; nothing was read
    NotFound,
    /// Manifest exists but could not be read
    ReadError { message: String },
    /// Manifest was read and every token tested
    Scanned {
        found: Vec<String>,
        missing: Vec<String>,
    },
}

/// Outcome of the manifest check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestReport {
    pub path: PathBuf,
    /// File name used in messages (e.g. `pubspec.yaml`)
    pub name: String,
    #[serde(flatten)]
    pub outcome: ManifestOutcome,
}

impl ManifestReport {
    /// True iff the manifest was read and no token is missing
    pub fn passed(&self) -> bool {
        matches!(&self.outcome, ManifestOutcome::Scanned { missing, .. } if missing.is_empty())
    }

    /// Missing tokens; empty unless the manifest was scanned
    pub fn missing(&self) -> &[String] {
        match &self.outcome {
            ManifestOutcome::Scanned { missing, .. } => missing,
            _ => &[],
        }
    }
}

/// Check that every dependency token occurs in the manifest at `path`.
pub fn check_manifest(path: &Path, dependencies: &[String]) -> ManifestReport {
    let name = display_name(path);

    if !path.exists() {
        debug!(path = %path.display(), "manifest not found");
        return ManifestReport {
            path: path.to_path_buf(),
            name,
            outcome: ManifestOutcome::NotFound,
        };
    }

    let outcome = match fs::read_to_string(path) {
        Ok(content) => {
            let (found, missing) = scan_dependencies(&content, dependencies);
            ManifestOutcome::Scanned { found, missing }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read manifest");
            ManifestOutcome::ReadError {
                message: e.to_string(),
            }
        }
    };

    ManifestReport {
        path: path.to_path_buf(),
        name,
        outcome,
    }
}

/// Split tokens into (found, missing) by substring containment, in order
pub fn scan_dependencies(content: &str, dependencies: &[String]) -> (Vec<String>, Vec<String>) {
    dependencies
        .iter()
        .cloned()
        .partition(|dep| {
            let present = content.contains(dep.as_str());
            if present {
                debug!(dependency = %dep, "dependency present");
            } else {
                debug!(dependency = %dep, "dependency missing");
            }
            present
        })
}
