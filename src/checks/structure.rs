//! Project structure check.
//!
//! Confirms required directories and files exist under the base path.
//! Existence only: a file standing where a directory is expected still
//! counts as present.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of the structure check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureReport {
    pub base_path: PathBuf,
    /// Present directories, in required order
    pub found_dirs: Vec<String>,
    /// Present files, in required order
    pub found_files: Vec<String>,
    /// Missing directories, in required order
    pub missing_dirs: Vec<String>,
    /// Missing files, in required order
    pub missing_files: Vec<String>,
}

impl StructureReport {
    /// True iff nothing is missing
    pub fn passed(&self) -> bool {
        self.missing_dirs.is_empty() && self.missing_files.is_empty()
    }
}

/// Check every required directory and file under `base`.
///
/// A missing base directory is not an error; every entry is reported
/// missing.
pub fn check_structure(base: &Path, dirs: &[String], files: &[String]) -> StructureReport {
    let (found_dirs, missing_dirs) = partition_existing(base, dirs);
    let (found_files, missing_files) = partition_existing(base, files);

    StructureReport {
        base_path: base.to_path_buf(),
        found_dirs,
        found_files,
        missing_dirs,
        missing_files,
    }
}

/// Split entries into (present, missing), keeping input order in both
fn partition_existing(base: &Path, entries: &[String]) -> (Vec<String>, Vec<String>) {
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for entry in entries {
        let full_path = base.join(entry);
        if full_path.exists() {
            debug!(path = %full_path.display(), "present");
            found.push(entry.clone());
        } else {
            debug!(path = %full_path.display(), "missing");
            missing.push(entry.clone());
        }
    }

    (found, missing)
}
