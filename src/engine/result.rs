//! Result aggregation and reporting.
//!
//! Collects the three check reports and computes the verdict.

use crate::checks::manifest::ManifestReport;
use crate::checks::structure::StructureReport;
use crate::checks::syntax::SniffedFile;
use crate::CheckKind;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub structure_passed: bool,
    pub manifest_passed: bool,
    pub missing_dirs: usize,
    pub missing_files: usize,
    pub missing_dependencies: usize,
    pub syntax_ok: usize,
    pub syntax_issues: usize,
    /// Structure AND manifest
    pub passed: bool,
}

/// Validation report containing all check results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub project_name: String,
    pub timestamp: u64,
    pub structure: StructureReport,
    pub manifest: ManifestReport,
    pub syntax: Vec<SniffedFile>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Create a report stamped with the current time
    pub fn new(
        project_name: impl Into<String>,
        structure: StructureReport,
        manifest: ManifestReport,
        syntax: Vec<SniffedFile>,
        total_duration_ms: u64,
    ) -> Self {
        ValidationReport {
            project_name: project_name.into(),
            timestamp: unix_timestamp(),
            structure,
            manifest,
            syntax,
            total_duration_ms,
        }
    }

    /// Whether a single check found nothing to report
    pub fn check_passed(&self, kind: CheckKind) -> bool {
        match kind {
            CheckKind::Structure => self.structure.passed(),
            CheckKind::Manifest => self.manifest.passed(),
            CheckKind::Syntax => !self.syntax.iter().any(SniffedFile::has_issue),
        }
    }

    /// Overall verdict over the checks that affect it
    pub fn passed(&self) -> bool {
        CheckKind::ALL
            .iter()
            .filter(|kind| kind.affects_verdict())
            .all(|&kind| self.check_passed(kind))
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let syntax_issues = self.syntax.iter().filter(|f| f.has_issue()).count();

        ResultSummary {
            structure_passed: self.check_passed(CheckKind::Structure),
            manifest_passed: self.check_passed(CheckKind::Manifest),
            missing_dirs: self.structure.missing_dirs.len(),
            missing_files: self.structure.missing_files.len(),
            missing_dependencies: self.manifest.missing().len(),
            syntax_ok: self.syntax.len() - syntax_issues,
            syntax_issues,
            passed: self.passed(),
        }
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
