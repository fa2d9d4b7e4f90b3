//! Check execution orchestrator.
//!
//! Runs structure, manifest and syntax checks in that fixed order and
//! assembles the report. Strictly linear: no retries, no early exit. A
//! failed structure check does not stop the manifest check, and neither
//! stops the syntax sniffer.

use crate::checks::manifest::{self, ManifestReport};
use crate::checks::structure::{self, StructureReport};
use crate::checks::syntax::{self, SniffedFile};
use crate::data::layout::ProjectLayout;
use crate::engine::result::ValidationReport;
use crate::CheckKind;
use std::time::Instant;
use tracing::{info, info_span};

/// Runs every check against one project layout
#[derive(Debug, Clone)]
pub struct ProjectValidator {
    layout: ProjectLayout,
}

impl ProjectValidator {
    pub fn new(layout: ProjectLayout) -> Self {
        ProjectValidator { layout }
    }

    /// Run all three checks
    pub fn run(&self) -> ValidationReport {
        let start = Instant::now();
        let _span = info_span!("preflight", base = %self.layout.base_path.display()).entered();

        let structure = self.run_structure();
        let manifest = self.run_manifest();
        let syntax = self.run_syntax();

        let total_duration_ms = start.elapsed().as_millis() as u64;
        let report = ValidationReport::new(
            self.layout.project_name.clone(),
            structure,
            manifest,
            syntax,
            total_duration_ms,
        );

        info!(passed = report.passed(), duration_ms = total_duration_ms, "validation finished");
        report
    }

    pub fn run_structure(&self) -> StructureReport {
        let _span = info_span!("check", kind = CheckKind::Structure.id()).entered();
        let report = structure::check_structure(
            &self.layout.base_path,
            &self.layout.required_dirs,
            &self.layout.required_files,
        );
        info!(
            passed = report.passed(),
            missing_dirs = report.missing_dirs.len(),
            missing_files = report.missing_files.len(),
            "structure check complete"
        );
        report
    }

    pub fn run_manifest(&self) -> ManifestReport {
        let _span = info_span!("check", kind = CheckKind::Manifest.id()).entered();
        let report = manifest::check_manifest(&self.layout.manifest_path(), &self.layout.dependencies);
        info!(
            passed = report.passed(),
            missing = report.missing().len(),
            "manifest check complete"
        );
        report
    }

    pub fn run_syntax(&self) -> Vec<SniffedFile> {
        let _span = info_span!("check", kind = CheckKind::Syntax.id()).entered();
        let results = syntax::sniff_files(&self.layout.sniffed_paths());
        info!(
            files = results.len(),
            issues = results.iter().filter(|f| f.has_issue()).count(),
            "syntax sniffing complete"
        );
        results
    }
}
