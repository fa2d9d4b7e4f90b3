//! flutter-preflight library
//!
//! Pre-flight layout checks for Flutter mobile projects.
//!
//! Three checks run against a project directory:
//! - Structure: required directories and files exist
//! - Manifest: required dependency names appear in `pubspec.yaml`
//! - Syntax: a few Dart sources have balanced braces and parentheses
//!
//! The verdict is structure AND manifest. The syntax sniffer is
//! informational and never changes it.
//!
//! # Example
//!
//! ```no_run
//! use flutter_preflight::{run_preflight, PreflightConfig};
//!
//! let config = PreflightConfig::default();
//! let report = run_preflight(&config);
//! println!("Verdict: {}", if report.passed() { "pass" } else { "fail" });
//! ```

pub mod checks;
pub mod cli;
pub mod data;
pub mod engine;
pub mod version;

use cli::args::Args;
use data::layout::{LayoutOverrides, ProjectLayout};
use engine::orchestrator::ProjectValidator;
use engine::result::ValidationReport;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

// Re-exports for public API
pub use engine::orchestrator::ProjectValidator as Validator;
pub use engine::result::{ResultSummary, ValidationReport as Report};

/// The three checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Required directories and files exist under the base path
    Structure,
    /// Required dependency names occur in the manifest text
    Manifest,
    /// Brace/parenthesis balance and keyword presence in Dart sources
    Syntax,
}

impl CheckKind {
    pub const ALL: [CheckKind; 3] = [CheckKind::Structure, CheckKind::Manifest, CheckKind::Syntax];

    /// Whether the outcome of this check feeds the overall verdict
    pub fn affects_verdict(self) -> bool {
        !matches!(self, CheckKind::Syntax)
    }

    /// Lowercase identifier, used as JUnit suite name
    pub fn id(self) -> &'static str {
        match self {
            CheckKind::Structure => "structure",
            CheckKind::Manifest => "manifest",
            CheckKind::Syntax => "syntax",
        }
    }
}

/// Error types for flutter-preflight setup.
///
/// Checks never return these: missing paths and unreadable files are part
/// of the report. Only configuration and output setup can fail.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// Layout file could not be read
    #[error("I/O error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
    /// Layout file is not valid TOML or has unknown keys
    #[error("Invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
    /// Output format was compiled out
    #[error("Output format '{format}' is not available in this build")]
    UnsupportedFormat { format: String },
    /// Report could not be serialized
    #[cfg(feature = "json")]
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for one validation run.
#[derive(Debug, Clone, Default)]
pub struct PreflightConfig {
    /// Effective project layout
    pub layout: ProjectLayout,
}

impl PreflightConfig {
    /// Build configuration from command line arguments.
    ///
    /// Precedence: built-in layout, then the `--config` file, then `--base`.
    pub fn from_args(args: &Args) -> Result<Self, PreflightError> {
        let mut layout = ProjectLayout::default();

        if let Some(ref path) = args.config {
            layout.apply(load_layout_file(path)?);
        }

        if let Some(ref base) = args.base {
            layout.base_path = base.clone();
        }

        debug!(base = %layout.base_path.display(), "resolved project layout");
        Ok(PreflightConfig { layout })
    }

    /// Configuration for the built-in layout rooted at `base`
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        PreflightConfig {
            layout: ProjectLayout {
                base_path: base.into(),
                ..ProjectLayout::default()
            },
        }
    }
}

/// Read and parse a TOML layout file
pub fn load_layout_file(path: &Path) -> Result<LayoutOverrides, PreflightError> {
    let content = std::fs::read_to_string(path).map_err(|source| PreflightError::Io {
        context: format!("reading config file {}", path.display()),
        source,
    })?;

    toml::from_str(&content).map_err(|e| PreflightError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Run the structure, manifest and syntax checks.
///
/// Never fails: every missing path or unreadable file is recorded in the
/// returned report.
pub fn run_preflight(config: &PreflightConfig) -> ValidationReport {
    ProjectValidator::new(config.layout.clone()).run()
}
