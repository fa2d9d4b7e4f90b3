//! Output formatting for flutter-preflight.
//!
//! Provides terminal, JSON, and JUnit XML output formatters.
//!
//! # Graceful Degradation
//!
//! - Non-TTY output: color disabled via NO_COLOR or --no-color
//! - Non-UTF8 paths: rendered lossily
//! - Empty layouts: produce a valid report with zero entries
//!
//! The terminal formatter never fails; JSON serialization errors are
//! surfaced as [`PreflightError`].

use crate::checks::manifest::{ManifestOutcome, ManifestReport};
use crate::checks::structure::StructureReport;
use crate::checks::syntax::{SniffOutcome, SniffedFile, SyntaxVerdict};
use crate::cli::args::OutputFormat;
use crate::data::layout::ProjectLayout;
use crate::engine::result::ValidationReport;
use crate::PreflightError;
use colored::{Color, Colorize};

const RULE: &str = "==================================================";

/// Hints printed after a passing run
pub const NEXT_STEPS: &[&str] = &[
    "1. Run 'flutter pub get' to install dependencies",
    "2. Run 'flutter analyze' to check for issues",
    "3. Run 'flutter run' to start the app",
];

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> Result<String, PreflightError>;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    quiet: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, quiet: bool) -> Self {
        TerminalFormatter { color, quiet }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.color {
            text.as_str().color(color).to_string()
        } else {
            text
        }
    }

    fn ok(&self, text: String) -> String {
        self.paint(text, Color::Green)
    }

    fn bad(&self, text: String) -> String {
        self.paint(text, Color::Red)
    }

    fn warn(&self, text: String) -> String {
        self.paint(text, Color::Yellow)
    }

    fn structure_lines(&self, structure: &StructureReport, lines: &mut Vec<String>) {
        lines.push("🔍 Validating Flutter project structure...".to_string());
        lines.push(format!("📁 Base path: {}", structure.base_path.display()));

        if !self.quiet {
            for dir in &structure.found_dirs {
                lines.push(self.ok(format!("✅ Directory: {}", dir)));
            }
            for file in &structure.found_files {
                lines.push(self.ok(format!("✅ File: {}", file)));
            }
        }

        if !structure.missing_dirs.is_empty() {
            lines.push(String::new());
            lines.push(self.bad("❌ Missing directories:".to_string()));
            for dir in &structure.missing_dirs {
                lines.push(format!("   - {}", dir));
            }
        }

        if !structure.missing_files.is_empty() {
            lines.push(String::new());
            lines.push(self.bad("❌ Missing files:".to_string()));
            for file in &structure.missing_files {
                lines.push(format!("   - {}", file));
            }
        }

        lines.push(String::new());
        if structure.passed() {
            lines.push(self.ok("🎉 All required files and directories are present!".to_string()));
        } else {
            lines.push(self.bad(format!(
                "❌ Missing {} directories and {} files",
                structure.missing_dirs.len(),
                structure.missing_files.len()
            )));
        }
    }

    fn manifest_lines(&self, manifest: &ManifestReport, lines: &mut Vec<String>) {
        if manifest.outcome == ManifestOutcome::NotFound {
            lines.push(self.bad(format!("❌ {} not found", manifest.name)));
            return;
        }

        lines.push(String::new());
        lines.push(format!("📦 Validating {} dependencies...", manifest.name));

        match &manifest.outcome {
            ManifestOutcome::NotFound => {}
            ManifestOutcome::ReadError { message } => {
                lines.push(self.bad(format!("❌ Error reading {}: {}", manifest.name, message)));
            }
            ManifestOutcome::Scanned { found, missing } => {
                if !self.quiet {
                    for dep in found {
                        lines.push(self.ok(format!("✅ Dependency: {}", dep)));
                    }
                }
                lines.push(String::new());
                if missing.is_empty() {
                    lines.push(self.ok("🎉 All required dependencies are present!".to_string()));
                } else {
                    lines.push(self.bad(format!("❌ Missing dependencies: {}", missing.join(", "))));
                }
            }
        }
    }

    fn syntax_lines(&self, files: &[SniffedFile], lines: &mut Vec<String>) {
        lines.push(String::new());
        lines.push("🔧 Validating Dart file syntax...".to_string());

        for file in files {
            let line = match &file.outcome {
                SniffOutcome::NotFound => self.bad(format!("❌ File not found: {}", file.name)),
                SniffOutcome::ReadError { message } => {
                    self.bad(format!("❌ Error reading {}: {}", file.name, message))
                }
                SniffOutcome::Classified { verdict } => match verdict {
                    SyntaxVerdict::UnmatchedBraces => {
                        self.bad(format!("❌ Unmatched braces in {}", file.name))
                    }
                    SyntaxVerdict::UnmatchedParentheses => {
                        self.bad(format!("❌ Unmatched parentheses in {}", file.name))
                    }
                    SyntaxVerdict::Ok => {
                        if self.quiet {
                            continue;
                        }
                        self.ok(format!("✅ Basic syntax OK: {}", file.name))
                    }
                    SyntaxVerdict::Suspicious => {
                        self.warn(format!("⚠️  Suspicious content in {}", file.name))
                    }
                },
            };
            lines.push(line);
        }
    }

    fn summary_lines(&self, report: &ValidationReport, lines: &mut Vec<String>) {
        lines.push(String::new());
        lines.push(RULE.to_string());

        if report.passed() {
            lines.push(self.ok("🎉 Project validation PASSED!".to_string()));
            lines.push("📱 The Flutter project structure is ready for development.".to_string());
            lines.push(String::new());
            lines.push("💡 Next steps:".to_string());
            for step in NEXT_STEPS {
                lines.push(format!("   {}", step));
            }
        } else {
            lines.push(self.bad("❌ Project validation FAILED!".to_string()));
            lines.push("🔧 Please fix the missing files/dependencies before proceeding.".to_string());
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, PreflightError> {
        let mut lines = vec![
            format!("🚀 {} - Project Structure Validation", report.project_name),
            RULE.to_string(),
        ];

        self.structure_lines(&report.structure, &mut lines);
        self.manifest_lines(&report.manifest, &mut lines);
        self.syntax_lines(&report.syntax, &mut lines);
        self.summary_lines(report, &mut lines);

        Ok(lines.join("\n"))
    }
}

/// JSON formatter
#[cfg(feature = "json")]
pub struct JsonFormatter {
    pretty: bool,
}

#[cfg(feature = "json")]
impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

#[cfg(feature = "json")]
#[derive(serde::Serialize)]
struct JsonReport<'a> {
    passed: bool,
    summary: crate::engine::result::ResultSummary,
    #[serde(flatten)]
    report: &'a ValidationReport,
}

#[cfg(feature = "json")]
impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, PreflightError> {
        let doc = JsonReport {
            passed: report.passed(),
            summary: report.summary(),
            report,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        };
        Ok(json)
    }
}

/// JUnit XML formatter
///
/// One test suite per check. Syntax findings are written as warnings in
/// `<system-out>`, never as failures.
#[cfg(feature = "junit")]
#[derive(Default)]
pub struct JunitFormatter;

#[cfg(feature = "junit")]
impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }
}

/// One JUnit test case before rendering
#[cfg(feature = "junit")]
enum Case {
    Pass { name: String },
    Fail { name: String, message: String },
    Warn { name: String, message: String },
}

#[cfg(feature = "junit")]
impl Case {
    fn is_failure(&self) -> bool {
        matches!(self, Case::Fail { .. })
    }

    fn render(&self, suite: &str, output: &mut String) {
        let esc = JunitFormatter::escape_xml;
        match self {
            Case::Pass { name } => {
                output.push_str(&format!(
                    "    <testcase name=\"{}\" classname=\"flutter-preflight.{}\" />\n",
                    esc(name),
                    suite
                ));
            }
            Case::Fail { name, message } => {
                output.push_str(&format!(
                    "    <testcase name=\"{}\" classname=\"flutter-preflight.{}\">\n",
                    esc(name),
                    suite
                ));
                output.push_str(&format!("      <failure message=\"{}\" />\n", esc(message)));
                output.push_str("    </testcase>\n");
            }
            Case::Warn { name, message } => {
                output.push_str(&format!(
                    "    <testcase name=\"{}\" classname=\"flutter-preflight.{}\">\n",
                    esc(name),
                    suite
                ));
                output.push_str(&format!("      <system-out>WARNING: {}</system-out>\n", esc(message)));
                output.push_str("    </testcase>\n");
            }
        }
    }
}

#[cfg(feature = "junit")]
fn structure_cases(structure: &StructureReport) -> Vec<Case> {
    let present = structure
        .found_dirs
        .iter()
        .chain(&structure.found_files)
        .map(|p| Case::Pass { name: p.clone() });
    let missing_dirs = structure.missing_dirs.iter().map(|p| Case::Fail {
        name: p.clone(),
        message: format!("Missing directory: {}", p),
    });
    let missing_files = structure.missing_files.iter().map(|p| Case::Fail {
        name: p.clone(),
        message: format!("Missing file: {}", p),
    });
    present.chain(missing_dirs).chain(missing_files).collect()
}

#[cfg(feature = "junit")]
fn manifest_cases(manifest: &ManifestReport) -> Vec<Case> {
    match &manifest.outcome {
        ManifestOutcome::NotFound => vec![Case::Fail {
            name: manifest.name.clone(),
            message: format!("{} not found", manifest.name),
        }],
        ManifestOutcome::ReadError { message } => vec![Case::Fail {
            name: manifest.name.clone(),
            message: format!("Error reading {}: {}", manifest.name, message),
        }],
        ManifestOutcome::Scanned { found, missing } => found
            .iter()
            .map(|d| Case::Pass { name: d.clone() })
            .chain(missing.iter().map(|d| Case::Fail {
                name: d.clone(),
                message: format!("Missing dependency: {}", d),
            }))
            .collect(),
    }
}

#[cfg(feature = "junit")]
fn syntax_cases(files: &[SniffedFile]) -> Vec<Case> {
    files
        .iter()
        .map(|file| {
            let name = file.name.clone();
            match &file.outcome {
                SniffOutcome::Classified {
                    verdict: SyntaxVerdict::Ok,
                } => Case::Pass { name },
                SniffOutcome::Classified { verdict } => Case::Warn {
                    message: format!("{} in {}", verdict, file.name),
                    name,
                },
                SniffOutcome::NotFound => Case::Warn {
                    message: format!("File not found: {}", file.name),
                    name,
                },
                SniffOutcome::ReadError { message } => Case::Warn {
                    message: format!("Error reading {}: {}", file.name, message),
                    name,
                },
            }
        })
        .collect()
}

#[cfg(feature = "junit")]
impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, PreflightError> {
        use crate::CheckKind;

        let suites = [
            (CheckKind::Structure, structure_cases(&report.structure)),
            (CheckKind::Manifest, manifest_cases(&report.manifest)),
            (CheckKind::Syntax, syntax_cases(&report.syntax)),
        ];

        let total: usize = suites.iter().map(|(_, cases)| cases.len()).sum();
        let failures: usize = suites
            .iter()
            .map(|(_, cases)| cases.iter().filter(|c| c.is_failure()).count())
            .sum();

        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str(&format!(
            "<testsuites name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\" time=\"{:.3}\">\n",
            Self::escape_xml(&report.project_name),
            total,
            failures,
            report.total_duration_ms as f64 / 1000.0
        ));

        for (kind, cases) in &suites {
            let suite_failures = cases.iter().filter(|c| c.is_failure()).count();
            output.push_str(&format!(
                "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" errors=\"0\">\n",
                kind.id(),
                cases.len(),
                suite_failures
            ));
            for case in cases {
                case.render(kind.id(), &mut output);
            }
            output.push_str("  </testsuite>\n");
        }

        output.push_str("</testsuites>");
        Ok(output)
    }
}

/// Get a formatter based on the output format
pub fn get_formatter(
    format: OutputFormat,
    color: bool,
    quiet: bool,
) -> Result<Box<dyn OutputFormatter>, PreflightError> {
    match format {
        OutputFormat::Text => Ok(Box::new(TerminalFormatter::new(color, quiet))),
        #[cfg(feature = "json")]
        OutputFormat::Json => Ok(Box::new(JsonFormatter::new(true))),
        #[cfg(feature = "junit")]
        OutputFormat::Junit => Ok(Box::new(JunitFormatter::new())),
        #[allow(unreachable_patterns)]
        other => Err(PreflightError::UnsupportedFormat {
            format: format!("{:?}", other).to_lowercase(),
        }),
    }
}

/// Render the effective layout for the `list` command
pub fn format_layout(layout: &ProjectLayout) -> String {
    let mut lines = vec![
        format!("{} - expected layout", layout.project_name),
        format!("Base path: {}", layout.base_path.display()),
        format!("Manifest: {}", layout.manifest.display()),
    ];

    let sections: [(&str, &[String]); 4] = [
        ("REQUIRED DIRECTORIES", layout.required_dirs.as_slice()),
        ("REQUIRED FILES", layout.required_files.as_slice()),
        ("REQUIRED DEPENDENCIES", layout.dependencies.as_slice()),
        ("SNIFFED SOURCES (informational)", layout.sniffed_files.as_slice()),
    ];

    for (header, items) in sections {
        lines.push(String::new());
        lines.push(format!("{}:", header));
        for item in items {
            lines.push(format!("  {}", item));
        }
    }

    lines.join("\n")
}
