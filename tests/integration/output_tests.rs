//! Output formatting tests.
//!
//! Terminal, JSON, and JUnit rendering of real runs.

use crate::fixtures::FixtureProject;
use flutter_preflight::cli::args::OutputFormat;
use flutter_preflight::cli::output::{get_formatter, OutputFormatter, TerminalFormatter};
use flutter_preflight::run_preflight;

#[test]
fn test_terminal_report_for_complete_project() {
    let project = FixtureProject::complete();
    let report = run_preflight(&project.config());

    let output = TerminalFormatter::new(false, false).format(&report).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "🚀 Verpa Mobile App - Project Structure Validation");
    assert_eq!(lines[1], "=".repeat(50));
    assert_eq!(lines[2], "🔍 Validating Flutter project structure...");
    assert_eq!(lines[3], format!("📁 Base path: {}", project.path().display()));
    assert_eq!(lines[4], "✅ Directory: lib/core");
    assert!(output.contains("\n\n🎉 All required files and directories are present!\n"));
    assert!(output.contains("\n\n📦 Validating pubspec.yaml dependencies...\n✅ Dependency: flutter_bloc\n"));
    assert!(output.contains("✅ Basic syntax OK: login_screen.dart"));
    assert!(output.contains("\n\n💡 Next steps:\n   1. Run 'flutter pub get' to install dependencies"));
}

#[test]
fn test_terminal_report_for_missing_base() {
    let project = FixtureProject::empty();
    let report = run_preflight(&flutter_preflight::PreflightConfig::with_base(
        project.path().join("nowhere"),
    ));

    let output = TerminalFormatter::new(false, false).format(&report).unwrap();

    assert!(output.contains("\n\n❌ Missing directories:\n   - lib/core\n"));
    assert!(output.contains("\n\n❌ Missing files:\n   - pubspec.yaml\n"));
    assert!(output.contains("❌ Missing 7 directories and 20 files"));
    assert!(output.contains("❌ pubspec.yaml not found"));
    assert!(output.contains("❌ File not found: main.dart"));
    assert!(output.ends_with(
        "❌ Project validation FAILED!\n🔧 Please fix the missing files/dependencies before proceeding."
    ));
}

#[test]
fn test_terminal_reports_unmatched_braces() {
    let project = FixtureProject::complete();
    project.write("lib/features/auth/bloc/auth_bloc.dart", "{{}");

    let report = run_preflight(&project.config());
    let output = TerminalFormatter::new(false, false).format(&report).unwrap();

    assert!(output.contains("❌ Unmatched braces in auth_bloc.dart"));
    assert!(output.contains("🎉 Project validation PASSED!"));
}

#[test]
fn test_terminal_reports_manifest_read_error() {
    let project = FixtureProject::complete();
    project.remove("pubspec.yaml");
    std::fs::create_dir(project.path().join("pubspec.yaml")).unwrap();

    let report = run_preflight(&project.config());
    let output = TerminalFormatter::new(false, false).format(&report).unwrap();

    assert!(output.contains("📦 Validating pubspec.yaml dependencies..."));
    assert!(output.contains("❌ Error reading pubspec.yaml: "));
    assert!(output.contains("❌ Project validation FAILED!"));
}

#[test]
fn test_get_formatter_text() {
    let project = FixtureProject::complete();
    let report = run_preflight(&project.config());

    let formatter = get_formatter(OutputFormat::Text, false, true).unwrap();
    let output = formatter.format(&report).unwrap();

    assert!(!output.contains("✅"));
    assert!(output.contains("🎉 Project validation PASSED!"));
}

#[cfg(feature = "json")]
#[test]
fn test_json_output_parses() {
    let project = FixtureProject::without_dependency("logger");
    let report = run_preflight(&project.config());

    let output = get_formatter(OutputFormat::Json, false, false)
        .unwrap()
        .format(&report)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["passed"], false);
    assert_eq!(value["summary"]["structure_passed"], true);
    assert_eq!(value["manifest"]["missing"], serde_json::json!(["logger"]));
    assert_eq!(value["syntax"].as_array().map(|a| a.len()), Some(4));
}

#[cfg(feature = "junit")]
#[test]
fn test_junit_output_for_missing_base() {
    let project = FixtureProject::empty();
    let report = run_preflight(&flutter_preflight::PreflightConfig::with_base(
        project.path().join("nowhere"),
    ));

    let output = get_formatter(OutputFormat::Junit, false, false)
        .unwrap()
        .format(&report)
        .unwrap();

    assert!(output.contains("<testsuite name=\"structure\" tests=\"27\" failures=\"27\""));
    assert!(output.contains("<testsuite name=\"manifest\" tests=\"1\" failures=\"1\""));
    assert!(output.contains("<testsuite name=\"syntax\" tests=\"4\" failures=\"0\""));
    assert!(output.ends_with("</testsuites>"));
}
