//! CLI integration tests.
//!
//! Runs the compiled binary against fixture projects and checks output
//! and exit codes.

use crate::fixtures::FixtureProject;
use assert_cmd::Command;
use predicates::prelude::*;

fn preflight() -> Command {
    let mut cmd = Command::cargo_bin("flutter-preflight").unwrap();
    cmd.env_remove("FLUTTER_PREFLIGHT_BASE")
        .env_remove("FLUTTER_PREFLIGHT_CONFIG")
        .env_remove("FLUTTER_PREFLIGHT_FORMAT")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_complete_project_exits_zero() {
    let project = FixtureProject::complete();

    preflight()
        .arg("--base")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("🎉 Project validation PASSED!"))
        .stdout(predicate::str::contains("💡 Next steps:"));
}

#[test]
fn test_missing_dependency_exits_one() {
    let project = FixtureProject::without_dependency("equatable");

    preflight()
        .arg("check")
        .arg("--base")
        .arg(project.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Missing dependencies: equatable"))
        .stdout(predicate::str::contains("❌ Project validation FAILED!"));
}

#[test]
fn test_missing_base_exits_one() {
    let project = FixtureProject::empty();

    preflight()
        .arg("--base")
        .arg(project.path().join("absent"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Missing 7 directories and 20 files"));
}

#[test]
fn test_base_from_environment() {
    let project = FixtureProject::complete();

    preflight()
        .env("FLUTTER_PREFLIGHT_BASE", project.path())
        .assert()
        .success();
}

#[test]
fn test_config_file_overrides_layout() {
    let project = FixtureProject::empty();
    project.write("pubspec.yaml", "dependencies:\n  dio: any\n");
    project.write("lib/main.dart", "void main() {}\n");
    let config = project.write(
        "preflight.toml",
        "project_name = \"Tiny\"\nrequired_dirs = [\"lib\"]\nrequired_files = [\"lib/main.dart\"]\ndependencies = [\"dio\"]\nsniffed_files = [\"lib/main.dart\"]\n",
    );

    preflight()
        .arg("--config")
        .arg(&config)
        .arg("--base")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("🚀 Tiny - Project Structure Validation"))
        .stdout(predicate::str::contains("⚠️  Suspicious content in main.dart"));
}

#[test]
fn test_invalid_config_exits_three() {
    let project = FixtureProject::empty();
    let config = project.write("preflight.toml", "unknown_key = 1\n");

    preflight()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error: Invalid config file"));
}

#[test]
fn test_unknown_option_exits_three() {
    preflight().arg("--bogus").assert().code(3);
}

#[test]
fn test_list_prints_layout_without_checking() {
    let project = FixtureProject::empty();

    preflight()
        .arg("list")
        .arg("--base")
        .arg(project.path().join("absent"))
        .assert()
        .success()
        .stdout(predicate::str::contains("REQUIRED DEPENDENCIES:"))
        .stdout(predicate::str::contains("  flutter_secure_storage"));
}

#[test]
fn test_version_command() {
    preflight()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("flutter-preflight "));
}

#[test]
fn test_version_flag_prints_build_info() {
    preflight()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("flutter-preflight "))
        .stdout(predicate::str::contains("Target: "));
}

#[cfg(feature = "json")]
#[test]
fn test_json_format_flag() {
    let project = FixtureProject::complete();

    let output = preflight()
        .arg("--format")
        .arg("json")
        .arg("--base")
        .arg(project.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["passed"], true);
}

#[test]
fn test_logs_go_to_stderr_only() {
    let project = FixtureProject::complete();

    preflight()
        .arg("--verbose")
        .arg("--base")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("structure check complete").not())
        .stderr(predicate::str::contains("structure check complete"));
}

#[test]
fn test_verbose_logs_each_dependency() {
    let project = FixtureProject::without_dependency("equatable");

    preflight()
        .arg("--verbose")
        .arg("--base")
        .arg(project.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("dependency missing"))
        .stderr(predicate::str::contains("dependency=equatable"))
        .stderr(predicate::str::contains("dependency present"));
}
