//! Fixture project builder.
//!
//! `FixtureProject::complete()` lays out every directory and file the
//! built-in layout requires, with a manifest declaring every dependency
//! and Dart sources that pass the syntax sniffer.

use flutter_preflight::data::layout::{REQUIRED_DEPENDENCIES, REQUIRED_DIRS, REQUIRED_FILES};
use flutter_preflight::PreflightConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Dart source that classifies as "syntax OK"
pub const VALID_DART: &str = "import 'package:flutter/material.dart';\n\nclass Screen extends StatelessWidget {\n  @override\n  Widget build(BuildContext context) {\n    return const Placeholder();\n  }\n}\n";

/// A project tree living in a temporary directory
pub struct FixtureProject {
    dir: TempDir,
}

impl FixtureProject {
    /// Empty base directory
    pub fn empty() -> Self {
        FixtureProject {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Every required directory and file, all dependencies declared
    pub fn complete() -> Self {
        Self::with_dependencies(REQUIRED_DEPENDENCIES)
    }

    /// Complete tree whose manifest declares only `deps`
    pub fn with_dependencies(deps: &[&str]) -> Self {
        let project = Self::empty();

        for dir in REQUIRED_DIRS {
            fs::create_dir_all(project.path().join(dir)).expect("create dir");
        }
        for file in REQUIRED_FILES {
            if file.ends_with(".dart") {
                project.write(file, VALID_DART);
            }
        }
        project.write_manifest(deps);
        project
    }

    /// Complete tree with one dependency left out of the manifest
    pub fn without_dependency(dep: &str) -> Self {
        let deps: Vec<&str> = REQUIRED_DEPENDENCIES
            .iter()
            .copied()
            .filter(|d| *d != dep)
            .collect();
        Self::with_dependencies(&deps)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the base, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }

    /// Write `pubspec.yaml` declaring `deps`
    pub fn write_manifest(&self, deps: &[&str]) {
        let mut manifest = String::from(
            "name: verpa\ndescription: Verpa mobile app\n\ndependencies:\n  flutter:\n    sdk: flutter\n",
        );
        for dep in deps {
            manifest.push_str(&format!("  {}: any\n", dep));
        }
        self.write("pubspec.yaml", &manifest);
    }

    /// Remove a file or directory relative to the base
    pub fn remove(&self, relative: &str) {
        let path = self.path().join(relative);
        if path.is_dir() {
            fs::remove_dir_all(&path).expect("remove fixture dir");
        } else {
            fs::remove_file(&path).expect("remove fixture file");
        }
    }

    /// Built-in layout rooted at this project
    pub fn config(&self) -> PreflightConfig {
        PreflightConfig::with_base(self.path())
    }
}
