//! Build metadata reported by `flutter-preflight version`.
//!
//! Commit, date and rustc version are exported by `build.rs` and may be
//! absent (e.g. when building outside a git checkout).

use std::fmt;

#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
    pub rustc_version: Option<&'static str>,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = [
            ("Commit", self.commit),
            ("Built", self.build_date),
            ("Target", Some(self.target)),
            ("Rustc", self.rustc_version),
        ];

        write!(f, "flutter-preflight {}", self.version)?;
        for (label, value) in optional {
            if let Some(value) = value {
                write!(f, "\n{}: {}", label, value)?;
            }
        }
        Ok(())
    }
}

pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("FLUTTER_PREFLIGHT_GIT_HASH"),
        build_date: option_env!("FLUTTER_PREFLIGHT_BUILD_DATE"),
        target: env!("TARGET"),
        rustc_version: option_env!("FLUTTER_PREFLIGHT_RUSTC_VERSION"),
    }
}
