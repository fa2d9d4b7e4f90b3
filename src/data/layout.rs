//! Expected project layout
//!
//! The built-in layout describes the Verpa Flutter app. Every list can be
//! replaced from a TOML layout file (see [`LayoutOverrides`]).

use serde::Deserialize;
use std::path::PathBuf;

/// Base directory checked when nothing else is configured
pub const DEFAULT_BASE_PATH: &str = "/home/saloom/my/verpa/mobile";

pub const DEFAULT_PROJECT_NAME: &str = "Verpa Mobile App";

/// Manifest path, relative to the base directory
pub const DEFAULT_MANIFEST: &str = "pubspec.yaml";

pub const REQUIRED_DIRS: &[&str] = &[
    "lib/core",
    "lib/features/auth",
    "lib/features/dashboard",
    "lib/features/aquarium",
    "lib/features/profile",
    "lib/features/settings",
    "lib/shared",
];

pub const REQUIRED_FILES: &[&str] = &[
    "pubspec.yaml",
    "lib/main.dart",
    "lib/core/api/api_client.dart",
    "lib/core/constants/app_constants.dart",
    "lib/core/storage/storage_service.dart",
    "lib/core/theme/app_theme.dart",
    "lib/core/utils/app_router.dart",
    "lib/features/auth/bloc/auth_bloc.dart",
    "lib/features/auth/bloc/auth_event.dart",
    "lib/features/auth/bloc/auth_state.dart",
    "lib/features/auth/screens/login_screen.dart",
    "lib/features/auth/screens/register_screen.dart",
    "lib/features/auth/screens/forgot_password_screen.dart",
    "lib/features/dashboard/screens/dashboard_screen.dart",
    "lib/shared/models/user_model.dart",
    "lib/shared/screens/splash_screen.dart",
    "lib/shared/screens/onboarding_screen.dart",
    "lib/shared/widgets/custom_button.dart",
    "lib/shared/widgets/custom_text_field.dart",
    "lib/shared/widgets/loading_overlay.dart",
];

/// Dependency names that must appear somewhere in the manifest
pub const REQUIRED_DEPENDENCIES: &[&str] = &[
    "flutter_bloc",
    "dio",
    "hive_flutter",
    "go_router",
    "flutter_secure_storage",
    "shared_preferences",
    "logger",
    "equatable",
];

/// Dart sources run through the syntax sniffer
pub const SNIFFED_FILES: &[&str] = &[
    "lib/main.dart",
    "lib/core/api/api_client.dart",
    "lib/features/auth/bloc/auth_bloc.dart",
    "lib/features/auth/screens/login_screen.dart",
];

/// Effective layout for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub project_name: String,
    pub base_path: PathBuf,
    pub manifest: PathBuf,
    pub required_dirs: Vec<String>,
    pub required_files: Vec<String>,
    pub dependencies: Vec<String>,
    pub sniffed_files: Vec<String>,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        ProjectLayout {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            base_path: PathBuf::from(DEFAULT_BASE_PATH),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            required_dirs: to_owned_list(REQUIRED_DIRS),
            required_files: to_owned_list(REQUIRED_FILES),
            dependencies: to_owned_list(REQUIRED_DEPENDENCIES),
            sniffed_files: to_owned_list(SNIFFED_FILES),
        }
    }
}

impl ProjectLayout {
    /// Absolute (or base-relative) path of the manifest file
    pub fn manifest_path(&self) -> PathBuf {
        self.base_path.join(&self.manifest)
    }

    /// Paths of the sniffed sources joined onto the base directory
    pub fn sniffed_paths(&self) -> Vec<PathBuf> {
        self.sniffed_files
            .iter()
            .map(|f| self.base_path.join(f))
            .collect()
    }

    /// Apply the keys present in a layout file
    pub fn apply(&mut self, overrides: LayoutOverrides) {
        if let Some(name) = overrides.project_name {
            self.project_name = name;
        }
        if let Some(base) = overrides.base_path {
            self.base_path = base;
        }
        if let Some(manifest) = overrides.manifest {
            self.manifest = manifest;
        }
        if let Some(dirs) = overrides.required_dirs {
            self.required_dirs = dirs;
        }
        if let Some(files) = overrides.required_files {
            self.required_files = files;
        }
        if let Some(deps) = overrides.dependencies {
            self.dependencies = deps;
        }
        if let Some(sniffed) = overrides.sniffed_files {
            self.sniffed_files = sniffed;
        }
    }
}

/// Contents of a TOML layout file. Absent keys keep the built-in values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverrides {
    pub project_name: Option<String>,
    pub base_path: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub required_dirs: Option<Vec<String>>,
    pub required_files: Option<Vec<String>>,
    pub dependencies: Option<Vec<String>>,
    pub sniffed_files: Option<Vec<String>>,
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
