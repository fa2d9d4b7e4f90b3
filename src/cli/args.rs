//! Command line arguments for flutter-preflight.

use clap::{Parser, Subcommand, ValueEnum};
use std::env;
use std::path::PathBuf;

/// Pre-flight layout checks for Flutter mobile projects
#[derive(Parser, Debug, Clone)]
#[command(name = "flutter-preflight", version, about, disable_version_flag = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project base directory (overrides the config file)
    #[arg(long, global = true, env = "FLUTTER_PREFLIGHT_BASE")]
    pub base: Option<PathBuf>,

    /// TOML file overriding the expected layout
    #[arg(long, global = true, env = "FLUTTER_PREFLIGHT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        env = "FLUTTER_PREFLIGHT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Only print failures, warnings and the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug-level diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Print version and build information
    #[arg(short = 'V', long = "version")]
    pub version: bool,
}

/// Command to execute
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Run the project checks (default)
    #[default]
    Check,
    /// Print the expected layout without checking it
    List,
    /// Print version and build information
    Version,
}

/// Output format selection
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI/CD integration
    Junit,
}

impl Args {
    /// Command to run; `check` when none was given
    pub fn command(&self) -> Command {
        if self.version {
            Command::Version
        } else {
            self.command.unwrap_or_default()
        }
    }

    /// Color is on unless `--no-color` or `NO_COLOR` is set
    pub fn color_enabled(&self) -> bool {
        !self.no_color && env::var_os("NO_COLOR").is_none()
    }

    /// Filter directive used when RUST_LOG is unset
    pub fn log_directive(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            self.log_level.as_str()
        }
    }
}
