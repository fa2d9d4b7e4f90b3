//! flutter-preflight CLI entry point
//!
//! Pre-flight layout checks for Flutter mobile projects.

use clap::Parser;
use flutter_preflight::cli::args::{Args, Command};
use flutter_preflight::cli::output::{format_layout, get_formatter};
use flutter_preflight::version::get_build_info;
use flutter_preflight::{run_preflight, PreflightConfig};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code for setup errors (bad config, unavailable format, bad arguments)
const EXIT_RUNTIME_ERROR: u8 = 3;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported as "errors" by clap
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_RUNTIME_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(&args);

    match args.command() {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::List => print_layout(&args),
        Command::Check => run_checks(&args),
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(args.color_enabled()),
        )
        .try_init();
}

fn print_layout(args: &Args) -> ExitCode {
    match PreflightConfig::from_args(args) {
        Ok(config) => {
            println!("{}", format_layout(&config.layout));
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_checks(args: &Args) -> ExitCode {
    let config = match PreflightConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    let formatter = match get_formatter(args.format, args.color_enabled(), args.quiet) {
        Ok(formatter) => formatter,
        Err(e) => return fail(&e),
    };

    let report = run_preflight(&config);

    match formatter.format(&report) {
        Ok(output) => println!("{}", output),
        Err(e) => return fail(&e),
    }

    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn fail(e: &flutter_preflight::PreflightError) -> ExitCode {
    error!(error = %e, "preflight aborted");
    eprintln!("Error: {}", e);
    ExitCode::from(EXIT_RUNTIME_ERROR)
}
