//! CLI module: argument parsing (clap) and report formatting.

pub mod args;
pub mod output;
