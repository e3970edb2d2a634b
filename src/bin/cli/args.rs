//! CLI argument structures for the symgroup binary.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check that exported symbols live in files named after them
#[derive(Parser)]
#[command(name = "symgroup")]
#[command(version = VERSION)]
#[command(about = "Check that exported symbols are grouped into matching filenames")]
#[command(long_about = "
Reads a symbol manifest produced by an extractor and reports every exported
symbol whose declaring file does not match its name or owning type.

Common Usage:

  # Check a manifest and print the JSON report
  symgroup check symbols.json

  # Fail the build when violations are found
  symgroup check --fail-on-violations symbols.json

  # Start from the default configuration
  symgroup print-default-config > symgroup.yml
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a symbol manifest against the grouping convention
    Check(CheckArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Validate a symgroup configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Symbol manifest (JSON) to check
    pub manifest: PathBuf,

    /// Configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Exit with code 1 if any violation is found
    #[arg(long)]
    pub fail_on_violations: bool,

    /// Resolve symbols on a single thread
    #[arg(long)]
    pub no_parallel: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Configuration file to validate
    pub config: PathBuf,
}
