//! Command execution for the symgroup binary.

use anyhow::Context;
use tracing::{info, warn};

use symgroup::core::config::GroupingConfig;
use symgroup::core::session::AnalysisSession;
use symgroup::io::manifest::SymbolManifest;
use symgroup::Report;

use super::args::{CheckArgs, ValidateConfigArgs};

/// Load configuration from a file or fall back to defaults
pub fn load_configuration(path: Option<&std::path::Path>) -> anyhow::Result<GroupingConfig> {
    match path {
        Some(path) => GroupingConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(GroupingConfig::default()),
    }
}

/// Run the grouping check over a manifest
pub fn check_command(args: CheckArgs) -> anyhow::Result<()> {
    let mut config = load_configuration(args.config.as_deref())?;
    if args.no_parallel {
        config.parallel = false;
    }

    let manifest = SymbolManifest::from_json_file(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;

    let session = AnalysisSession::new(config);
    let report = session.analyze(&manifest.units);
    log_summary(&report);

    let json = serde_json::to_string_pretty(&report)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{json}"),
    }

    if args.fail_on_violations && !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

/// Print default configuration in YAML format
pub fn print_default_config() -> anyhow::Result<()> {
    println!("# Default symgroup configuration");
    println!("# Usage: symgroup check --config symgroup.yml symbols.json");
    println!();

    let yaml_output = serde_yaml::to_string(&GroupingConfig::default())?;
    println!("{yaml_output}");

    Ok(())
}

/// Validate a configuration file
pub fn validate_config(args: ValidateConfigArgs) -> anyhow::Result<()> {
    let config = load_configuration(Some(args.config.as_path()))?;
    println!("Configuration file is valid: {}", args.config.display());
    println!("  extension: {}", config.extension);
    println!("  allowlist: {}", config.allowlist.join(", "));
    println!("  errors file: {}", config.errors_pattern());
    Ok(())
}

fn log_summary(report: &Report) {
    for violation in report.violations() {
        warn!(
            "{}:{}:{}: {}",
            violation.file.display(),
            violation.line,
            violation.column,
            violation.message
        );
    }
    info!(
        "{} of {} symbols grouped correctly ({} violations)",
        report.passing(),
        report.total(),
        report.violations().len()
    );
}
