//! Analysis session: admission filtering and once-per-file bookkeeping.
//!
//! A driver may hand the same physical file to several overlapping passes.
//! The session remembers every file it has claimed so symbols from a file are
//! only ever collected once, no matter how many threads or passes offer it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::config::GroupingConfig;
use crate::detectors::grouping::report::{Report, ViolationReporter};
use crate::detectors::grouping::resolver::Resolver;
use crate::detectors::grouping::symbol::{base_type_name, file_name_of, is_exported, Symbol, SymbolKind};

/// Prefix of error variables that belong in the errors file.
const ERROR_VAR_PREFIX: &str = "Err";

/// One source file and the symbols extracted from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: PathBuf,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

/// A package: its name and the files it is made of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub package: String,
    #[serde(default)]
    pub files: Vec<SourceFile>,
}

/// Owns the scanned-file set for one run of the grouping check.
#[derive(Debug)]
pub struct AnalysisSession {
    config: Arc<GroupingConfig>,
    reporter: ViolationReporter,
    scanned: Mutex<HashSet<PathBuf>>,
}

impl AnalysisSession {
    pub fn new(config: GroupingConfig) -> Self {
        let config = Arc::new(config);
        let reporter = ViolationReporter::new(Resolver::new(Arc::clone(&config)))
            .with_parallel(config.parallel);
        Self::with_reporter(config, reporter)
    }

    /// Session with a preconfigured reporter (custom tiers or noun policy).
    pub fn with_reporter(config: Arc<GroupingConfig>, reporter: ViolationReporter) -> Self {
        Self {
            config,
            reporter,
            scanned: Mutex::new(HashSet::new()),
        }
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Mark a file as scanned. Returns `true` only for the first claim.
    pub fn claim_file(&self, path: &Path) -> bool {
        let key = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        self.scanned.lock().insert(key)
    }

    /// Number of files claimed so far.
    pub fn scanned_count(&self) -> usize {
        self.scanned.lock().len()
    }

    /// Collect admissible symbols from files not yet claimed by this session.
    pub fn collect_symbols(&self, units: &[SourceUnit]) -> Vec<Symbol> {
        let mut symbols = Vec::new();

        for unit in units {
            if self.config.is_skipped_package(&unit.package) {
                debug!("Skipping package {}", unit.package);
                continue;
            }

            for file in &unit.files {
                if self.config.is_test_file(file_name_of(&file.path)) {
                    continue;
                }
                if !self.claim_file(&file.path) {
                    debug!("Already scanned {}", file.path.display());
                    continue;
                }

                symbols.extend(
                    file.symbols
                        .iter()
                        .filter(|symbol| admit(symbol))
                        .map(|symbol| self.prepare(&unit.package, &file.path, symbol)),
                );
            }
        }

        symbols
    }

    /// Collect, resolve and report in one step.
    pub fn analyze(&self, units: &[SourceUnit]) -> Report {
        let symbols = self.collect_symbols(units);
        info!(
            "Analyzing {} symbols from {} packages",
            symbols.len(),
            units.len()
        );
        self.reporter.report(symbols)
    }

    fn prepare(&self, package: &str, path: &Path, symbol: &Symbol) -> Symbol {
        let mut symbol = symbol.clone();

        if symbol.declaring_file.as_os_str().is_empty() {
            symbol.declaring_file = path.to_path_buf();
        }

        if symbol.default_file.is_empty() {
            symbol.default_file =
                if symbol.kind == SymbolKind::Var && symbol.name.starts_with(ERROR_VAR_PREFIX) {
                    self.config.errors_pattern()
                } else {
                    self.config.package_default(package)
                };
        }

        if symbol.kind == SymbolKind::Method && symbol.owner_type.is_empty() {
            warn!(
                "Method {} in {} has no receiver, matching by name only",
                symbol.name,
                path.display()
            );
        }

        symbol
    }
}

/// Exported, non-test symbols on exported, non-interface owners.
fn admit(symbol: &Symbol) -> bool {
    if !is_exported(&symbol.name) || symbol.is_test || symbol.receiver_is_interface {
        return false;
    }
    symbol.owner_type.is_empty() || is_exported(base_type_name(&symbol.owner_type))
}
