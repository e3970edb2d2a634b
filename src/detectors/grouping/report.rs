//! Aggregation of resolver outcomes into a [`Report`].

use std::path::PathBuf;

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use super::resolver::{Resolution, Resolver};
use super::symbol::Symbol;

/// A symbol declared outside every acceptable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub symbol: Symbol,
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub canonical_locations: Vec<String>,
    pub total_expected: usize,
}

impl Violation {
    /// Build a violation from an unmatched resolution.
    pub fn new(symbol: Symbol, resolution: Resolution) -> Self {
        let message = violation_message(&symbol, &resolution);
        Self {
            file: symbol.declaring_file.clone(),
            line: symbol.position.line,
            column: symbol.position.column,
            message,
            canonical_locations: resolution.canonical_locations,
            total_expected: resolution.total_expected,
            symbol,
        }
    }
}

/// `exported func "Owner.Name" expected in [a.go, b.go] (total: n expected filenames)`
pub fn violation_message(symbol: &Symbol, resolution: &Resolution) -> String {
    format!(
        "exported {} {:?} expected in [{}] (total: {} expected filenames)",
        symbol.kind.label(),
        symbol.qualified_name(),
        resolution.canonical_locations.join(", "),
        resolution.total_expected
    )
}

/// Result of one analysis pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    total: usize,
    passing: usize,
    violations: Vec<Violation>,
}

impl Report {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passing(&self) -> usize {
        self.passing
    }

    /// Violations in input order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Runs the resolver over a batch of symbols and collects violations.
#[derive(Debug, Clone)]
pub struct ViolationReporter {
    resolver: Resolver,
    parallel: bool,
}

impl ViolationReporter {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver,
            parallel: false,
        }
    }

    /// Resolve symbols on the rayon pool. Output order is unaffected.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn report(&self, symbols: Vec<Symbol>) -> Report {
        let total = symbols.len();

        let outcomes: Vec<(Symbol, Resolution)> = if self.parallel {
            symbols
                .into_par_iter()
                .map(|symbol| {
                    let resolution = self.resolver.resolve(&symbol);
                    (symbol, resolution)
                })
                .collect()
        } else {
            symbols
                .into_iter()
                .map(|symbol| {
                    let resolution = self.resolver.resolve(&symbol);
                    (symbol, resolution)
                })
                .collect()
        };

        let violations: Vec<Violation> = outcomes
            .into_iter()
            .filter(|(_, resolution)| !resolution.matched)
            .map(|(symbol, resolution)| Violation::new(symbol, resolution))
            .collect();

        let passing = total - violations.len();
        info!(
            "Grouping check: {} symbols, {} passing, {} violations",
            total,
            passing,
            violations.len()
        );

        Report {
            total,
            passing,
            violations,
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
