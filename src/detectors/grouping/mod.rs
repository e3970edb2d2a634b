//! Symbol-to-filename grouping checks.
//!
//! An exported symbol is expected to live in a file named after it, its owning
//! type, a prefix of either, or one of the package-wide fallbacks:
//! - `decompose` turns identifiers into filename stems
//! - `expectations` builds the ordered pattern list for one symbol
//! - `patterns` tests filenames against generated stems and cached globs
//! - `resolver` walks the fallback tiers against the declaring file
//! - `report` collects unmatched symbols into violations

pub mod decompose;
pub mod expectations;
pub mod patterns;
pub mod report;
pub mod resolver;
pub mod symbol;

pub use decompose::{normalize, split_camel, EnglishHeuristics, NounPolicy};
pub use expectations::{ExpectationGenerator, ExpectationSet};
pub use patterns::PatternCache;
pub use report::{Report, Violation, ViolationReporter};
pub use resolver::{FallbackTier, Resolution, Resolver};
pub use symbol::{Position, Symbol, SymbolKind};
