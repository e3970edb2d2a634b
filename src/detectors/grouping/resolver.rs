//! Multi-tier resolution of a symbol against its declaring file.
//!
//! Each [`FallbackTier`] produces its own `(name, owner)` candidates. Tiers run
//! in order and stop at the first candidate whose expectations match the file,
//! so broader tiers are only generated when the specific ones failed.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::core::config::GroupingConfig;

use super::decompose::{normalize, split_camel};
use super::expectations::ExpectationGenerator;
use super::patterns::PatternCache;
use super::symbol::Symbol;

/// One fallback level of the matching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackTier {
    /// Owner and name together: `ServiceDiscovery.Get`
    Full,
    /// Name with each camel-case part of the owner: `Service.Get`, `Discovery.Get`
    ReceiverParts,
    /// Each part of the name, with the owner and then alone
    NameParts,
    /// The name with the owner ignored
    BareName,
}

impl FallbackTier {
    /// Default evaluation order.
    pub const ORDER: [FallbackTier; 4] = [
        FallbackTier::Full,
        FallbackTier::ReceiverParts,
        FallbackTier::NameParts,
        FallbackTier::BareName,
    ];

    /// `(name, owner)` pairs this tier tries, in order.
    ///
    /// Only [`FallbackTier::Full`] applies when either side is empty.
    pub fn candidates(self, name: &str, owner: &str) -> Vec<(String, String)> {
        let both = !name.is_empty() && !owner.is_empty();
        match self {
            Self::Full => vec![(name.to_string(), owner.to_string())],
            Self::ReceiverParts if both => split_camel(owner)
                .into_iter()
                .map(|part| (name.to_string(), part))
                .collect(),
            Self::NameParts if both => split_camel(name)
                .into_iter()
                .flat_map(|part| [(part.clone(), owner.to_string()), (part, String::new())])
                .collect(),
            Self::BareName if both => vec![(name.to_string(), String::new())],
            _ => Vec::new(),
        }
    }
}

/// Outcome of resolving one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub matched: bool,
    /// Up to three hints: `owner_name`, `owner`, `name`
    pub canonical_locations: Vec<String>,
    /// Number of patterns in the full-tier expectation set
    pub total_expected: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_tier: Option<FallbackTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_pattern: Option<String>,
}

/// Resolves symbols against filenames through the fallback tiers.
#[derive(Debug, Clone)]
pub struct Resolver {
    generator: ExpectationGenerator,
    tiers: Vec<FallbackTier>,
    patterns: Arc<PatternCache>,
}

impl Resolver {
    pub fn new(config: Arc<GroupingConfig>) -> Self {
        Self::with_generator(ExpectationGenerator::new(config))
    }

    pub fn with_generator(generator: ExpectationGenerator) -> Self {
        let config = generator.config();
        let patterns =
            PatternCache::with_patterns(config.extension.as_str(), config.allowlist_patterns());
        Self {
            generator,
            tiers: FallbackTier::ORDER.to_vec(),
            patterns: Arc::new(patterns),
        }
    }

    /// Replace the tier order.
    pub fn with_tiers(mut self, tiers: impl Into<Vec<FallbackTier>>) -> Self {
        self.tiers = tiers.into();
        self
    }

    pub fn generator(&self) -> &ExpectationGenerator {
        &self.generator
    }

    /// Pattern matcher shared by clones of this resolver.
    pub fn patterns(&self) -> &PatternCache {
        &self.patterns
    }

    /// Resolve a symbol against the base name of its declaring file.
    pub fn resolve(&self, symbol: &Symbol) -> Resolution {
        let (name, owner) = symbol.subject();
        let resolution =
            self.resolve_subject(name, owner, &symbol.default_file, symbol.file_name());

        match (&resolution.matched_tier, &resolution.matched_pattern) {
            (Some(tier), Some(pattern)) => debug!(
                "{} {} grouped in {} via {:?} tier ({})",
                symbol.kind,
                symbol,
                symbol.file_name(),
                tier,
                pattern
            ),
            _ => debug!(
                "{} {} not grouped in {} ({} expected filenames)",
                symbol.kind,
                symbol,
                symbol.file_name(),
                resolution.total_expected
            ),
        }

        resolution
    }

    /// Resolve a `(name, owner)` subject against `file_name`.
    pub fn resolve_subject(
        &self,
        name: &str,
        owner: &str,
        default_file: &str,
        file_name: &str,
    ) -> Resolution {
        let canonical_locations = self.canonical_locations(name, owner);
        let total_expected = self.generator.expectations(name, owner, default_file).len();

        let hit = self.tiers.iter().find_map(|&tier| {
            tier.candidates(name, owner)
                .into_iter()
                .find_map(|(candidate_name, candidate_owner)| {
                    self.generator
                        .expectations(&candidate_name, &candidate_owner, default_file)
                        .iter()
                        .find(|pattern| self.patterns.matches(pattern, file_name))
                        .map(|pattern| (tier, pattern.to_string()))
                })
        });

        let (matched_tier, matched_pattern) = match hit {
            Some((tier, pattern)) => (Some(tier), Some(pattern)),
            None => (None, None),
        };

        Resolution {
            matched: matched_tier.is_some(),
            canonical_locations,
            total_expected,
            matched_tier,
            matched_pattern,
        }
    }

    /// Most specific acceptable filenames, for diagnostics only.
    pub fn canonical_locations(&self, name: &str, owner: &str) -> Vec<String> {
        let extension = &self.generator.config().extension;
        let mut locations = Vec::with_capacity(3);

        if !name.is_empty() && !owner.is_empty() {
            locations.push(format!("{}{extension}", normalize(&format!("{owner}{name}"))));
        }
        if !owner.is_empty() {
            locations.push(format!("{}{extension}", normalize(owner)));
        }
        if !name.is_empty() {
            locations.push(format!("{}{extension}", normalize(name)));
        }

        locations
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
