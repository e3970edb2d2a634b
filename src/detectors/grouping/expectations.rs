//! Filename expectations for a single symbol.
//!
//! A `(name, owner)` pair is turned into a snake_case stem, the stem is cut
//! back one segment at a time, and each partial stem contributes its exact,
//! singular and base-noun forms. Only the most specific tier is exact; every
//! shorter tier matches as a prefix (`service_discovery*.go`).

use std::sync::Arc;

use serde::Serialize;

use crate::core::config::GroupingConfig;

use super::decompose::{
    capitalize_first, normalize, strip_constructor_prefix, EnglishHeuristics, NounPolicy,
};

/// Name and owner substring that mark a symbol as error-related.
const ERROR_NAME: &str = "Error";
const ERROR_OWNER_MARKER: &str = "Err";

/// Ordered filename patterns accepted for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExpectationSet {
    patterns: Vec<String>,
}

impl ExpectationSet {
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.position(pattern).is_some()
    }

    /// Index of the first occurrence of `pattern`.
    pub fn position(&self, pattern: &str) -> Option<usize> {
        self.patterns.iter().position(|p| p == pattern)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }

    pub fn into_vec(self) -> Vec<String> {
        self.patterns
    }
}

impl<'a> IntoIterator for &'a ExpectationSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// Generates [`ExpectationSet`]s under a configuration and noun policy.
#[derive(Debug, Clone)]
pub struct ExpectationGenerator {
    config: Arc<GroupingConfig>,
    policy: Arc<dyn NounPolicy>,
}

impl ExpectationGenerator {
    /// Generator using the default English heuristics.
    pub fn new(config: Arc<GroupingConfig>) -> Self {
        Self::with_policy(config, Arc::new(EnglishHeuristics))
    }

    /// Generator with a custom noun policy.
    pub fn with_policy(config: Arc<GroupingConfig>, policy: Arc<dyn NounPolicy>) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// All acceptable filename patterns for `(name, owner)`, most specific first.
    ///
    /// `default_file` is the package fallback; the configured extension is
    /// appended when it is missing. An empty default is skipped.
    pub fn expectations(&self, name: &str, owner: &str, default_file: &str) -> ExpectationSet {
        let name = capitalize_first(&strip_constructor_prefix(name));
        let stem = normalize(&format!("{owner}{name}"));

        let mut patterns = Vec::new();
        for (tier, partial) in partial_stems(&stem).iter().enumerate() {
            let suffix = if tier == 0 { "" } else { "*" };
            let mut push = |candidate: &str| {
                patterns.push(format!("{candidate}{suffix}{}", self.config.extension));
            };

            push(partial.as_str());

            let singular = self.policy.singularize(partial);
            if singular != *partial {
                push(singular.as_str());
            }

            let base = self.policy.base_noun(partial);
            if base != *partial {
                push(base.as_str());
            }
        }

        if name == ERROR_NAME || owner.contains(ERROR_OWNER_MARKER) {
            patterns.push(self.config.errors_pattern());
        }

        if !default_file.is_empty() {
            patterns.push(self.config.pattern_for(default_file));
        }

        patterns.extend(self.config.allowlist_patterns());

        ExpectationSet { patterns }
    }
}

/// Descending prefixes of a stem cut at underscores.
///
/// `service_discovery_get` gives `service_discovery_get`, `service_discovery`,
/// `service`. An empty stem gives nothing.
pub fn partial_stems(stem: &str) -> Vec<String> {
    if stem.is_empty() {
        return Vec::new();
    }

    let mut partials = Vec::new();
    let mut current = stem;
    while let Some(idx) = current.rfind('_') {
        partials.push(current.to_string());
        current = &current[..idx];
    }
    partials.push(current.to_string());
    // a leading delimiter would otherwise yield a bare `*` tier
    partials.retain(|p| !p.is_empty());
    partials
}

#[cfg(test)]
#[path = "expectations_tests.rs"]
mod tests;
