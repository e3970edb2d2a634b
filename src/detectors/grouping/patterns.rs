//! Filename pattern tests.
//!
//! Generated stems are plain identifiers with at most a trailing `*`, so they
//! are checked by equality or prefix. Anything else (configured defaults and
//! allowlist entries) goes through a glob compiled once per pattern text.

use std::collections::HashMap;

use globset::{GlobBuilder, GlobMatcher};
use parking_lot::RwLock;
use tracing::warn;

/// Matches filename patterns against base file names.
///
/// Compiled globs are cached by pattern text. A pattern that fails to compile
/// is cached as `None`, so it is reported once and never retried.
#[derive(Debug)]
pub struct PatternCache {
    extension: String,
    compiled: RwLock<HashMap<String, Option<GlobMatcher>>>,
}

impl PatternCache {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            compiled: RwLock::new(HashMap::new()),
        }
    }

    /// Cache with `patterns` compiled up front.
    pub fn with_patterns<I, S>(extension: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cache = Self::new(extension);
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if cache.literal_pattern(pattern).is_none() {
                cache.glob_matches(pattern, "");
            }
        }
        cache
    }

    /// Whether `pattern` accepts `file_name`.
    ///
    /// Either the pattern's stem equals the file's stem, or the pattern matches
    /// as a glob (`*` never crosses `/`). A pattern that fails to compile can
    /// still match by stem.
    pub fn matches(&self, pattern: &str, file_name: &str) -> bool {
        let extension = self.extension.as_str();
        let file_stem = file_name.strip_suffix(extension);
        let pattern_stem = pattern.strip_suffix(extension);

        if pattern_stem.unwrap_or(pattern) == file_stem.unwrap_or(file_name) {
            return true;
        }

        if let Some((body, wildcard)) = self.literal_pattern(pattern) {
            return wildcard && file_stem.is_some_and(|stem| stem.starts_with(body));
        }

        self.glob_matches(pattern, file_name)
    }

    /// Literal body of a `stem.ext` or `stem*.ext` pattern.
    fn literal_pattern<'p>(&self, pattern: &'p str) -> Option<(&'p str, bool)> {
        pattern
            .strip_suffix(self.extension.as_str())
            .and_then(literal_stem)
    }

    /// Number of glob patterns compiled or rejected so far.
    pub fn compiled_len(&self) -> usize {
        self.compiled.read().len()
    }

    fn glob_matches(&self, pattern: &str, file_name: &str) -> bool {
        if let Some(matcher) = self.compiled.read().get(pattern) {
            return matcher.as_ref().is_some_and(|m| m.is_match(file_name));
        }

        let mut compiled = self.compiled.write();
        compiled
            .entry(pattern.to_string())
            .or_insert_with(|| compile(pattern))
            .as_ref()
            .is_some_and(|m| m.is_match(file_name))
    }
}

/// Split a stem into its literal body and whether it ends in `*`.
///
/// `None` when the body holds glob syntax.
fn literal_stem(stem: &str) -> Option<(&str, bool)> {
    let (body, wildcard) = match stem.strip_suffix('*') {
        Some(body) => (body, true),
        None => (stem, false),
    };
    body.chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-'))
        .then_some((body, wildcard))
}

fn compile(pattern: &str) -> Option<GlobMatcher> {
    match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(err) => {
            warn!("Skipping invalid filename pattern '{}': {}", pattern, err);
            None
        }
    }
}
