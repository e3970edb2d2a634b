//! Identifier decomposition: case normalization, camel-case splitting and the
//! singular/agent-noun heuristics used to derive filename stems.
//!
//! Everything here is a pure string transform. The natural-language heuristics
//! live behind [`NounPolicy`] so they can be swapped without touching the
//! expectation generator or the resolver.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

/// Constructor prefix trimmed so `NewServer` groups with `server.go`.
pub const CONSTRUCTOR_PREFIX: &str = "New";

static IRREGULAR_PLURALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("geese", "goose"),
        ("men", "man"),
        ("women", "woman"),
        ("teeth", "tooth"),
        ("feet", "foot"),
        ("mice", "mouse"),
        ("people", "person"),
    ]
    .into_iter()
    .collect()
});

fn is_delimiter(c: char) -> bool {
    matches!(c, '_' | '-' | ' ')
}

/// Whether a word boundary sits before `chars[idx]`.
///
/// A boundary precedes an uppercase letter that follows a lowercase one, and
/// the last capital of an acronym run when a lowercase letter follows it
/// (`HTTPClient` splits before `C`).
fn is_word_boundary(chars: &[char], idx: usize) -> bool {
    let c = chars[idx];
    if !c.is_ascii_uppercase() || idx == 0 {
        return false;
    }
    let prev = chars[idx - 1];
    let next = chars.get(idx + 1).copied();
    prev.is_ascii_lowercase()
        || (prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase()))
}

/// Convert an identifier to its lowercase-underscore stem.
///
/// `ServiceDiscovery` becomes `service_discovery`, `HTTPClient` becomes
/// `http_client`. Runs of `_`, `-` and spaces collapse into a single `_`.
/// Applying it twice gives the same result as applying it once.
pub fn normalize(id: &str) -> String {
    let chars: Vec<char> = id.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 3);

    for (idx, &c) in chars.iter().enumerate() {
        if is_delimiter(c) {
            let prev_is_delimiter = idx > 0 && is_delimiter(chars[idx - 1]);
            if !prev_is_delimiter {
                out.push('_');
            }
        } else if c.is_ascii_uppercase() {
            if is_word_boundary(&chars, idx) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Split an identifier into its words, keeping their original case.
///
/// `ServiceDiscovery` gives `["Service", "Discovery"]`.
pub fn split_camel(id: &str) -> Vec<String> {
    let chars: Vec<char> = id.trim().chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (idx, &c) in chars.iter().enumerate() {
        if is_delimiter(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if is_word_boundary(&chars, idx) && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Upper-case the first character of `name`.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Drop a leading `New` so constructors group with the type they build.
///
/// `NewScheduler` becomes `Scheduler`; `New` alone is left untouched.
pub fn strip_constructor_prefix(name: &str) -> String {
    match name.strip_prefix(CONSTRUCTOR_PREFIX) {
        Some(rest) if !rest.is_empty() => capitalize_first(rest),
        _ => name.to_string(),
    }
}

/// Natural-language heuristics applied to filename stems.
pub trait NounPolicy: Send + Sync + fmt::Debug {
    /// Singular form of a plural word (`assets` to `asset`).
    fn singularize(&self, word: &str) -> String;

    /// Base noun of an agent noun (`checker` to `check`).
    fn base_noun(&self, word: &str) -> String;
}

/// Default English suffix rules with a small irregular-plural table.
///
/// These are lossy: `status` singularizes to `statu` and `manager` reduces to
/// `manag`. Such false positives only ever widen the accepted file set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishHeuristics;

impl NounPolicy for EnglishHeuristics {
    fn singularize(&self, word: &str) -> String {
        singularize(word)
    }

    fn base_noun(&self, word: &str) -> String {
        base_noun(word)
    }
}

/// Singular form of `word` using the irregular table, then suffix rules.
///
/// A leading capital is preserved for irregular words (`Children` to `Child`);
/// suffix rules keep the input's characters as they are.
pub fn singularize(word: &str) -> String {
    // ASCII lowering keeps byte offsets aligned with `word`.
    let lower = word.to_ascii_lowercase();

    if let Some(singular) = IRREGULAR_PLURALS.get(lower.as_str()) {
        return if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            capitalize_first(singular)
        } else {
            (*singular).to_string()
        };
    }

    let len = word.len();
    if lower.ends_with("ies") && len > 3 {
        format!("{}y", &word[..len - 3])
    } else if lower.ends_with("es") {
        // classes, boxes, churches, brushes and heroes all lose the `es`
        word[..len - 2].to_string()
    } else if lower.ends_with('s') && !lower.ends_with("ss") {
        word[..len - 1].to_string()
    } else {
        word.to_string()
    }
}

/// Strip an `-er` agent suffix and undo a doubled final consonant.
///
/// `Checker` gives `Check`, `runner` gives `run`.
pub fn base_noun(word: &str) -> String {
    if word.len() <= 2 || !word.ends_with("er") {
        return word.to_string();
    }

    let mut base = word[..word.len() - 2].to_string();
    let mut tail = base.chars().rev();
    if let (Some(last), Some(before)) = (tail.next(), tail.next()) {
        if last == before {
            base.pop();
        }
    }
    base
}

#[cfg(test)]
#[path = "decompose_tests.rs"]
mod tests;
