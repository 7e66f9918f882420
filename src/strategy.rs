//! The three comparison strategies behind the cascade.
//!
//! Each strategy takes a declared `target` and an OCR-derived `source` and
//! produces a complete [`FieldResult`]; strategies are total over non-empty
//! strings and never panic. The strategy set is closed and small, so it is a
//! plain enum iterated in a fixed compile-time order rather than a runtime
//! registry.
//!
//! - [`MatchStrategy::Exact`] — whitespace-bounded substring search, no case
//!   folding, no normalization.
//! - [`MatchStrategy::Normalized`] — same search after canonicalizing both
//!   sides.
//! - [`MatchStrategy::Fuzzy`] — edit-distance ratio against candidate windows
//!   of the source sized near the target's token count.

use serde::{Deserialize, Serialize};

use crate::canonical::normalize_text;
use crate::config::VerifyConfig;
use crate::types::FieldResult;
use crate::window::token_windows;

/// Diagnostic for the shared empty-input precondition: no strategy runs when
/// either side of the comparison is empty.
pub const EMPTY_INPUT_COMMENT: &str = "Target text is empty";

/// A single comparison strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Verbatim whitespace-bounded substring search.
    Exact,
    /// Whitespace-bounded substring search over canonicalized text.
    Normalized,
    /// Best-scoring candidate window against a similarity threshold.
    Fuzzy,
}

/// Strategies in cascade order, strictest first.
pub const CASCADE: [MatchStrategy; 3] = [
    MatchStrategy::Exact,
    MatchStrategy::Normalized,
    MatchStrategy::Fuzzy,
];

impl MatchStrategy {
    /// Compare `target` against `source` under this strategy.
    ///
    /// Empty input on either side short-circuits to a non-match with the
    /// [`EMPTY_INPUT_COMMENT`] diagnostic.
    pub fn check(self, target: &str, source: &str, cfg: &VerifyConfig) -> FieldResult {
        if target.is_empty() || source.is_empty() {
            return FieldResult::miss(target, EMPTY_INPUT_COMMENT);
        }
        match self {
            MatchStrategy::Exact => check_exact(target, source),
            MatchStrategy::Normalized => check_normalized(target, source),
            MatchStrategy::Fuzzy => check_fuzzy(target, source, cfg),
        }
    }
}

/// Whitespace-bounded substring search.
///
/// A boundary is the start/end of the source or a whitespace character, not a
/// word-character boundary. This keeps attached punctuation inside the match,
/// so a declared `45%` lines up with OCR text containing `45%` while a bare
/// `45` still refuses to match inside `450`.
fn contains_bounded(source: &str, target: &str) -> bool {
    for (idx, _) in source.match_indices(target) {
        let before_ok = source[..idx]
            .chars()
            .next_back()
            .map_or(true, char::is_whitespace);
        let after_ok = source[idx + target.len()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

fn check_exact(target: &str, source: &str) -> FieldResult {
    if contains_bounded(source, target) {
        FieldResult::hit(target, target, "Exact match")
    } else {
        FieldResult::miss(target, "No exact occurrence of the declared text")
    }
}

fn check_normalized(target: &str, source: &str) -> FieldResult {
    let target_norm = normalize_text(target);
    let source_norm = normalize_text(source);
    // Inputs made entirely of folded punctuation normalize away to nothing.
    if target_norm.is_empty() || source_norm.is_empty() {
        return FieldResult::miss(target, EMPTY_INPUT_COMMENT);
    }
    if contains_bounded(&source_norm, &target_norm) {
        FieldResult::hit(target, target_norm, "Normalized match")
    } else {
        FieldResult::miss(target, "No normalized occurrence of the declared text")
    }
}

fn check_fuzzy(target: &str, source: &str, cfg: &VerifyConfig) -> FieldResult {
    let target_norm = normalize_text(target);
    let source_norm = normalize_text(source);
    if target_norm.is_empty() || source_norm.is_empty() {
        return FieldResult::miss(target, EMPTY_INPUT_COMMENT);
    }

    let token_count = target_norm.split_whitespace().count();
    let candidates = token_windows(&source_norm, token_count, cfg.window_slack);

    // Strict `>` keeps the first candidate on ties, i.e. generation order.
    let mut best: Option<(f64, String)> = None;
    for candidate in candidates {
        let score = similarity_score(&target_norm, &candidate);
        if best.as_ref().map_or(true, |(top, _)| score > *top) {
            best = Some((score, candidate));
        }
    }

    match best {
        Some((score, candidate)) if score >= cfg.fuzzy_threshold => FieldResult::hit(
            target,
            candidate.clone(),
            format!("Fuzzy match: '{candidate}' ({score:.1}%)"),
        ),
        Some((score, candidate)) => FieldResult::miss(
            target,
            format!("No match. Closest text: '{candidate}' ({score:.1}%)"),
        ),
        // Source shorter than any usable window; nothing to score against.
        None => FieldResult::miss(target, "No match. No comparable text found"),
    }
}

/// Levenshtein-based similarity percentage in `[0, 100]`, rounded to one
/// decimal place before any threshold comparison.
fn similarity_score(target: &str, candidate: &str) -> f64 {
    let ratio = strsim::normalized_levenshtein(target, candidate) * 100.0;
    (ratio * 10.0).round() / 10.0
}
