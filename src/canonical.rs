//! Canonical text layer for OCR comparison.
//!
//! OCR output and user-declared field values disagree wildly on casing,
//! punctuation, and spacing. This module folds both sides into a canonical
//! form so the normalized and fuzzy strategies compare like with like.
//!
//! ## What we do
//!
//! - Trim and lowercase
//! - Fold the label punctuation class `. , - / ( ) _ [ ]` to spaces
//! - Collapse whitespace runs (tabs and newlines included) to single spaces
//!
//! Punctuation folding happens before whitespace collapsing; doing it the
//! other way around leaves doubled spaces behind.
//!
//! ## Pure function guarantee
//!
//! No I/O, no locale dependence, never fails. Same text in, same text out,
//! and `normalize_text` is idempotent.

/// Punctuation characters folded to spaces during normalization.
///
/// These are the separators that OCR engines routinely garble on labels
/// (`Alc./Vol.`, `(90 Proof)`, `NET-CONTENTS`). Sentence-level punctuation
/// such as `:` and `%` is deliberately left alone so tokens like `45%`
/// survive normalization intact.
const FOLDED_PUNCTUATION: [char; 9] = ['.', ',', '-', '/', '(', ')', '_', '[', ']'];

/// Canonicalizes text for comparison: trims, lowercases, folds the label
/// punctuation class to spaces, and collapses whitespace runs to single
/// spaces.
///
/// Deterministic and total; empty input maps to empty output.
///
/// # Examples
///
/// ```rust
/// use label_verify::normalize_text;
///
/// assert_eq!(normalize_text("  Old  Tom Distillery  "), "old tom distillery");
/// assert_eq!(normalize_text("45% Alc./Vol. (90 Proof)"), "45% alc vol 90 proof");
/// ```
pub fn normalize_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() || FOLDED_PUNCTUATION.contains(&ch) {
            // Delimiters only materialize as a space once a non-delimiter
            // follows, which trims the edges for free.
            if !normalized.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if pending_space {
            normalized.push(' ');
            pending_space = false;
        }
        for lower in ch.to_lowercase() {
            normalized.push(lower);
        }
    }

    normalized
}
