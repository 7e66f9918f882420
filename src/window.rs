//! Sliding substring windows over source text.
//!
//! The fuzzy strategy never scores a declared value against the whole OCR
//! blob; it scores it against short windows of the source sized near the
//! target. That bounds edit-distance cost and keeps scores meaningful: a
//! six-character volume compared to a 400-character label would drown in
//! unrelated text.
//!
//! Two variants are provided, one sliding over characters and one over
//! whitespace-split tokens. Neither normalizes its input; callers pass
//! already-canonical text.

/// Candidate window sizes around `target`: `target - slack ..= target + slack`,
/// skipping sizes that are zero or at least the full source length.
fn window_sizes(target: usize, full: usize, slack: usize) -> impl Iterator<Item = usize> {
    let lo = target.saturating_sub(slack);
    let hi = target.saturating_add(slack);
    (lo..=hi).filter(move |&size| size > 0 && size < full)
}

/// Emits every contiguous character substring of `source` whose length is
/// within `slack` of `target_len`.
///
/// Boundary windows (first and last position) appear exactly once per size.
/// Returns an empty vec when the source is no longer than the target allows.
pub fn char_windows(source: &str, target_len: usize, slack: usize) -> Vec<String> {
    let chars: Vec<char> = source.chars().collect();
    let mut windows = Vec::new();
    for size in window_sizes(target_len, chars.len(), slack) {
        for start in 0..=chars.len() - size {
            windows.push(chars[start..start + size].iter().collect());
        }
    }
    windows
}

/// Emits every contiguous run of whitespace-split tokens of `source` whose
/// token count is within `slack` of `target_tokens`, re-joined with single
/// spaces.
///
/// Same sliding-window rules as [`char_windows`], applied to tokens.
pub fn token_windows(source: &str, target_tokens: usize, slack: usize) -> Vec<String> {
    let tokens: Vec<&str> = source.split_whitespace().collect();
    let mut windows = Vec::new();
    for size in window_sizes(target_tokens, tokens.len(), slack) {
        for start in 0..=tokens.len() - size {
            windows.push(tokens[start..start + size].join(" "));
        }
    }
    windows
}
