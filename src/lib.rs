//! # Label text verification engine
//!
//! Verifies that user-declared label attributes (brand name, product name,
//! alcohol-by-volume, container volume, and the fixed US Government Warning)
//! are actually present in text recovered from a label image via OCR.
//!
//! The heart of the crate is a cascade of increasingly permissive comparison
//! strategies: exact whitespace-bounded search, the same search over
//! canonicalized text, and finally a fuzzy edit-distance pass over candidate
//! windows of the source. The cascade short-circuits on the first success and
//! reports the closest near-miss when everything fails, so a human can see
//! *why* a field was not found.
//!
//! ## Core Types
//!
//! - [`Verifier`]: the engine; holds a validated [`VerifyConfig`] and nothing
//!   else, so it is freely shareable across threads.
//! - [`VerificationInput`]: the four declared field values, raw strings.
//! - [`FieldResult`]: per-field verdict plus human-readable rationale.
//! - [`LabelField`]: the closed, ordered set of five reported fields.
//! - [`MatchStrategy`] / [`CASCADE`]: the closed strategy set in cascade
//!   order.
//! - [`TextExtractor`] / [`OcrError`]: the OCR collaborator boundary.
//!
//! ## Example Usage
//!
//! ```rust
//! use label_verify::{VerificationInput, Verifier};
//!
//! let verifier = Verifier::with_defaults();
//! let input = VerificationInput {
//!     brand_name: "Old Tom Distillery".into(),
//!     product_name: "Kentucky Straight Bourbon Whiskey".into(),
//!     abv: "45".into(),
//!     volume: "750 ml".into(),
//! };
//!
//! let ocr_text = "OLD TOM DISTILLERY\nKentucky Straight Bourbon Whiskey\n\
//!                 45% Alc./Vol.\nNet Contents 750 mL";
//! let results = verifier.verify_all(&input, ocr_text);
//!
//! for (field, result) in &results {
//!     println!("{field}: match={} ({})", result.matched, result.comment);
//! }
//! ```
//!
//! ## Pure function guarantee
//!
//! Every verification run is stateless and depends only on its inputs: no
//! I/O, no clock calls, no ambient logging inside the strategies. Same input
//! and config, same results, on any machine. Failures are reported through
//! [`FieldResult`], never as panics.

pub mod canonical;
pub mod config;
pub mod engine;
pub mod ocr;
pub mod strategy;
pub mod types;
pub mod window;

pub use crate::canonical::normalize_text;
pub use crate::config::VerifyConfig;
pub use crate::engine::{
    Verifier, GOV_WARNING_IMPAIRMENT, GOV_WARNING_PREGNANCY, GOV_WARNING_TITLE,
};
pub use crate::ocr::{CachingExtractor, OcrError, TextExtractor};
pub use crate::strategy::{MatchStrategy, CASCADE, EMPTY_INPUT_COMMENT};
pub use crate::types::{FieldResult, LabelField, VerificationInput, VerifyError};
pub use crate::window::{char_windows, token_windows};
