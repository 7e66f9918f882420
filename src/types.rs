use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;

/// User-declared label attributes to verify against OCR output.
///
/// All fields are raw user-entered strings; callers normalize a logically
/// absent field to the empty string rather than threading options through the
/// engine. Empty fields are valid (failing) input, not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationInput {
    /// Brand name as it should appear on the label.
    pub brand_name: String,
    /// Product name or class/type designation.
    pub product_name: String,
    /// Alcohol by volume, digits only; the engine appends the `%` suffix.
    pub abv: String,
    /// Container volume statement, e.g. `750 ml`.
    pub volume: String,
}

/// Verdict for a single declared field.
///
/// `comment` is advisory prose for humans, never parsed by callers. It
/// deterministically names the strategy that succeeded, or on failure either
/// explains why the input was unusable or cites the closest candidate found.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldResult {
    /// Whether the declared text was located in the source.
    #[serde(rename = "match")]
    pub matched: bool,
    /// The original (non-normalized) declared text. For the warning check,
    /// the newline-joined set of expected sections.
    pub expected: String,
    /// The text actually located in the source, when matched.
    pub found: Option<String>,
    /// Human-readable rationale for the verdict.
    pub comment: String,
}

impl FieldResult {
    /// A positive verdict citing the located text and the winning strategy.
    pub(crate) fn hit(
        expected: impl Into<String>,
        found: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            matched: true,
            expected: expected.into(),
            found: Some(found.into()),
            comment: comment.into(),
        }
    }

    /// A negative verdict carrying the most useful diagnostic available.
    pub(crate) fn miss(expected: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            matched: false,
            expected: expected.into(),
            found: None,
            comment: comment.into(),
        }
    }
}

/// The closed set of verified label fields.
///
/// Declaration order is the reporting order; the orchestrator's result map is
/// keyed by this enum so all five entries are always present.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LabelField {
    BrandName,
    ProductName,
    Abv,
    Volume,
    Warning,
}

impl LabelField {
    /// All fields, in reporting order.
    pub const ALL: [LabelField; 5] = [
        LabelField::BrandName,
        LabelField::ProductName,
        LabelField::Abv,
        LabelField::Volume,
        LabelField::Warning,
    ];

    /// Stable snake_case name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelField::BrandName => "brand_name",
            LabelField::ProductName => "product_name",
            LabelField::Abv => "abv",
            LabelField::Volume => "volume",
            LabelField::Warning => "warning",
        }
    }
}

impl fmt::Display for LabelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the verification layer.
///
/// Note that a failed match is not an error; it is reported through
/// [`FieldResult`]. This covers genuinely invalid caller-side setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Invalid engine configuration.
    #[error("invalid verify config: {0}")]
    InvalidConfig(String),
}
