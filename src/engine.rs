//! Cascade resolver, field verifiers, and the verification orchestrator.
//!
//! The [`Verifier`] owns a validated [`VerifyConfig`] and nothing else; every
//! call reads its inputs, allocates locals, and returns. It is safe to share
//! across threads without locking.

use std::collections::BTreeMap;

use tracing::debug;

use crate::canonical::normalize_text;
use crate::config::VerifyConfig;
use crate::strategy::{CASCADE, EMPTY_INPUT_COMMENT};
use crate::types::{FieldResult, LabelField, VerificationInput, VerifyError};

#[cfg(test)]
mod tests;

/// Title section of the mandated US alcohol-labeling warning (27 CFR 16.21).
pub const GOV_WARNING_TITLE: &str = "GOVERNMENT WARNING";

/// Pregnancy-risk section of the government warning.
pub const GOV_WARNING_PREGNANCY: &str = "According to the Surgeon General, \
women should not drink alcoholic beverages during pregnancy because of the \
risk of birth defects.";

/// Driving/health-impairment section of the government warning.
pub const GOV_WARNING_IMPAIRMENT: &str = "Consumption of alcoholic beverages \
impairs your ability to drive a car or operate machinery, and may cause \
health problems.";

/// Verification engine: decides, per declared field, whether the declared
/// text is present in OCR output.
#[derive(Debug, Clone)]
pub struct Verifier {
    cfg: VerifyConfig,
}

impl Verifier {
    /// Construct a verifier from an explicit config.
    pub fn new(cfg: VerifyConfig) -> Result<Self, VerifyError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Construct a verifier with the default tuning.
    pub fn with_defaults() -> Self {
        Self {
            cfg: VerifyConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &VerifyConfig {
        &self.cfg
    }

    /// Try each strategy from strictest to most permissive, returning the
    /// first success. If all three fail, the fuzzy result is returned
    /// verbatim since it carries the closest-candidate diagnostic.
    pub fn check_matches_cascade(&self, target: &str, source: &str) -> FieldResult {
        let mut last = None;
        for strategy in CASCADE {
            let result = strategy.check(target, source, &self.cfg);
            if result.matched {
                return result;
            }
            last = Some(result);
        }
        // CASCADE is non-empty, so the last failure (fuzzy) is always here.
        last.unwrap_or_else(|| FieldResult::miss(target, EMPTY_INPUT_COMMENT))
    }

    /// Check the declared brand name against the source text.
    pub fn verify_brand(&self, brand_name: &str, source: &str) -> FieldResult {
        self.check_matches_cascade(brand_name, source)
    }

    /// Check the declared product name or class/type designation.
    pub fn verify_product_name(&self, product_name: &str, source: &str) -> FieldResult {
        self.check_matches_cascade(product_name, source)
    }

    /// Check the declared container volume statement.
    pub fn verify_volume(&self, volume: &str, source: &str) -> FieldResult {
        self.check_matches_cascade(volume, source)
    }

    /// Check the declared ABV. The declared value must appear immediately
    /// followed by a percent sign; a bare number elsewhere on the label
    /// (volume, proof) must not count.
    pub fn verify_abv(&self, abv: &str, source: &str) -> FieldResult {
        let declared = abv.trim();
        if declared.is_empty() {
            // Checked before the suffix is appended so an empty ABV reports
            // the empty-input diagnostic instead of chasing a bare "%".
            return FieldResult::miss(abv, EMPTY_INPUT_COMMENT);
        }
        let mut result = self.check_matches_cascade(&format!("{declared}%"), source);
        result.expected = abv.to_string();
        result
    }

    /// Check the mandated government warning: all three sections must be
    /// independently locatable anywhere in the source text. OCR often
    /// recovers them on separate line fragments, so the sections are not
    /// positionally anchored to one another.
    pub fn verify_gov_warning(&self, source: &str) -> FieldResult {
        let sections = [
            GOV_WARNING_TITLE,
            GOV_WARNING_PREGNANCY,
            GOV_WARNING_IMPAIRMENT,
        ];
        let expected = sections.join("\n");

        let results: Vec<(&str, FieldResult)> = sections
            .iter()
            .map(|section| (*section, self.check_matches_cascade(section, source)))
            .collect();

        let missing: Vec<&str> = results
            .iter()
            .filter(|(_, result)| !result.matched)
            .map(|(section, _)| *section)
            .collect();

        if missing.is_empty() {
            let found = results
                .iter()
                .filter_map(|(_, result)| result.found.as_deref())
                .collect::<Vec<_>>()
                .join("\n");
            let comment = results
                .iter()
                .map(|(_, result)| result.comment.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            FieldResult::hit(expected, found, comment)
        } else {
            // Missing sections are reported in their original declared
            // wording, never normalized forms.
            FieldResult::miss(expected, format!("Sections not found:\n{}", missing.join("\n")))
        }
    }

    /// Run every field verifier against one OCR text and collate the results.
    ///
    /// The OCR text is normalized exactly once here; field verifiers only
    /// re-normalize the target side, which is harmless since normalization is
    /// idempotent. All five fields always execute and report independently;
    /// partial failure is the normal case, not an error.
    pub fn verify_all(
        &self,
        input: &VerificationInput,
        ocr_text: &str,
    ) -> BTreeMap<LabelField, FieldResult> {
        let source = normalize_text(ocr_text);

        let mut results = BTreeMap::new();
        results.insert(
            LabelField::BrandName,
            self.verify_brand(&input.brand_name, &source),
        );
        results.insert(
            LabelField::ProductName,
            self.verify_product_name(&input.product_name, &source),
        );
        results.insert(LabelField::Abv, self.verify_abv(&input.abv, &source));
        results.insert(
            LabelField::Volume,
            self.verify_volume(&input.volume, &source),
        );
        results.insert(LabelField::Warning, self.verify_gov_warning(&source));

        for (field, result) in &results {
            debug!(
                field = %field,
                matched = result.matched,
                comment = %result.comment,
                "field verification complete"
            );
        }

        results
    }
}

impl Default for Verifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}
