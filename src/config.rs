//! Engine configuration.
//!
//! [`VerifyConfig`] is cheap to clone and serde-friendly so it can live in
//! application config files or be embedded in higher-level request types.
//! Defaults reproduce the behavior the compliance checks were tuned against;
//! change them only with a corpus run in hand.

use serde::{Deserialize, Serialize};

use crate::types::VerifyError;

/// Tuning knobs for the verification engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyConfig {
    /// Minimum fuzzy similarity score, in `[0, 100]`, for a candidate window
    /// to count as a match. Scores are rounded to one decimal place before
    /// comparison.
    #[serde(default = "VerifyConfig::default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    /// How far window sizes may deviate from the target length when
    /// generating fuzzy candidates. Slack of 1 yields sizes
    /// `{n-1, n, n+1}`.
    #[serde(default = "VerifyConfig::default_window_slack")]
    pub window_slack: usize,
}

impl VerifyConfig {
    pub(crate) fn default_fuzzy_threshold() -> f64 {
        92.0
    }

    pub(crate) fn default_window_slack() -> usize {
        1
    }

    /// Validate the configuration before constructing an engine.
    pub fn validate(&self) -> Result<(), VerifyError> {
        if !self.fuzzy_threshold.is_finite()
            || !(0.0..=100.0).contains(&self.fuzzy_threshold)
        {
            return Err(VerifyError::InvalidConfig(
                "fuzzy_threshold must be within [0, 100]".into(),
            ));
        }
        if self.window_slack == 0 {
            return Err(VerifyError::InvalidConfig(
                "window_slack must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: Self::default_fuzzy_threshold(),
            window_slack: Self::default_window_slack(),
        }
    }
}
