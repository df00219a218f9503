//! Social security contributions on income up to the contribution ceiling

use serde::{Deserialize, Serialize};

/// Contribution rate and the income ceiling it applies up to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocialSecurityRules {
    /// Contribution rate as a fraction of income below the threshold
    pub rate: f64,

    /// Annual income ceiling for contributions
    pub threshold: f64,
}

impl SocialSecurityRules {
    pub fn german_2025() -> Self {
        Self {
            rate: 0.186,
            threshold: 66_150.0,
        }
    }

    /// Contribution owed on `increment` stacked on top of `base`
    pub fn contribution(&self, base: f64, increment: f64) -> f64 {
        social_security_contribution(base, increment, self.threshold, self.rate)
    }
}

impl Default for SocialSecurityRules {
    fn default() -> Self {
        Self::german_2025()
    }
}

/// Marginal contribution on `increment` added to `base`.
///
/// Only the part of total income below `threshold` is liable, so a base at or
/// above the threshold owes nothing and a straddling increment owes on the
/// portion below it.
pub fn social_security_contribution(base: f64, increment: f64, threshold: f64, rate: f64) -> f64 {
    ((base + increment).min(threshold) - base.min(threshold)) * rate
}
