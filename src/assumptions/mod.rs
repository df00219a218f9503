//! Tax and contribution assumptions applied to every projected year

mod income_tax;
mod social_security;
pub mod loader;

pub use income_tax::{
    lump_sum_reduced_tax, progressive_income_tax, BracketFormula, IncomeTaxSchedule, TaxBracket,
};
pub use loader::LoadedAssumptions;
pub use social_security::{social_security_contribution, SocialSecurityRules};

use crate::error::AssumptionsError;
use log::warn;
use std::path::Path;

/// Flat capital gains tax: 25% plus 5.5% solidarity surcharge on the tax
pub const DEFAULT_CAPITAL_GAINS_TAX_RATE: f64 = 0.2638;

/// Container for all projection assumptions
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub income_tax: IncomeTaxSchedule,
    pub social_security: SocialSecurityRules,
    pub capital_gains_tax_rate: f64,
}

impl Assumptions {
    /// Hard-coded 2025 values, used regardless of simulation year
    pub fn default_2025() -> Self {
        Self {
            income_tax: IncomeTaxSchedule::german_2025(),
            social_security: SocialSecurityRules::german_2025(),
            capital_gains_tax_rate: DEFAULT_CAPITAL_GAINS_TAX_RATE,
        }
    }

    /// Load overrides from the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load overrides from a specific directory on top of the 2025 defaults
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionsError> {
        let loaded = LoadedAssumptions::load_from(path)?;
        Ok(Self::from_loaded(&loaded))
    }

    pub fn from_loaded(loaded: &LoadedAssumptions) -> Self {
        let mut assumptions = Self::default_2025();

        if let Some(rate) = loaded.get(loader::SOCIAL_SECURITY_RATE) {
            assumptions.social_security.rate = rate;
        }
        if let Some(threshold) = loaded.get(loader::SOCIAL_SECURITY_THRESHOLD) {
            assumptions.social_security.threshold = threshold;
        }
        if let Some(rate) = loaded.get(loader::CAPITAL_GAINS_TAX_RATE) {
            assumptions.capital_gains_tax_rate = rate;
        }

        if assumptions.social_security.rate > 1.0 {
            warn!(
                "social security rate {} is above 100%; expected a fraction",
                assumptions.social_security.rate
            );
        }
        if assumptions.capital_gains_tax_rate > 1.0 {
            warn!(
                "capital gains tax rate {} is above 100%; expected a fraction",
                assumptions.capital_gains_tax_rate
            );
        }

        assumptions
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_2025()
    }
}
