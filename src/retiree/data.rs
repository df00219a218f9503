//! Retiree input data for a single projection

use crate::error::InvalidInput;
use serde::{Deserialize, Serialize};

/// Parameters as entered by a user: the market return is a percentage.
///
/// This is the shape accepted by the CLI, the batch CSV, and the Lambda
/// request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// One-time payment received at retirement
    #[serde(default)]
    pub lump_sum: f64,

    /// Annual pension
    #[serde(default = "default_pension")]
    pub pension: f64,

    /// Age at the start of the simulation
    #[serde(default = "default_current_age")]
    pub current_age: u32,

    /// Age until which the simulation runs (exclusive)
    #[serde(default = "default_age_of_death")]
    pub age_of_death: u32,

    /// Other annual income subject to social security (also counts for income tax)
    #[serde(default = "default_other_income")]
    pub other_income_social: f64,

    /// Other annual income relevant only for income tax
    #[serde(default = "default_other_income")]
    pub other_income_tax: f64,

    /// Expected annual market return in percent (3.0 = 3%)
    #[serde(default = "default_market_return_percentage")]
    pub market_return_percentage: f64,
}

fn default_pension() -> f64 { 12_000.0 }
fn default_current_age() -> u32 { 65 }
fn default_age_of_death() -> u32 { 85 }
fn default_other_income() -> f64 { 70_000.0 }
fn default_market_return_percentage() -> f64 { 3.0 }

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            lump_sum: 0.0,
            pension: default_pension(),
            current_age: default_current_age(),
            age_of_death: default_age_of_death(),
            other_income_social: default_other_income(),
            other_income_tax: default_other_income(),
            market_return_percentage: default_market_return_percentage(),
        }
    }
}

impl SimulationParameters {
    /// Convert to projection input, turning the percentage into a fraction
    pub fn to_input(&self) -> SimulationInput {
        SimulationInput {
            lump_sum: self.lump_sum,
            pension: self.pension,
            current_age: self.current_age,
            age_of_death: self.age_of_death,
            other_income_social: self.other_income_social,
            other_income_tax: self.other_income_tax,
            market_return: self.market_return_percentage / 100.0,
        }
    }
}

impl From<&SimulationParameters> for SimulationInput {
    fn from(params: &SimulationParameters) -> Self {
        params.to_input()
    }
}

/// Validated-on-use input to the projection engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub lump_sum: f64,
    pub pension: f64,
    pub current_age: u32,
    pub age_of_death: u32,
    pub other_income_social: f64,
    pub other_income_tax: f64,
    /// Annual market return as a fraction (0.03 = 3%)
    pub market_return: f64,
}

impl SimulationInput {
    /// Number of simulated years
    pub fn num_years(&self) -> u32 {
        self.age_of_death.saturating_sub(self.current_age)
    }

    /// Check ages and amounts. Called by the engine before any computation.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let amounts = [
            ("lump_sum", self.lump_sum),
            ("pension", self.pension),
            ("other_income_social", self.other_income_social),
            ("other_income_tax", self.other_income_tax),
            ("market_return", self.market_return),
        ];

        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(InvalidInput::NotFinite { field });
            }
            if value < 0.0 {
                return Err(InvalidInput::NegativeAmount { field, value });
            }
        }

        if self.age_of_death <= self.current_age {
            return Err(InvalidInput::AgeOfDeathNotAfterCurrentAge {
                current_age: self.current_age,
                age_of_death: self.age_of_death,
            });
        }

        Ok(())
    }
}
