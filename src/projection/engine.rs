//! Core projection engine for yearly investable-capital projections

use super::cashflows::{round_currency, ProjectionResult, YearRecord};
use super::state::ProjectionState;
use crate::assumptions::Assumptions;
use crate::error::InvalidInput;
use crate::retiree::SimulationInput;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// First calendar year of every projection unless configured otherwise
pub const DEFAULT_START_YEAR: i32 = 2025;

/// Years over which the lump sum's social security liability is spread
pub const LUMP_SUM_CONTRIBUTION_YEARS: u32 = 10;

/// Configuration for a projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Calendar year of year index 0
    pub start_year: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
        }
    }
}

/// Cash-flow regime for a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LumpSumPhase {
    /// Year 0: lump sum paid out and taxed, first contribution charge
    Payout,
    /// Years 1-9: contribution charge continues
    ContributionSpread,
    /// Year 10 onward: pension only
    Settled,
}

impl LumpSumPhase {
    pub fn for_year(year_index: u32) -> Self {
        if year_index == 0 {
            LumpSumPhase::Payout
        } else if year_index < LUMP_SUM_CONTRIBUTION_YEARS {
            LumpSumPhase::ContributionSpread
        } else {
            LumpSumPhase::Settled
        }
    }
}

/// Tax and contribution figures that stay constant across all years
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualDeductions {
    pub pension_tax: f64,
    pub pension_ss: f64,
    pub net_pension: f64,
    pub lump_sum_tax: f64,
    pub net_lump_sum: f64,
    /// Charged identically in each of the first ten years
    pub lump_sum_ss_per_year: f64,
}

impl AnnualDeductions {
    /// Other incomes set the marginal rates but never enter the capital.
    ///
    /// The income tax base is both other incomes together; the social
    /// security base is the social income alone.
    pub fn compute(assumptions: &Assumptions, input: &SimulationInput) -> Self {
        let tax = &assumptions.income_tax;
        let ss = &assumptions.social_security;

        let base_regular = input.other_income_tax + input.other_income_social;
        let base_ss = input.other_income_social;

        let pension_tax = tax.incremental_tax(base_regular, input.pension);
        let pension_ss = ss.contribution(base_ss, input.pension);
        let net_pension = input.pension - pension_tax - pension_ss;

        let lump_sum_tax = tax.lump_sum_reduced_tax(input.lump_sum, base_regular + input.pension);
        let net_lump_sum = input.lump_sum - lump_sum_tax;

        // Computed once on top of the pension and not revisited in later years
        let lump_share = input.lump_sum / LUMP_SUM_CONTRIBUTION_YEARS as f64;
        let lump_sum_ss_per_year = ss.contribution(base_ss + input.pension, lump_share);

        Self {
            pension_tax,
            pension_ss,
            net_pension,
            lump_sum_tax,
            net_lump_sum,
            lump_sum_ss_per_year,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the year-by-year projection.
    ///
    /// Input is validated before anything is computed. Each record's
    /// `capital_end` is the next record's `capital_start`.
    pub fn project(&self, input: &SimulationInput) -> Result<ProjectionResult, InvalidInput> {
        input.validate()?;

        let deductions = AnnualDeductions::compute(&self.assumptions, input);
        debug!(
            "pension tax {:.2}, pension ss {:.2}, lump sum tax {:.2}, lump sum ss/year {:.2}",
            deductions.pension_tax,
            deductions.pension_ss,
            deductions.lump_sum_tax,
            deductions.lump_sum_ss_per_year,
        );

        let mut result = ProjectionResult::new(*input);
        let mut state = ProjectionState::new(input, self.config.start_year);

        for _year in 0..input.num_years() {
            let (record, capital_end) = self.calculate_year(input, &deductions, &state);
            trace!(
                "year {} (age {}): capital {:.2} -> {:.2}",
                record.calendar_year,
                record.age,
                state.capital,
                capital_end,
            );
            result.add_record(record);
            state.advance_year(capital_end);
        }

        Ok(result)
    }

    /// Calculate one year's cash flows and returns.
    /// Returns the rounded record and the unrounded end capital.
    fn calculate_year(
        &self,
        input: &SimulationInput,
        deductions: &AnnualDeductions,
        state: &ProjectionState,
    ) -> (YearRecord, f64) {
        let (lump_sum_gross, lump_sum_tax, lump_sum_ss, net_flow) =
            match LumpSumPhase::for_year(state.year_index) {
                LumpSumPhase::Payout => (
                    input.lump_sum,
                    deductions.lump_sum_tax,
                    deductions.lump_sum_ss_per_year,
                    deductions.net_lump_sum + deductions.net_pension
                        - deductions.lump_sum_ss_per_year,
                ),
                LumpSumPhase::ContributionSpread => (
                    0.0,
                    0.0,
                    deductions.lump_sum_ss_per_year,
                    deductions.net_pension - deductions.lump_sum_ss_per_year,
                ),
                LumpSumPhase::Settled => (0.0, 0.0, 0.0, deductions.net_pension),
            };

        let capital_start = state.capital;
        let new_basis = capital_start + net_flow;
        let gross_investment_return = new_basis * input.market_return;
        let investment_tax = gross_investment_return * self.assumptions.capital_gains_tax_rate;
        let net_investment_return = gross_investment_return - investment_tax;
        let capital_end = new_basis + net_investment_return;

        let record = YearRecord {
            calendar_year: state.calendar_year,
            age: state.age,
            capital_start: round_currency(capital_start),
            lump_sum_gross: round_currency(lump_sum_gross),
            lump_sum_tax: round_currency(lump_sum_tax),
            lump_sum_ss: round_currency(lump_sum_ss),
            pension_gross: round_currency(input.pension),
            pension_tax: round_currency(deductions.pension_tax),
            pension_ss: round_currency(deductions.pension_ss),
            net_flow: round_currency(net_flow),
            gross_investment_return: round_currency(gross_investment_return),
            investment_tax: round_currency(investment_tax),
            net_investment_return: round_currency(net_investment_return),
            capital_end: round_currency(capital_end),
        };

        (record, capital_end)
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_2025(), ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retiree::SimulationParameters;
    use approx::assert_abs_diff_eq;

    fn lump_sum_input() -> SimulationInput {
        SimulationInput {
            lump_sum: 100_000.0,
            pension: 12_000.0,
            current_age: 65,
            age_of_death: 80,
            other_income_social: 30_000.0,
            other_income_tax: 20_000.0,
            market_return: 0.05,
        }
    }

    #[test]
    fn test_phase_boundaries() {
        assert_eq!(LumpSumPhase::for_year(0), LumpSumPhase::Payout);
        assert_eq!(LumpSumPhase::for_year(1), LumpSumPhase::ContributionSpread);
        assert_eq!(LumpSumPhase::for_year(9), LumpSumPhase::ContributionSpread);
        assert_eq!(LumpSumPhase::for_year(10), LumpSumPhase::Settled);
    }

    #[test]
    fn test_deductions_above_contribution_ceiling() {
        let input = SimulationParameters::default().to_input();
        let d = AnnualDeductions::compute(&Assumptions::default_2025(), &input);

        // 140k base sits in the 42% bracket; 70k social income is above the ceiling
        assert_abs_diff_eq!(d.pension_tax, 5_040.0, epsilon = 1e-6);
        assert_eq!(d.pension_ss, 0.0);
        assert_abs_diff_eq!(d.net_pension, 6_960.0, epsilon = 1e-6);
        assert_eq!(d.lump_sum_tax, 0.0);
        assert_eq!(d.lump_sum_ss_per_year, 0.0);
    }

    #[test]
    fn test_deductions_with_lump_sum() {
        let d = AnnualDeductions::compute(&Assumptions::default_2025(), &lump_sum_input());

        assert_abs_diff_eq!(d.pension_ss, 2_232.0, epsilon = 1e-9);
        assert_abs_diff_eq!(d.lump_sum_tax, 41_794.4815485125, epsilon = 1e-6);
        // 10k share on top of 42k stays under the ceiling
        assert_abs_diff_eq!(d.lump_sum_ss_per_year, 1_860.0, epsilon = 1e-9);
    }

    #[test]
    fn test_projection_length_and_ages() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&lump_sum_input()).unwrap();

        assert_eq!(result.records.len(), 15);
        assert_eq!(result.records[0].calendar_year, 2025);
        assert_eq!(result.records[0].age, 65);
        assert_eq!(result.records[14].calendar_year, 2039);
        assert_eq!(result.records[14].age, 79);
    }

    #[test]
    fn test_lump_sum_regimes() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&lump_sum_input()).unwrap();

        let first = &result.records[0];
        assert_eq!(first.lump_sum_gross, 100_000.0);
        assert_eq!(first.lump_sum_tax, 41_794.48);
        assert_eq!(first.net_flow, 61_541.4);
        assert_eq!(first.capital_end, 63_806.74);

        for record in &result.records[1..10] {
            assert_eq!(record.lump_sum_gross, 0.0);
            assert_eq!(record.lump_sum_tax, 0.0);
            assert_eq!(record.lump_sum_ss, 1_860.0);
            assert_eq!(record.net_flow, 3_335.88);
        }
        for record in &result.records[10..] {
            assert_eq!(record.lump_sum_ss, 0.0);
            assert_eq!(record.net_flow, 5_195.88);
        }

        assert_eq!(result.records[10].capital_start, 124_467.92);
        assert_eq!(result.records[10].capital_end, 134_436.72);
    }

    #[test]
    fn test_capital_rolls_forward() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&lump_sum_input()).unwrap();

        assert_eq!(result.records[0].capital_start, 0.0);
        for pair in result.records.windows(2) {
            assert_eq!(pair[0].capital_end, pair[1].capital_start);
        }
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let engine = ProjectionEngine::default();
        let mut input = lump_sum_input();
        input.age_of_death = 60;

        assert!(matches!(
            engine.project(&input),
            Err(InvalidInput::AgeOfDeathNotAfterCurrentAge { .. })
        ));
    }

    #[test]
    fn test_start_year_is_configurable() {
        let engine = ProjectionEngine::new(
            Assumptions::default_2025(),
            ProjectionConfig { start_year: 2030 },
        );
        let result = engine.project(&lump_sum_input()).unwrap();
        assert_eq!(result.records[0].calendar_year, 2030);
    }

    #[test]
    fn test_capital_gains_rate_override() {
        let mut assumptions = Assumptions::default_2025();
        assumptions.capital_gains_tax_rate = 0.0;
        let engine = ProjectionEngine::new(assumptions, ProjectionConfig::default());

        let result = engine.project(&lump_sum_input()).unwrap();
        for record in &result.records {
            assert_eq!(record.investment_tax, 0.0);
            assert_eq!(record.net_investment_return, record.gross_investment_return);
        }
    }
}
