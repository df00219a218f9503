use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use retirement_capital::{
    assumptions::DEFAULT_CAPITAL_GAINS_TAX_RATE, project, InvalidInput, SimulationInput,
    SimulationParameters,
};

fn form_defaults() -> SimulationInput {
    SimulationParameters::default().to_input()
}

#[test]
fn pension_only_scenario() {
    let input = SimulationInput {
        lump_sum: 0.0,
        pension: 12_000.0,
        current_age: 65,
        age_of_death: 85,
        other_income_social: 70_000.0,
        other_income_tax: 70_000.0,
        market_return: 0.03,
    };
    let result = project(&input).expect("valid input");

    assert_eq!(result.records.len(), 20);

    let first = &result.records[0];
    assert_eq!(first.calendar_year, 2025);
    assert_eq!(first.capital_start, 0.0);
    assert_eq!(first.lump_sum_gross, 0.0);
    assert_eq!(first.pension_gross, 12_000.0);
    assert_eq!(first.pension_tax, 5_040.0);
    assert_eq!(first.pension_ss, 0.0);
    assert_eq!(first.net_flow, 6_960.0);
    assert_eq!(first.gross_investment_return, 208.8);
    assert_eq!(first.investment_tax, 55.08);
    assert_eq!(first.net_investment_return, 153.72);
    // Net pension grown by one year's after-tax return
    assert_abs_diff_eq!(
        first.capital_end,
        6_960.0 * (1.0 + 0.03 * (1.0 - DEFAULT_CAPITAL_GAINS_TAX_RATE)),
        epsilon = 0.005
    );

    let last = &result.records[19];
    assert_eq!(last.age, 84);
    assert_eq!(last.calendar_year, 2044);
    assert_eq!(last.capital_start, 165_707.31);
    assert_eq!(last.capital_end, 176_480.84);

    let summary = result.summary();
    assert_eq!(summary.total_years, 20);
    assert_eq!(summary.final_capital, 176_480.84);
    assert_eq!(summary.total_pension_tax, 100_800.0);
}

#[test]
fn nothing_in_means_nothing_grows() {
    let input = SimulationInput {
        lump_sum: 0.0,
        pension: 0.0,
        market_return: 0.07,
        ..form_defaults()
    };
    let result = project(&input).unwrap();

    for record in &result.records {
        assert_eq!(record.net_flow, 0.0);
        assert_eq!(record.capital_start, 0.0);
        assert_eq!(record.capital_end, 0.0);
    }
}

#[test]
fn lump_sum_tax_is_paid_once_and_ss_over_ten_years() {
    let input = SimulationInput {
        lump_sum: 100_000.0,
        pension: 12_000.0,
        current_age: 60,
        age_of_death: 90,
        other_income_social: 30_000.0,
        other_income_tax: 20_000.0,
        market_return: 0.05,
    };
    let result = project(&input).unwrap();
    assert_eq!(result.records.len(), 30);

    for (year_index, record) in result.records.iter().enumerate() {
        if year_index == 0 {
            assert!(record.lump_sum_gross > 0.0);
            assert!(record.lump_sum_tax > 0.0);
        } else {
            assert_eq!(record.lump_sum_gross, 0.0);
            assert_eq!(record.lump_sum_tax, 0.0);
        }

        if year_index < 10 {
            assert_eq!(record.lump_sum_ss, 1_860.0);
        } else {
            assert_eq!(record.lump_sum_ss, 0.0);
        }
    }

    let summary = result.summary();
    assert_eq!(summary.total_lump_sum_ss, 18_600.0);
    assert_eq!(summary.total_lump_sum_tax, 41_794.48);
}

#[test]
fn short_horizon_stops_before_spread_ends() {
    let input = SimulationInput {
        lump_sum: 50_000.0,
        current_age: 70,
        age_of_death: 73,
        other_income_social: 10_000.0,
        other_income_tax: 0.0,
        ..form_defaults()
    };
    let result = project(&input).unwrap();

    assert_eq!(result.records.len(), 3);
    assert!(result.records.iter().all(|r| r.lump_sum_ss > 0.0));
}

#[test]
fn invalid_input_is_rejected_before_projection() {
    let input = SimulationInput {
        lump_sum: -5.0,
        ..form_defaults()
    };
    assert!(matches!(
        project(&input),
        Err(InvalidInput::NegativeAmount { field: "lump_sum", .. })
    ));

    let input = SimulationInput {
        current_age: 85,
        age_of_death: 85,
        ..form_defaults()
    };
    assert!(matches!(
        project(&input),
        Err(InvalidInput::AgeOfDeathNotAfterCurrentAge { .. })
    ));
}

#[test]
fn very_large_incomes_stay_finite() {
    let input = SimulationInput {
        lump_sum: 50_000_000.0,
        pension: 2_000_000.0,
        other_income_tax: 10_000_000.0,
        ..form_defaults()
    };
    let result = project(&input).unwrap();
    assert!(result.records.iter().all(|r| r.capital_end.is_finite()));
    // Top bracket: 45% marginal on the pension
    assert_abs_diff_eq!(result.records[0].pension_tax, 900_000.0, epsilon = 0.01);
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(32))]

    #[test]
    fn capital_end_feeds_next_capital_start(
        lump_sum in 0.0f64..500_000.0,
        pension in 0.0f64..60_000.0,
        current_age in 50u32..80,
        years in 1u32..40,
        other_income_social in 0.0f64..120_000.0,
        other_income_tax in 0.0f64..120_000.0,
        market_return in 0.0f64..0.1,
    ) {
        let input = SimulationInput {
            lump_sum,
            pension,
            current_age,
            age_of_death: current_age + years,
            other_income_social,
            other_income_tax,
            market_return,
        };
        let result = project(&input).unwrap();

        prop_assert_eq!(result.records.len() as u32, years);
        prop_assert_eq!(result.records[0].capital_start, 0.0);
        for pair in result.records.windows(2) {
            prop_assert_eq!(pair[0].capital_end, pair[1].capital_start);
        }
        for record in &result.records {
            let expected_tax = record.gross_investment_return * DEFAULT_CAPITAL_GAINS_TAX_RATE;
            // Both sides rounded independently from the same unrounded return
            prop_assert!((record.investment_tax - expected_tax).abs() <= 0.01);
        }
    }
}
