//! Run projections for every scenario in a CSV file
//!
//! Usage: cargo run --bin run_batch -- scenarios.csv --output batch_summary.csv
//!
//! Input columns: name, lump_sum, pension, current_age, age_of_death,
//! other_income_social, other_income_tax, market_return_percentage

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use retirement_capital::{
    projection::{ProjectionConfig, DEFAULT_START_YEAR},
    retiree::load_scenarios,
    Assumptions, ScenarioRunner, SimulationInput,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch")]
struct Cli {
    /// CSV file with one parameter set per row
    scenarios: PathBuf,

    /// Where to write the per-scenario summary
    #[arg(long, default_value = "batch_summary.csv")]
    output: PathBuf,

    /// Directory holding parameters.csv with rate overrides
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Calendar year of the first simulated year
    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    start_year: i32,
}

/// One output line per scenario
#[derive(Debug, Serialize, Default)]
struct SummaryRow {
    name: String,
    years: u32,
    total_lump_sum_tax: f64,
    total_lump_sum_ss: f64,
    total_pension_tax: f64,
    total_pension_ss: f64,
    total_net_flow: f64,
    total_investment_tax: f64,
    final_capital: f64,
    error: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let scenarios = load_scenarios(&cli.scenarios)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("loading scenarios from {}", cli.scenarios.display()))?;
    info!("loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_2025(),
    };
    let runner = ScenarioRunner::with_assumptions(
        assumptions,
        ProjectionConfig {
            start_year: cli.start_year,
        },
    );

    let inputs: Vec<SimulationInput> = scenarios.iter().map(|s| s.parameters.to_input()).collect();
    let results = runner.run_batch(&inputs);
    info!("projections complete in {:?}", start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    let mut failures = 0;
    for (scenario, result) in scenarios.iter().zip(&results) {
        let row = match result {
            Ok(projection) => {
                let summary = projection.summary();
                SummaryRow {
                    name: scenario.name.clone(),
                    years: summary.total_years,
                    total_lump_sum_tax: summary.total_lump_sum_tax,
                    total_lump_sum_ss: summary.total_lump_sum_ss,
                    total_pension_tax: summary.total_pension_tax,
                    total_pension_ss: summary.total_pension_ss,
                    total_net_flow: summary.total_net_flow,
                    total_investment_tax: summary.total_investment_tax,
                    final_capital: summary.final_capital,
                    error: String::new(),
                }
            }
            Err(e) => {
                warn!("scenario {}: {}", scenario.name, e);
                failures += 1;
                SummaryRow {
                    name: scenario.name.clone(),
                    error: e.to_string(),
                    ..Default::default()
                }
            }
        };
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!(
        "{} scenarios ({} rejected) written to {} in {:?}",
        scenarios.len(),
        failures,
        cli.output.display(),
        start.elapsed()
    );

    Ok(())
}
