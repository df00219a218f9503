//! Retirement Capital CLI
//!
//! Command-line interface for running a single investable-capital projection

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use log::info;
use retirement_capital::{
    projection::{ProjectionConfig, ProjectionSummary, DEFAULT_START_YEAR},
    Assumptions, ProjectionEngine, SimulationParameters, YearRecord, DISCLAIMER,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Width of each column in the printed table
const COLUMN_WIDTH: usize = 24;

/// Simulate investable capital built from a lump sum and a yearly pension.
///
/// The social security and income tax incomes are not additive: they are
/// separate bases for their respective calculations.
#[derive(Debug, Parser)]
#[command(name = "retirement_capital", version)]
struct Cli {
    /// One-time payment received at retirement
    #[arg(long, default_value_t = 0.0)]
    lump_sum: f64,

    /// Annual pension received, with tax and social security applied
    #[arg(long, default_value_t = 12_000.0)]
    pension: f64,

    /// Age at the start of the simulation
    #[arg(long, default_value_t = 65)]
    current_age: u32,

    /// Age until which the simulation runs
    #[arg(long, default_value_t = 85)]
    age_of_death: u32,

    /// Other income used to calculate social security contributions
    #[arg(long, default_value_t = 70_000.0)]
    other_income_social: f64,

    /// Other income used only to compute income tax
    #[arg(long, default_value_t = 70_000.0)]
    other_income_tax: f64,

    /// Expected annual return on the invested capital, in percent
    #[arg(long, default_value_t = 3.0)]
    market_return_percentage: f64,

    /// Calendar year of the first simulated year
    #[arg(long, default_value_t = DEFAULT_START_YEAR)]
    start_year: i32,

    /// Directory holding parameters.csv with rate overrides
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Also write the yearly table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print a JSON report instead of the table
    #[arg(long)]
    json: bool,

    /// Skip the disclaimer
    #[arg(long)]
    no_disclaimer: bool,
}

impl Cli {
    fn parameters(&self) -> SimulationParameters {
        SimulationParameters {
            lump_sum: self.lump_sum,
            pension: self.pension,
            current_age: self.current_age,
            age_of_death: self.age_of_death,
            other_income_social: self.other_income_social,
            other_income_tax: self.other_income_tax,
            market_return_percentage: self.market_return_percentage,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: DateTime<Utc>,
    parameters: &'a SimulationParameters,
    summary: ProjectionSummary,
    records: &'a [YearRecord],
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_2025(),
    };
    let config = ProjectionConfig {
        start_year: cli.start_year,
    };

    let parameters = cli.parameters();
    let engine = ProjectionEngine::new(assumptions, config);
    let result = engine
        .project(&parameters.to_input())
        .context("invalid simulation parameters")?;
    info!("projected {} years", result.records.len());

    if let Some(path) = &cli.csv {
        write_csv(path, &result.records)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("wrote {}", path.display());
    }

    let summary = result.summary();

    if cli.json {
        let report = Report {
            generated_at: Utc::now(),
            parameters: &parameters,
            summary,
            records: &result.records,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !cli.no_disclaimer {
        println!("{}\n", DISCLAIMER);
    }

    print_table(&result.records);
    print_summary(&summary);

    if let Some(path) = &cli.csv {
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn print_table(records: &[YearRecord]) {
    let header_line: String = YearRecord::HEADERS
        .iter()
        .map(|h| format!("{:<width$}", h, width = COLUMN_WIDTH))
        .collect();
    println!("{}", header_line);
    println!("{}", "-".repeat(header_line.len()));

    for record in records {
        let row_line: String = record
            .display_values()
            .iter()
            .map(|v| format!("{:<width$}", v, width = COLUMN_WIDTH))
            .collect();
        println!("{}", row_line);
    }
}

fn print_summary(summary: &ProjectionSummary) {
    println!("\nSummary:");
    println!("  Years:                 {}", summary.total_years);
    println!("  Lump Sum Tax:          {:.2}", summary.total_lump_sum_tax);
    println!("  Lump Sum SS:           {:.2}", summary.total_lump_sum_ss);
    println!("  Pension Gross:         {:.2}", summary.total_pension_gross);
    println!("  Pension Tax:           {:.2}", summary.total_pension_tax);
    println!("  Pension SS:            {:.2}", summary.total_pension_ss);
    println!("  Net Flows:             {:.2}", summary.total_net_flow);
    println!("  Investment Tax:        {:.2}", summary.total_investment_tax);
    println!("  Net Investment Return: {:.2}", summary.total_net_investment_return);
    println!("  Final Capital:         {:.2}", summary.final_capital);
}

fn write_csv(path: &Path, records: &[YearRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
