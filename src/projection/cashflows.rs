//! Yearly output records for projections

use crate::retiree::SimulationInput;
use serde::{Deserialize, Serialize};

/// Round a currency amount to cents. Applied only when a record is emitted.
pub fn round_currency(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A single row of projection output for one year.
///
/// Monetary fields are rounded to cents; the engine keeps full precision
/// internally so rounding does not compound across years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    #[serde(rename = "Calendar Year")]
    pub calendar_year: i32,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Capital Start")]
    pub capital_start: f64,
    #[serde(rename = "Lump Sum Gross")]
    pub lump_sum_gross: f64,
    #[serde(rename = "Lump Sum Tax")]
    pub lump_sum_tax: f64,
    #[serde(rename = "Lump Sum SS")]
    pub lump_sum_ss: f64,
    #[serde(rename = "Pension Gross")]
    pub pension_gross: f64,
    #[serde(rename = "Pension Tax")]
    pub pension_tax: f64,
    #[serde(rename = "Pension SS")]
    pub pension_ss: f64,
    #[serde(rename = "Net Flow")]
    pub net_flow: f64,
    #[serde(rename = "Gross Investment Return")]
    pub gross_investment_return: f64,
    #[serde(rename = "Investment Tax")]
    pub investment_tax: f64,
    #[serde(rename = "Net Investment Return")]
    pub net_investment_return: f64,
    #[serde(rename = "Capital End")]
    pub capital_end: f64,
}

impl YearRecord {
    /// Display labels, in column order
    pub const HEADERS: [&'static str; 14] = [
        "Calendar Year",
        "Age",
        "Capital Start",
        "Lump Sum Gross",
        "Lump Sum Tax",
        "Lump Sum SS",
        "Pension Gross",
        "Pension Tax",
        "Pension SS",
        "Net Flow",
        "Gross Investment Return",
        "Investment Tax",
        "Net Investment Return",
        "Capital End",
    ];

    /// Cell values as text, in the same order as [`YearRecord::HEADERS`]
    pub fn display_values(&self) -> [String; 14] {
        [
            self.calendar_year.to_string(),
            self.age.to_string(),
            format!("{:.2}", self.capital_start),
            format!("{:.2}", self.lump_sum_gross),
            format!("{:.2}", self.lump_sum_tax),
            format!("{:.2}", self.lump_sum_ss),
            format!("{:.2}", self.pension_gross),
            format!("{:.2}", self.pension_tax),
            format!("{:.2}", self.pension_ss),
            format!("{:.2}", self.net_flow),
            format!("{:.2}", self.gross_investment_return),
            format!("{:.2}", self.investment_tax),
            format!("{:.2}", self.net_investment_return),
            format!("{:.2}", self.capital_end),
        ]
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Input the projection was run with
    pub input: SimulationInput,

    /// One record per simulated year, in order
    pub records: Vec<YearRecord>,
}

impl ProjectionResult {
    pub fn new(input: SimulationInput) -> Self {
        Self {
            input,
            records: Vec::with_capacity(input.num_years() as usize),
        }
    }

    /// Add a yearly record
    pub fn add_record(&mut self, record: YearRecord) {
        self.records.push(record);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total = |f: fn(&YearRecord) -> f64| round_currency(self.records.iter().map(f).sum());

        ProjectionSummary {
            total_years: self.records.len() as u32,
            total_lump_sum_tax: total(|r| r.lump_sum_tax),
            total_lump_sum_ss: total(|r| r.lump_sum_ss),
            total_pension_gross: total(|r| r.pension_gross),
            total_pension_tax: total(|r| r.pension_tax),
            total_pension_ss: total(|r| r.pension_ss),
            total_net_flow: total(|r| r.net_flow),
            total_investment_tax: total(|r| r.investment_tax),
            total_net_investment_return: total(|r| r.net_investment_return),
            final_capital: self.records.last().map(|r| r.capital_end).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub total_lump_sum_tax: f64,
    pub total_lump_sum_ss: f64,
    pub total_pension_gross: f64,
    pub total_pension_tax: f64,
    pub total_pension_ss: f64,
    pub total_net_flow: f64,
    pub total_investment_tax: f64,
    pub total_net_investment_return: f64,
    pub final_capital: f64,
}
