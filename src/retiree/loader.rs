//! Load batches of simulation parameters from CSV
//!
//! Expected columns: `name` plus the fields of [`SimulationParameters`].

use super::SimulationParameters;
use csv::Reader;
use serde::Deserialize;
use std::error::Error;
use std::path::Path;

/// One labelled parameter set
#[derive(Debug, Clone, PartialEq)]
pub struct NamedScenario {
    pub name: String,
    pub parameters: SimulationParameters,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    lump_sum: f64,
    pension: f64,
    current_age: u32,
    age_of_death: u32,
    other_income_social: f64,
    other_income_tax: f64,
    market_return_percentage: f64,
}

impl CsvRow {
    fn into_scenario(self) -> NamedScenario {
        NamedScenario {
            name: self.name,
            parameters: SimulationParameters {
                lump_sum: self.lump_sum,
                pension: self.pension,
                current_age: self.current_age,
                age_of_death: self.age_of_death,
                other_income_social: self.other_income_social,
                other_income_tax: self.other_income_tax,
                market_return_percentage: self.market_return_percentage,
            },
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load scenarios from any reader (e.g., string buffer, network stream)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<NamedScenario>, Box<dyn Error>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<NamedScenario>, Box<dyn Error>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    Ok(scenarios)
}
