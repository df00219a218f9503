//! Projection state tracking for a single run

use crate::retiree::SimulationInput;

/// Running state between simulated years
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Zero-based year index
    pub year_index: u32,

    /// Calendar year of the current index
    pub calendar_year: i32,

    /// Attained age
    pub age: u32,

    /// Investable capital at the start of the year, full precision
    pub capital: f64,
}

impl ProjectionState {
    /// Initialize state at projection start: no capital yet
    pub fn new(input: &SimulationInput, start_year: i32) -> Self {
        Self {
            year_index: 0,
            calendar_year: start_year,
            age: input.current_age,
            capital: 0.0,
        }
    }

    /// Carry the end-of-year capital forward and move to the next year
    pub fn advance_year(&mut self, capital_end: f64) {
        self.year_index += 1;
        self.calendar_year += 1;
        self.age += 1;
        self.capital = capital_end;
    }
}
