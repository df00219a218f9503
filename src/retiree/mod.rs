//! Retiree inputs: the parameters a user enters and their validated projection form

mod data;
mod loader;

pub use data::{SimulationInput, SimulationParameters};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedScenario};
