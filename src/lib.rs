//! Retirement Capital - yearly projection of investable capital
//!
//! Models the capital built from a one-time retirement lump sum and an annual
//! pension after:
//! - Progressive income tax, with one-fifth averaging for the lump sum
//! - Social security contributions up to a ceiling, with the lump sum's
//!   liability spread over ten years
//! - A flat capital gains tax on investment returns
//!
//! Other incomes set the marginal tax and contribution rates but are not
//! invested. Inflation is 0%.

pub mod assumptions;
pub mod error;
pub mod projection;
pub mod retiree;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use error::{AssumptionsError, InvalidInput};
pub use projection::{ProjectionConfig, ProjectionEngine, ProjectionResult, YearRecord};
pub use retiree::{SimulationInput, SimulationParameters};
pub use scenario::ScenarioRunner;

/// Notice shown before any results
pub const DISCLAIMER: &str = "\
IMPORTANT NOTICE: This simulation tool is a hobby project and is provided \"as is\" \
without any guarantees, warranties, or support, express or implied. The authors and \
contributors disclaim any liability for errors, omissions, or any decisions made based \
on the simulation results. Use of this tool is entirely at your own risk. This \
simulation is not intended to serve as financial, tax, or legal advice. Always consult \
a qualified professional before making any financial decisions.";

/// Project with the built-in 2025 assumptions
pub fn project(input: &SimulationInput) -> Result<ProjectionResult, InvalidInput> {
    ProjectionEngine::default().project(input)
}
