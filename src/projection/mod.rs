//! Projection engine for year-by-year capital projections

mod state;
mod engine;
mod cashflows;

pub use state::ProjectionState;
pub use engine::{
    AnnualDeductions, LumpSumPhase, ProjectionConfig, ProjectionEngine, DEFAULT_START_YEAR,
    LUMP_SUM_CONTRIBUTION_YEARS,
};
pub use cashflows::{round_currency, ProjectionResult, ProjectionSummary, YearRecord};
