//! Scenario runner for batch projections
//!
//! Holds assumptions once, then runs many projections with different inputs
//! or market returns without re-reading assumption files.

use crate::assumptions::Assumptions;
use crate::error::{AssumptionsError, InvalidInput};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use crate::retiree::SimulationInput;
use rayon::prelude::*;
use std::path::Path;

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Compare several market returns for one retiree
/// let results = runner.run_market_returns(&input, &[0.02, 0.03, 0.05]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the built-in 2025 assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_2025(), ProjectionConfig::default())
    }

    /// Create runner by loading assumption overrides from a directory
    pub fn from_csv_path(path: &Path, config: ProjectionConfig) -> Result<Self, AssumptionsError> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?, config))
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions, config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &SimulationInput) -> Result<ProjectionResult, InvalidInput> {
        self.engine.project(input)
    }

    /// Run projections for many inputs in parallel, results in input order
    pub fn run_batch(&self, inputs: &[SimulationInput]) -> Vec<Result<ProjectionResult, InvalidInput>> {
        inputs.par_iter().map(|input| self.engine.project(input)).collect()
    }

    /// Run one input under several market returns (fractions)
    pub fn run_market_returns(
        &self,
        input: &SimulationInput,
        market_returns: &[f64],
    ) -> Vec<Result<ProjectionResult, InvalidInput>> {
        market_returns
            .par_iter()
            .map(|&market_return| {
                let scenario = SimulationInput {
                    market_return,
                    ..*input
                };
                self.engine.project(&scenario)
            })
            .collect()
    }

    /// Get reference to the assumptions in use
    pub fn assumptions(&self) -> &Assumptions {
        self.engine.assumptions()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
