//! AWS Lambda handler for single projections
//!
//! Accepts the simulation parameters as JSON (missing fields take the form
//! defaults) and returns the yearly rows with a summary. Invalid input is
//! reported in the `error` field with no rows.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use retirement_capital::{
    projection::{ProjectionConfig, ProjectionSummary, DEFAULT_START_YEAR},
    Assumptions, ProjectionEngine, SimulationParameters, YearRecord,
};
use serde::{Deserialize, Serialize};

/// Input for one projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub parameters: SimulationParameters,

    /// Calendar year of the first row (default: 2025)
    #[serde(default = "default_start_year")]
    pub start_year: i32,
}

fn default_start_year() -> i32 { DEFAULT_START_YEAR }

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ProjectionSummary>,
    pub records: Vec<YearRecord>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Lambda handler function
async fn handler(event: LambdaEvent<ProjectionRequest>) -> Result<ProjectionResponse, Error> {
    let start = std::time::Instant::now();
    let (request, _context) = event.into_parts();

    let engine = ProjectionEngine::new(
        Assumptions::default_2025(),
        ProjectionConfig {
            start_year: request.start_year,
        },
    );

    let response = match engine.project(&request.parameters.to_input()) {
        Ok(result) => {
            info!("projected {} years", result.records.len());
            ProjectionResponse {
                summary: Some(result.summary()),
                records: result.records,
                execution_time_ms: start.elapsed().as_millis() as u64,
                error: None,
            }
        }
        Err(e) => {
            warn!("rejected request: {}", e);
            ProjectionResponse {
                summary: None,
                records: Vec::new(),
                execution_time_ms: start.elapsed().as_millis() as u64,
                error: Some(e.to_string()),
            }
        }
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
