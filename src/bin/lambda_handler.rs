//! AWS Lambda handler for running CSM sensitivity sweeps
//!
//! Accepts sweep configuration via JSON and returns the per-scenario
//! average CSM curves.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use csm_system::portfolio::{generate_portfolio, GeneratorParams};
use csm_system::{ScenarioAssumption, ScenarioResult, ScenarioRunner};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input configuration for the sweep
#[derive(Debug, Deserialize)]
pub struct SweepRequest {
    /// RNG seed for portfolio generation (default: 42)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of projection years (default: 10)
    #[serde(default = "default_n_years")]
    pub n_years: usize,

    /// Portfolio generation parameters (contract count, premium/claims
    /// distributions); all fields default
    #[serde(default)]
    pub generator: GeneratorParams,

    /// Custom scenario list; if omitted, the standard five-scenario
    /// sensitivity sweep is used
    #[serde(default)]
    pub scenarios: Option<Vec<ScenarioSpec>>,
}

fn default_seed() -> u64 { 42 }
fn default_n_years() -> usize { 10 }

/// A named scenario in the request payload
#[derive(Debug, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub discount_rate: f64,
    pub margin_ratio: f64,
}

/// Output from the sweep
#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub contract_count: usize,
    pub n_years: usize,
    pub generated_at: String,
    pub results: Vec<ScenarioResult>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &SweepResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: SweepRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    // Build the portfolio
    let portfolio = match generate_portfolio(&request.generator, request.seed) {
        Ok(p) => p,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid generator parameters: {}", e)));
        }
    };

    // Build the runner from the requested scenarios
    let runner = match &request.scenarios {
        Some(specs) => ScenarioRunner::with_scenarios(
            specs
                .iter()
                .map(|s| {
                    (
                        s.name.clone(),
                        ScenarioAssumption::new(s.discount_rate, s.margin_ratio),
                    )
                })
                .collect(),
        ),
        None => ScenarioRunner::default_sensitivity(),
    };

    // Run the sweep; any scenario failure aborts the whole run
    let results = match runner.run_parallel(&portfolio, request.n_years) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(422, &format!("Sweep failed: {}", e)));
        }
    };

    let execution_time_ms = start.elapsed().as_millis() as u64;

    let response = SweepResponse {
        contract_count: portfolio.len(),
        n_years: request.n_years,
        generated_at: chrono::Utc::now().to_rfc3339(),
        results,
        execution_time_ms,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
