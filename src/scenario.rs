//! Scenario runner for financial sensitivity sweeps
//!
//! Runs the CSM projector once per named scenario against a shared
//! read-only portfolio and collects the curves in scenario order.

use crate::error::{CsmError, Result};
use crate::portfolio::Portfolio;
use crate::projection::{CsmCurve, CsmProjector, ProjectionConfig};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A fixed combination of discount rate and margin ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAssumption {
    /// Annual discount rate
    pub discount_rate: f64,

    /// Service margin ratio
    pub margin_ratio: f64,
}

impl ScenarioAssumption {
    pub fn new(discount_rate: f64, margin_ratio: f64) -> Self {
        Self {
            discount_rate,
            margin_ratio,
        }
    }
}

/// One scenario's projected curve, labeled for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub assumption: ScenarioAssumption,
    pub curve: CsmCurve,
}

/// Named-scenario sweep over a shared portfolio
///
/// Scenarios are kept in insertion order and the result vector preserves
/// that order, so the presentation layer sees a deterministic series
/// ordering regardless of how the sweep executes.
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::default_sensitivity();
/// let results = runner.run(&portfolio, 10)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    scenarios: Vec<(String, ScenarioAssumption)>,
}

impl ScenarioRunner {
    /// Create a runner with no scenarios
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner from an ordered list of named scenarios
    pub fn with_scenarios(scenarios: Vec<(String, ScenarioAssumption)>) -> Self {
        Self { scenarios }
    }

    /// The standard five-scenario sensitivity sweep
    pub fn default_sensitivity() -> Self {
        Self::with_scenarios(vec![
            ("Base".to_string(), ScenarioAssumption::new(0.03, 0.1)),
            ("Zero Discount Rate".to_string(), ScenarioAssumption::new(0.00, 0.1)),
            ("Very High Margin".to_string(), ScenarioAssumption::new(0.03, 0.2)),
            ("Negative Discount Rate".to_string(), ScenarioAssumption::new(-0.01, 0.1)),
            ("High Discount Rate".to_string(), ScenarioAssumption::new(0.05, 0.1)),
        ])
    }

    /// Append a named scenario, preserving insertion order
    pub fn add_scenario(&mut self, name: impl Into<String>, assumption: ScenarioAssumption) -> &mut Self {
        self.scenarios.push((name.into(), assumption));
        self
    }

    pub fn scenarios(&self) -> &[(String, ScenarioAssumption)] {
        &self.scenarios
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    fn run_one(
        portfolio: &Portfolio,
        n_years: usize,
        name: &str,
        assumption: ScenarioAssumption,
    ) -> Result<ScenarioResult> {
        debug!("projecting scenario '{}': {:?}", name, assumption);

        let projector = CsmProjector::new(ProjectionConfig {
            n_years,
            discount_rate: assumption.discount_rate,
            margin_ratio: assumption.margin_ratio,
        });

        let curve = projector
            .project(portfolio)
            .map_err(|e| CsmError::ScenarioFailed {
                scenario: name.to_string(),
                source: Box::new(e),
            })?;

        Ok(ScenarioResult {
            name: name.to_string(),
            assumption,
            curve,
        })
    }

    /// Run every scenario sequentially. Any scenario failure aborts the
    /// whole sweep; no partial result set is returned.
    pub fn run(&self, portfolio: &Portfolio, n_years: usize) -> Result<Vec<ScenarioResult>> {
        self.scenarios
            .iter()
            .map(|(name, assumption)| Self::run_one(portfolio, n_years, name, *assumption))
            .collect()
    }

    /// Run every scenario across worker threads. Scenarios are independent
    /// pure computations over the shared portfolio; output order matches
    /// insertion order regardless of execution order.
    pub fn run_parallel(&self, portfolio: &Portfolio, n_years: usize) -> Result<Vec<ScenarioResult>> {
        self.scenarios
            .par_iter()
            .map(|(name, assumption)| Self::run_one(portfolio, n_years, name, *assumption))
            .collect()
    }
}
