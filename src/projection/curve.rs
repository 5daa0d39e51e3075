//! Projection output structures

use serde::{Deserialize, Serialize};

/// Portfolio-average discounted service margin by projection year.
/// Index `t` is the year offset from 0; produced once per scenario and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsmCurve {
    pub values: Vec<f64>,
}

impl CsmCurve {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of projected years
    pub fn n_years(&self) -> usize {
        self.values.len()
    }

    /// Average CSM at year offset `t`
    pub fn year(&self, t: usize) -> Option<f64> {
        self.values.get(t).copied()
    }

    /// Average CSM at the final projected year
    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}
