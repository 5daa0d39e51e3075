//! Error taxonomy for the projection core
//!
//! All core errors surface to the caller; the projector never substitutes
//! defaults or returns a partially-correct curve.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsmError {
    /// Preconditions violated: zero projection years, empty portfolio, or
    /// invalid generator parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 1 + discount_rate == 0: discount factors past year 0 are undefined
    /// and would flow into the portfolio average as infinities
    #[error("degenerate discount rate {0}: 1 + rate is zero")]
    DegenerateDiscount(f64),

    /// A scenario in a sweep failed; the whole sweep aborts so a partial
    /// sensitivity comparison is never presented
    #[error("scenario '{scenario}' failed: {source}")]
    ScenarioFailed {
        scenario: String,
        #[source]
        source: Box<CsmError>,
    },
}

pub type Result<T> = std::result::Result<T, CsmError>;
