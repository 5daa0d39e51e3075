//! CSM projection engine and output curves

mod curve;
mod engine;

pub use curve::CsmCurve;
pub use engine::{CsmProjector, ProjectionConfig};
