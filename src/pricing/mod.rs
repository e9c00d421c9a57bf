//! Delta lookup
//!
//! - nearest: nearest-strike selection over a chain side
//! - estimator: Delta estimate and the full lookup workflow

pub mod nearest;
pub mod estimator;

pub use nearest::{nearest_index, nearest_quote};
pub use estimator::{time_to_expiry, DeltaEstimate, DeltaEstimator, DeltaReport, DeltaRequest};
