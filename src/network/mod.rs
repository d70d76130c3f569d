pub mod model;

pub use model::NetworkState;

/// Seconds in a (non-leap) year; annualization base for every APR figure.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Reporters submit a value roughly every other block, so fee costs
/// accrue at half the block rate.
pub const REPORTS_PER_BLOCK: f64 = 0.5;
