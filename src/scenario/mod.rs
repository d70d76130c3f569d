pub mod chart;
pub mod curve;
pub mod simulate;
pub mod targets;

pub use chart::{ChartData, Marker, individual_apr_chart, total_stake_chart};
pub use curve::{AprCurve, net_rewards_per_year, project_apr_curve};
pub use simulate::{StakeDistribution, simulate_validator_set, weighted_avg_apr_scenario};
pub use targets::{TargetPoint, find_target_stakes};

/// Projection domain for the total-stake curve. The lower bound is kept
/// away from zero so the 1/stake formula stays finite.
pub const CURVE_MIN_STAKE: f64 = 100.0;
pub const CURVE_MAX_STAKE: f64 = 2_000_000.0;

/// Samples across the projection domain.
pub const CURVE_SAMPLES: usize = 1000;

/// Samples across the individual-stake chart window.
pub const INDIVIDUAL_CHART_SAMPLES: usize = 100;

/// Total-stake checkpoints reported by `find_target_stakes`.
pub const STAKE_CHECKPOINTS: [f64; 8] = [
    50_000.0,
    100_000.0,
    200_000.0,
    500_000.0,
    1_000_000.0,
    2_000_000.0,
    5_000_000.0,
    10_000_000.0,
];

/// Checkpoints outside (0, APR_DISPLAY_CAP) percent are dropped as
/// degenerate rather than reported.
pub const APR_DISPLAY_CAP: f64 = 1000.0;

/// A simulated validator set never exceeds the chain's active-set cap.
pub const MAX_VALIDATORS: usize = 100;
