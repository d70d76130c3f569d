use serde::Serialize;

use super::model::{ReporterApr, ReporterRecord};
use crate::apr::{AprError, apr_by_stake};
use crate::network::NetworkState;

/// Weighted and median APR across the reporter population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AprAverages {
    pub weighted_avg: f64,
    pub median: f64,
}

/// Per-share APR for every reporter with positive power, sorted by power
/// descending (stable: ties keep registry order). Zero-power reporters
/// are excluded from the output entirely, not listed with apr = 0.
pub fn compute_reporter_aprs(
    reporters: &[ReporterRecord],
    network: &NetworkState,
) -> Result<Vec<ReporterApr>, AprError> {
    let mut out = Vec::new();
    for reporter in reporters {
        if reporter.power == 0 {
            continue;
        }
        let apr = apr_by_stake(reporter.power as f64, network)?;
        out.push(ReporterApr {
            address: reporter.address.clone(),
            moniker: reporter.display_name(),
            power: reporter.power,
            apr_percent: apr,
            commission_rate_percent: reporter.commission_rate * 100.0,
        });
    }
    out.sort_by(|a, b| b.power.cmp(&a.power));
    Ok(out)
}

/// Power-weighted mean plus plain (unweighted) median of the individual
/// APRs. An empty population or zero total power aggregates to (0, 0) so
/// report generation can continue without reporters.
pub fn aggregate_apr(reporter_aprs: &[ReporterApr]) -> AprAverages {
    let empty = AprAverages {
        weighted_avg: 0.0,
        median: 0.0,
    };
    if reporter_aprs.is_empty() {
        return empty;
    }

    let mut weighted_sum = 0.0;
    let mut total_power: u128 = 0;
    let mut aprs: Vec<f64> = Vec::with_capacity(reporter_aprs.len());
    for r in reporter_aprs {
        weighted_sum += r.apr_percent * r.power as f64;
        total_power += u128::from(r.power);
        aprs.push(r.apr_percent);
    }
    if total_power == 0 {
        return empty;
    }

    AprAverages {
        weighted_avg: weighted_sum / total_power as f64,
        median: median(&mut aprs),
    }
}

/// Median bonded power across the registry's positive-power entries; the
/// reference stake the break-even search scans around. 0.0 when there are
/// none.
pub fn median_power(reporters: &[ReporterRecord]) -> f64 {
    let mut powers: Vec<f64> = reporters
        .iter()
        .filter(|r| r.power > 0)
        .map(|r| r.power as f64)
        .collect();
    if powers.is_empty() {
        return 0.0;
    }
    median(&mut powers)
}

/// Standard median: middle value for odd counts, mean of the two middle
/// values for even counts. Sorts in place.
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = values.len();
    if n % 2 == 0 {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    } else {
        values[n / 2]
    }
}
