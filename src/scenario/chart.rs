use serde::Serialize;

use super::curve::{AprCurve, project_apr_curve};
use super::targets::find_target_stakes;
use super::INDIVIDUAL_CHART_SAMPLES;
use crate::apr::{AprError, BreakEven, apr_by_stake};
use crate::network::NetworkState;

/// A labelled point rendered on top of a curve.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub label: String,
    pub stake: f64,
    pub apr_percent: f64,
}

/// Curve plus markers, ready for a renderer or exporter downstream. This
/// module only assembles the data; drawing is a collaborator concern.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub curve: AprCurve,
    pub markers: Vec<Marker>,
}

/// Individual-stake chart: per-share APR sampled from 0.1% to 110% of the
/// largest reporter stake (falling back to twice the median when the
/// registry is empty), with median and break-even marked on the curve.
pub fn individual_apr_chart(
    network: &NetworkState,
    reporter_stakes: &[f64],
    median_stake: f64,
    break_even: Option<BreakEven>,
) -> Result<ChartData, AprError> {
    let max_reporter_stake = reporter_stakes
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let top = if reporter_stakes.is_empty() {
        median_stake * 2.0
    } else {
        max_reporter_stake
    };
    let max_stake = top * 1.1;
    let min_stake = max_stake * 0.001;

    let mut stakes = Vec::with_capacity(INDIVIDUAL_CHART_SAMPLES);
    let mut aprs = Vec::with_capacity(INDIVIDUAL_CHART_SAMPLES);
    for i in 0..INDIVIDUAL_CHART_SAMPLES {
        let t = i as f64 / (INDIVIDUAL_CHART_SAMPLES - 1) as f64;
        let stake = min_stake + t * (max_stake - min_stake);
        stakes.push(stake);
        aprs.push(apr_by_stake(stake, network)?);
    }

    let mut markers = Vec::new();
    if median_stake > 0.0 {
        markers.push(Marker {
            label: "Median stake".into(),
            stake: median_stake,
            apr_percent: apr_by_stake(median_stake, network)?,
        });
    }
    if let Some(be) = break_even {
        if be.stake > 0.0 && be.stake <= max_stake {
            markers.push(Marker {
                label: "Break-even".into(),
                stake: be.stake,
                apr_percent: apr_by_stake(be.stake, network)?,
            });
        }
    }

    Ok(ChartData {
        curve: AprCurve { stakes, aprs },
        markers,
    })
}

/// Total-stake chart: the full-network projection curve with the current
/// network stake and each reportable checkpoint marked.
pub fn total_stake_chart(network: &NetworkState) -> Result<ChartData, AprError> {
    let curve = project_apr_curve(network)?;

    let mut markers = vec![Marker {
        label: "Current stake".into(),
        stake: network.total_active_stake,
        apr_percent: curve.apr_at_stake(network.total_active_stake),
    }];
    for (label, target) in find_target_stakes(network)? {
        markers.push(Marker {
            label,
            stake: target.stake_level,
            apr_percent: target.actual_apr,
        });
    }

    Ok(ChartData { curve, markers })
}
