use serde::Serialize;

use super::{CURVE_MAX_STAKE, CURVE_MIN_STAKE, CURVE_SAMPLES};
use crate::apr::AprError;
use crate::network::{NetworkState, REPORTS_PER_BLOCK};

/// APR sampled over hypothetical total-network-stake levels: paired
/// arrays, stakes ascending, APR falling as the same yearly reward pool
/// spreads over more stake.
#[derive(Debug, Clone, Serialize)]
pub struct AprCurve {
    pub stakes: Vec<f64>,
    pub aprs: Vec<f64>,
}

impl AprCurve {
    /// APR at `stake` by linear interpolation between the bracketing
    /// samples. Queries outside the domain clamp to the boundary value;
    /// a query on a knot returns the stored value exactly.
    pub fn apr_at_stake(&self, stake: f64) -> f64 {
        let first = *self.stakes.first().expect("curve has samples");
        let last = *self.stakes.last().expect("curve has samples");
        if stake <= first {
            return self.aprs[0];
        }
        if stake >= last {
            return self.aprs[self.aprs.len() - 1];
        }

        let hi = self.stakes.partition_point(|&s| s < stake);
        if self.stakes[hi] == stake {
            return self.aprs[hi];
        }
        let lo = hi - 1;
        let (x0, x1) = (self.stakes[lo], self.stakes[hi]);
        let (y0, y1) = (self.aprs[lo], self.aprs[hi]);
        y0 + (y1 - y0) * (stake - x0) / (x1 - x0)
    }

    pub fn len(&self) -> usize {
        self.stakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }
}

/// Net protocol rewards paid out across a whole year: mint every block,
/// minus a report fee roughly every other block.
pub fn net_rewards_per_year(network: &NetworkState) -> f64 {
    let blocks_per_year = network.blocks_per_year();
    let reports_per_year = blocks_per_year * REPORTS_PER_BLOCK;
    network.avg_mint_per_block * blocks_per_year - network.avg_fee_per_block * reports_per_year
}

/// Full-network model: if the network's total stake were X, any validator
/// would earn the year's net rewards divided by X. This is the limit of
/// the per-share formula as one holder's stake approaches the whole
/// network's, which is why no proportion term appears; it is NOT
/// interchangeable with `apr::apr_by_stake`.
pub fn project_apr_curve(network: &NetworkState) -> Result<AprCurve, AprError> {
    network.validate()?;
    let net_rewards = net_rewards_per_year(network);

    let mut stakes = Vec::with_capacity(CURVE_SAMPLES);
    let mut aprs = Vec::with_capacity(CURVE_SAMPLES);
    for i in 0..CURVE_SAMPLES {
        let t = i as f64 / (CURVE_SAMPLES - 1) as f64;
        let stake = CURVE_MIN_STAKE + t * (CURVE_MAX_STAKE - CURVE_MIN_STAKE);
        stakes.push(stake);
        aprs.push(net_rewards / stake * 100.0);
    }

    Ok(AprCurve { stakes, aprs })
}
