use std::collections::BTreeMap;

use serde::Serialize;

use super::curve::net_rewards_per_year;
use super::{APR_DISPLAY_CAP, STAKE_CHECKPOINTS};
use crate::apr::AprError;
use crate::network::NetworkState;

/// APR realized at one total-stake checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetPoint {
    pub stake_level: f64,
    pub actual_apr: f64,
}

/// Full-network APR at each fixed total-stake checkpoint, keyed by a
/// display label like "12.5% APR". Checkpoints whose APR falls outside
/// (0, APR_DISPLAY_CAP) are dropped: neither an underwater network nor a
/// thousand-percent headline is worth reporting.
pub fn find_target_stakes(
    network: &NetworkState,
) -> Result<BTreeMap<String, TargetPoint>, AprError> {
    network.validate()?;
    let net_rewards = net_rewards_per_year(network);

    let mut targets = BTreeMap::new();
    for &stake_level in STAKE_CHECKPOINTS.iter() {
        let actual_apr = net_rewards / stake_level * 100.0;
        if actual_apr > 0.0 && actual_apr < APR_DISPLAY_CAP {
            targets.insert(
                format!("{actual_apr:.1}% APR"),
                TargetPoint {
                    stake_level,
                    actual_apr,
                },
            );
        }
    }
    Ok(targets)
}
