use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use super::MAX_VALIDATORS;
use crate::apr::{AprError, apr_by_stake};
use crate::network::NetworkState;

/// How simulated stake is split across the hypothetical validator set.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StakeDistribution {
    /// Every validator bonds the same amount.
    Uniform,
    /// Seeded-random weights, normalized so the set still sums to the
    /// requested total.
    Random,
}

/// Split `total_stake` across `num_validators` validators (capped at
/// MAX_VALIDATORS). The RNG seed is an explicit argument so a given
/// (seed, distribution) pair always produces the same set; there is no
/// process-wide RNG state.
pub fn simulate_validator_set(
    total_stake: f64,
    num_validators: usize,
    distribution: StakeDistribution,
    seed: u64,
) -> Vec<f64> {
    let n = num_validators.min(MAX_VALIDATORS);
    if n == 0 {
        return Vec::new();
    }

    match distribution {
        StakeDistribution::Uniform => vec![total_stake / n as f64; n],
        StakeDistribution::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            // Floor the weights away from zero so no validator ends up dust
            let weights: Vec<f64> = (0..n).map(|_| rng.gen_range(0.05..1.0)).collect();
            let sum: f64 = weights.iter().sum();
            weights.into_iter().map(|w| total_stake * w / sum).collect()
        }
    }
}

/// Power-weighted APR across a simulated validator set, per-share model.
/// Zero-stake entries contribute nothing; a set with no stake at all
/// yields 0.0 (the degenerate aggregate, same as an empty population).
pub fn weighted_avg_apr_scenario(
    validator_stakes: &[f64],
    network: &NetworkState,
) -> Result<f64, AprError> {
    let mut weighted_sum = 0.0;
    let mut total_power = 0.0;
    for &stake in validator_stakes {
        if stake <= 0.0 {
            continue;
        }
        let apr = apr_by_stake(stake, network)?;
        weighted_sum += apr * stake;
        total_power += stake;
    }
    if total_power == 0.0 {
        return Ok(0.0);
    }
    Ok(weighted_sum / total_power)
}

#[cfg(test)]
mod tests {
    use super::{StakeDistribution, simulate_validator_set, weighted_avg_apr_scenario};
    use crate::network::NetworkState;
    use crate::scenario::MAX_VALIDATORS;

    fn snapshot() -> NetworkState {
        NetworkState {
            total_active_stake: 10_000_000_000.0,
            avg_mint_per_block: 1_000_000.0,
            avg_fee_per_block: 5.0,
            avg_block_time: 6.0,
        }
    }

    #[test]
    fn uniform_split_is_equal_and_sums_to_total() {
        let stakes = simulate_validator_set(10_000_000_000.0, 10, StakeDistribution::Uniform, 42);
        assert_eq!(stakes.len(), 10);
        assert!(stakes.iter().all(|&s| s == 1_000_000_000.0));
        assert_eq!(stakes.iter().sum::<f64>(), 10_000_000_000.0);
    }

    #[test]
    fn validator_count_is_capped() {
        let stakes = simulate_validator_set(1_000_000.0, 150, StakeDistribution::Uniform, 42);
        assert_eq!(stakes.len(), MAX_VALIDATORS);
    }

    #[test]
    fn zero_validators_yield_an_empty_set() {
        assert!(simulate_validator_set(1_000_000.0, 0, StakeDistribution::Uniform, 42).is_empty());
    }

    #[test]
    fn random_split_is_reproducible_per_seed() {
        let a = simulate_validator_set(1_000_000.0, 25, StakeDistribution::Random, 42);
        let b = simulate_validator_set(1_000_000.0, 25, StakeDistribution::Random, 42);
        let c = simulate_validator_set(1_000_000.0, 25, StakeDistribution::Random, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_split_preserves_the_total() {
        let stakes = simulate_validator_set(1_000_000.0, 25, StakeDistribution::Random, 7);
        let sum: f64 = stakes.iter().sum();
        assert!((sum - 1_000_000.0).abs() < 1e-6);
        assert!(stakes.iter().all(|&s| s > 0.0));
    }

    #[test]
    fn scenario_weighted_apr_skips_zero_stakes() {
        let apr = weighted_avg_apr_scenario(&[0.0, 1_000_000.0, 2_000_000.0], &snapshot()).unwrap();
        let only_positive =
            weighted_avg_apr_scenario(&[1_000_000.0, 2_000_000.0], &snapshot()).unwrap();
        assert_eq!(apr, only_positive);
    }

    #[test]
    fn all_zero_set_aggregates_to_zero() {
        assert_eq!(weighted_avg_apr_scenario(&[0.0, 0.0], &snapshot()).unwrap(), 0.0);
        assert_eq!(weighted_avg_apr_scenario(&[], &snapshot()).unwrap(), 0.0);
    }

    #[test]
    fn uniform_set_weighted_apr_equals_the_single_stake_apr() {
        // Equal stakes weight identically, so the scenario average is just
        // the per-share APR of one slice.
        let stakes = simulate_validator_set(10_000_000_000.0, 100, StakeDistribution::Uniform, 1);
        let scenario = weighted_avg_apr_scenario(&stakes, &snapshot()).unwrap();
        let single = crate::apr::apr_by_stake(stakes[0], &snapshot()).unwrap();
        assert!((scenario - single).abs() < 1e-6);
    }
}
