use super::model::AprError;
use crate::network::NetworkState;

/// APR (percent) a single reporter earns on `stake`, per-share model:
/// its proportional share of the per-block mint, minus the fee it pays
/// roughly every other block, annualized and divided by the stake itself.
///
/// A negative result is valid output (the fee cost exceeds the
/// proportional reward at small stakes), not an error. Distinct from the
/// full-network model in `scenario::curve`, which treats the queried
/// stake as the whole network's.
pub fn apr_by_stake(stake: f64, network: &NetworkState) -> Result<f64, AprError> {
    network.validate()?;
    if stake == 0.0 {
        return Err(AprError::DivisionByZero { field: "stake" });
    }
    if stake < 0.0 || stake.is_nan() {
        return Err(AprError::InvalidInput {
            field: "stake",
            value: stake,
        });
    }

    let proportion = stake / network.total_active_stake;
    let profit_per_block = proportion * network.avg_mint_per_block - network.avg_fee_per_block / 2.0;
    let annual_profit = profit_per_block * network.blocks_per_year();

    Ok(annual_profit / stake * 100.0)
}

#[cfg(test)]
mod tests {
    use super::apr_by_stake;
    use crate::apr::AprError;
    use crate::network::NetworkState;

    fn snapshot() -> NetworkState {
        NetworkState {
            total_active_stake: 10_000_000_000.0,
            avg_mint_per_block: 1_000_000.0,
            avg_fee_per_block: 5.0,
            avg_block_time: 2.0,
        }
    }

    #[test]
    fn reference_scenario_is_pinned() {
        // proportion 1e-4, profit/block 97.5, 15_768_000 blocks/year
        let apr = apr_by_stake(1_000_000.0, &snapshot()).unwrap();
        assert!(apr > 0.0);
        assert!((apr - 153_738.0).abs() < 1e-6);
    }

    #[test]
    fn zero_stake_fails_with_division_by_zero() {
        assert_eq!(
            apr_by_stake(0.0, &snapshot()),
            Err(AprError::DivisionByZero { field: "stake" })
        );
    }

    #[test]
    fn negative_stake_is_invalid_input() {
        assert_eq!(
            apr_by_stake(-10.0, &snapshot()),
            Err(AprError::InvalidInput {
                field: "stake",
                value: -10.0
            })
        );
    }

    #[test]
    fn invalid_snapshot_is_rejected_before_the_stake() {
        let mut s = snapshot();
        s.total_active_stake = 0.0;
        assert_eq!(
            apr_by_stake(1.0, &s),
            Err(AprError::DivisionByZero {
                field: "total_active_stake"
            })
        );
    }

    #[test]
    fn fee_heavy_small_stake_goes_negative() {
        let s = NetworkState {
            total_active_stake: 10_000_000_000.0,
            avg_mint_per_block: 1_000_000.0,
            avg_fee_per_block: 100_000.0,
            avg_block_time: 6.0,
        };
        // proportion of a 1-unit stake is negligible next to a 50k fee half
        let apr = apr_by_stake(1.0, &s).unwrap();
        assert!(apr < 0.0);
    }

    #[test]
    fn apr_climbs_toward_the_mint_share_ceiling() {
        // The fee term fades as stake grows, so per-share APR rises toward
        // the proportional-mint asymptote (mint * blocks_per_year / total).
        let s = snapshot();
        let ceiling = s.avg_mint_per_block * s.blocks_per_year() / s.total_active_stake * 100.0;
        let mut prev = f64::NEG_INFINITY;
        for stake in [1_000.0, 10_000.0, 100_000.0, 1_000_000.0, 10_000_000.0] {
            let apr = apr_by_stake(stake, &s).unwrap();
            assert!(apr > prev, "apr not increasing at stake {stake}");
            assert!(apr < ceiling);
            prev = apr;
        }
    }
}
