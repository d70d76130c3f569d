use serde::Serialize;

use super::formula::apr_by_stake;
use super::{
    BREAK_EVEN_GRID_POINTS, BREAK_EVEN_MULT_MAX, BREAK_EVEN_MULT_MIN, BREAK_EVEN_TOLERANCE_PCT,
};
use crate::network::NetworkState;

/// A solved break-even point: the stake at which APR crosses zero, plus
/// that stake as a multiple of the reference stake (0 when no reference
/// was supplied).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakEven {
    pub stake: f64,
    pub multiplier: f64,
}

/// Closed form: at break-even the proportional mint equals the fee cost
/// per block, so stake* = (fee / 2) * total / mint. `None` when the mint
/// is zero or negative (nothing to offset the fee, no crossing exists).
pub fn break_even_closed_form(
    network: &NetworkState,
    reference_stake: f64,
) -> Option<BreakEven> {
    if network.avg_mint_per_block <= 0.0 {
        return None;
    }
    let stake =
        (network.avg_fee_per_block / 2.0) * network.total_active_stake / network.avg_mint_per_block;
    Some(BreakEven {
        stake,
        multiplier: multiplier_for(stake, reference_stake),
    })
}

/// Best-effort grid search, not a root finder: scan multiples of the
/// reference stake across [BREAK_EVEN_MULT_MIN, BREAK_EVEN_MULT_MAX] at
/// BREAK_EVEN_GRID_POINTS resolution and accept the first point whose APR
/// is within BREAK_EVEN_TOLERANCE_PCT of zero. `None` when no grid point
/// qualifies (the crossing lies outside the window, or the tolerance is
/// never met).
pub fn break_even_search(network: &NetworkState, reference_stake: f64) -> Option<BreakEven> {
    if reference_stake <= 0.0 {
        return None;
    }
    for i in 0..BREAK_EVEN_GRID_POINTS {
        let t = i as f64 / (BREAK_EVEN_GRID_POINTS - 1) as f64;
        let multiplier = BREAK_EVEN_MULT_MIN + t * (BREAK_EVEN_MULT_MAX - BREAK_EVEN_MULT_MIN);
        let stake = reference_stake * multiplier;
        let apr = apr_by_stake(stake, network).ok()?;
        if apr.abs() < BREAK_EVEN_TOLERANCE_PCT {
            return Some(BreakEven { stake, multiplier });
        }
    }
    None
}

fn multiplier_for(stake: f64, reference_stake: f64) -> f64 {
    if reference_stake > 0.0 {
        stake / reference_stake
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{break_even_closed_form, break_even_search};
    use crate::apr::{BREAK_EVEN_TOLERANCE_PCT, apr_by_stake};
    use crate::network::NetworkState;

    /// Break-even at (0.05 / 2) * 10M / 1 = 250k, inside the search
    /// window for a 1.5M reference stake (multiplier ~0.167).
    fn snapshot() -> NetworkState {
        NetworkState {
            total_active_stake: 10_000_000.0,
            avg_mint_per_block: 1.0,
            avg_fee_per_block: 0.05,
            avg_block_time: 2.0,
        }
    }

    #[test]
    fn closed_form_lands_on_zero_apr() {
        let be = break_even_closed_form(&snapshot(), 1_500_000.0).unwrap();
        assert!((be.stake - 250_000.0).abs() < 1e-6);
        let apr = apr_by_stake(be.stake, &snapshot()).unwrap();
        assert!(apr.abs() < 1e-9);
    }

    #[test]
    fn closed_form_without_mint_is_undefined() {
        let mut s = snapshot();
        s.avg_mint_per_block = 0.0;
        assert!(break_even_closed_form(&s, 1_500_000.0).is_none());
    }

    #[test]
    fn closed_form_multiplier_is_zero_without_reference() {
        let be = break_even_closed_form(&snapshot(), 0.0).unwrap();
        assert_eq!(be.multiplier, 0.0);
    }

    #[test]
    fn search_agrees_with_closed_form_within_tolerance() {
        // The formula is linear in stake past the proportional term, so
        // wherever the crossing falls inside the search window the two
        // solvers must land within the search tolerance of zero APR.
        let reference = 1_500_000.0;
        for fee in [0.03, 0.05, 0.07] {
            let mut s = snapshot();
            s.avg_fee_per_block = fee;
            let closed = break_even_closed_form(&s, reference).unwrap();
            let searched = break_even_search(&s, reference).unwrap();

            for stake in [closed.stake, searched.stake] {
                let apr = apr_by_stake(stake, &s).unwrap();
                assert!(
                    apr.abs() < BREAK_EVEN_TOLERANCE_PCT,
                    "apr {apr} at stake {stake} (fee {fee})"
                );
            }
            assert!(searched.multiplier >= 0.05 && searched.multiplier <= 0.25);
        }
    }

    #[test]
    fn search_misses_a_crossing_outside_the_window() {
        // Break-even is 250k; with a tiny reference stake the window tops
        // out at 0.25 * 10k = 2.5k, far below the crossing.
        assert!(break_even_search(&snapshot(), 10_000.0).is_none());
    }

    #[test]
    fn search_requires_a_positive_reference() {
        assert!(break_even_search(&snapshot(), 0.0).is_none());
        assert!(break_even_search(&snapshot(), -5.0).is_none());
    }
}
