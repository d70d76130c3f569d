use serde::{Deserialize, Serialize};

use super::SECONDS_PER_YEAR;
use crate::apr::AprError;

/// Immutable snapshot of the chain observables every APR figure derives
/// from. Collaborators are responsible for unit consistency: all stake
/// and per-block amounts must share one unit (TRB throughout this crate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkState {
    /// Total stake bonded across active reporters.
    pub total_active_stake: f64,
    /// Average protocol mint per block. Zero is a valid observation.
    pub avg_mint_per_block: f64,
    /// Average fee paid per reporting transaction.
    pub avg_fee_per_block: f64,
    /// Average seconds per block.
    pub avg_block_time: f64,
}

impl NetworkState {
    /// Check the invariants the formulas divide by. Zero divisors are
    /// reported as division-by-zero, negatives as invalid input.
    pub fn validate(&self) -> Result<(), AprError> {
        check_positive("total_active_stake", self.total_active_stake)?;
        check_positive("avg_block_time", self.avg_block_time)?;
        if self.avg_fee_per_block < 0.0 {
            return Err(AprError::InvalidInput {
                field: "avg_fee_per_block",
                value: self.avg_fee_per_block,
            });
        }
        Ok(())
    }

    pub fn blocks_per_year(&self) -> f64 {
        SECONDS_PER_YEAR / self.avg_block_time
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), AprError> {
    if value == 0.0 {
        return Err(AprError::DivisionByZero { field });
    }
    if value < 0.0 || value.is_nan() {
        return Err(AprError::InvalidInput { field, value });
    }
    Ok(())
}
