use thiserror::Error;

/// Failure kinds for the APR math. These surface synchronously to the
/// caller; the core never logs or swallows them. An unsolvable break-even
/// is `None`, not an error, and an empty population aggregates to zeros.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AprError {
    /// A divisor input was zero. The formula divides by the stake, the
    /// total active stake and the block time, so all three must be
    /// strictly positive.
    #[error("division by zero: {field} is 0")]
    DivisionByZero { field: &'static str },

    /// An input was negative or NaN.
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: f64 },
}
