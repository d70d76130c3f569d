pub mod break_even;
pub mod formula;
pub mod model;

pub use break_even::{BreakEven, break_even_closed_form, break_even_search};
pub use formula::apr_by_stake;
pub use model::AprError;

/// Grid-search window for the break-even solver, as multiples of the
/// reference stake (the median reporter power in practice).
pub const BREAK_EVEN_MULT_MIN: f64 = 0.05;
pub const BREAK_EVEN_MULT_MAX: f64 = 0.25;

/// Grid points scanned between the multiplier bounds.
pub const BREAK_EVEN_GRID_POINTS: usize = 2000;

/// The search accepts the first grid point whose APR lands within this
/// many percentage points of zero. Part of the contract: together with
/// the grid bounds it determines which stake the search reports.
pub const BREAK_EVEN_TOLERANCE_PCT: f64 = 1.0;
