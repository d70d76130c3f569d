pub mod aggregate;
pub mod model;

pub use aggregate::{AprAverages, aggregate_apr, compute_reporter_aprs, median_power};
pub use model::{ReporterApr, ReporterRecord};

/// How many address characters the moniker fallback keeps.
pub const MONIKER_FALLBACK_CHARS: usize = 12;
