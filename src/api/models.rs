use crate::apr::BreakEven;
use crate::network::NetworkState;
use crate::reporter::{ReporterApr, ReporterRecord};
use crate::scenario::{ChartData, StakeDistribution, TargetPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// A loaded snapshot: the chain observables plus bookkeeping about when
/// they arrived, so collaborators can correlate reads with the push they
/// came from.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub snapshot_id: String,
    pub taken_at: i64, // Unix timestamp (UTC)
    pub network: NetworkState,
}

/// Shared application state: the current network snapshot and the
/// reporter registry, each replaced wholesale by collaborator pushes.
#[derive(Default)]
pub struct AppState {
    pub snapshot: Mutex<Option<Snapshot>>,
    pub reporters: Mutex<Vec<ReporterRecord>>,
}

/* ---------- Network API Models ---------- */

#[derive(Deserialize)]
pub struct PutNetworkRequest {
    pub total_active_stake: f64,
    pub avg_mint_per_block: f64,
    pub avg_fee_per_block: f64,
    pub avg_block_time: f64,
}

#[derive(Serialize)]
pub struct PutNetworkResponse {
    pub snapshot_id: String,
    pub taken_at: i64,
}

#[derive(Serialize)]
pub struct NetworkResponse {
    pub snapshot_id: String,
    pub taken_at: i64,
    pub network: NetworkState,
    pub reporter_count: usize,
}

#[derive(Serialize)]
pub struct PutReportersResponse {
    pub count: usize,
    pub active_count: usize, // entries with positive power
}

/* ---------- APR API Models ---------- */

#[derive(Deserialize)]
pub struct AprQuery {
    pub stake: f64,
}

#[derive(Serialize)]
pub struct AprResponse {
    pub snapshot_id: String,
    pub stake: f64,
    pub apr_percent: f64,
    pub yearly_earnings: f64,
    pub share_of_network_pct: f64,
}

#[derive(Serialize)]
pub struct BreakEvenResponse {
    pub snapshot_id: String,
    /// Median reporter power, the search's reference stake.
    pub reference_stake: f64,
    pub closed_form: Option<BreakEven>,
    pub search: Option<BreakEven>,
    /// The preferred answer: the grid search when it found a point,
    /// otherwise the closed form.
    pub break_even: Option<BreakEven>,
}

/* ---------- Reporter API Models ---------- */

#[derive(Serialize)]
pub struct ReportersResponse {
    pub snapshot_id: String,
    pub count: usize,
    pub weighted_avg_apr: f64,
    pub median_apr: f64,
    pub reporters: Vec<ReporterApr>,
}

/* ---------- Scenario API Models ---------- */

#[derive(Serialize)]
pub struct CurveResponse {
    pub snapshot_id: String,
    /// Full-network APR interpolated at the current total stake.
    pub current_apr: f64,
    pub stakes: Vec<f64>,
    pub aprs: Vec<f64>,
}

#[derive(Serialize)]
pub struct TargetsResponse {
    pub snapshot_id: String,
    pub targets: BTreeMap<String, TargetPoint>,
}

#[derive(Serialize)]
pub struct ChartResponse {
    pub snapshot_id: String,
    pub chart: ChartData,
}

#[derive(Deserialize)]
pub struct SimulateRequest {
    pub num_validators: usize,
    pub distribution: StakeDistribution,
    pub seed: u64,
    /// Hypothetical total stake; defaults to the snapshot's.
    pub total_stake: Option<f64>,
}

#[derive(Serialize)]
pub struct SimulateResponse {
    pub snapshot_id: String,
    pub num_validators: usize, // after the active-set cap
    pub total_stake: f64,
    pub weighted_avg_apr: f64,
    pub validator_stakes: Vec<f64>,
}
