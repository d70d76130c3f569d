use actix_web::{HttpResponse, Responder, get, put, web};
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use super::models::{
    AppState, NetworkResponse, PutNetworkRequest, PutNetworkResponse, PutReportersResponse,
    Snapshot,
};
use crate::network::NetworkState;
use crate::reporter::ReporterRecord;

/// Get the current network snapshot.
#[get("/network/")]
pub async fn get_network(state: web::Data<AppState>) -> impl Responder {
    let snapshot = {
        let snap = state.snapshot.lock().expect("mutex poisoned");
        snap.clone()
    };
    let Some(snapshot) = snapshot else {
        return HttpResponse::NotFound().body("no network snapshot loaded (PUT /network/ first)");
    };

    let reporter_count = {
        let reporters = state.reporters.lock().expect("mutex poisoned");
        reporters.len()
    };

    HttpResponse::Ok().json(NetworkResponse {
        snapshot_id: snapshot.snapshot_id,
        taken_at: snapshot.taken_at,
        network: snapshot.network,
        reporter_count,
    })
}

/// Replace the network snapshot with freshly observed chain scalars.
/// Invariants are checked up front; a rejected push leaves the previous
/// snapshot in place.
#[put("/network/")]
pub async fn put_network(
    state: web::Data<AppState>,
    body: web::Json<PutNetworkRequest>,
) -> impl Responder {
    let network = NetworkState {
        total_active_stake: body.total_active_stake,
        avg_mint_per_block: body.avg_mint_per_block,
        avg_fee_per_block: body.avg_fee_per_block,
        avg_block_time: body.avg_block_time,
    };
    if let Err(e) = network.validate() {
        warn!("PUT /network/ - rejected: {e}");
        return HttpResponse::BadRequest().body(e.to_string());
    }

    let snapshot = Snapshot {
        snapshot_id: Uuid::new_v4().to_string(),
        taken_at: Utc::now().timestamp(),
        network,
    };
    let resp = PutNetworkResponse {
        snapshot_id: snapshot.snapshot_id.clone(),
        taken_at: snapshot.taken_at,
    };

    {
        let mut snap = state.snapshot.lock().expect("mutex poisoned");
        *snap = Some(snapshot);
    }

    info!(
        "PUT /network/ - snapshot {} loaded (total_stake={}, block_time={}s)",
        resp.snapshot_id, body.total_active_stake, body.avg_block_time
    );
    HttpResponse::Ok().json(resp)
}

/// Replace the reporter registry. Zero-power entries are kept in the
/// registry (they are real on chain) but excluded from APR output.
#[put("/reporters/")]
pub async fn put_reporters(
    state: web::Data<AppState>,
    body: web::Json<Vec<ReporterRecord>>,
) -> impl Responder {
    let records = body.into_inner();
    let active_count = records.iter().filter(|r| r.power > 0).count();
    debug!(
        "PUT /reporters/ - received {} records ({} with power)",
        records.len(),
        active_count
    );

    let count = records.len();
    {
        let mut reporters = state.reporters.lock().expect("mutex poisoned");
        *reporters = records;
    }

    info!("PUT /reporters/ - registry replaced ({count} records)");
    HttpResponse::Ok().json(PutReportersResponse {
        count,
        active_count,
    })
}
