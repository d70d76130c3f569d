use actix_web::{HttpResponse, Responder, get, web};
use log::warn;

use super::apr::{current_snapshot, no_snapshot};
use super::models::{AppState, ReportersResponse};
use crate::reporter::{aggregate_apr, compute_reporter_aprs};

/// Per-reporter APR (positive-power reporters only, largest first) plus
/// the population aggregates. An empty registry answers with zeros and
/// an empty list rather than an error.
#[get("/reporters/")]
pub async fn get_reporters(state: web::Data<AppState>) -> impl Responder {
    let Some(snapshot) = current_snapshot(&state) else {
        return no_snapshot();
    };

    // Snapshot the registry, depois soltamos o lock antes da matemática
    let records = {
        let reporters = state.reporters.lock().expect("mutex poisoned");
        reporters.clone()
    };

    let reporter_aprs = match compute_reporter_aprs(&records, &snapshot.network) {
        Ok(aprs) => aprs,
        Err(e) => {
            warn!("GET /reporters/ - {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };
    let averages = aggregate_apr(&reporter_aprs);

    HttpResponse::Ok().json(ReportersResponse {
        snapshot_id: snapshot.snapshot_id,
        count: reporter_aprs.len(),
        weighted_avg_apr: averages.weighted_avg,
        median_apr: averages.median,
        reporters: reporter_aprs,
    })
}
