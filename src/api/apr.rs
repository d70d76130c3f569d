use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, warn};

use super::models::{AppState, AprQuery, AprResponse, BreakEvenResponse, Snapshot};
use crate::apr::{apr_by_stake, break_even_closed_form, break_even_search};
use crate::reporter::median_power;

/// Per-share APR for one hypothetical stake against the current
/// snapshot, with the yearly earnings and network share the stake
/// implies.
#[get("/apr/")]
pub async fn get_apr(state: web::Data<AppState>, query: web::Query<AprQuery>) -> impl Responder {
    let Some(snapshot) = current_snapshot(&state) else {
        return no_snapshot();
    };

    let apr_percent = match apr_by_stake(query.stake, &snapshot.network) {
        Ok(apr) => apr,
        Err(e) => {
            warn!("GET /apr/ - rejected stake {}: {e}", query.stake);
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    HttpResponse::Ok().json(AprResponse {
        snapshot_id: snapshot.snapshot_id,
        stake: query.stake,
        apr_percent,
        yearly_earnings: query.stake * apr_percent / 100.0,
        share_of_network_pct: query.stake / snapshot.network.total_active_stake * 100.0,
    })
}

/// Both break-even solvers against the current snapshot, using the
/// median reporter power as the search's reference stake. `null` fields
/// mean "undefined", never a sentinel number.
#[get("/breakeven/")]
pub async fn get_break_even(state: web::Data<AppState>) -> impl Responder {
    let Some(snapshot) = current_snapshot(&state) else {
        return no_snapshot();
    };

    let reference_stake = {
        let reporters = state.reporters.lock().expect("mutex poisoned");
        median_power(&reporters)
    };

    let closed_form = break_even_closed_form(&snapshot.network, reference_stake);
    let search = break_even_search(&snapshot.network, reference_stake);
    debug!(
        "GET /breakeven/ - reference={reference_stake}, closed_form={closed_form:?}, search={search:?}"
    );

    HttpResponse::Ok().json(BreakEvenResponse {
        snapshot_id: snapshot.snapshot_id,
        reference_stake,
        break_even: search.or(closed_form),
        closed_form,
        search,
    })
}

/* -------------------- Helpers -------------------- */

pub(super) fn current_snapshot(state: &web::Data<AppState>) -> Option<Snapshot> {
    let snap = state.snapshot.lock().expect("mutex poisoned");
    snap.clone()
}

pub(super) fn no_snapshot() -> HttpResponse {
    HttpResponse::NotFound().body("no network snapshot loaded (PUT /network/ first)")
}
