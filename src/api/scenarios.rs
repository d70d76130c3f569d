use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::apr::{current_snapshot, no_snapshot};
use super::models::{
    AppState, ChartResponse, CurveResponse, SimulateRequest, SimulateResponse, TargetsResponse,
};
use crate::apr::break_even_search;
use crate::reporter::median_power;
use crate::scenario::{
    find_target_stakes, individual_apr_chart, project_apr_curve, simulate_validator_set,
    total_stake_chart, weighted_avg_apr_scenario,
};

/// Full-network APR projection curve over the fixed total-stake domain,
/// with the APR interpolated at the current network stake.
#[get("/scenarios/curve/")]
pub async fn get_curve(state: web::Data<AppState>) -> impl Responder {
    let Some(snapshot) = current_snapshot(&state) else {
        return no_snapshot();
    };

    let curve = match project_apr_curve(&snapshot.network) {
        Ok(curve) => curve,
        Err(e) => {
            warn!("GET /scenarios/curve/ - {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };
    let current_apr = curve.apr_at_stake(snapshot.network.total_active_stake);

    HttpResponse::Ok().json(CurveResponse {
        snapshot_id: snapshot.snapshot_id,
        current_apr,
        stakes: curve.stakes,
        aprs: curve.aprs,
    })
}

/// Full-network APR at each fixed total-stake checkpoint (degenerate
/// checkpoints dropped).
#[get("/scenarios/targets/")]
pub async fn get_targets(state: web::Data<AppState>) -> impl Responder {
    let Some(snapshot) = current_snapshot(&state) else {
        return no_snapshot();
    };

    match find_target_stakes(&snapshot.network) {
        Ok(targets) => HttpResponse::Ok().json(TargetsResponse {
            snapshot_id: snapshot.snapshot_id,
            targets,
        }),
        Err(e) => {
            warn!("GET /scenarios/targets/ - {e}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// Individual-stake chart data: per-share APR over the reporter stake
/// range, median and break-even marked.
#[get("/scenarios/charts/individual/")]
pub async fn get_individual_chart(state: web::Data<AppState>) -> impl Responder {
    let Some(snapshot) = current_snapshot(&state) else {
        return no_snapshot();
    };

    let (stakes, median_stake) = {
        let reporters = state.reporters.lock().expect("mutex poisoned");
        let stakes: Vec<f64> = reporters
            .iter()
            .filter(|r| r.power > 0)
            .map(|r| r.power as f64)
            .collect();
        (stakes, median_power(&reporters))
    };
    if stakes.is_empty() {
        return HttpResponse::BadRequest()
            .body("no reporters with power loaded (PUT /reporters/ first)");
    }
    let break_even = break_even_search(&snapshot.network, median_stake);

    match individual_apr_chart(&snapshot.network, &stakes, median_stake, break_even) {
        Ok(chart) => HttpResponse::Ok().json(ChartResponse {
            snapshot_id: snapshot.snapshot_id,
            chart,
        }),
        Err(e) => {
            warn!("GET /scenarios/charts/individual/ - {e}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// Total-stake chart data: the projection curve with current stake and
/// checkpoint markers.
#[get("/scenarios/charts/total-stake/")]
pub async fn get_total_stake_chart(state: web::Data<AppState>) -> impl Responder {
    let Some(snapshot) = current_snapshot(&state) else {
        return no_snapshot();
    };

    match total_stake_chart(&snapshot.network) {
        Ok(chart) => HttpResponse::Ok().json(ChartResponse {
            snapshot_id: snapshot.snapshot_id,
            chart,
        }),
        Err(e) => {
            warn!("GET /scenarios/charts/total-stake/ - {e}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// Simulate a hypothetical validator set (explicit seed, reproducible)
/// and report the population-weighted per-share APR it would earn.
#[post("/scenarios/simulate/")]
pub async fn post_simulate(
    state: web::Data<AppState>,
    body: web::Json<SimulateRequest>,
) -> impl Responder {
    let Some(snapshot) = current_snapshot(&state) else {
        return no_snapshot();
    };

    let total_stake = body
        .total_stake
        .unwrap_or(snapshot.network.total_active_stake);
    if total_stake <= 0.0 {
        return HttpResponse::BadRequest().body("total_stake must be > 0");
    }

    let stakes = simulate_validator_set(total_stake, body.num_validators, body.distribution, body.seed);
    let weighted_avg_apr = match weighted_avg_apr_scenario(&stakes, &snapshot.network) {
        Ok(apr) => apr,
        Err(e) => {
            warn!("POST /scenarios/simulate/ - {e}");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    info!(
        "POST /scenarios/simulate/ - {} validators over {total_stake} (seed {}) -> {weighted_avg_apr:.2}%",
        stakes.len(),
        body.seed
    );
    HttpResponse::Ok().json(SimulateResponse {
        snapshot_id: snapshot.snapshot_id,
        num_validators: stakes.len(),
        total_stake,
        weighted_avg_apr,
        validator_stakes: stakes,
    })
}
