mod apr;
mod health;
pub mod models;
mod network;
mod reporters;
mod scenarios;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(network::get_network)
            .service(network::put_network)
            .service(network::put_reporters)
            .service(apr::get_apr)
            .service(apr::get_break_even)
            .service(reporters::get_reporters)
            .service(scenarios::get_curve)
            .service(scenarios::get_targets)
            .service(scenarios::get_individual_chart)
            .service(scenarios::get_total_stake_chart)
            .service(scenarios::post_simulate),
    );
}
