use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::state::AppState;

#[get("/ping")]
async fn ping() -> impl Responder {
    HttpResponse::Ok().body("pong")
}

/// Liveness plus a little bookkeeping: how many appointments the ledger holds
/// and which zone business hours are laid out in.
#[get("/status")]
async fn status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "app": state.settings.app_name,
        "environment": state.settings.app_env,
        "practice_zone": state.scheduler.zone().to_string(),
        "appointments": state.ledger.appointment_count().await,
    }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(ping).service(status);
}
