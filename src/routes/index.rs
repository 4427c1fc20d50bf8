use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::state::AppState;

#[get("/")]
async fn index(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": state.settings.app_name,
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.settings.app_env,
        "endpoints": {
            "health": "/health/status",
            "providers": "/api/providers",
            "availability": "/api/availability",
            "appointments": "/api/appointments"
        }
    }))
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}
