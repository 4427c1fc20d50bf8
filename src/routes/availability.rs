use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use serde::Deserialize;

use crate::handlers::availability::list_availability;
use crate::state::AppState;

#[derive(Deserialize)]
struct AvailabilityQuery {
    provider_id: String,
    start_date: String,
    end_date: String,
}

#[get("")]
async fn availability(
    state: web::Data<AppState>,
    query: web::Query<AvailabilityQuery>,
) -> impl Responder {
    match list_availability(&state, &query.provider_id, &query.start_date, &query.end_date).await {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(availability);
}
