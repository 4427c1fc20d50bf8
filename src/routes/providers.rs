use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use serde::Deserialize;

use crate::handlers::providers::{list_provider_appointments, list_providers};
use crate::state::AppState;

#[derive(Deserialize)]
struct DateRange {
    start_date: String,
    end_date: String,
}

#[get("")]
async fn providers() -> impl Responder {
    HttpResponse::Ok().json(list_providers())
}

#[get("/{provider_id}/appointments")]
async fn provider_appointments(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DateRange>,
) -> impl Responder {
    let provider_id = path.into_inner();

    match list_provider_appointments(&state, &provider_id, &query.start_date, &query.end_date).await
    {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(providers).service(provider_appointments);
}
