use actix_web::{HttpResponse, Responder, ResponseError, post, web};

use crate::handlers::appointments::create_appointment;
use crate::models::appointment::CreateAppointmentRequest;
use crate::state::AppState;

#[post("")]
async fn book(
    state: web::Data<AppState>,
    payload: web::Json<CreateAppointmentRequest>,
) -> impl Responder {
    match create_appointment(&state, payload.into_inner()).await {
        Ok(appointment) => HttpResponse::Created().json(appointment),
        Err(e) => e.error_response(),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(book);
}
