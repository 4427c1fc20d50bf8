pub mod appointments;
pub mod availability;
pub mod health;
pub mod index;
pub mod providers;

use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.configure(index::init)
        .service(web::scope("/health").configure(health::init))
        .service(web::scope("/api/providers").configure(providers::init))
        .service(web::scope("/api/availability").configure(availability::init))
        .service(web::scope("/api/appointments").configure(appointments::init));
}
