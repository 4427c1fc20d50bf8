mod cache;
mod clock;
mod config;
mod error;
mod handlers;
mod ledger;
mod models;
mod routes;
mod scheduling;
mod state;
mod validation;

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::{Context, Result};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;

use crate::clock::SystemClock;
use crate::config::Settings;
use crate::state::AppState;

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    if dotenv().is_err() {
        info!("no .env file found, using process environment");
    }

    let settings = Settings::from_env().context("failed to load settings")?;
    let bind = (settings.host.clone(), settings.port);
    info!(
        "starting {} ({}) on {}:{}, practice zone {}",
        settings.app_name, settings.app_env, bind.0, bind.1, settings.practice_zone
    );

    let state = web::Data::new(AppState::new(settings, Arc::new(SystemClock)));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::init)
    })
    .bind(bind)
    .context("failed to bind listener")?
    .run()
    .await
    .context("server exited with an error")
}
