#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server exposing sector map boundary normalization.
//!
//! The sector, subsector, and cuadrante editor and viewer modals call
//! these endpoints instead of keeping their own copies of the polygon
//! parsing and centroid logic. Every endpoint is a pure transform of the
//! request body plus the configured [`MapDefaults`]; there is no database.

pub mod api;
mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use sector_map_boundary_models::MapDefaults;

/// Largest accepted JSON body. Detailed boundaries easily exceed the
/// Actix default of 32 KiB.
const JSON_LIMIT_BYTES: usize = 4 * 1024 * 1024;

/// Shared application state.
pub struct AppState {
    /// Deployment map defaults (default center, zoom, padding, style).
    pub defaults: MapDefaults,
}

/// Registers the `/api` routes.
///
/// Shared by [`run_server`] and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(JSON_LIMIT_BYTES))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health))
                .route("/map-defaults", web::get().to(handlers::map_defaults))
                .route("/boundary/normalize", web::post().to(handlers::normalize))
                .route("/boundary/preview", web::post().to(handlers::preview))
                .route("/boundary/audit", web::post().to(handlers::audit)),
        );
}

/// Starts the boundary API server.
///
/// Binds to `BIND_ADDR` (default `127.0.0.1`) and `PORT` (default `8080`).
/// The caller initializes logging and provides the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
pub async fn run_server(defaults: MapDefaults) -> std::io::Result<()> {
    let state = web::Data::new(AppState { defaults });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
