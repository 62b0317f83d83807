#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Standalone entry point for the sector map boundary server.

use sector_map_boundary::config::load_defaults;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let defaults = load_defaults(None).map_err(std::io::Error::other)?;
    log::info!(
        "Default center: {}, {} (zoom {})",
        defaults.default_center.lat,
        defaults.default_center.lng,
        defaults.default_zoom
    );

    sector_map_server::run_server(defaults).await
}
