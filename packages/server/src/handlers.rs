//! HTTP handler functions for the boundary API.

use actix_web::{HttpResponse, web};
use sector_map_boundary::audit::audit_boundaries;
use sector_map_boundary::progress::NullProgress;
use sector_map_boundary_models::StoredBoundary;
use sector_map_server_models::{ApiHealth, NormalizeRequest, PreviewRequest};

use crate::{AppState, api};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/map-defaults`
///
/// Returns the default center, zoom, padding, and shape style so the UI
/// can render an empty map before any boundary is loaded.
pub async fn map_defaults(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.defaults)
}

/// `POST /api/boundary/normalize`
///
/// Normalizes a stored or typed boundary and returns it both as a
/// canonical ring and as `GeoJSON` text ready to save.
pub async fn normalize(body: web::Json<NormalizeRequest>) -> HttpResponse {
    match api::normalize_response(&body.boundary) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Failed to encode boundary as GeoJSON: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to encode boundary"
            }))
        }
    }
}

/// `POST /api/boundary/preview`
///
/// Derives the display center, bounding region, form pre-fill, and map
/// scene for a boundary plus the form's manual coordinates. Includes a
/// fitted viewport when the request carries a viewport size.
pub async fn preview(
    state: web::Data<AppState>,
    body: web::Json<PreviewRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(api::preview_response(&body, &state.defaults))
}

/// `POST /api/boundary/audit`
///
/// Audits a batch of stored boundary records and reports which ones have
/// no usable shape.
pub async fn audit(body: web::Json<Vec<StoredBoundary>>) -> HttpResponse {
    let report = audit_boundaries(&body, &NullProgress);
    log::info!(
        "Audited {} boundaries, {} without a usable shape",
        report.total,
        report.without_boundary()
    );
    HttpResponse::Ok().json(report)
}
