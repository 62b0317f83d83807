//! Builds API responses from request bodies.
//!
//! Kept separate from the handlers so the CLI produces exactly the same
//! JSON as the HTTP endpoints.

use sector_map_boundary::geojson_out::to_geojson_string;
use sector_map_boundary::viewport::{PlanarFitter, build_scene, request_fit};
use sector_map_boundary::{
    BoundaryInput, NoBoundary, derive_geometry, normalize, parse_manual_coordinate,
};
use sector_map_boundary_models::MapDefaults;
use sector_map_server_models::{ApiNoBoundary, NormalizeResponse, PreviewRequest, PreviewResponse};

/// Zoom cap for viewport fitting when the caller gives none.
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;

/// Normalizes `boundary` into a [`NormalizeResponse`].
///
/// # Errors
///
/// Returns an error only if the ring cannot be re-encoded as `GeoJSON`.
pub fn normalize_response(
    boundary: &serde_json::Value,
) -> Result<NormalizeResponse, serde_json::Error> {
    match normalize(BoundaryInput::from_value(boundary)) {
        Ok(ring) => Ok(NormalizeResponse {
            has_boundary: true,
            reason: None,
            geojson: Some(to_geojson_string(&ring)?),
            ring: Some(ring),
        }),
        Err(reason) => Ok(NormalizeResponse {
            has_boundary: false,
            reason: Some(api_reason(&reason)),
            ring: None,
            geojson: None,
        }),
    }
}

/// Derives everything the editor and viewer need for one boundary.
#[must_use]
pub fn preview_response(request: &PreviewRequest, defaults: &MapDefaults) -> PreviewResponse {
    let geometry = derive_geometry(
        BoundaryInput::from_value(&request.boundary),
        parse_manual_coordinate(&request.manual_lat),
        parse_manual_coordinate(&request.manual_lng),
        defaults,
    );
    let scene = build_scene(&geometry, defaults);

    let viewport = request.viewport.map(|size| {
        let fitter = PlanarFitter::new(size.width_px, size.height_px, max_zoom(size.max_zoom));
        request_fit(&fitter, &scene.fit)
    });

    PreviewResponse {
        has_boundary: geometry.ring().is_some(),
        reason: geometry.reason().map(api_reason),
        ring: geometry.ring().cloned(),
        center: geometry.center,
        region: geometry.region,
        prefill: geometry.prefill,
        scene,
        viewport,
    }
}

/// The requested zoom cap, or [`DEFAULT_MAX_ZOOM`] when it is absent,
/// negative, or not a number.
fn max_zoom(requested: Option<f64>) -> f64 {
    match requested {
        Some(zoom) if zoom.is_finite() && zoom >= 0.0 => zoom,
        Some(zoom) => {
            log::debug!("Ignoring max zoom {zoom}, using {DEFAULT_MAX_ZOOM}");
            DEFAULT_MAX_ZOOM
        }
        None => DEFAULT_MAX_ZOOM,
    }
}

fn api_reason(reason: &NoBoundary) -> ApiNoBoundary {
    ApiNoBoundary {
        kind: reason.kind().to_string(),
        message: reason.to_string(),
    }
}
