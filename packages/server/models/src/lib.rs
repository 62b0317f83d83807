#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the sector map boundary server.
//!
//! These types are serialized to JSON for the REST API. Boundary and
//! coordinate fields in requests are left untyped because the editor and
//! viewer forms send whatever the user typed or the backend stored.

use sector_map_boundary_models::{BoundingRegion, CanonicalRing, LatLng, MapScene, Viewport};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Why a request produced no boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiNoBoundary {
    /// Stable outcome label (e.g. `"invalid_json"`).
    pub kind: String,
    /// Human-readable detail.
    pub message: String,
}

/// Body of `POST /api/boundary/normalize`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizeRequest {
    /// Boundary as JSON text, a decoded object, or `null`.
    #[serde(default)]
    pub boundary: serde_json::Value,
}

/// Response of `POST /api/boundary/normalize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeResponse {
    /// Whether a usable ring was found.
    pub has_boundary: bool,
    /// Why there is no ring, when there is none.
    pub reason: Option<ApiNoBoundary>,
    /// The canonical ring.
    pub ring: Option<CanonicalRing>,
    /// The ring re-encoded as `GeoJSON` `Polygon` text for storage.
    pub geojson: Option<String>,
}

/// Size of the map viewport the caller wants framed.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSize {
    /// Width in pixels.
    pub width_px: u32,
    /// Height in pixels.
    pub height_px: u32,
    /// Highest zoom to return (default: 18).
    pub max_zoom: Option<f64>,
}

/// Body of `POST /api/boundary/preview`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    /// Boundary as JSON text, a decoded object, or `null`.
    #[serde(default)]
    pub boundary: serde_json::Value,
    /// Manually entered latitude (number or numeric text).
    #[serde(default)]
    pub manual_lat: serde_json::Value,
    /// Manually entered longitude (number or numeric text).
    #[serde(default)]
    pub manual_lng: serde_json::Value,
    /// When present, the response includes a fitted viewport.
    #[serde(default)]
    pub viewport: Option<ViewportSize>,
}

/// Response of `POST /api/boundary/preview`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    /// Whether a usable ring was found.
    pub has_boundary: bool,
    /// Why there is no ring, when there is none.
    pub reason: Option<ApiNoBoundary>,
    /// The canonical ring.
    pub ring: Option<CanonicalRing>,
    /// Point the map is centered on.
    pub center: LatLng,
    /// Rectangle covering the ring.
    pub region: Option<BoundingRegion>,
    /// Coordinates to pre-fill in the form.
    pub prefill: Option<LatLng>,
    /// Everything the map renderer needs.
    pub scene: MapScene,
    /// Fitted view, when a viewport size was supplied.
    pub viewport: Option<Viewport>,
}
