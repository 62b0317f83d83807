//! Converts a [`CanonicalRing`] back to the persisted `GeoJSON` form.
//!
//! Points are written in `[lng, lat]` order exactly as they are in the
//! ring. The ring is not force-closed, so normalizing the output yields the
//! same ring again.

use sector_map_boundary_models::CanonicalRing;

/// Builds a `GeoJSON` `Polygon` geometry with `ring` as its only ring.
#[must_use]
pub fn to_geojson_polygon(ring: &CanonicalRing) -> geojson::Geometry {
    let positions: Vec<Vec<f64>> = ring.iter().map(|p| vec![p.lng, p.lat]).collect();
    geojson::Geometry::new(geojson::Value::Polygon(vec![positions]))
}

/// Serializes `ring` as `GeoJSON` `Polygon` text.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_geojson_string(ring: &CanonicalRing) -> Result<String, serde_json::Error> {
    serde_json::to_string(&to_geojson_polygon(ring))
}
