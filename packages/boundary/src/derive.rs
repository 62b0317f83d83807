//! Derived geometry: centroid, display center, bounding region.
//!
//! All arithmetic is planar on raw degrees. The centroid is the unweighted
//! mean of the ring's vertices, not the area-weighted polygon centroid, so
//! unevenly sampled boundaries pull it toward their denser side.

use geo::BoundingRect as _;
use sector_map_boundary_models::{BoundingRegion, CanonicalRing, LatLng, MapDefaults};

use crate::NoBoundary;
use crate::input::BoundaryInput;
use crate::normalize::normalize;

/// Arithmetic mean of the ring's latitudes and longitudes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(ring: &CanonicalRing) -> LatLng {
    let count = ring.len() as f64;
    let (lat_sum, lng_sum) = ring
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));
    LatLng::new(lat_sum / count, lng_sum / count)
}

/// Picks the point the map is centered on.
///
/// First satisfied wins: the ring's centroid, then the manual coordinates
/// (only when both are present and finite), then `default`.
#[must_use]
pub fn display_center(
    ring: Option<&CanonicalRing>,
    manual_lat: Option<f64>,
    manual_lng: Option<f64>,
    default: LatLng,
) -> LatLng {
    ring.map(centroid)
        .or_else(|| manual_point(manual_lat, manual_lng))
        .unwrap_or(default)
}

/// The coordinates to pre-fill in the form's latitude/longitude fields.
///
/// Returns `None` when the user already entered both coordinates, so their
/// input is never overwritten, or when there is no ring to derive from.
#[must_use]
pub fn prefill_coordinates(
    ring: Option<&CanonicalRing>,
    manual_lat: Option<f64>,
    manual_lng: Option<f64>,
) -> Option<LatLng> {
    if manual_point(manual_lat, manual_lng).is_some() {
        return None;
    }
    ring.map(centroid)
}

/// Minimal lat/lng rectangle covering `ring`.
///
/// `padding_px` is carried through untouched for the renderer.
#[must_use]
pub fn bounding_region(ring: Option<&CanonicalRing>, padding_px: u32) -> Option<BoundingRegion> {
    let points: geo::MultiPoint<f64> = ring?
        .iter()
        .map(|p| geo::Point::new(p.lng, p.lat))
        .collect();
    let rect = points.bounding_rect()?;

    Some(BoundingRegion {
        south: rect.min().y,
        west: rect.min().x,
        north: rect.max().y,
        east: rect.max().x,
        padding_px,
    })
}

fn manual_point(lat: Option<f64>, lng: Option<f64>) -> Option<LatLng> {
    match (lat, lng) {
        (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
            Some(LatLng::new(lat, lng))
        }
        _ => None,
    }
}

/// One full recomputation for a boundary and the form's manual
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryGeometry {
    /// The normalized ring, or why there is none.
    pub boundary: Result<CanonicalRing, NoBoundary>,
    /// Point the map is centered on.
    pub center: LatLng,
    /// Rectangle covering the ring.
    pub region: Option<BoundingRegion>,
    /// Suggested form coordinates.
    pub prefill: Option<LatLng>,
}

impl BoundaryGeometry {
    /// The ring, if normalization produced one.
    #[must_use]
    pub fn ring(&self) -> Option<&CanonicalRing> {
        self.boundary.as_ref().ok()
    }

    /// Why there is no ring, if there is none.
    #[must_use]
    pub fn reason(&self) -> Option<&NoBoundary> {
        self.boundary.as_ref().err()
    }
}

/// Normalizes `input` and derives the display center, bounding region, and
/// form pre-fill in one pass.
#[must_use]
pub fn derive_geometry(
    input: BoundaryInput<'_>,
    manual_lat: Option<f64>,
    manual_lng: Option<f64>,
    defaults: &MapDefaults,
) -> BoundaryGeometry {
    let boundary = normalize(input);
    let ring = boundary.as_ref().ok();

    let center = display_center(ring, manual_lat, manual_lng, defaults.default_center);
    let region = bounding_region(ring, defaults.fit_padding_px);
    let prefill = prefill_coordinates(ring, manual_lat, manual_lng);

    BoundaryGeometry {
        boundary,
        center,
        region,
        prefill,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sector_map_boundary_models::ShapeStyle;

    fn ring(points: &[(f64, f64)]) -> CanonicalRing {
        CanonicalRing::new(
            points
                .iter()
                .map(|&(lat, lng)| LatLng::new(lat, lng))
                .collect(),
        )
        .unwrap()
    }

    fn defaults() -> MapDefaults {
        MapDefaults {
            default_center: LatLng::new(-12.0464, -77.0428),
            default_zoom: 13.0,
            fit_padding_px: 24,
            shape_style: ShapeStyle {
                stroke_color: "#000".to_string(),
                fill_color: "#fff".to_string(),
                stroke_opacity: 1.0,
                fill_opacity: 0.5,
                stroke_weight: 2.0,
            },
        }
    }

    fn assert_close(actual: LatLng, lat: f64, lng: f64) {
        assert!(
            (actual.lat - lat).abs() < 1e-9 && (actual.lng - lng).abs() < 1e-9,
            "expected ({lat}, {lng}), got ({}, {})",
            actual.lat,
            actual.lng
        );
    }

    #[test]
    fn square_centroid() {
        let square = ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        assert_close(centroid(&square), 1.0, 1.0);
    }

    #[test]
    fn centroid_counts_repeated_closing_point() {
        let closed = ring(&[(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (0.0, 0.0)]);
        assert_close(centroid(&closed), 0.75, 0.75);
    }

    #[test]
    fn single_point_centroid_is_the_point() {
        assert_close(centroid(&ring(&[(-12.1, -77.0)])), -12.1, -77.0);
    }

    #[test]
    fn ring_wins_over_manual_coordinates() {
        let square = ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        let center = display_center(
            Some(&square),
            Some(-12.04),
            Some(-77.03),
            defaults().default_center,
        );
        assert_close(center, 1.0, 1.0);
    }

    #[test]
    fn manual_coordinates_win_over_default() {
        let center = display_center(None, Some(-12.04), Some(-77.03), defaults().default_center);
        assert_eq!(center, LatLng::new(-12.04, -77.03));
    }

    #[test]
    fn partial_manual_coordinates_fall_back_to_default() {
        let d = defaults().default_center;
        assert_eq!(display_center(None, None, Some(-77.03), d), d);
        assert_eq!(display_center(None, Some(-12.04), None, d), d);
        assert_eq!(display_center(None, Some(f64::NAN), Some(-77.03), d), d);
        assert_eq!(display_center(None, None, None, d), d);
    }

    #[test]
    fn prefill_respects_manual_entry() {
        let square = ring(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        assert_eq!(prefill_coordinates(Some(&square), Some(1.0), Some(1.0)), None);
        assert_close(
            prefill_coordinates(Some(&square), None, Some(5.0)).unwrap(),
            1.0,
            1.0,
        );
        assert_eq!(prefill_coordinates(None, None, None), None);
    }

    #[test]
    fn bounding_region_covers_every_point() {
        let shape = ring(&[(-12.05, -77.03), (-12.05, -77.02), (-12.04, -77.02), (-12.06, -77.04)]);
        let region = bounding_region(Some(&shape), 30).unwrap();
        assert!((region.south - -12.06).abs() < 1e-12);
        assert!((region.north - -12.04).abs() < 1e-12);
        assert!((region.west - -77.04).abs() < 1e-12);
        assert!((region.east - -77.02).abs() < 1e-12);
        assert_eq!(region.padding_px, 30);
    }

    #[test]
    fn bounding_region_without_ring_is_none() {
        assert_eq!(bounding_region(None, 10), None);
    }

    #[test]
    fn degenerate_ring_has_zero_area_region() {
        let point = ring(&[(1.0, 2.0), (1.0, 2.0)]);
        let region = bounding_region(Some(&point), 0).unwrap();
        assert!(region.lat_span().abs() < f64::EPSILON);
        assert!(region.lng_span().abs() < f64::EPSILON);
    }

    #[test]
    fn lima_scenario() {
        let input = r#"{"type":"Polygon","coordinates":[[[-77.03,-12.05],[-77.02,-12.05],[-77.02,-12.04],[-77.03,-12.04]]]}"#;
        let geometry = derive_geometry(BoundaryInput::Text(input), None, None, &defaults());

        let ring = geometry.ring().unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.points()[0], LatLng::new(-12.05, -77.03));
        assert_close(geometry.center, -12.045, -77.025);
        assert_close(geometry.prefill.unwrap(), -12.045, -77.025);
        assert_eq!(geometry.region.unwrap().padding_px, 24);
        assert!(geometry.reason().is_none());
    }

    #[test]
    fn missing_boundary_falls_through_to_default() {
        let geometry = derive_geometry(BoundaryInput::Text("{not valid json"), None, None, &defaults());
        assert!(geometry.ring().is_none());
        assert_eq!(geometry.reason().map(NoBoundary::kind), Some("invalid_json"));
        assert_eq!(geometry.center, defaults().default_center);
        assert_eq!(geometry.region, None);
        assert_eq!(geometry.prefill, None);
    }

    #[test]
    fn missing_boundary_uses_manual_coordinates() {
        let geometry = derive_geometry(BoundaryInput::Missing, Some(-12.04), Some(-77.03), &defaults());
        assert_eq!(geometry.center, LatLng::new(-12.04, -77.03));
        assert_eq!(geometry.prefill, None);
    }
}
