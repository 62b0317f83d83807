#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Boundary, ring, and map-framing types for sector map geometry.
//!
//! These types describe the canonical form of a sector, subsector, or
//! cuadrante boundary after normalization, together with everything that
//! is derived from it for the form and map collaborators. They carry no
//! behavior beyond construction invariants; the computations live in
//! `sector_map_boundary`.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A point in map-library axis order (latitude first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a point from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An ordered, non-empty sequence of points describing the outer boundary
/// of a polygon.
///
/// The first and last points are not required to be identical. Insertion
/// order is preserved exactly as it appeared in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LatLng>", into = "Vec<LatLng>")]
pub struct CanonicalRing {
    points: Vec<LatLng>,
}

impl CanonicalRing {
    /// Wraps `points` as a ring, or returns `None` if there are no points.
    #[must_use]
    pub fn new(points: Vec<LatLng>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    /// Returns the ring's points in order.
    #[must_use]
    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    /// Returns the number of points in the ring. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the ring's points.
    pub fn iter(&self) -> std::slice::Iter<'_, LatLng> {
        self.points.iter()
    }

    /// Consumes the ring, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<LatLng> {
        self.points
    }
}

impl<'a> IntoIterator for &'a CanonicalRing {
    type Item = &'a LatLng;
    type IntoIter = std::slice::Iter<'a, LatLng>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Error returned when deserializing an empty ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyRingError;

impl std::fmt::Display for EmptyRingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a ring must contain at least one point")
    }
}

impl std::error::Error for EmptyRingError {}

impl TryFrom<Vec<LatLng>> for CanonicalRing {
    type Error = EmptyRingError;

    fn try_from(points: Vec<LatLng>) -> Result<Self, Self::Error> {
        Self::new(points).ok_or(EmptyRingError)
    }
}

impl From<CanonicalRing> for Vec<LatLng> {
    fn from(ring: CanonicalRing) -> Self {
        ring.points
    }
}

/// The minimal axis-aligned lat/lng rectangle covering a ring.
///
/// `padding_px` is a screen-space hint for the renderer and is never applied
/// to the coordinate values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingRegion {
    /// Southernmost latitude.
    pub south: f64,
    /// Westernmost longitude.
    pub west: f64,
    /// Northernmost latitude.
    pub north: f64,
    /// Easternmost longitude.
    pub east: f64,
    /// Pixel padding the renderer adds around the rectangle when fitting.
    pub padding_px: u32,
}

impl BoundingRegion {
    /// South-west corner.
    #[must_use]
    pub const fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    /// North-east corner.
    #[must_use]
    pub const fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    /// Latitude extent in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }

    /// Midpoint of the rectangle.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            f64::midpoint(self.south, self.north),
            f64::midpoint(self.west, self.east),
        )
    }
}

/// Presentational parameters for drawing a boundary shape.
///
/// Field names stay `snake_case` on the wire so the same struct reads from
/// the TOML defaults file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Outline color (CSS color string).
    pub stroke_color: String,
    /// Fill color (CSS color string).
    pub fill_color: String,
    /// Outline opacity in `0.0..=1.0`.
    pub stroke_opacity: f64,
    /// Fill opacity in `0.0..=1.0`.
    pub fill_opacity: f64,
    /// Outline width in pixels.
    pub stroke_weight: f64,
}

/// Deployment-level map defaults, deserialized from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefaults {
    /// Where the map is centered when neither a boundary nor manual
    /// coordinates are available.
    pub default_center: LatLng,
    /// Zoom used when centering on a point instead of fitting a region.
    pub default_zoom: f64,
    /// Screen-space padding applied around a fitted boundary.
    pub fit_padding_px: u32,
    /// Style for drawing the boundary shape.
    pub shape_style: ShapeStyle,
}

/// Everything the map-rendering collaborator needs to frame the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitRequest {
    /// Boundary to contain, if any.
    pub ring: Option<CanonicalRing>,
    /// Point to center on when there is no ring or the fit fails.
    pub center: LatLng,
    /// Rectangle covering `ring`, if any.
    pub region: Option<BoundingRegion>,
    /// Screen-space padding around the fitted region.
    pub padding_px: u32,
    /// Zoom used when centering on `center`.
    pub default_zoom: f64,
}

/// A single marker anchored at the display center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorMarker {
    /// Marker location.
    pub position: LatLng,
}

/// A fillable, strokeable boundary shape layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLayer {
    /// Outline of the shape.
    pub ring: CanonicalRing,
    /// Drawing style.
    pub style: ShapeStyle,
}

/// The complete hand-off to the map-rendering collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    /// Viewport framing request.
    pub fit: FitRequest,
    /// Marker at the display center.
    pub marker: AnchorMarker,
    /// Boundary shape, when a ring exists.
    pub shape: Option<ShapeLayer>,
}

/// A resolved map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// View center.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: f64,
}

/// Level of a subdivision in the sector hierarchy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubdivisionLevel {
    /// Top-level sector.
    Sector,
    /// Subsector within a sector.
    Subsector,
    /// Cuadrante within a subsector.
    Cuadrante,
}

/// A persisted boundary record as exported by the backend.
///
/// `boundary` is kept untyped: it may be a JSON string, a `GeoJSON` object,
/// one of the legacy raw coordinate arrays, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBoundary {
    /// Backend identifier.
    pub id: String,
    /// Hierarchy level.
    pub level: SubdivisionLevel,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Raw boundary field.
    #[serde(default)]
    pub boundary: serde_json::Value,
}
