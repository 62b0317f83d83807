#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Boundary normalization, derived geometry, and viewport framing for
//! sector maps.
//!
//! Sector, subsector, and cuadrante boundaries arrive in whatever shape was
//! stored over the years: `GeoJSON` `Polygon` or `Feature` objects, or bare
//! coordinate arrays, sometimes as JSON text and sometimes partially
//! corrupt. This crate turns any of them into a [`CanonicalRing`] in
//! `{lat, lng}` order and derives what the form and map collaborators need
//! from it: a display center, a bounding region, and a viewport request.
//!
//! Everything here is pure and synchronous. Absent or unusable geometry is
//! never an error; it is reported as [`NoBoundary`] and callers fall back to
//! manual coordinates or the configured default.

pub mod audit;
pub mod config;
pub mod derive;
pub mod geojson_out;
pub mod input;
pub mod normalize;
pub mod progress;
pub mod viewport;

pub use derive::{
    BoundaryGeometry, bounding_region, centroid, derive_geometry, display_center,
    prefill_coordinates,
};
pub use input::{BoundaryInput, BoundaryShape};
pub use normalize::{normalize, normalize_ring, parse_manual_coordinate};
pub use sector_map_boundary_models::{
    BoundingRegion, CanonicalRing, FitRequest, LatLng, MapDefaults, MapScene, ShapeStyle,
    Viewport,
};

use thiserror::Error;

/// Why a boundary input produced no ring.
///
/// Every variant means the same thing to a caller: there is nothing to
/// draw, so fall back to manual coordinates or the default location. The
/// variants only exist for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoBoundary {
    /// Input was null, absent, or blank text.
    #[error("no boundary supplied")]
    Missing,

    /// Input text was not valid JSON.
    #[error("boundary is not valid JSON: {message}")]
    InvalidJson {
        /// Decoder message.
        message: String,
    },

    /// The decoded value matches none of the recognized shapes.
    #[error("boundary shape is not recognized")]
    UnrecognizedShape,

    /// The shape was recognized but its outer ring is missing or not an
    /// array.
    #[error("boundary has no outer ring")]
    MissingRing,

    /// Every point of the outer ring was invalid.
    #[error("boundary has no valid points ({discarded} discarded)")]
    NoValidPoints {
        /// Number of points that were dropped.
        discarded: usize,
    },
}

impl NoBoundary {
    /// Stable `snake_case` label for this outcome, suitable for API
    /// responses and report keys.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::InvalidJson { .. } => "invalid_json",
            Self::UnrecognizedShape => "unrecognized_shape",
            Self::MissingRing => "missing_ring",
            Self::NoValidPoints { .. } => "no_valid_points",
        }
    }
}
