//! Hand-off to the map-rendering collaborator.
//!
//! The renderer decides how a region maps onto the screen. This module
//! builds the [`MapScene`] it receives, defines the [`ViewportFitter`] seam
//! it implements, and applies the fallback rule: when there is no region or
//! the fit fails, center on the display center at the default zoom.

use sector_map_boundary_models::{
    AnchorMarker, BoundingRegion, FitRequest, MapDefaults, MapScene, ShapeLayer, Viewport,
};
use thiserror::Error;

use crate::derive::BoundaryGeometry;

/// Why a region could not be fitted.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FitError {
    /// The region has zero extent on both axes (e.g. every point identical).
    #[error("region has no extent")]
    Degenerate,

    /// The padding leaves no room for the region.
    #[error("viewport is too small for the requested padding")]
    ViewportTooSmall,

    /// The zoom cap is negative or not a number.
    #[error("max zoom {0} is not a finite, non-negative zoom")]
    InvalidMaxZoom(f64),
}

/// Computes a view that contains a region.
///
/// Implemented by map-rendering collaborators. Implementations should
/// honor [`BoundingRegion::padding_px`] as screen-space padding.
pub trait ViewportFitter {
    /// Fits `region` into the viewport.
    ///
    /// # Errors
    ///
    /// Returns a [`FitError`] when no sensible view exists for the region.
    fn fit_region(&self, region: &BoundingRegion) -> Result<Viewport, FitError>;
}

/// Builds the scene handed to the renderer: a fit request, an anchor
/// marker at the display center, and the boundary shape when present.
#[must_use]
pub fn build_scene(geometry: &BoundaryGeometry, defaults: &MapDefaults) -> MapScene {
    let ring = geometry.ring().cloned();

    MapScene {
        fit: FitRequest {
            ring: ring.clone(),
            center: geometry.center,
            region: geometry.region,
            padding_px: defaults.fit_padding_px,
            default_zoom: defaults.default_zoom,
        },
        marker: AnchorMarker {
            position: geometry.center,
        },
        shape: ring.map(|ring| ShapeLayer {
            ring,
            style: defaults.shape_style.clone(),
        }),
    }
}

/// Resolves a fit request into a concrete view using `fitter`.
///
/// The request's `padding_px` is what the fitter sees, whatever the
/// region itself carries.
pub fn request_fit<F: ViewportFitter + ?Sized>(fitter: &F, request: &FitRequest) -> Viewport {
    let centered = Viewport {
        center: request.center,
        zoom: request.default_zoom,
    };

    let Some(region) = request.region else {
        return centered;
    };

    let region = BoundingRegion {
        padding_px: request.padding_px,
        ..region
    };

    match fitter.fit_region(&region) {
        Ok(viewport) => viewport,
        Err(e) => {
            log::debug!("Falling back to centered view: {e}");
            centered
        }
    }
}

/// Tile size at zoom 0, in pixels.
const TILE_SIZE_PX: f64 = 256.0;

/// Fits regions on a plain equirectangular grid where 360 degrees spans
/// `256 * 2^zoom` pixels on both axes.
///
/// Useful for server-side previews and tests; interactive maps use their
/// own renderer's fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarFitter {
    /// Viewport width in pixels.
    pub width_px: u32,
    /// Viewport height in pixels.
    pub height_px: u32,
    /// Highest zoom the fitter will return.
    pub max_zoom: f64,
}

impl PlanarFitter {
    /// Creates a fitter for a viewport of the given size.
    #[must_use]
    pub const fn new(width_px: u32, height_px: u32, max_zoom: f64) -> Self {
        Self {
            width_px,
            height_px,
            max_zoom,
        }
    }
}

impl ViewportFitter for PlanarFitter {
    fn fit_region(&self, region: &BoundingRegion) -> Result<Viewport, FitError> {
        if !self.max_zoom.is_finite() || self.max_zoom < 0.0 {
            return Err(FitError::InvalidMaxZoom(self.max_zoom));
        }

        let padding = f64::from(region.padding_px) * 2.0;
        let usable_w = f64::from(self.width_px) - padding;
        let usable_h = f64::from(self.height_px) - padding;
        if usable_w <= 0.0 || usable_h <= 0.0 {
            return Err(FitError::ViewportTooSmall);
        }

        let zoom_for = |usable: f64, span: f64| {
            (span > 0.0).then(|| (usable * 360.0 / (TILE_SIZE_PX * span)).log2())
        };

        let zoom = match (
            zoom_for(usable_w, region.lng_span()),
            zoom_for(usable_h, region.lat_span()),
        ) {
            (Some(x), Some(y)) => x.min(y),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => return Err(FitError::Degenerate),
        };

        Ok(Viewport {
            center: region.center(),
            zoom: zoom.floor().clamp(0.0, self.max_zoom),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_geometry;
    use crate::input::BoundaryInput;
    use sector_map_boundary_models::{LatLng, ShapeStyle};

    fn defaults() -> MapDefaults {
        MapDefaults {
            default_center: LatLng::new(-12.0464, -77.0428),
            default_zoom: 13.0,
            fit_padding_px: 20,
            shape_style: ShapeStyle {
                stroke_color: "#2563eb".to_string(),
                fill_color: "#3b82f6".to_string(),
                stroke_opacity: 0.9,
                fill_opacity: 0.25,
                stroke_weight: 2.0,
            },
        }
    }

    fn region(south: f64, west: f64, north: f64, east: f64, padding_px: u32) -> BoundingRegion {
        BoundingRegion {
            south,
            west,
            north,
            east,
            padding_px,
        }
    }

    struct FailingFitter;

    impl ViewportFitter for FailingFitter {
        fn fit_region(&self, _region: &BoundingRegion) -> Result<Viewport, FitError> {
            Err(FitError::Degenerate)
        }
    }

    #[test]
    fn scene_with_ring_has_shape_and_marker() {
        let input = "[[-77.03,-12.05],[-77.02,-12.05],[-77.02,-12.04]]";
        let geometry = derive_geometry(BoundaryInput::Text(input), None, None, &defaults());
        let scene = build_scene(&geometry, &defaults());

        assert_eq!(scene.marker.position, geometry.center);
        assert_eq!(scene.fit.padding_px, 20);
        assert!(scene.fit.region.is_some());
        let shape = scene.shape.unwrap();
        assert_eq!(shape.ring.len(), 3);
        assert_eq!(shape.style, defaults().shape_style);
    }

    #[test]
    fn scene_without_ring_has_no_shape() {
        let geometry = derive_geometry(BoundaryInput::Missing, None, None, &defaults());
        let scene = build_scene(&geometry, &defaults());

        assert!(scene.shape.is_none());
        assert!(scene.fit.ring.is_none());
        assert!(scene.fit.region.is_none());
        assert_eq!(scene.marker.position, defaults().default_center);
    }

    #[test]
    fn no_region_centers_at_default_zoom() {
        let geometry = derive_geometry(BoundaryInput::Missing, Some(-12.0), Some(-77.0), &defaults());
        let scene = build_scene(&geometry, &defaults());
        let view = request_fit(&PlanarFitter::new(800, 600, 18.0), &scene.fit);

        assert_eq!(view.center, LatLng::new(-12.0, -77.0));
        assert!((view.zoom - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn failed_fit_falls_back_to_center() {
        let input = "[[-77.03,-12.05],[-77.02,-12.04]]";
        let geometry = derive_geometry(BoundaryInput::Text(input), None, None, &defaults());
        let scene = build_scene(&geometry, &defaults());
        let view = request_fit(&FailingFitter, &scene.fit);

        assert_eq!(view.center, geometry.center);
        assert!((view.zoom - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn identical_points_are_degenerate() {
        let fitter = PlanarFitter::new(800, 600, 18.0);
        assert_eq!(
            fitter.fit_region(&region(1.0, 2.0, 1.0, 2.0, 0)),
            Err(FitError::Degenerate)
        );
    }

    #[test]
    fn padding_larger_than_viewport_is_rejected() {
        let fitter = PlanarFitter::new(100, 100, 18.0);
        assert_eq!(
            fitter.fit_region(&region(0.0, 0.0, 1.0, 1.0, 50)),
            Err(FitError::ViewportTooSmall)
        );
    }

    #[test]
    fn whole_world_fits_at_zoom_zero() {
        let fitter = PlanarFitter::new(256, 256, 18.0);
        let view = fitter.fit_region(&region(-90.0, -180.0, 90.0, 180.0, 0)).unwrap();
        assert!(view.zoom.abs() < f64::EPSILON);
        assert_eq!(view.center, LatLng::new(0.0, 0.0));
    }

    #[test]
    fn small_region_zooms_in_and_clamps() {
        let fitter = PlanarFitter::new(1024, 768, 18.0);
        // Height limits: log2(728 * 360 / 2.56) ~= 16.64 against 17.08 for width.
        let view = fitter
            .fit_region(&region(-12.05, -77.03, -12.04, -77.02, 20))
            .unwrap();
        assert!((view.zoom - 16.0).abs() < f64::EPSILON, "zoom {}", view.zoom);

        let tiny = fitter
            .fit_region(&region(0.0, 0.0, 0.000_001, 0.000_001, 0))
            .unwrap();
        assert!((tiny.zoom - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn line_region_uses_the_nonzero_axis() {
        let fitter = PlanarFitter::new(512, 512, 18.0);
        let view = fitter.fit_region(&region(0.0, 0.0, 0.0, 360.0, 0)).unwrap();
        assert!((view.zoom - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn successful_fit_is_returned() {
        let input = "[[-77.03,-12.05],[-77.02,-12.05],[-77.02,-12.04]]";
        let geometry = derive_geometry(BoundaryInput::Text(input), None, None, &defaults());
        let scene = build_scene(&geometry, &defaults());
        let view = request_fit(&PlanarFitter::new(1024, 768, 18.0), &scene.fit);
        let region = scene.fit.region.unwrap();
        assert_eq!(view.center, region.center());
    }

    #[test]
    fn negative_or_nan_max_zoom_is_rejected() {
        let area = region(-12.05, -77.03, -12.04, -77.02, 20);
        assert_eq!(
            PlanarFitter::new(800, 600, -1.0).fit_region(&area),
            Err(FitError::InvalidMaxZoom(-1.0))
        );
        assert!(matches!(
            PlanarFitter::new(800, 600, f64::NAN).fit_region(&area),
            Err(FitError::InvalidMaxZoom(z)) if z.is_nan()
        ));
    }

    #[test]
    fn invalid_max_zoom_falls_back_to_center() {
        let input = "[[-77.03,-12.05],[-77.02,-12.04]]";
        let geometry = derive_geometry(BoundaryInput::Text(input), None, None, &defaults());
        let scene = build_scene(&geometry, &defaults());
        let view = request_fit(&PlanarFitter::new(800, 600, -1.0), &scene.fit);

        assert_eq!(view.center, geometry.center);
        assert!((view.zoom - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn request_padding_overrides_region_padding() {
        let request = FitRequest {
            ring: None,
            center: LatLng::new(0.5, 0.5),
            region: Some(region(0.0, 0.0, 1.0, 1.0, 0)),
            padding_px: 50,
            default_zoom: 13.0,
        };
        // 100px minus 2 * 50px padding leaves nothing, so the fit fails.
        let view = request_fit(&PlanarFitter::new(100, 100, 18.0), &request);
        assert!((view.zoom - 13.0).abs() < f64::EPSILON);

        let unpadded = FitRequest {
            padding_px: 0,
            ..request
        };
        let view = request_fit(&PlanarFitter::new(100, 100, 18.0), &unpadded);
        assert!((view.zoom - 13.0).abs() > f64::EPSILON);
    }
}
