//! Normalizes raw boundary input into a [`CanonicalRing`].
//!
//! Boundary data from legacy or manual entry is often partially malformed,
//! so individual bad points are dropped rather than failing the whole
//! boundary. Nothing here panics; every failure path ends in a
//! [`NoBoundary`].

use sector_map_boundary_models::{CanonicalRing, LatLng};
use serde_json::Value;

use crate::NoBoundary;
use crate::input::{BoundaryInput, BoundaryShape};

/// Normalizes `input` into a ring in `{lat, lng}` order.
///
/// # Errors
///
/// Returns [`NoBoundary`] when the input is absent, is not valid JSON, has
/// an unrecognized shape, or contains no valid points. These are all the
/// same "nothing to show" condition to callers.
pub fn normalize(input: BoundaryInput<'_>) -> Result<CanonicalRing, NoBoundary> {
    match input {
        BoundaryInput::Missing => Err(NoBoundary::Missing),
        BoundaryInput::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(NoBoundary::Missing);
            }
            let value: Value = serde_json::from_str(text).map_err(|e| {
                log::debug!("Boundary text is not valid JSON: {e}");
                NoBoundary::InvalidJson {
                    message: e.to_string(),
                }
            })?;
            normalize_value(&value)
        }
        BoundaryInput::Value(value) => normalize_value(value),
    }
}

/// Like [`normalize`], but discards the reason when there is no boundary.
#[must_use]
pub fn normalize_ring(input: BoundaryInput<'_>) -> Option<CanonicalRing> {
    normalize(input).ok()
}

fn normalize_value(value: &Value) -> Result<CanonicalRing, NoBoundary> {
    if value.is_null() {
        return Err(NoBoundary::Missing);
    }

    let shape = BoundaryShape::classify(value).ok_or(NoBoundary::UnrecognizedShape)?;
    let raw_ring = shape.outer_ring().ok_or(NoBoundary::MissingRing)?;

    let points: Vec<LatLng> = raw_ring.iter().filter_map(parse_point).collect();
    let discarded = raw_ring.len() - points.len();
    if discarded > 0 {
        log::debug!(
            "Dropped {discarded} of {} invalid points from {} boundary",
            raw_ring.len(),
            shape.label()
        );
    }

    CanonicalRing::new(points).ok_or(NoBoundary::NoValidPoints { discarded })
}

/// Parses a `[lng, lat]` pair, swapping it into `{lat, lng}` order.
fn parse_point(raw: &Value) -> Option<LatLng> {
    let [lng, lat] = raw.as_array()?.as_slice() else {
        return None;
    };
    let lng = finite(lng)?;
    let lat = finite(lat)?;
    Some(LatLng::new(lat, lng))
}

fn finite(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// Reads a manually entered coordinate from a form value.
///
/// Accepts a JSON number or a numeric string (surrounding whitespace is
/// ignored). Blank strings, non-numeric text, and non-finite values are
/// treated as absent.
#[must_use]
pub fn parse_manual_coordinate(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}
