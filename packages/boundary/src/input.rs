//! Boundary input and shape classification.
//!
//! A boundary field is untyped: the backend may hand back JSON text, an
//! already-decoded object, a legacy bare array, or nothing. [`BoundaryInput`]
//! captures where the data came from; [`BoundaryShape`] is the result of
//! classifying the decoded value against the four recognized layouts.

use serde_json::Value;

/// Raw boundary data as received from a form field or the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryInput<'a> {
    /// No boundary at all (`null`, `undefined`, or an omitted field).
    Missing,
    /// JSON-encoded boundary text.
    Text(&'a str),
    /// An already-decoded JSON value.
    Value(&'a Value),
}

impl<'a> BoundaryInput<'a> {
    /// Classifies a decoded JSON value.
    ///
    /// `null` is [`Self::Missing`] and a JSON string is treated as encoded
    /// boundary text, since that is how boundary columns are usually stored.
    #[must_use]
    pub fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::String(text) => Self::Text(text.as_str()),
            other => Self::Value(other),
        }
    }

    /// Wraps optional boundary text.
    #[must_use]
    pub fn from_text(text: Option<&'a str>) -> Self {
        text.map_or(Self::Missing, Self::Text)
    }
}

impl<'a> From<&'a str> for BoundaryInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a Value> for BoundaryInput<'a> {
    fn from(value: &'a Value) -> Self {
        Self::from_value(value)
    }
}

impl<'a> From<Option<&'a Value>> for BoundaryInput<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Self::Missing, Self::from_value)
    }
}

/// One of the recognized boundary layouts.
///
/// Each variant borrows the array that holds its rings (or, for
/// [`Self::FlatRing`], the ring itself).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryShape<'a> {
    /// `{"type": "Polygon", "coordinates": [ring, ...]}`
    Polygon(&'a [Value]),
    /// `{"type": "Feature", "geometry": {"type": "Polygon", ...}}`
    Feature(&'a [Value]),
    /// `[[[lng, lat], ...], ...]`
    NestedRings(&'a [Value]),
    /// `[[lng, lat], ...]`
    FlatRing(&'a [Value]),
}

impl<'a> BoundaryShape<'a> {
    /// Matches `value` against the recognized layouts in priority order.
    ///
    /// Returns `None` for anything else, including a `Feature` whose
    /// geometry is not a `Polygon`.
    #[must_use]
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(_) => match type_tag(value)? {
                "Polygon" => polygon_rings(value).map(Self::Polygon),
                "Feature" => {
                    let geometry = value.get("geometry")?;
                    if type_tag(geometry)? == "Polygon" {
                        polygon_rings(geometry).map(Self::Feature)
                    } else {
                        None
                    }
                }
                _ => None,
            },
            Value::Array(items) => {
                let first = items.first()?.as_array()?;
                if first.first().is_some_and(Value::is_array) {
                    Some(Self::NestedRings(items))
                } else if is_number_pair(first) {
                    Some(Self::FlatRing(items))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Returns the outer ring's raw points, or `None` if the first ring is
    /// missing or is not an array.
    #[must_use]
    pub fn outer_ring(self) -> Option<&'a [Value]> {
        match self {
            Self::Polygon(rings) | Self::Feature(rings) | Self::NestedRings(rings) => {
                rings.first()?.as_array().map(Vec::as_slice)
            }
            Self::FlatRing(ring) => Some(ring),
        }
    }

    /// Short label used in log messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Polygon(_) => "Polygon",
            Self::Feature(_) => "Feature",
            Self::NestedRings(_) => "nested rings",
            Self::FlatRing(_) => "flat ring",
        }
    }
}

fn type_tag(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

fn polygon_rings(geometry: &Value) -> Option<&[Value]> {
    geometry
        .get("coordinates")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
}

fn is_number_pair(items: &[Value]) -> bool {
    matches!(items, [a, b] if a.is_number() && b.is_number())
}
