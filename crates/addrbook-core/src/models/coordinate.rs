//! Raw coordinate values as clients submit them.
//!
//! Coordinates are kept exactly as supplied and only turned into decimal
//! degrees when a distance has to be computed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude or longitude value before normalization.
///
/// JSON numbers deserialize to `Numeric`, JSON strings to `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    Numeric(f64),
    Text(String),
}

impl CoordinateInput {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The stored textual form of this coordinate
    pub fn to_raw_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CoordinateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateInput::Numeric(value) => write!(f, "{}", value),
            CoordinateInput::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for CoordinateInput {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i32> for CoordinateInput {
    fn from(value: i32) -> Self {
        Self::Numeric(f64::from(value))
    }
}

impl From<&str> for CoordinateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CoordinateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Which component of a point a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Inclusive (min, max) bounds in decimal degrees
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Axis::Latitude => (-90.0, 90.0),
            Axis::Longitude => (-180.0, 180.0),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_deserialization() {
        let numeric: CoordinateInput = serde_json::from_str("22.705435").unwrap();
        assert_eq!(numeric, CoordinateInput::Numeric(22.705435));

        let text: CoordinateInput = serde_json::from_str(r#""22.705435° N""#).unwrap();
        assert_eq!(text, CoordinateInput::text("22.705435° N"));
    }

    #[test]
    fn test_text_serializes_verbatim() {
        let json = serde_json::to_string(&CoordinateInput::text("75.84361° E")).unwrap();
        assert_eq!(json, r#""75.84361° E""#);
    }

    #[test]
    fn test_display_keeps_raw_text() {
        assert_eq!(CoordinateInput::text(" 22.7 n ").to_raw_string(), " 22.7 n ");
        assert_eq!(CoordinateInput::from(75.5).to_raw_string(), "75.5");
    }

    #[test]
    fn test_axis_bounds() {
        assert_eq!(Axis::Latitude.bounds(), (-90.0, 90.0));
        assert_eq!(Axis::Longitude.bounds(), (-180.0, 180.0));
        assert_eq!(Axis::Longitude.to_string(), "longitude");
    }
}
