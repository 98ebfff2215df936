//! Point types for the proximity engine.
//!
//! `GeoPoint` wraps a `geo::Point` (x = longitude, y = latitude) whose
//! components are already normalized and range checked.

use addrbook_core::error::Result;
use addrbook_core::models::{Axis, CoordinateInput};

use crate::validation::validate_axis;

/// A validated point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint(geo::Point<f64>);

impl GeoPoint {
    /// Build a point, checking both components against their bounds
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let lat = validate_axis(Axis::Latitude, lat)?;
        let lon = validate_axis(Axis::Longitude, lon)?;
        Ok(Self(geo::Point::new(lon, lat)))
    }

    pub fn lat(&self) -> f64 {
        self.0.y()
    }

    pub fn lon(&self) -> f64 {
        self.0.x()
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        point.0
    }
}

/// Raw center of a proximity query, as supplied by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPoint {
    pub latitude: CoordinateInput,
    pub longitude: CoordinateInput,
}

impl QueryPoint {
    pub fn new(
        latitude: impl Into<CoordinateInput>,
        longitude: impl Into<CoordinateInput>,
    ) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}
