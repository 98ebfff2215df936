use addrbook_core::error::{AddrbookError, Result};
use addrbook_core::models::{Axis, CoordinateInput};

use crate::models::GeoPoint;
use crate::normalize::normalize;

/// Check a normalized value against the inclusive bounds of its axis.
///
/// NaN never passes.
pub fn validate_axis(axis: Axis, value: f64) -> Result<f64> {
    let (min, max) = axis.bounds();
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(AddrbookError::CoordinateOutOfRange { axis, value, min, max })
    }
}

/// Normalize and validate a raw latitude/longitude pair
pub fn resolve_point(latitude: &CoordinateInput, longitude: &CoordinateInput) -> Result<GeoPoint> {
    let lat = normalize(latitude)?;
    let lon = normalize(longitude)?;
    GeoPoint::new(lat, lon)
}
