//! Address Book Geo - Coordinate normalization and proximity search
//!
//! This crate turns raw coordinate values into decimal degrees, validates
//! them, computes great-circle distances and ranks records by distance
//! from a query point.

pub mod models;
pub mod normalize;
pub mod observer;
pub mod proximity;
pub mod validation;

pub use models::{GeoPoint, QueryPoint};
pub use normalize::{normalize, parse_coordinate, Direction, ParsedCoordinate};
pub use observer::{GeoObserver, NoopObserver, TracingObserver};
pub use proximity::{distance, haversine_km, within_radius, Locatable, ProximityEngine};
