use std::fmt;
use std::sync::Arc;

use addrbook_core::error::{AddrbookError, Result};
use addrbook_core::models::{CoordinateInput, LocationRecord};

use crate::models::{GeoPoint, QueryPoint};
use crate::normalize::parse_coordinate;
use crate::observer::{GeoObserver, NoopObserver, TracingObserver};

/// Mean Earth radius used for all distances, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Anything with a raw latitude/longitude that can be ranked by distance
pub trait Locatable {
    fn latitude(&self) -> &CoordinateInput;

    fn longitude(&self) -> &CoordinateInput;

    /// Short identifier used in diagnostics
    fn label(&self) -> String;
}

impl Locatable for LocationRecord {
    fn latitude(&self) -> &CoordinateInput {
        &self.latitude
    }

    fn longitude(&self) -> &CoordinateInput {
        &self.longitude
    }

    fn label(&self) -> String {
        format!("{} ({})", self.id, self.name)
    }
}

impl Locatable for QueryPoint {
    fn latitude(&self) -> &CoordinateInput {
        &self.latitude
    }

    fn longitude(&self) -> &CoordinateInput {
        &self.longitude
    }

    fn label(&self) -> String {
        format!("({}, {})", self.latitude, self.longitude)
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn latitude(&self) -> &CoordinateInput {
        (**self).latitude()
    }

    fn longitude(&self) -> &CoordinateInput {
        (**self).longitude()
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

/// Great-circle distance between two validated points using the haversine
/// formula. Identical points yield exactly 0.0.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lon = (to.lon() - from.lon()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat().to_radians().cos()
            * to.lat().to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance in kilometers between two raw points
pub fn distance(
    lat1: &CoordinateInput,
    lon1: &CoordinateInput,
    lat2: &CoordinateInput,
    lon2: &CoordinateInput,
) -> Result<f64> {
    ProximityEngine::silent().distance(lat1, lon1, lat2, lon2)
}

/// Records within `radius_km` of `center`, nearest first
pub fn within_radius<C, I>(center: &QueryPoint, candidates: I, radius_km: f64) -> Result<Vec<C>>
where
    C: Locatable,
    I: IntoIterator<Item = C>,
{
    ProximityEngine::silent().within_radius(center, candidates, radius_km)
}

/// How a single candidate fared against a query
#[derive(Debug)]
enum CandidateOutcome {
    Within(f64),
    Outside,
    Skipped(AddrbookError),
}

/// Normalizes coordinates and answers distance queries, reporting what it
/// does to an injected observer.
///
/// Holds no state besides the observer, so a single engine can be shared
/// across concurrent requests.
#[derive(Clone)]
pub struct ProximityEngine {
    observer: Arc<dyn GeoObserver>,
}

impl fmt::Debug for ProximityEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProximityEngine").finish_non_exhaustive()
    }
}

impl Default for ProximityEngine {
    fn default() -> Self {
        Self::new(Arc::new(TracingObserver))
    }
}

impl ProximityEngine {
    pub fn new(observer: Arc<dyn GeoObserver>) -> Self {
        Self { observer }
    }

    /// Engine that reports nothing
    pub fn silent() -> Self {
        Self::new(Arc::new(NoopObserver))
    }

    /// Normalize one coordinate to decimal degrees (no range check)
    pub fn normalize(&self, input: &CoordinateInput) -> Result<f64> {
        let parsed = parse_coordinate(input)?;
        if parsed.fallback {
            self.observer.fallback_parse(&input.to_raw_string());
        }
        self.observer.coordinate_parsed(&input.to_raw_string(), parsed.value);
        Ok(parsed.value)
    }

    /// Distance in kilometers between two raw points.
    ///
    /// All four values are normalized before any range check, so a format
    /// error anywhere takes precedence over a range error.
    pub fn distance(
        &self,
        lat1: &CoordinateInput,
        lon1: &CoordinateInput,
        lat2: &CoordinateInput,
        lon2: &CoordinateInput,
    ) -> Result<f64> {
        let lat1 = self.normalize(lat1)?;
        let lon1 = self.normalize(lon1)?;
        let lat2 = self.normalize(lat2)?;
        let lon2 = self.normalize(lon2)?;

        let from = GeoPoint::new(lat1, lon1)?;
        let to = GeoPoint::new(lat2, lon2)?;

        Ok(haversine_km(from, to))
    }

    /// Normalize and validate a raw point
    pub fn resolve(&self, point: &impl Locatable) -> Result<GeoPoint> {
        let lat = self.normalize(point.latitude())?;
        let lon = self.normalize(point.longitude())?;
        GeoPoint::new(lat, lon)
    }

    /// Candidates within `radius_km` of `center`, nearest first.
    ///
    /// Errors on the center or the radius are returned; a candidate whose
    /// coordinates cannot be used is reported to the observer and left out.
    pub fn within_radius<C, I>(
        &self,
        center: &QueryPoint,
        candidates: I,
        radius_km: f64,
    ) -> Result<Vec<C>>
    where
        C: Locatable,
        I: IntoIterator<Item = C>,
    {
        let ranked = self.nearest_with_distances(center, candidates, radius_km)?;
        Ok(ranked.into_iter().map(|(candidate, _)| candidate).collect())
    }

    /// Like [`within_radius`](Self::within_radius) but keeps each
    /// candidate's distance in kilometers
    pub fn nearest_with_distances<C, I>(
        &self,
        center: &QueryPoint,
        candidates: I,
        radius_km: f64,
    ) -> Result<Vec<(C, f64)>>
    where
        C: Locatable,
        I: IntoIterator<Item = C>,
    {
        if radius_km.is_nan() || radius_km <= 0.0 {
            return Err(AddrbookError::InvalidRadius { radius_km });
        }

        let origin = self.resolve(center)?;

        let mut kept = Vec::new();
        for candidate in candidates {
            match self.evaluate(origin, &candidate, radius_km) {
                CandidateOutcome::Within(distance_km) => {
                    self.observer.candidate_matched(&candidate.label(), distance_km);
                    kept.push((candidate, distance_km));
                }
                CandidateOutcome::Outside => {}
                CandidateOutcome::Skipped(error) => {
                    self.observer.candidate_skipped(&candidate.label(), &error);
                }
            }
        }

        // Stable, so equal distances keep their input order
        kept.sort_by(|a, b| a.1.total_cmp(&b.1));

        Ok(kept)
    }

    fn evaluate(
        &self,
        origin: GeoPoint,
        candidate: &impl Locatable,
        radius_km: f64,
    ) -> CandidateOutcome {
        match self.resolve(candidate) {
            Ok(point) => {
                let distance_km = haversine_km(origin, point);
                if (0.0..=radius_km).contains(&distance_km) {
                    CandidateOutcome::Within(distance_km)
                } else {
                    CandidateOutcome::Outside
                }
            }
            Err(error) => CandidateOutcome::Skipped(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook_core::models::{Axis, NewRecord, RecordId};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(id: i64, name: &str, lat: &str, lon: &str) -> LocationRecord {
        NewRecord::new(name, lat, lon).into_record(RecordId(id))
    }

    fn num(value: f64) -> CoordinateInput {
        CoordinateInput::Numeric(value)
    }

    #[derive(Default)]
    struct CountingObserver {
        parsed: AtomicUsize,
        matched: AtomicUsize,
        skipped: AtomicUsize,
    }

    impl GeoObserver for CountingObserver {
        fn coordinate_parsed(&self, _raw: &str, _value: f64) {
            self.parsed.fetch_add(1, Ordering::SeqCst);
        }

        fn candidate_matched(&self, _label: &str, _distance_km: f64) {
            self.matched.fetch_add(1, Ordering::SeqCst);
        }

        fn candidate_skipped(&self, _label: &str, _error: &AddrbookError) {
            self.skipped.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_same_location_is_zero() {
        let d = distance(&num(22.705435), &num(75.84361), &num(22.705435), &num(75.84361)).unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_same_location_from_text_is_zero() {
        let lat = CoordinateInput::text("22.705435° N");
        let lon = CoordinateInput::text("75.84361° E");
        assert_eq!(distance(&lat, &lon, &lat, &lon).unwrap(), 0.0);
    }

    #[test]
    fn test_indore_to_bhopal() {
        let d = distance(&num(22.7196), &num(75.8577), &num(23.2599), &num(77.4126)).unwrap();
        assert!(d > 165.0 && d < 175.0, "Indore-Bhopal distance {} should be ~170km", d);
    }

    #[test]
    fn test_one_kilometer_by_latitude() {
        let d = distance(&num(22.7000), &num(75.8400), &num(22.7090), &num(75.8400)).unwrap();
        assert!(d > 0.9 && d < 1.1, "distance {} should be ~1km", d);
    }

    #[test]
    fn test_antipodal_points() {
        let d = distance(&num(0.0), &num(0.0), &num(0.0), &num(180.0)).unwrap();
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1e-6);
    }

    #[test]
    fn test_distance_propagates_format_error() {
        let err = distance(&CoordinateInput::text("abc"), &num(0.0), &num(0.0), &num(0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            AddrbookError::InvalidCoordinateFormat { ref input } if input == "abc"
        ));
    }

    #[test]
    fn test_distance_rejects_out_of_range_longitude() {
        let err = distance(&num(0.0), &num(0.0), &num(0.0), &CoordinateInput::text("181 E"))
            .unwrap_err();
        assert!(matches!(
            err,
            AddrbookError::CoordinateOutOfRange { axis: Axis::Longitude, .. }
        ));
    }

    #[test]
    fn test_invalid_radius_does_no_work() {
        let observer = Arc::new(CountingObserver::default());
        let engine = ProximityEngine::new(observer.clone());
        let center = QueryPoint::new(22.7, 75.84);
        let candidates = vec![record(1, "Home", "22.7", "75.84")];

        for radius in [0.0, -5.0, f64::NAN] {
            let err = engine.within_radius(&center, candidates.iter(), radius).unwrap_err();
            assert!(matches!(err, AddrbookError::InvalidRadius { .. }));
        }

        assert_eq!(observer.parsed.load(Ordering::SeqCst), 0);
        assert_eq!(observer.matched.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_empty_candidates() {
        let center = QueryPoint::new(22.7, 75.84);
        let result = within_radius(&center, Vec::<LocationRecord>::new(), 5.0).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_center_point_included_at_zero_distance() {
        let center = QueryPoint::new("22.700", "75.840");
        let candidates = vec![
            record(1, "Near", "22.705", "75.844"),
            record(2, "Center", "22.700", "75.840"),
        ];

        let result = within_radius(&center, candidates, 5.0).unwrap();
        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Center", "Near"]);
    }

    #[test]
    fn test_bad_candidate_is_skipped() {
        let observer = Arc::new(CountingObserver::default());
        let engine = ProximityEngine::new(observer.clone());
        let center = QueryPoint::new(22.7, 75.84);
        let candidates = vec![
            record(1, "Broken", "somewhere", "75.84"),
            record(2, "Polar", "95 N", "75.84"),
            record(3, "Fine", "22.705", "75.844"),
        ];

        let result = engine.within_radius(&center, candidates, 5.0).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Fine");
        assert_eq!(observer.skipped.load(Ordering::SeqCst), 2);
        assert_eq!(observer.matched.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_bad_center_is_surfaced() {
        let candidates = vec![record(1, "Fine", "22.705", "75.844")];

        let err = within_radius(&QueryPoint::new("nowhere", "75.84"), candidates.iter(), 5.0)
            .unwrap_err();
        assert!(matches!(err, AddrbookError::InvalidCoordinateFormat { .. }));

        let err = within_radius(&QueryPoint::new(22.7, 200.0), candidates.iter(), 5.0).unwrap_err();
        assert!(matches!(
            err,
            AddrbookError::CoordinateOutOfRange { axis: Axis::Longitude, .. }
        ));
    }

    #[test]
    fn test_equal_distances_keep_input_order() {
        let center = QueryPoint::new(0.0, 0.0);
        let candidates = vec![
            record(1, "East", "0", "0.01"),
            record(2, "West", "0", "-0.01"),
            record(3, "Origin", "0", "0"),
        ];

        let result = within_radius(&center, candidates, 10.0).unwrap();
        let ids: Vec<i64> = result.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_distances_are_reported_in_order() {
        let engine = ProximityEngine::silent();
        let center = QueryPoint::new(22.7, 75.84);
        let candidates = vec![
            record(1, "Far", "22.72", "75.85"),
            record(2, "Near", "22.705", "75.844"),
        ];

        let ranked = engine.nearest_with_distances(&center, candidates, 5.0).unwrap();
        assert_eq!(ranked[0].0.name, "Near");
        assert_eq!(ranked[1].0.name, "Far");
        assert!(ranked[0].1 < ranked[1].1);
    }

    #[test]
    fn test_radius_bound_is_inclusive() {
        let engine = ProximityEngine::silent();
        let center = QueryPoint::new(22.7, 75.84);
        let target = record(1, "Edge", "22.709", "75.84");
        let exact = engine
            .distance(&center.latitude, &center.longitude, &target.latitude, &target.longitude)
            .unwrap();

        let result = engine.within_radius(&center, vec![target], exact).unwrap();
        assert_eq!(result.len(), 1);
    }
}
