//! Diagnostics hooks for the normalizer and proximity engine.
//!
//! The engine never touches process-wide logging state directly; callers
//! hand it an observer. `TracingObserver` is what the service uses,
//! `NoopObserver` keeps tests quiet.

use addrbook_core::error::AddrbookError;

/// Receives events from coordinate parsing and proximity queries.
///
/// Every method defaults to doing nothing.
pub trait GeoObserver: Send + Sync {
    /// A raw coordinate was turned into decimal degrees
    fn coordinate_parsed(&self, _raw: &str, _value: f64) {}

    /// The coordinate pattern did not match and a plain numeric parse was tried
    fn fallback_parse(&self, _raw: &str) {}

    /// A candidate fell inside the search radius
    fn candidate_matched(&self, _label: &str, _distance_km: f64) {}

    /// A candidate could not be evaluated and was left out of the results
    fn candidate_skipped(&self, _label: &str, _error: &AddrbookError) {}
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GeoObserver for NoopObserver {}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GeoObserver for TracingObserver {
    fn coordinate_parsed(&self, raw: &str, value: f64) {
        tracing::debug!(raw = %raw, value, "Parsed coordinate");
    }

    fn fallback_parse(&self, raw: &str) {
        tracing::warn!(raw = %raw, "Using fallback conversion for coordinate");
    }

    fn candidate_matched(&self, label: &str, distance_km: f64) {
        tracing::debug!(candidate = %label, distance_km, "Candidate within radius");
    }

    fn candidate_skipped(&self, label: &str, error: &AddrbookError) {
        tracing::warn!(
            candidate = %label,
            error = %error,
            "Skipping candidate with unusable coordinates"
        );
    }
}
