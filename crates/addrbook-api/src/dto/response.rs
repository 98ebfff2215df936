use addrbook_core::models::{LocationRecord, RecordId};
use serde::Serialize;

/// Address as returned to clients
///
/// Coordinates are echoed back as text, exactly as they were stored.
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub id: i64,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}

impl From<LocationRecord> for AddressResponse {
    fn from(record: LocationRecord) -> Self {
        Self {
            id: record.id.0,
            name: record.name,
            latitude: record.latitude.to_raw_string(),
            longitude: record.longitude.to_raw_string(),
        }
    }
}

/// Confirmation body of `DELETE /addresses/{id}`
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub id: i64,
}

impl DeleteResponse {
    pub fn deleted(id: RecordId) -> Self {
        Self {
            message: "Address deleted successfully",
            id: id.0,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub storage: &'static str,
}

impl HealthResponse {
    pub fn ok(storage: &'static str) -> Self {
        Self { status: "ok", service: "addrbook-api", storage }
    }
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to the Address Book API",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
