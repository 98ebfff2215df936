use addrbook_core::models::{CoordinateInput, NewRecord, RecordPatch};
use serde::Deserialize;

/// Body of `POST /addresses`
///
/// Coordinates may be numbers or strings such as `"22.7196° N"`.
#[derive(Debug, Deserialize)]
pub struct CreateAddressRequest {
    pub name: String,
    pub latitude: CoordinateInput,
    pub longitude: CoordinateInput,
}

impl From<CreateAddressRequest> for NewRecord {
    fn from(req: CreateAddressRequest) -> Self {
        NewRecord::new(req.name, req.latitude, req.longitude)
    }
}

/// Body of `PUT /addresses/{id}`; omitted fields keep their value
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAddressRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<CoordinateInput>,
    #[serde(default)]
    pub longitude: Option<CoordinateInput>,
}

impl From<UpdateAddressRequest> for RecordPatch {
    fn from(req: UpdateAddressRequest) -> Self {
        RecordPatch {
            name: req.name,
            latitude: req.latitude,
            longitude: req.longitude,
        }
    }
}

/// Pagination for `GET /addresses`
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: usize,
    pub limit: Option<usize>,
}

/// Query string of `GET /addresses/nearby`
#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    pub latitude: String,
    pub longitude: String,
    pub distance_km: f64,
}
