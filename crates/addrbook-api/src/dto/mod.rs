mod request;
mod response;

pub use request::{CreateAddressRequest, ListParams, NearbyParams, UpdateAddressRequest};
pub use response::{AddressResponse, DeleteResponse, HealthResponse, RootResponse};
