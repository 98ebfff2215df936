mod addresses;
mod health;

pub use addresses::{
    create_address, delete_address, find_nearby_addresses, get_address, list_addresses,
    update_address,
};
pub use health::{health_check, root};
