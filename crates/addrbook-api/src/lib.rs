pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod router;
pub mod services;
pub mod state;

pub use config::{ApiConfig, LogConfig, LogFormat};
pub use router::create_router;
pub use state::AppState;
