//! Address Book Core - Domain models and error types
//!
//! This crate contains the record model shared by the geo engine, the
//! storage adapters and the HTTP surface.

pub mod error;
pub mod models;

pub use error::{AddrbookError, Result};
