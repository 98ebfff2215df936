//! Address Book Store - Storage port and adapters
//!
//! This crate defines the record storage port and provides in-memory and
//! PostgreSQL implementations of it.

pub mod memory;
pub mod ports;
pub mod postgres;
