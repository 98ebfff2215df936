//! Error types for the address book

use thiserror::Error;

use crate::models::{Axis, RecordId};

#[derive(Debug, Error)]
pub enum AddrbookError {
    // Coordinate errors
    #[error("Invalid coordinate format: {input}")]
    InvalidCoordinateFormat { input: String },

    #[error("{axis} {value} is out of range: must be between {min} and {max} degrees")]
    CoordinateOutOfRange {
        axis: Axis,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("distance_km must be greater than 0, got {radius_km}")]
    InvalidRadius { radius_km: f64 },

    // Record errors
    #[error("Address with ID {id} not found")]
    RecordNotFound { id: RecordId },

    #[error("Invalid value for {field}: {reason}")]
    Validation { field: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AddrbookError {
    /// Whether the error was caused by caller-supplied coordinates or radius
    pub fn is_query_input(&self) -> bool {
        matches!(
            self,
            AddrbookError::InvalidCoordinateFormat { .. }
                | AddrbookError::CoordinateOutOfRange { .. }
                | AddrbookError::InvalidRadius { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AddrbookError>;
