use serde::{Deserialize, Serialize};
use std::fmt;

use super::CoordinateInput;
use crate::error::{AddrbookError, Result};

/// Unique identifier for a location record, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named location as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Display name
    pub name: String,

    /// Latitude as supplied by the client
    pub latitude: CoordinateInput,

    /// Longitude as supplied by the client
    pub longitude: CoordinateInput,
}

/// Fields required to create a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    pub latitude: CoordinateInput,
    pub longitude: CoordinateInput,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        latitude: impl Into<CoordinateInput>,
        longitude: impl Into<CoordinateInput>,
    ) -> Self {
        Self {
            name: name.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Check the record before it reaches a store
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }

    /// Attach a store-assigned identity
    pub fn into_record(self, id: RecordId) -> LocationRecord {
        LocationRecord {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<CoordinateInput>,
    #[serde(default)]
    pub longitude: Option<CoordinateInput>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.latitude.is_none() && self.longitude.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }

    /// Apply the supplied fields to `record` in place
    pub fn apply(&self, record: &mut LocationRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(latitude) = &self.latitude {
            record.latitude = latitude.clone();
        }
        if let Some(longitude) = &self.longitude {
            record.longitude = longitude.clone();
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AddrbookError::Validation {
            field: "name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> LocationRecord {
        NewRecord::new("Home", "22.705435° N", "75.84361° E").into_record(RecordId(1))
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let mut record = home();
        let patch = RecordPatch {
            name: Some("Office".to_string()),
            ..Default::default()
        };

        patch.apply(&mut record);

        assert_eq!(record.name, "Office");
        assert_eq!(record.latitude, CoordinateInput::text("22.705435° N"));
        assert_eq!(record.longitude, CoordinateInput::text("75.84361° E"));
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut record = home();
        let patch = RecordPatch::default();
        assert!(patch.is_empty());

        patch.apply(&mut record);
        assert_eq!(record, home());
    }

    #[test]
    fn test_blank_name_rejected() {
        let new = NewRecord::new("   ", "1", "2");
        match new.validate() {
            Err(AddrbookError::Validation { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected Validation error, got {:?}", other),
        }

        let patch = RecordPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_patch_deserializes_partial_body() {
        let patch: RecordPatch = serde_json::from_str(r#"{"latitude": "23.1 N"}"#).unwrap();
        assert!(patch.name.is_none());
        assert_eq!(patch.latitude, Some(CoordinateInput::text("23.1 N")));
        assert!(patch.longitude.is_none());
    }

    #[test]
    fn test_record_serializes_flat() {
        let value = serde_json::to_value(home()).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Home");
        assert_eq!(value["latitude"], "22.705435° N");
    }
}
