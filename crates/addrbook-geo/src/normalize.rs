//! Coordinate normalization.
//!
//! Accepts either a number or a text value such as `"22.705435° N"` and
//! produces a signed decimal-degree value. The direction letter is a sign
//! overlay only: the magnitude is always read literally from the text and
//! `S`/`W` flip its sign. Degree/minute/second notation is not supported.

use addrbook_core::error::{AddrbookError, Result};
use addrbook_core::models::CoordinateInput;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading decimal token, optional degree sign, optional direction letter.
///
/// Only the start of the text is anchored; anything after the direction
/// letter is ignored.
static COORDINATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([-+]?[0-9]*\.?[0-9]+)\s*°?\s*([NSEW])?")
        .expect("coordinate pattern must compile")
});

/// Cardinal direction marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    fn from_letter(letter: &str) -> Option<Self> {
        // Case-insensitive matching admits Unicode case variants such as `ſ`
        match letter.to_uppercase().as_str() {
            "N" => Some(Direction::North),
            "S" => Some(Direction::South),
            "E" => Some(Direction::East),
            "W" => Some(Direction::West),
            _ => None,
        }
    }

    /// Whether this direction flips the sign of the parsed value
    pub fn is_negative(self) -> bool {
        matches!(self, Direction::South | Direction::West)
    }
}

/// Outcome of parsing one coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedCoordinate {
    /// Signed decimal degrees
    pub value: f64,
    /// Direction letter, when the text carried one
    pub direction: Option<Direction>,
    /// True when the pattern did not match and a plain numeric parse was used
    pub fallback: bool,
}

/// Normalize a coordinate to signed decimal degrees.
///
/// Numeric input is returned unchanged; range checks belong to
/// [`crate::validation`].
pub fn normalize(input: &CoordinateInput) -> Result<f64> {
    parse_coordinate(input).map(|parsed| parsed.value)
}

/// Parse a coordinate, keeping details about how the value was obtained
pub fn parse_coordinate(input: &CoordinateInput) -> Result<ParsedCoordinate> {
    match input {
        CoordinateInput::Numeric(value) => Ok(ParsedCoordinate {
            value: *value,
            direction: None,
            fallback: false,
        }),
        CoordinateInput::Text(text) => parse_text(text),
    }
}

fn parse_text(raw: &str) -> Result<ParsedCoordinate> {
    let trimmed = raw.trim();

    if let Some(captures) = COORDINATE_PATTERN.captures(trimmed) {
        let magnitude: f64 = captures[1].parse().map_err(|_| invalid(raw))?;
        if !magnitude.is_finite() {
            return Err(invalid(raw));
        }
        let direction = captures.get(2).and_then(|m| Direction::from_letter(m.as_str()));

        // A leading minus combined with S/W negates twice; kept as is.
        let value = match direction {
            Some(d) if d.is_negative() => -magnitude,
            _ => magnitude,
        };

        return Ok(ParsedCoordinate { value, direction, fallback: false });
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            Ok(ParsedCoordinate { value, direction: None, fallback: true })
        }
        _ => Err(invalid(raw)),
    }
}

fn invalid(raw: &str) -> AddrbookError {
    AddrbookError::InvalidCoordinateFormat { input: raw.to_string() }
}
