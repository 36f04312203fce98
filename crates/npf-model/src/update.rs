//! Field identifiers and typed update commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::{SensorSize, TrailType};
use crate::error::NpfError;
use crate::numeric::{Numeric, format_float, parse_float, parse_int};

/// One of the five editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    SensorSize,
    PixelWidth,
    FocalLength,
    FNumber,
    TrailType,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::SensorSize,
        Field::PixelWidth,
        Field::FocalLength,
        Field::FNumber,
        Field::TrailType,
    ];

    /// Returns the canonical camelCase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::SensorSize => "sensorSize",
            Field::PixelWidth => "pixelWidth",
            Field::FocalLength => "focalLength",
            Field::FNumber => "fNumber",
            Field::TrailType => "trailType",
        }
    }

    /// Returns true for the fields edited through a text field and slider.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::PixelWidth | Field::FocalLength | Field::FNumber)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = NpfError;

    /// Accepts camelCase, kebab-case and snake_case spellings, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "sensorsize" => Ok(Field::SensorSize),
            "pixelwidth" => Ok(Field::PixelWidth),
            "focallength" => Ok(Field::FocalLength),
            "fnumber" => Ok(Field::FNumber),
            "trailtype" => Ok(Field::TrailType),
            _ => Err(NpfError::UnknownField(s.to_string())),
        }
    }
}

/// A replacement value for exactly one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    SensorSize(SensorSize),
    PixelWidth(Numeric<i64>),
    FocalLength(Numeric<i64>),
    FNumber(f64),
    TrailType(TrailType),
}

impl Update {
    /// Build an update from raw form text.
    ///
    /// Choice fields take the text verbatim; integer fields go through
    /// [`parse_int`] and the f-number through [`parse_float`]. Never fails.
    pub fn from_raw(field: Field, raw: &str) -> Self {
        match field {
            Field::SensorSize => Update::SensorSize(SensorSize::parse_raw(raw)),
            Field::PixelWidth => Update::PixelWidth(parse_int(raw)),
            Field::FocalLength => Update::FocalLength(parse_int(raw)),
            Field::FNumber => Update::FNumber(parse_float(raw)),
            Field::TrailType => Update::TrailType(TrailType::parse_raw(raw)),
        }
    }

    /// The field this update replaces.
    pub fn field(&self) -> Field {
        match self {
            Update::SensorSize(_) => Field::SensorSize,
            Update::PixelWidth(_) => Field::PixelWidth,
            Update::FocalLength(_) => Field::FocalLength,
            Update::FNumber(_) => Field::FNumber,
            Update::TrailType(_) => Field::TrailType,
        }
    }

    /// The new value as display text.
    pub fn value_text(&self) -> String {
        match self {
            Update::SensorSize(value) => value.to_string(),
            Update::PixelWidth(value) | Update::FocalLength(value) => value.to_string(),
            Update::FNumber(value) => format_float(*value),
            Update::TrailType(value) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str_spellings() {
        assert_eq!("pixelWidth".parse::<Field>().unwrap(), Field::PixelWidth);
        assert_eq!("pixel-width".parse::<Field>().unwrap(), Field::PixelWidth);
        assert_eq!("F_NUMBER".parse::<Field>().unwrap(), Field::FNumber);
        assert!("aperture".parse::<Field>().is_err());
    }

    #[test]
    fn test_field_name_roundtrip() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_update_field() {
        for field in Field::ALL {
            assert_eq!(Update::from_raw(field, "1").field(), field);
        }
    }
}
