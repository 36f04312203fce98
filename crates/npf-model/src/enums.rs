//! Choice fields of the camera configuration.
//!
//! Values are kept exactly as submitted. A raw value outside the known set is
//! stored in an `Unrecognized` variant rather than rejected, so the wire value
//! always round-trips through [`SensorSize::as_str`] / [`TrailType::as_str`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sensor format category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SensorSize {
    /// 36 x 24 mm.
    #[default]
    Full,
    /// Canon APS-C, 22.3 mm wide.
    ApscCanon,
    /// APS-C as used by every other manufacturer, 23.5 mm wide.
    ApscOther,
    /// Micro Four Thirds, 17.3 mm wide.
    MicroFourThirds,
    /// A raw value outside the known set, kept verbatim.
    Unrecognized(String),
}

impl SensorSize {
    /// The selectable formats, in display order.
    pub const KNOWN: [SensorSize; 4] = [
        SensorSize::Full,
        SensorSize::ApscCanon,
        SensorSize::ApscOther,
        SensorSize::MicroFourThirds,
    ];

    /// Map a raw option value onto a variant. Matching is exact.
    pub fn parse_raw(raw: &str) -> Self {
        match raw {
            "full" => SensorSize::Full,
            "apsc-c" => SensorSize::ApscCanon,
            "apsc-x" => SensorSize::ApscOther,
            "mft" => SensorSize::MicroFourThirds,
            other => SensorSize::Unrecognized(other.to_string()),
        }
    }

    /// Returns the raw option value.
    pub fn as_str(&self) -> &str {
        match self {
            SensorSize::Full => "full",
            SensorSize::ApscCanon => "apsc-c",
            SensorSize::ApscOther => "apsc-x",
            SensorSize::MicroFourThirds => "mft",
            SensorSize::Unrecognized(raw) => raw,
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &str {
        match self {
            SensorSize::Full => "Full frame",
            SensorSize::ApscCanon => "APS-C (Canon)",
            SensorSize::ApscOther => "APS-C (other)",
            SensorSize::MicroFourThirds => "Micro Four Thirds",
            SensorSize::Unrecognized(raw) => raw,
        }
    }

    /// Width of the long sensor edge in millimetres.
    pub fn width_mm(&self) -> Option<f64> {
        match self {
            SensorSize::Full => Some(36.0),
            SensorSize::ApscCanon => Some(22.3),
            SensorSize::ApscOther => Some(23.5),
            SensorSize::MicroFourThirds => Some(17.3),
            SensorSize::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SensorSize::Unrecognized(_))
    }
}

impl fmt::Display for SensorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SensorSize {
    fn from(raw: String) -> Self {
        match SensorSize::parse_raw(&raw) {
            SensorSize::Unrecognized(_) => SensorSize::Unrecognized(raw),
            known => known,
        }
    }
}

impl From<SensorSize> for String {
    fn from(value: SensorSize) -> Self {
        match value {
            SensorSize::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// How much star movement the photographer accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TrailType {
    /// Stars render as points.
    #[default]
    PinPoint,
    /// Slightly elongated stars.
    Slight,
    /// Clearly visible trails.
    Visible,
    /// A raw value outside the known set, kept verbatim.
    Unrecognized(String),
}

impl TrailType {
    /// The selectable tolerances, in display order.
    pub const KNOWN: [TrailType; 3] = [TrailType::PinPoint, TrailType::Slight, TrailType::Visible];

    /// Map a raw option value onto a variant. Matching is exact.
    pub fn parse_raw(raw: &str) -> Self {
        match raw {
            "pin-point" => TrailType::PinPoint,
            "slight" => TrailType::Slight,
            "visible" => TrailType::Visible,
            other => TrailType::Unrecognized(other.to_string()),
        }
    }

    /// Returns the raw option value.
    pub fn as_str(&self) -> &str {
        match self {
            TrailType::PinPoint => "pin-point",
            TrailType::Slight => "slight",
            TrailType::Visible => "visible",
            TrailType::Unrecognized(raw) => raw,
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &str {
        match self {
            TrailType::PinPoint => "Pin-point",
            TrailType::Slight => "Slight trail",
            TrailType::Visible => "Visible trail",
            TrailType::Unrecognized(raw) => raw,
        }
    }

    /// Multiplier applied to the pin-point exposure time.
    pub fn factor(&self) -> Option<f64> {
        match self {
            TrailType::PinPoint => Some(1.0),
            TrailType::Slight => Some(1.5),
            TrailType::Visible => Some(2.0),
            TrailType::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TrailType::Unrecognized(_))
    }
}

impl fmt::Display for TrailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TrailType {
    fn from(raw: String) -> Self {
        match TrailType::parse_raw(&raw) {
            TrailType::Unrecognized(_) => TrailType::Unrecognized(raw),
            known => known,
        }
    }
}

impl From<TrailType> for String {
    fn from(value: TrailType) -> Self {
        match value {
            TrailType::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_size_parse_raw() {
        assert_eq!(SensorSize::parse_raw("apsc-c"), SensorSize::ApscCanon);
        assert_eq!(SensorSize::parse_raw("mft").as_str(), "mft");
        assert_eq!(
            SensorSize::parse_raw("MFT"),
            SensorSize::Unrecognized("MFT".to_string())
        );
    }

    #[test]
    fn test_trail_type_factor() {
        assert_eq!(TrailType::PinPoint.factor(), Some(1.0));
        assert_eq!(TrailType::Visible.factor(), Some(2.0));
        assert_eq!(TrailType::parse_raw("heavy").factor(), None);
    }

    #[test]
    fn test_known_sets() {
        assert!(SensorSize::KNOWN.iter().all(SensorSize::is_recognized));
        assert!(TrailType::KNOWN.iter().all(TrailType::is_recognized));
    }
}
