//! The camera configuration snapshot.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::enums::{SensorSize, TrailType};
use crate::numeric::{Numeric, format_float};
use crate::update::Update;

pub const DEFAULT_PIXEL_WIDTH: i64 = 6000;
pub const DEFAULT_FOCAL_LENGTH: i64 = 50;
pub const DEFAULT_F_NUMBER: f64 = 1.4;

/// The five calculator inputs.
///
/// A snapshot is never edited in place; [`CameraConfiguration::with_update`]
/// returns a new snapshot with exactly one field replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConfiguration {
    pub sensor_size: SensorSize,
    pub pixel_width: Numeric<i64>,
    /// Focal length in millimetres.
    pub focal_length: Numeric<i64>,
    #[serde(deserialize_with = "float_or_nan")]
    pub f_number: f64,
    pub trail_type: TrailType,
}

impl Default for CameraConfiguration {
    fn default() -> Self {
        Self {
            sensor_size: SensorSize::Full,
            pixel_width: Numeric::Number(DEFAULT_PIXEL_WIDTH),
            focal_length: Numeric::Number(DEFAULT_FOCAL_LENGTH),
            f_number: DEFAULT_F_NUMBER,
            trail_type: TrailType::PinPoint,
        }
    }
}

impl CameraConfiguration {
    /// Returns a copy of this snapshot with the targeted field replaced.
    #[must_use]
    pub fn with_update(&self, update: Update) -> Self {
        let mut next = self.clone();
        match update {
            Update::SensorSize(value) => next.sensor_size = value,
            Update::PixelWidth(value) => next.pixel_width = value,
            Update::FocalLength(value) => next.focal_length = value,
            Update::FNumber(value) => next.f_number = value,
            Update::TrailType(value) => next.trail_type = value,
        }
        next
    }
}

impl fmt::Display for CameraConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}, {}, {}}}",
            self.sensor_size,
            self.pixel_width,
            self.focal_length,
            format_float(self.f_number),
            self.trail_type
        )
    }
}

fn float_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
