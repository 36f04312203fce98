//! NPF rule evaluation.
//!
//! Detailed form of the rule for a star on the celestial equator:
//!
//! ```text
//! t = k * (16.856 * N + 0.0997 * F + 13.713 * p) / F
//! ```
//!
//! - `N`: f-number
//! - `F`: focal length in mm
//! - `p`: pixel pitch in µm (sensor width / image width)
//! - `k`: trail tolerance (1 pin-point, 1.5 slight, 2 visible)

use npf_model::{CameraConfiguration, Numeric, format_float};
use serde::Serialize;
use thiserror::Error;

/// Long edge of a 35 mm frame, the reference for crop factors.
pub const FULL_FRAME_WIDTH_MM: f64 = 36.0;

const APERTURE_COEFFICIENT: f64 = 16.856;
const FOCAL_LENGTH_COEFFICIENT: f64 = 0.0997;
const PIXEL_PITCH_COEFFICIENT: f64 = 13.713;

/// Why a configuration has no exposure estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotComputable {
    #[error("unrecognized sensor size: {0}")]
    UnrecognizedSensor(String),
    #[error("unrecognized trail type: {0}")]
    UnrecognizedTrail(String),
    #[error("pixel width must be a positive number (got {0})")]
    InvalidPixelWidth(String),
    #[error("focal length must be a positive number (got {0})")]
    InvalidFocalLength(String),
    #[error("f-number must be a positive number (got {0})")]
    InvalidFNumber(String),
}

/// Values derived from one configuration snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExposureEstimate {
    /// Pixel pitch in micrometres.
    pub pixel_pitch_um: f64,
    pub crop_factor: f64,
    /// Focal length giving the same field of view on a 35 mm frame.
    pub equivalent_focal_length_mm: f64,
    /// Longest exposure for the chosen trail tolerance, in seconds.
    pub max_exposure_s: f64,
}

impl ExposureEstimate {
    pub fn compute(config: &CameraConfiguration) -> Result<Self, NotComputable> {
        let sensor_width_mm = config
            .sensor_size
            .width_mm()
            .ok_or_else(|| NotComputable::UnrecognizedSensor(config.sensor_size.to_string()))?;
        let tolerance = config
            .trail_type
            .factor()
            .ok_or_else(|| NotComputable::UnrecognizedTrail(config.trail_type.to_string()))?;
        let pixel_width = positive(config.pixel_width)
            .ok_or_else(|| NotComputable::InvalidPixelWidth(config.pixel_width.to_string()))?;
        let focal_length = positive(config.focal_length)
            .ok_or_else(|| NotComputable::InvalidFocalLength(config.focal_length.to_string()))?;
        let f_number = config.f_number;
        if !(f_number.is_finite() && f_number > 0.0) {
            return Err(NotComputable::InvalidFNumber(format_float(f_number)));
        }

        let pixel_pitch_um = sensor_width_mm * 1000.0 / pixel_width;
        let crop_factor = FULL_FRAME_WIDTH_MM / sensor_width_mm;
        let max_exposure_s = tolerance
            * (APERTURE_COEFFICIENT * f_number
                + FOCAL_LENGTH_COEFFICIENT * focal_length
                + PIXEL_PITCH_COEFFICIENT * pixel_pitch_um)
            / focal_length;

        Ok(Self {
            pixel_pitch_um,
            crop_factor,
            equivalent_focal_length_mm: focal_length * crop_factor,
            max_exposure_s,
        })
    }
}

fn positive(value: Numeric<i64>) -> Option<f64> {
    value.value().filter(|v| *v > 0).map(|v| v as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use npf_model::{Field, Update};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_configuration() {
        let estimate = ExposureEstimate::compute(&CameraConfiguration::default()).unwrap();
        assert!(approx(estimate.pixel_pitch_um, 6.0));
        assert!(approx(estimate.crop_factor, 1.0));
        assert!(approx(estimate.max_exposure_s, 110.8614 / 50.0));
    }

    #[test]
    fn test_zero_focal_length() {
        let config = CameraConfiguration::default().with_update(Update::from_raw(Field::FocalLength, "0"));
        assert_eq!(
            ExposureEstimate::compute(&config),
            Err(NotComputable::InvalidFocalLength("0".to_string()))
        );
    }
}
