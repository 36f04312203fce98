//! Diagnostic observer.

use npf_model::{CameraConfiguration, format_float};
use tracing::info;

/// Emit the full snapshot as one structured event.
///
/// Suitable as a [`crate::StateStore::subscribe`] callback.
pub fn log_snapshot(config: &CameraConfiguration) {
    info!(
        sensor_size = %config.sensor_size,
        pixel_width = %config.pixel_width,
        focal_length = %config.focal_length,
        f_number = %format_float(config.f_number),
        trail_type = %config.trail_type,
        "camera configuration"
    );
}
