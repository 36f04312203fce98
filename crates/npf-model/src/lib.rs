//! Data model for the NPF exposure calculator.

pub mod configuration;
pub mod enums;
pub mod error;
pub mod numeric;
pub mod update;

pub use configuration::{
    CameraConfiguration, DEFAULT_F_NUMBER, DEFAULT_FOCAL_LENGTH, DEFAULT_PIXEL_WIDTH,
};
pub use enums::{SensorSize, TrailType};
pub use error::{NpfError, Result};
pub use numeric::{NAN_TEXT, Numeric, format_float, parse_float, parse_int};
pub use update::{Field, Update};
