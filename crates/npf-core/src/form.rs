//! Form view model.
//!
//! [`FormView`] describes the calculator form for one snapshot: two dropdowns,
//! three paired text/slider inputs and the derived result. It holds no state
//! of its own; every control value comes from the snapshot it was built from.
//! Edits are turned into [`Update`]s for the caller to apply to the store.

use npf_model::{CameraConfiguration, Field, SensorSize, TrailType, Update, format_float};

use crate::exposure::{ExposureEstimate, NotComputable};
use crate::store::{StateStore, Subscription};

pub const FORM_TITLE: &str = "NPF rule";
pub const REFERENCE_TITLE: &str = "Les coulisses de la règle NPF";
pub const REFERENCE_URL: &str = "https://sahavre.fr/wp/les-coulisses-de-la-regle-npf/";

/// Range and granularity of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderSpec {
    pub const PIXEL_WIDTH: SliderSpec = SliderSpec {
        min: 1.0,
        max: 10000.0,
        step: 1.0,
    };
    pub const FOCAL_LENGTH: SliderSpec = SliderSpec {
        min: 1.0,
        max: 1000.0,
        step: 1.0,
    };
    pub const F_NUMBER: SliderSpec = SliderSpec {
        min: 0.7,
        max: 36.0,
        step: 0.1,
    };

    /// The slider bound to `field`, if it is a numeric field.
    pub fn for_field(field: Field) -> Option<SliderSpec> {
        match field {
            Field::PixelWidth => Some(Self::PIXEL_WIDTH),
            Field::FocalLength => Some(Self::FOCAL_LENGTH),
            Field::FNumber => Some(Self::F_NUMBER),
            Field::SensorSize | Field::TrailType => None,
        }
    }

    /// Clamp `position` into range and snap it to the nearest step.
    ///
    /// A NaN position falls back to the middle of the range.
    pub fn snap(&self, position: f64) -> f64 {
        let position = if position.is_nan() {
            self.min + (self.max - self.min) / 2.0
        } else {
            position
        };
        let clamped = position.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let mut snapped = self.round_to_step(self.min + steps * self.step);
        if snapped > self.max {
            snapped = self.round_to_step(snapped - self.step);
        }
        snapped
    }

    /// Raw text a slider at `position` sends to the store.
    pub fn raw_from_position(&self, position: f64) -> String {
        format_float(self.snap(position))
    }

    /// Thumb position within `[0, 1]` for a stored value.
    pub fn fraction(&self, value: f64) -> f64 {
        (self.snap(value) - self.min) / (self.max - self.min)
    }

    fn round_to_step(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.step_decimals());
        (value * scale).round() / scale
    }

    fn step_decimals(&self) -> i32 {
        format_float(self.step)
            .split_once('.')
            .map_or(0, |(_, fraction)| fraction.len() as i32)
    }
}

/// One entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// A dropdown bound to a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub field: Field,
    pub label: &'static str,
    pub options: Vec<ChoiceOption>,
    /// The stored raw value, which may be outside `options`.
    pub value: String,
}

impl Dropdown {
    /// The option matching the stored value.
    pub fn selected(&self) -> Option<&ChoiceOption> {
        self.options.iter().find(|option| option.value == self.value)
    }
}

/// A text field and slider sharing one bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericInput {
    pub field: Field,
    pub label: &'static str,
    pub prefix: Option<&'static str>,
    pub unit: Option<&'static str>,
    /// Text field contents.
    pub text: String,
    /// Stored value as a float, NaN for the not-a-number sentinel.
    pub value: f64,
    pub slider: SliderSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Dropdown(Dropdown),
    Numeric(NumericInput),
}

impl Control {
    pub fn field(&self) -> Field {
        match self {
            Control::Dropdown(dropdown) => dropdown.field,
            Control::Numeric(input) => input.field,
        }
    }
}

/// The whole form for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub controls: Vec<Control>,
    pub result: Result<ExposureEstimate, NotComputable>,
}

impl FormView {
    pub fn from_snapshot(config: &CameraConfiguration) -> Self {
        let controls = vec![
            Control::Dropdown(Dropdown {
                field: Field::SensorSize,
                label: "Sensor size",
                options: SensorSize::KNOWN
                    .iter()
                    .map(|size| ChoiceOption {
                        value: size.as_str().to_string(),
                        label: size.label().to_string(),
                    })
                    .collect(),
                value: config.sensor_size.to_string(),
            }),
            Control::Numeric(NumericInput {
                field: Field::PixelWidth,
                label: "Image width",
                prefix: None,
                unit: Some("px"),
                text: config.pixel_width.to_string(),
                value: config.pixel_width.value().map_or(f64::NAN, |v| v as f64),
                slider: SliderSpec::PIXEL_WIDTH,
            }),
            Control::Numeric(NumericInput {
                field: Field::FocalLength,
                label: "Focal length (actual)",
                prefix: None,
                unit: Some("mm"),
                text: config.focal_length.to_string(),
                value: config.focal_length.value().map_or(f64::NAN, |v| v as f64),
                slider: SliderSpec::FOCAL_LENGTH,
            }),
            Control::Numeric(NumericInput {
                field: Field::FNumber,
                label: "Aperture",
                prefix: Some("F"),
                unit: None,
                text: format_float(config.f_number),
                value: config.f_number,
                slider: SliderSpec::F_NUMBER,
            }),
            Control::Dropdown(Dropdown {
                field: Field::TrailType,
                label: "Star rendering",
                options: TrailType::KNOWN
                    .iter()
                    .map(|trail| ChoiceOption {
                        value: trail.as_str().to_string(),
                        label: trail.label().to_string(),
                    })
                    .collect(),
                value: config.trail_type.to_string(),
            }),
        ];

        Self {
            controls,
            result: ExposureEstimate::compute(config),
        }
    }

    pub fn control(&self, field: Field) -> Option<&Control> {
        self.controls.iter().find(|control| control.field() == field)
    }

    /// Text typed into a field, forwarded verbatim.
    pub fn text_edit(field: Field, raw: &str) -> Update {
        Update::from_raw(field, raw)
    }

    /// A slider moved to `position`. `None` for fields without a slider.
    pub fn slider_edit(field: Field, position: f64) -> Option<Update> {
        let slider = SliderSpec::for_field(field)?;
        Some(Update::from_raw(field, &slider.raw_from_position(position)))
    }

    /// A dropdown option picked by its raw value.
    pub fn select(field: Field, value: &str) -> Update {
        Update::from_raw(field, value)
    }

    /// Render the current snapshot now and again after every update.
    pub fn bind<R>(store: &mut StateStore, mut render: R) -> Subscription
    where
        R: FnMut(&FormView) + 'static,
    {
        render(&FormView::from_snapshot(store.snapshot()));
        store.subscribe(move |config| render(&FormView::from_snapshot(config)))
    }
}
