//! Tests for npf-model types.

use npf_model::{
    CameraConfiguration, Field, Numeric, SensorSize, TrailType, Update, format_float, parse_float,
    parse_int,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_valid_integer_text_parses_exactly(value in any::<i64>()) {
        prop_assert_eq!(parse_int(&value.to_string()), Numeric::Number(value));
    }

    #[test]
    fn test_valid_float_text_parses_exactly(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        prop_assert_eq!(parse_float(&value.to_string()), value);
    }

    #[test]
    fn test_non_numeric_text_is_not_a_number(raw in "[a-zA-Z][a-zA-Z0-9 ]{0,12}") {
        prop_assert_eq!(parse_int(&raw), Numeric::NotANumber);
        prop_assert_eq!(
            Update::from_raw(Field::PixelWidth, &raw),
            Update::from_raw(Field::PixelWidth, &raw)
        );
    }

    #[test]
    fn test_choice_fields_keep_raw_text(raw in "[a-z-]{1,16}") {
        let sensor = SensorSize::parse_raw(&raw);
        let trail = TrailType::parse_raw(&raw);
        prop_assert_eq!(sensor.as_str(), raw.as_str());
        prop_assert_eq!(trail.as_str(), raw.as_str());
    }
}

#[test]
fn test_default_configuration_matches_form_defaults() {
    let config = CameraConfiguration::default();
    assert_eq!(config.sensor_size, SensorSize::Full);
    assert_eq!(config.pixel_width, Numeric::Number(6000));
    assert_eq!(config.focal_length, Numeric::Number(50));
    assert_eq!(config.f_number, 1.4);
    assert_eq!(config.trail_type, TrailType::PinPoint);
}

#[test]
fn test_unrecognized_sensor_is_stored_verbatim() {
    let config = CameraConfiguration::default()
        .with_update(Update::from_raw(Field::SensorSize, "medium-format"));
    assert_eq!(config.sensor_size.as_str(), "medium-format");
    assert!(!config.sensor_size.is_recognized());
    assert_eq!(config.sensor_size.width_mm(), None);
}

#[test]
fn test_configuration_serializes_camel_case() {
    let json = serde_json::to_value(CameraConfiguration::default()).expect("serialize config");
    assert_eq!(
        json,
        serde_json::json!({
            "sensorSize": "full",
            "pixelWidth": 6000,
            "focalLength": 50,
            "fNumber": 1.4,
            "trailType": "pin-point"
        })
    );
}

#[test]
fn test_not_a_number_serializes_as_null() {
    let config = CameraConfiguration::default()
        .with_update(Update::from_raw(Field::PixelWidth, "wide"))
        .with_update(Update::from_raw(Field::FNumber, "fast"));
    let json = serde_json::to_value(&config).expect("serialize config");
    assert!(json["pixelWidth"].is_null());
    assert!(json["fNumber"].is_null());

    let round: CameraConfiguration = serde_json::from_value(json).expect("deserialize config");
    assert!(round.pixel_width.is_nan());
    assert!(round.f_number.is_nan());
}

#[test]
fn test_unrecognized_choices_roundtrip_through_json() {
    let config = CameraConfiguration::default()
        .with_update(Update::from_raw(Field::TrailType, "streak"));
    let json = serde_json::to_string(&config).expect("serialize config");
    let round: CameraConfiguration = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(round.trail_type, TrailType::Unrecognized("streak".to_string()));
}

#[test]
fn test_oversized_integer_text_stays_numeric() {
    let config = CameraConfiguration::default()
        .with_update(Update::from_raw(Field::PixelWidth, "99999999999999999999"))
        .with_update(Update::from_raw(Field::FocalLength, "-99999999999999999999"));
    assert_eq!(config.pixel_width, Numeric::Number(i64::MAX));
    assert_eq!(config.focal_length, Numeric::Number(i64::MIN));
}

#[test]
fn test_f_number_display_uses_form_notation() {
    let negative_zero = CameraConfiguration::default()
        .with_update(Update::from_raw(Field::FNumber, "-0"));
    assert_eq!(negative_zero.to_string(), "{full, 6000, 50, 0, pin-point}");

    let huge = CameraConfiguration::default().with_update(Update::from_raw(Field::FNumber, "1e21"));
    assert_eq!(format_float(huge.f_number), "1e+21");
    let tiny = CameraConfiguration::default().with_update(Update::from_raw(Field::FNumber, "1e-7"));
    assert_eq!(format_float(tiny.f_number), "1e-7");
}
