//! Tests for the state store and its subscriptions.

use std::cell::RefCell;
use std::rc::Rc;

use npf_core::StateStore;
use npf_model::{CameraConfiguration, Field, Numeric, SensorSize, TrailType, Update};
use proptest::prelude::*;

fn recorder(store: &mut StateStore) -> Rc<RefCell<Vec<CameraConfiguration>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _subscription = store.subscribe(move |config| sink.borrow_mut().push(config.clone()));
    seen
}

// ============================================================================
// Update semantics
// ============================================================================

#[test]
fn test_initial_snapshot_is_default() {
    let store = StateStore::new();
    assert_eq!(store.snapshot(), &CameraConfiguration::default());
    assert_eq!(store.snapshot().to_string(), "{full, 6000, 50, 1.4, pin-point}");
}

#[test]
fn test_sequential_updates_replace_only_their_field() {
    let mut store = StateStore::new();
    store.apply_raw(Field::FNumber, "2.8");
    store.apply_raw(Field::FocalLength, "85");

    let expected = CameraConfiguration {
        focal_length: Numeric::Number(85),
        f_number: 2.8,
        ..CameraConfiguration::default()
    };
    assert_eq!(store.snapshot(), &expected);
}

#[test]
fn test_choice_field_roundtrips_raw_value() {
    let mut store = StateStore::new();
    store.apply_raw(Field::SensorSize, "mft");
    assert_eq!(store.snapshot().sensor_size.as_str(), "mft");
    assert_eq!(store.snapshot().sensor_size, SensorSize::MicroFourThirds);
}

#[test]
fn test_out_of_set_choice_is_stored_as_is() {
    let mut store = StateStore::new();
    store.apply_raw(Field::TrailType, "star-trails");
    assert_eq!(
        store.snapshot().trail_type,
        TrailType::Unrecognized("star-trails".to_string())
    );
}

#[test]
fn test_invalid_number_stores_sentinel_not_previous_value() {
    let mut store = StateStore::new();
    store.apply_raw(Field::FocalLength, "");
    assert_eq!(store.snapshot().focal_length, Numeric::NotANumber);

    store.apply_raw(Field::FNumber, "wide open");
    assert!(store.snapshot().f_number.is_nan());
}

#[test]
fn test_invalid_number_is_idempotent() {
    let mut store = StateStore::new();
    store.apply_raw(Field::PixelWidth, "abc");
    let first = store.snapshot().clone();
    store.apply_raw(Field::PixelWidth, "abc");
    assert_eq!(store.snapshot(), &first);
}

#[test]
fn test_typed_update_is_applied_directly() {
    let mut store = StateStore::new();
    store.apply(Update::PixelWidth(Numeric::Number(24_000)));
    assert_eq!(store.snapshot().pixel_width, Numeric::Number(24_000));
}

proptest! {
    #[test]
    fn test_integer_text_is_stored(value in 1i64..=10_000) {
        let mut store = StateStore::new();
        store.apply_raw(Field::PixelWidth, &value.to_string());
        prop_assert_eq!(store.snapshot().pixel_width, Numeric::Number(value));
    }

    #[test]
    fn test_float_text_is_stored(tenths in 7u32..=360) {
        let text = format!("{}.{}", tenths / 10, tenths % 10);
        let mut store = StateStore::new();
        store.apply_raw(Field::FNumber, &text);
        prop_assert_eq!(store.snapshot().f_number, text.parse::<f64>().unwrap());
    }

    #[test]
    fn test_non_numeric_text_stores_sentinel(raw in "[a-zA-Z ]{0,10}") {
        let mut store = StateStore::new();
        store.apply_raw(Field::PixelWidth, &raw);
        prop_assert_eq!(store.snapshot().pixel_width, Numeric::NotANumber);
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_each_update_notifies_once_with_full_snapshot() {
    let mut store = StateStore::new();
    let seen = recorder(&mut store);

    store.apply_raw(Field::FNumber, "2.8");
    store.apply_raw(Field::FocalLength, "85");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].f_number, 2.8);
    assert_eq!(seen[0].focal_length, Numeric::Number(50));
    assert_eq!(&seen[1], store.snapshot());
}

#[test]
fn test_invalid_input_still_notifies() {
    let mut store = StateStore::new();
    let seen = recorder(&mut store);
    store.apply_raw(Field::PixelWidth, "not a number");
    assert_eq!(seen.borrow().len(), 1);
    assert!(seen.borrow()[0].pixel_width.is_nan());
}

#[test]
fn test_subscribe_does_not_replay_current_snapshot() {
    let mut store = StateStore::new();
    let seen = recorder(&mut store);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_every_subscriber_is_notified() {
    let mut store = StateStore::new();
    let first = recorder(&mut store);
    let second = recorder(&mut store);
    assert_eq!(store.subscriber_count(), 2);

    store.apply_raw(Field::SensorSize, "apsc-c");
    assert_eq!(first.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 1);
}

#[test]
fn test_unsubscribed_observer_is_not_notified() {
    let mut store = StateStore::new();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let subscription = store.subscribe(move |_| *counter.borrow_mut() += 1);

    store.apply_raw(Field::FocalLength, "35");
    subscription.unsubscribe();
    store.apply_raw(Field::FocalLength, "24");

    assert_eq!(*count.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}
