//! End-to-end tests for the sensor registry
//!
//! Walks the full reading-cycle contract: lookup, calibration, range
//! classification, and change detection, against the built-in table.

use proptest::prelude::*;

use ucum_registry::{
    units, ChangeTracker, RangeStatus, SensorDescriptor, SensorRegistry, UnitStyle,
    UNKNOWN_SENSOR,
};

fn registry() -> SensorRegistry {
    SensorRegistry::with_defaults().expect("built-in table must pass integrity checks")
}

#[test]
fn lookup_identity_for_all_configured_channels() {
    let registry = registry();
    for descriptor in registry.descriptors() {
        assert_eq!(registry.lookup(descriptor.type_id).type_id, descriptor.type_id);
    }
}

#[test]
fn unknown_channel_gets_sentinel() {
    let registry = registry();
    let sensor = registry.lookup("co2");
    assert_eq!(sensor, &UNKNOWN_SENSOR);
    assert_eq!(sensor.unit_code, units::RATIO);
    assert_eq!(sensor.threshold, 0.1);
    assert_eq!(sensor.min_value, -999_999.0);
    assert_eq!(sensor.max_value, 999_999.0);
}

#[test]
fn humidity_scenario() {
    let registry = registry();
    let humidity = registry.lookup("humidity");

    assert_eq!(humidity.unit_code, "%");
    assert_eq!(humidity.threshold, 2.0);
    assert_eq!(humidity.min_value, 0.0);
    assert_eq!(humidity.max_value, 100.0);
    assert_eq!(humidity.calibration_offset, 0.0);
    assert_eq!(humidity.corrected(55.0), 55.0);
}

#[test]
fn pressure_scenario() {
    let registry = registry();
    let pressure = registry.lookup("pressure");

    let corrected = pressure.corrected(1013.25);
    assert_eq!(corrected, 1013.25);
    assert_eq!(pressure.classify(corrected), RangeStatus::InRange);
    assert_eq!(pressure.unit_label(UnitStyle::Code), "hPa");
}

#[test]
fn temperature_range_boundaries() {
    let registry = registry();
    let temperature = registry.lookup("temperature");

    assert_eq!(temperature.classify(90.0), RangeStatus::OutOfRange);
    assert_eq!(temperature.classify(-40.0), RangeStatus::InRange);
}

#[test]
fn full_reading_cycle_with_change_detection() {
    let registry = registry();
    let temperature = registry.lookup("temperature");
    let mut tracker: ChangeTracker = ChangeTracker::new();

    // Raw 25.0 with the 2.5 °C self-heating offset
    let corrected = temperature.corrected(25.0);
    assert_eq!(corrected, 22.5);
    assert_eq!(temperature.classify(corrected), RangeStatus::InRange);

    // First reading always publishes
    assert!(tracker.should_report(temperature, corrected));
    tracker.record(temperature, corrected);

    // A 0.3 °C drift stays below the 0.5 °C threshold
    assert!(!tracker.should_report(temperature, 22.8));
    // A 0.5 °C move meets it exactly
    assert!(tracker.should_report(temperature, 23.0));
}

#[test]
fn registry_construction_is_deterministic() {
    let a = registry();
    let b = registry();
    assert_eq!(a.len(), b.len());
    for (left, right) in a.descriptors().zip(b.descriptors()) {
        assert_eq!(left, right);
    }
}

proptest! {
    #[test]
    fn lookup_is_total(type_id in ".*") {
        let registry = registry();
        let sensor = registry.lookup(&type_id);
        // Either the id matched a table entry, or we got the sentinel.
        prop_assert!(sensor.type_id == type_id || sensor == &UNKNOWN_SENSOR);
    }

    #[test]
    fn corrected_subtracts_offset(raw in -1.0e6f32..1.0e6, offset in -100.0f32..100.0) {
        let sensor = SensorDescriptor {
            calibration_offset: offset,
            ..UNKNOWN_SENSOR
        };
        prop_assert_eq!(sensor.corrected(raw), raw - offset);
    }

    #[test]
    fn zero_offset_is_identity(raw in proptest::num::f32::NORMAL) {
        let sensor = SensorDescriptor {
            calibration_offset: 0.0,
            ..UNKNOWN_SENSOR
        };
        prop_assert_eq!(sensor.corrected(raw), raw);
    }

    #[test]
    fn reportability_matches_threshold(last in -100.0f32..100.0, delta in 0.0f32..10.0) {
        let registry = registry();
        let humidity = registry.lookup("humidity");
        let reportable = humidity.is_reportable(last + delta, Some(last));
        // Stay away from the exact boundary where float rounding decides.
        if delta >= humidity.threshold + 1e-3 {
            prop_assert!(reportable);
        } else if delta <= humidity.threshold - 1e-3 {
            prop_assert!(!reportable);
        }
    }
}
