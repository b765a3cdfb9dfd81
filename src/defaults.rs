//! Built-in Sensor Table
//!
//! Descriptors for the four channels of the MKR ENV shield, with UCUM codes
//! and the deployment's calibration offsets baked in. Offsets are fixed per
//! build; runtime recalibration is out of scope.
//!
//! Ranges come from the shield's sensor datasheets (HTS221 temperature and
//! humidity, LPS22HB pressure, TEMT6000 illuminance).

use crate::descriptor::SensorDescriptor;
use crate::units;

/// The on-board temperature sensor reads ~2.5 °C high due to self-heating.
pub const TEMPERATURE_OFFSET_C: f32 = 2.5;

/// Default descriptor table, in lookup order.
pub const DEFAULT_SENSORS: [SensorDescriptor; 4] = [
    SensorDescriptor {
        type_id: "temperature",
        unit_code: units::CELSIUS,
        display_unit: "°C",
        common_name: "Temperature",
        threshold: 0.5,
        min_value: -40.0,
        max_value: 85.0,
        quantity_kind: "thermodynamic-temperature",
        calibration_offset: TEMPERATURE_OFFSET_C,
    },
    SensorDescriptor {
        type_id: "humidity",
        unit_code: units::PERCENT,
        display_unit: "%",
        common_name: "Relative Humidity",
        threshold: 2.0,
        min_value: 0.0,
        max_value: 100.0,
        quantity_kind: "dimensionless-ratio",
        calibration_offset: 0.0,
    },
    SensorDescriptor {
        type_id: "pressure",
        unit_code: units::HECTOPASCAL,
        display_unit: "hPa",
        common_name: "Atmospheric Pressure",
        threshold: 1.0,
        min_value: 300.0,
        max_value: 1100.0,
        quantity_kind: "pressure",
        calibration_offset: 0.0,
    },
    SensorDescriptor {
        type_id: "illuminance",
        unit_code: units::LUX,
        display_unit: "lx",
        common_name: "Illuminance",
        threshold: 10.0,
        min_value: 0.0,
        max_value: 100_000.0,
        quantity_kind: "illuminance",
        calibration_offset: 0.0,
    },
];
