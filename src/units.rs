//! UCUM Unit Code Catalogue
//!
//! Named string constants for the UCUM (Unified Code for Units of Measure)
//! codes used by sensor descriptors. The catalogue is pure data shared across
//! the firmware: other components reference these symbols when constructing
//! descriptors for additional sensor types.
//!
//! Stability contract: adding a code is backward compatible; renaming or
//! removing one breaks any persisted or transmitted data that references it.

// ===== TEMPERATURE =====

/// Degrees Celsius.
pub const CELSIUS: &str = "Cel";

/// Degrees Fahrenheit.
pub const FAHRENHEIT: &str = "[degF]";

/// Kelvin.
pub const KELVIN: &str = "K";

// ===== PRESSURE =====

/// Pascal.
pub const PASCAL: &str = "Pa";

/// Hectopascal, the conventional unit for barometric pressure.
pub const HECTOPASCAL: &str = "hPa";

/// Kilopascal.
pub const KILOPASCAL: &str = "kPa";

/// Bar.
pub const BAR: &str = "bar";

/// Standard atmosphere.
pub const ATMOSPHERE: &str = "atm";

// ===== LIGHT =====

/// Lux.
pub const LUX: &str = "lx";

/// Candela per square meter (luminance).
pub const CANDELA_PER_M2: &str = "cd/m2";

// ===== ELECTRICAL =====

/// Volt.
pub const VOLT: &str = "V";

/// Ampere.
pub const AMPERE: &str = "A";

/// Watt.
pub const WATT: &str = "W";

/// Joule.
pub const JOULE: &str = "J";

// ===== LENGTH =====

/// Meter.
pub const METER: &str = "m";

/// Centimeter.
pub const CENTIMETER: &str = "cm";

/// Millimeter.
pub const MILLIMETER: &str = "mm";

/// Kilometer.
pub const KILOMETER: &str = "km";

// ===== SPEED =====

/// Meter per second.
pub const METER_PER_SECOND: &str = "m/s";

/// Kilometer per hour.
pub const KILOMETER_PER_HOUR: &str = "km/h";

// ===== MASS =====

/// Gram.
pub const GRAM: &str = "g";

/// Kilogram.
pub const KILOGRAM: &str = "kg";

// ===== CONCENTRATION =====

/// Parts per million.
pub const PPM: &str = "[ppm]";

/// Parts per billion.
pub const PPB: &str = "[ppb]";

/// Mole per liter.
pub const MOLE_PER_LITER: &str = "mol/L";

// ===== SOUND =====

/// Decibel.
pub const DECIBEL: &str = "dB";

// ===== RATIOS =====

/// Percent.
pub const PERCENT: &str = "%";

/// Dimensionless ratio. Also the fallback unit for unconfigured channels.
pub const RATIO: &str = "1";

/// Every code in the catalogue, in declaration order.
pub const ALL: &[&str] = &[
    CELSIUS,
    FAHRENHEIT,
    KELVIN,
    PASCAL,
    HECTOPASCAL,
    KILOPASCAL,
    BAR,
    ATMOSPHERE,
    LUX,
    CANDELA_PER_M2,
    VOLT,
    AMPERE,
    WATT,
    JOULE,
    METER,
    CENTIMETER,
    MILLIMETER,
    KILOMETER,
    METER_PER_SECOND,
    KILOMETER_PER_HOUR,
    GRAM,
    KILOGRAM,
    PPM,
    PPB,
    MOLE_PER_LITER,
    DECIBEL,
    PERCENT,
    RATIO,
];

/// Check whether `code` belongs to the catalogue.
///
/// Used by the registry's startup integrity check; descriptors must not
/// reference unit codes the rest of the firmware cannot interpret.
pub fn is_recognized(code: &str) -> bool {
    ALL.iter().any(|&known| known == code)
}
