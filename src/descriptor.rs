//! Sensor Descriptor Data Model
//!
//! One descriptor per physical sensor channel: standardized UCUM unit code,
//! display label, plausible measurement range, change-detection threshold,
//! and calibration offset. Descriptors are plain immutable records built from
//! static tables; the evaluation helpers on them are pure functions with no
//! side effects, safe to call from any context.
//!
//! The reading loop owns the actual measurement and publish decisions; this
//! module only supplies the policy data and the arithmetic:
//! - `corrected()` applies the calibration offset
//! - `classify()` checks the corrected value against the plausible range
//! - `is_reportable()` applies the change-detection threshold

use crate::units;

/// Per-channel metadata record.
///
/// All string fields borrow from the static sensor table; descriptors are
/// never constructed at runtime. `PartialEq` compares field-by-field, which
/// the determinism tests rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorDescriptor {
    /// Internal lookup key, e.g. "temperature". Case-sensitive, unique.
    pub type_id: &'static str,

    /// Official UCUM code, e.g. "Cel". Must belong to [`units`].
    pub unit_code: &'static str,

    /// Human-readable unit symbol, e.g. "°C". May differ cosmetically
    /// from `unit_code`.
    pub display_unit: &'static str,

    /// Display label, e.g. "Temperature".
    pub common_name: &'static str,

    /// Minimum delta from the last reported value that triggers a new
    /// report. Non-negative.
    pub threshold: f32,

    /// Lower bound of the physically plausible range (inclusive).
    pub min_value: f32,

    /// Upper bound of the physically plausible range (inclusive).
    pub max_value: f32,

    /// Physical quantity classification, e.g. "pressure".
    pub quantity_kind: &'static str,

    /// Value subtracted from the raw reading before any other use.
    pub calibration_offset: f32,
}

/// Classification of a corrected reading against descriptor bounds.
///
/// Out-of-range is an outcome, not an error: the reading loop decides
/// whether to discard, clamp, or flag the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RangeStatus {
    /// Within `[min_value, max_value]`, bounds inclusive.
    InRange,
    /// Outside the plausible range, or not a valid number.
    OutOfRange,
}

/// Which unit string to use when annotating an outgoing message.
///
/// The selection itself (compact vs. full format) is the publisher's
/// concern; the descriptor only carries both forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStyle {
    /// The official UCUM code, e.g. "Cel".
    Code,
    /// The human-readable symbol, e.g. "°C".
    Display,
}

/// Fallback descriptor for unconfigured channels.
///
/// Lookups never fail: an unrecognized type_id resolves to this sentinel so
/// the reading loop can proceed, at the cost of a permissive range and
/// threshold. The values match the firmware's historical fallback entry.
pub const UNKNOWN_SENSOR: SensorDescriptor = SensorDescriptor {
    type_id: "unknown",
    unit_code: units::RATIO,
    display_unit: "",
    common_name: "Unknown",
    threshold: 0.1,
    min_value: -999_999.0,
    max_value: 999_999.0,
    quantity_kind: "unknown",
    calibration_offset: 0.0,
};

impl SensorDescriptor {
    /// Apply the calibration offset to a raw reading.
    ///
    /// Sign convention: the offset is subtracted. The corrected value, not
    /// the raw one, is what range and threshold checks operate on.
    pub fn corrected(&self, raw: f32) -> f32 {
        raw - self.calibration_offset
    }

    /// Classify a corrected value against the plausible range.
    ///
    /// Bounds are inclusive. NaN never satisfies the comparison and
    /// classifies as [`RangeStatus::OutOfRange`].
    pub fn classify(&self, value: f32) -> RangeStatus {
        if value >= self.min_value && value <= self.max_value {
            RangeStatus::InRange
        } else {
            RangeStatus::OutOfRange
        }
    }

    /// Decide whether a corrected value warrants a new report.
    ///
    /// The first reading for a channel is always reportable. Afterwards a
    /// value is reportable when it deviates from the last reported value by
    /// at least the threshold (boundary inclusive).
    pub fn is_reportable(&self, value: f32, last_reported: Option<f32>) -> bool {
        match last_reported {
            None => true,
            Some(prev) => libm::fabsf(value - prev) >= self.threshold,
        }
    }

    /// Unit string for message annotation in the requested style.
    pub fn unit_label(&self, style: UnitStyle) -> &'static str {
        match style {
            UnitStyle::Code => self.unit_code,
            UnitStyle::Display => self.display_unit,
        }
    }
}
