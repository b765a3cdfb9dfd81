//! Error Types for Sensor Table Misconfiguration
//!
//! The registry has exactly one error path: a handwritten sensor table that
//! violates its static invariants, caught once at construction. Runtime
//! conditions are never errors here: an unknown type_id resolves to the
//! sentinel descriptor and an out-of-range reading is a classification
//! outcome, both handled by the caller.
//!
//! Errors are kept small for embedded use: `Copy`, no heap allocation, only
//! inline `&'static str` and `f32` payloads.

use thiserror_no_std::Error;

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// A static sensor table entry violates its invariants.
///
/// These indicate a programming error in the handwritten table, not a
/// runtime condition, and are treated as fatal at initialization.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RegistryError {
    /// Two entries share a type_id; the earlier one would silently shadow
    /// the later one in lookups.
    #[error("duplicate type_id \"{type_id}\" in sensor table")]
    DuplicateTypeId {
        /// The type_id that appears more than once.
        type_id: &'static str,
    },

    /// min_value does not lie strictly below max_value.
    #[error("descriptor \"{type_id}\" has inverted range [{min}, {max}]")]
    InvertedRange {
        /// The offending entry's type_id.
        type_id: &'static str,
        /// Configured lower bound.
        min: f32,
        /// Configured upper bound.
        max: f32,
    },

    /// Change-detection threshold is negative (or not a valid number).
    #[error("descriptor \"{type_id}\" has negative threshold {threshold}")]
    NegativeThreshold {
        /// The offending entry's type_id.
        type_id: &'static str,
        /// Configured threshold.
        threshold: f32,
    },

    /// A required string field is empty.
    #[error("descriptor \"{type_id}\" has empty field \"{field}\"")]
    EmptyField {
        /// The offending entry's type_id (may itself be empty).
        type_id: &'static str,
        /// Name of the empty field.
        field: &'static str,
    },

    /// unit_code does not belong to the UCUM catalogue.
    #[error("descriptor \"{type_id}\" references unknown unit code \"{unit_code}\"")]
    UnrecognizedUnitCode {
        /// The offending entry's type_id.
        type_id: &'static str,
        /// The unrecognized code.
        unit_code: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for RegistryError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::DuplicateTypeId { type_id } => {
                defmt::write!(fmt, "duplicate type_id {}", type_id)
            }
            Self::InvertedRange { type_id, min, max } => {
                defmt::write!(fmt, "{}: inverted range [{}, {}]", type_id, min, max)
            }
            Self::NegativeThreshold { type_id, threshold } => {
                defmt::write!(fmt, "{}: negative threshold {}", type_id, threshold)
            }
            Self::EmptyField { type_id, field } => {
                defmt::write!(fmt, "{}: empty field {}", type_id, field)
            }
            Self::UnrecognizedUnitCode { type_id, unit_code } => {
                defmt::write!(fmt, "{}: unknown unit code {}", type_id, unit_code)
            }
        }
    }
}
