//! Sensor Registry Construction and Lookup
//!
//! The registry owns an immutable, fixed-size table of descriptors built
//! once at startup. Lookup is a linear scan in table order: the table is
//! tiny (a handful of channels) and fixed, so a hash map would buy nothing.
//! Lookups are total: an unmatched type_id resolves to the
//! [`UNKNOWN_SENSOR`] sentinel, never a failure.
//!
//! Construction is the one place errors exist: the table is handwritten and
//! the most error-prone part of the system, so every invariant is checked
//! once before the registry is handed out. After that the table is read-only
//! for the session; concurrent readers would be safe without locking, though
//! the firmware runs single-threaded.

use crate::{
    defaults::DEFAULT_SENSORS,
    descriptor::{SensorDescriptor, UNKNOWN_SENSOR},
    errors::{RegistryError, RegistryResult},
    units,
};

/// Immutable lookup table over the static sensor descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRegistry {
    table: &'static [SensorDescriptor],
}

impl SensorRegistry {
    /// Build a registry over `table`, checking every static invariant.
    ///
    /// Rejects empty required fields, unit codes outside the UCUM
    /// catalogue, negative (or NaN) thresholds, ranges where min does not
    /// lie strictly below max, and duplicate type_ids. The first offending
    /// entry is reported; a misconfigured table should abort initialization
    /// rather than ship.
    pub fn new(table: &'static [SensorDescriptor]) -> RegistryResult<Self> {
        for (position, descriptor) in table.iter().enumerate() {
            if let Err(err) = Self::check_descriptor(descriptor) {
                #[cfg(feature = "log")]
                log::error!("sensor table entry {} rejected: {}", position, err);
                return Err(err);
            }
            if table[..position]
                .iter()
                .any(|earlier| earlier.type_id == descriptor.type_id)
            {
                #[cfg(feature = "log")]
                log::error!("sensor table entry {} duplicates an earlier type_id", position);
                return Err(RegistryError::DuplicateTypeId {
                    type_id: descriptor.type_id,
                });
            }
        }
        Ok(Self { table })
    }

    /// Registry over the built-in sensor table ([`DEFAULT_SENSORS`]).
    pub fn with_defaults() -> RegistryResult<Self> {
        Self::new(&DEFAULT_SENSORS)
    }

    /// Look up the descriptor for `type_id`.
    ///
    /// Exact, case-sensitive match; first match in table order wins. Total
    /// over all string inputs: an unmatched id (including the empty string)
    /// returns the [`UNKNOWN_SENSOR`] sentinel.
    pub fn lookup(&self, type_id: &str) -> &SensorDescriptor {
        self.table
            .iter()
            .find(|descriptor| descriptor.type_id == type_id)
            .unwrap_or(&UNKNOWN_SENSOR)
    }

    /// Iterate over the configured descriptors in table order.
    pub fn descriptors(&self) -> impl Iterator<Item = &SensorDescriptor> {
        self.table.iter()
    }

    /// Number of configured channels.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the registry has no configured channels.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn check_descriptor(descriptor: &SensorDescriptor) -> RegistryResult<()> {
        let type_id = descriptor.type_id;

        if type_id.is_empty() {
            return Err(RegistryError::EmptyField {
                type_id,
                field: "type_id",
            });
        }
        if descriptor.common_name.is_empty() {
            return Err(RegistryError::EmptyField {
                type_id,
                field: "common_name",
            });
        }
        if descriptor.quantity_kind.is_empty() {
            return Err(RegistryError::EmptyField {
                type_id,
                field: "quantity_kind",
            });
        }
        if !units::is_recognized(descriptor.unit_code) {
            return Err(RegistryError::UnrecognizedUnitCode {
                type_id,
                unit_code: descriptor.unit_code,
            });
        }
        // Written so NaN fails both checks.
        if !(descriptor.threshold >= 0.0) {
            return Err(RegistryError::NegativeThreshold {
                type_id,
                threshold: descriptor.threshold,
            });
        }
        if !(descriptor.min_value < descriptor.max_value) {
            return Err(RegistryError::InvertedRange {
                type_id,
                min: descriptor.min_value,
                max: descriptor.max_value,
            });
        }
        Ok(())
    }
}
