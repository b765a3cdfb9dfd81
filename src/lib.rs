//! Sensor metadata registry with UCUM unit codes
//!
//! Holds the per-channel metadata for an embedded environmental-monitoring
//! device: standardized UCUM unit code, display label, plausible range,
//! change-detection threshold, and calibration offset for each physical
//! sensor channel. The reading loop does the measuring and publishing; this
//! crate supplies the policy data and the pure arithmetic around it.
//!
//! Key constraints:
//! - No heap allocation, no I/O, no mutable state after construction
//! - Lookups are total: unknown channels resolve to a sentinel descriptor
//! - The handwritten table is integrity-checked once at startup
//!
//! ```
//! use ucum_registry::{SensorRegistry, RangeStatus};
//!
//! let registry = SensorRegistry::with_defaults()?;
//! let sensor = registry.lookup("temperature");
//!
//! let corrected = sensor.corrected(25.0);
//! if sensor.classify(corrected) == RangeStatus::InRange {
//!     // hand off to the publisher
//! }
//! # Ok::<(), ucum_registry::RegistryError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod defaults;
pub mod descriptor;
pub mod errors;
pub mod registry;
pub mod tracker;
pub mod units;

// Public API
pub use descriptor::{RangeStatus, SensorDescriptor, UnitStyle, UNKNOWN_SENSOR};
pub use errors::{RegistryError, RegistryResult};
pub use registry::SensorRegistry;
pub use tracker::ChangeTracker;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
