//! Change-Detection Bookkeeping
//!
//! The reading loop only publishes a value when it deviates from the last
//! published value by at least the descriptor's threshold. The threshold
//! lives on the descriptor; the last-published state lives here, in a
//! fixed-capacity map keyed by type_id. No allocation, single execution
//! context, nothing to lock.

use heapless::FnvIndexMap;

use crate::descriptor::SensorDescriptor;

/// Last-reported values per channel, for threshold-based change detection.
///
/// `N` is the channel capacity and must be a power of two (heapless index
/// map requirement); the default of 8 covers the built-in table twice over.
#[derive(Debug)]
pub struct ChangeTracker<const N: usize = 8> {
    last: FnvIndexMap<&'static str, f32, N>,
}

impl<const N: usize> Default for ChangeTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ChangeTracker<N> {
    /// Empty tracker; every channel's first reading will be reportable.
    pub fn new() -> Self {
        Self {
            last: FnvIndexMap::new(),
        }
    }

    /// Last value recorded for this channel, if any.
    pub fn last_reported(&self, descriptor: &SensorDescriptor) -> Option<f32> {
        self.last.get(descriptor.type_id).copied()
    }

    /// Whether `corrected` warrants a new report for this channel.
    ///
    /// Pure query; call [`record`](Self::record) after an actual publish so
    /// suppressed values do not move the comparison point.
    pub fn should_report(&self, descriptor: &SensorDescriptor, corrected: f32) -> bool {
        descriptor.is_reportable(corrected, self.last_reported(descriptor))
    }

    /// Record a published value as the new comparison point.
    ///
    /// Updating a known channel never fails. Once `N` distinct channels are
    /// tracked, additional channels are dropped and stay always-reportable;
    /// debug builds assert instead so an undersized `N` shows up during
    /// development.
    pub fn record(&mut self, descriptor: &SensorDescriptor, corrected: f32) {
        let inserted = self.last.insert(descriptor.type_id, corrected);
        debug_assert!(
            inserted.is_ok(),
            "change tracker capacity exhausted: {}",
            descriptor.type_id
        );
    }
}
