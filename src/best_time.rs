//! Best survival time record
//!
//! A single non-negative float, monotonically non-decreasing, persisted
//! under a fixed key. Ties never update the record.

use crate::store::KvStore;

/// Storage key for the best time
pub const BEST_TIME_KEY: &str = "best_time";

/// The longest survived duration ever recorded
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BestTime {
    seconds: f32,
}

impl BestTime {
    /// Load from the store; a missing key means no record yet (0.0)
    pub fn load(store: &impl KvStore) -> Self {
        let seconds = store.get_f32(BEST_TIME_KEY).unwrap_or(0.0).max(0.0);
        Self { seconds }
    }

    /// Fold a round result into the record. Returns true (and updates the
    /// record) only when the survived time strictly exceeds it.
    pub fn record(&mut self, survived_secs: f32) -> bool {
        if survived_secs > self.seconds {
            self.seconds = survived_secs;
            true
        } else {
            false
        }
    }

    /// Persist the current record
    pub fn save(&self, store: &mut impl KvStore) {
        store.put_f32(BEST_TIME_KEY, self.seconds);
        log::info!("best time saved: {:.2}s", self.seconds);
    }

    #[inline]
    pub fn seconds(&self) -> f32 {
        self.seconds
    }
}
