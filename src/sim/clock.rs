//! Fixed-interval simulation clock
//!
//! The clock exists only while a round is Running: it is created on the
//! Idle -> Running transition and dropped the moment the round leaves
//! Running, so a cancelled round can never receive another tick. Ticks are
//! handed out at their scheduled timestamps, one per call, so a late caller
//! catches up tick by tick instead of collapsing the backlog into one jump.

/// Schedules ticks at a fixed nominal interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    interval_ms: u64,
    next_due_ms: u64,
}

impl SimulationClock {
    /// Clock starting at `start_ms`; the first tick is due one interval later
    pub fn new(start_ms: u64, interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: start_ms + interval_ms.max(1),
        }
    }

    /// Timestamp of the next scheduled tick
    #[inline]
    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Pop the next tick if its scheduled time has come, returning the
    /// timestamp the tick should be evaluated at.
    pub fn take_due(&mut self, now_ms: u64) -> Option<u64> {
        if now_ms >= self.next_due_ms {
            let due = self.next_due_ms;
            self.next_due_ms += self.interval_ms;
            Some(due)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_due_one_interval_in() {
        let mut clock = SimulationClock::new(1000, 30);
        assert_eq!(clock.take_due(1000), None);
        assert_eq!(clock.take_due(1029), None);
        assert_eq!(clock.take_due(1030), Some(1030));
        assert_eq!(clock.take_due(1031), None);
    }

    #[test]
    fn test_late_caller_catches_up_tick_by_tick() {
        let mut clock = SimulationClock::new(0, 30);
        // Caller wakes up 100ms in: three ticks are due, at their original
        // schedule, not at the wakeup time
        assert_eq!(clock.take_due(100), Some(30));
        assert_eq!(clock.take_due(100), Some(60));
        assert_eq!(clock.take_due(100), Some(90));
        assert_eq!(clock.take_due(100), None);
        assert_eq!(clock.next_due_ms(), 120);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut clock = SimulationClock::new(0, 0);
        assert_eq!(clock.take_due(1), Some(1));
        assert_eq!(clock.take_due(1), None);
    }
}
