//! Block clock seam
//!
//! The core state machine is pure over epoch seconds; the sequencer stamps
//! each sealed block with the time this trait supplies. Production uses
//! the system clock; tests inject a fixed, advanceable clock so expiry
//! boundaries are exact.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of ledger time for sealed blocks
pub trait BlockClock {
    /// Current time in epoch seconds
    fn now(&self) -> i64;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl BlockClock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Manually controlled clock for deterministic tests
///
/// Clones share the same underlying instant, so a test can keep a handle
/// and move time forward while the sequencer owns its own copy.
#[derive(Debug, Clone)]
pub struct FixedClock(Arc<AtomicI64>);

impl FixedClock {
    /// Create a clock frozen at the given instant
    pub fn new(now: i64) -> Self {
        Self(Arc::new(AtomicI64::new(now)))
    }

    /// Move the clock to an absolute instant
    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }

    /// Advance the clock by the given number of seconds
    pub fn advance(&self, secs: i64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

impl BlockClock for FixedClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_shared_across_clones() {
        let clock = FixedClock::new(1_000);
        let handle = clock.clone();

        handle.advance(500);
        assert_eq!(clock.now(), 1_500);

        handle.set(10);
        assert_eq!(clock.now(), 10);
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
