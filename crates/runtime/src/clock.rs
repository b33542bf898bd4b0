//! Wall-clock oracle backed by the system time.

use std::time::{SystemTime, UNIX_EPOCH};

use quiz_core::{ClockOracle, Timestamp};

/// Reads [`SystemTime::now`] on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockOracle for SystemClock {
    fn now(&self) -> Timestamp {
        // A clock set before 1970 reads as the epoch.
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        Timestamp::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_moves_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(first.as_millis() > 0);
        assert!(second >= first);
    }
}
