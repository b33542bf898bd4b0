//! Wall-clock oracle used to stamp the start of a round.

use crate::state::Timestamp;

/// Provides the current time.
///
/// The engine only reads the clock when the first action of a round arrives;
/// everything else derives from the stored [`Timestamp`].
pub trait ClockOracle: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Clock frozen at a fixed instant, for tests and replays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub const fn at_millis(millis: u64) -> Self {
        Self(Timestamp(millis))
    }
}

impl ClockOracle for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
