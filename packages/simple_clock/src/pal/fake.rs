//! Fake platform implementation for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::pal::abstractions::Platform;

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    now: f64,

    /// Readings returned (in order) before falling back to `now`.
    scripted: VecDeque<f64>,
}

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation allows tests to control the timestamps instead of relying on the
/// real clock. Multiple clones of the same `FakePlatform` share the same underlying state,
/// allowing tests to move time forward after the platform has been handed to a stopwatch.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a new fake platform whose clock reads zero.
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                now: 0.0,
                scripted: VecDeque::new(),
            })),
        }
    }

    /// Creates a new fake platform that returns the given readings in order.
    ///
    /// Once the readings are exhausted, the last one is repeated.
    pub(crate) fn with_readings(readings: impl IntoIterator<Item = f64>) -> Self {
        let platform = Self::new();
        platform
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .scripted
            .extend(readings);
        platform
    }

    /// Sets the current timestamp.
    pub(crate) fn set_now(&self, now: f64) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .now = now;
    }

    /// Moves the current timestamp forward by `seconds`.
    pub(crate) fn advance(&self, seconds: f64) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .now += seconds;
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> f64 {
        let mut state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        if let Some(next) = state.scripted.pop_front() {
            state.now = next;
        }

        state.now
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp, reason = "test clock readings are exact")]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();
        assert_eq!(platform.now(), 0.0);
    }

    #[test]
    fn set_and_advance() {
        let platform = FakePlatform::new();
        platform.set_now(5.0);
        assert_eq!(platform.now(), 5.0);

        platform.advance(1.5);
        assert_eq!(platform.now(), 6.5);
    }

    #[test]
    fn scripted_readings_then_repeat_last() {
        let platform = FakePlatform::with_readings([0.0, 2.82, 10.0]);

        assert_eq!(platform.now(), 0.0);
        assert_eq!(platform.now(), 2.82);
        assert_eq!(platform.now(), 10.0);
        assert_eq!(platform.now(), 10.0);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance(3.0);
        assert_eq!(platform2.now(), 3.0);
    }
}
