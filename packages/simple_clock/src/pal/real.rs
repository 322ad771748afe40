//! Real platform implementation using the monotonic clock of the standard library.

use std::sync::LazyLock;
use std::time::Instant;

use crate::pal::abstractions::Platform;

/// The origin of all timestamps produced by the real platform.
///
/// This is fixed on first use, so timestamps from all stopwatches and markers in the
/// process share the same origin and can be compared with each other.
static ORIGIN: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Real implementation of the platform abstraction using [`std::time::Instant`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    fn now(&self) -> f64 {
        ORIGIN.elapsed().as_secs_f64()
    }
}
