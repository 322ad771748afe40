//! Platform abstraction trait definitions.

use std::fmt::Debug;

/// Provides timestamps for elapsed time measurement.
///
/// Timestamps are expressed in seconds as floating point. The origin is arbitrary and
/// only differences between timestamps are meaningful.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Reads the current timestamp.
    ///
    /// Successive readings are expected to be monotonically non-decreasing. This is not
    /// verified - a regressing source results in negative durations.
    fn now(&self) -> f64;
}
