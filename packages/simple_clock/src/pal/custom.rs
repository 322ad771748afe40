//! Platform implementation that delegates to a caller-provided clock source.

use std::fmt;
use std::sync::Arc;

use crate::pal::abstractions::Platform;

/// Platform that reads timestamps from a closure supplied by the caller.
///
/// This is how callers inject a deterministic clock source into a stopwatch, for example
/// a counter that advances by a fixed step on every reading.
#[derive(Clone)]
pub(crate) struct CustomPlatform {
    source: Arc<dyn Fn() -> f64 + Send + Sync>,
}

impl CustomPlatform {
    pub(crate) fn new<F>(source: F) -> Self
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }
}

impl Platform for CustomPlatform {
    fn now(&self) -> f64 {
        (self.source)()
    }
}

impl fmt::Debug for CustomPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomPlatform").finish_non_exhaustive()
    }
}
