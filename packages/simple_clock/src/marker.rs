//! Opaque points in time that measurements can be taken against.

use std::borrow::Cow;
use std::fmt;

use crate::pal::{Platform, PlatformFacade};

/// The label of a marker created without an explicit label.
pub const DEFAULT_MARKER_LABEL: &str = "Unnamed";

/// An immutable timestamp captured from a clock source, with a human-readable label.
///
/// Markers are created by [`mark()`] and [`mark_named()`] (from the process-wide monotonic
/// clock) or by [`Stopwatch::mark()`][crate::Stopwatch::mark] (from the clock source of that
/// stopwatch). Only markers captured from the same clock source are meaningful to compare.
///
/// The label is used as the default label when a measurement against the marker is emitted.
///
/// # Examples
///
/// ```
/// use simple_clock::{Since, mark_named};
///
/// let marker = mark_named("parsing");
/// // Parse something...
/// let elapsed = Since::new().elapsed(&marker);
/// assert!(elapsed >= 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeMarker {
    value: f64,
    label: Cow<'static, str>,
}

impl TimeMarker {
    /// Creates a marker from a raw timestamp (in seconds) and a label.
    #[must_use]
    pub fn new(value: f64, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    pub(crate) fn capture(platform: &PlatformFacade, label: Cow<'static, str>) -> Self {
        Self {
            value: platform.now(),
            label,
        }
    }

    /// The raw timestamp, in seconds since an arbitrary origin of the clock source.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The label given to the marker when it was created.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for TimeMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Captures the current moment from the process-wide monotonic clock.
///
/// The marker is labeled [`DEFAULT_MARKER_LABEL`].
#[must_use]
pub fn mark() -> TimeMarker {
    TimeMarker::capture(&PlatformFacade::real(), Cow::Borrowed(DEFAULT_MARKER_LABEL))
}

/// Captures the current moment from the process-wide monotonic clock, with a label.
#[must_use]
pub fn mark_named(label: impl Into<Cow<'static, str>>) -> TimeMarker {
    TimeMarker::capture(&PlatformFacade::real(), label.into())
}
