//! Measurement against markers, chaining each emission into the next measurement.

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::Arc;

use crate::pal::{Platform, PlatformFacade};
use crate::{
    DEFAULT_MARKER_LABEL, Error, Level, LogSink, Precision, Result, TimeFormat, TimeMarker,
    format_line,
};

/// Measures the time elapsed since [`TimeMarker`]s, without any stopwatch state.
///
/// Each emission of a measurement returns a fresh marker for the moment of emission, so
/// consecutive steps of a process can be timed by feeding the returned marker into the next
/// measurement.
///
/// # Examples
///
/// ```
/// use simple_clock::{Since, mark_named};
///
/// let since = Since::new();
///
/// let marker = mark_named("download");
/// // Download something...
/// let (_, marker) = since.measure(&marker).print();
/// // Parse it...
/// let (seconds, _) = since.measure(&marker).label("parse").print();
/// assert!(seconds >= 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Since {
    format: TimeFormat,
    platform: PlatformFacade,
    sink: Option<Arc<dyn LogSink>>,
}

impl Since {
    /// Creates a measurer that uses the process-wide monotonic clock, the default precision
    /// and no log sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the precision (number of fractional digits) of rendered durations.
    #[must_use]
    pub fn with_precision(self, precision: Precision) -> Self {
        self.with_format(TimeFormat::Fixed(precision))
    }

    /// Sets the precision from a value that must be a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the value cannot be converted to a precision.
    pub fn try_with_precision<P>(self, precision: P) -> Result<Self>
    where
        P: TryInto<Precision, Error = Error>,
    {
        Ok(self.with_precision(precision.try_into()?))
    }

    /// Sets the format of rendered durations.
    #[must_use]
    pub fn with_format(mut self, format: TimeFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the log sink used by leveled emission.
    #[must_use]
    pub fn with_sink(self, sink: impl LogSink + 'static) -> Self {
        self.with_shared_sink(Arc::new(sink))
    }

    /// Sets a log sink that may also be used elsewhere.
    #[must_use]
    pub fn with_shared_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Reads timestamps from the given function instead of the process-wide monotonic clock.
    ///
    /// Markers passed to this measurer must come from the same clock source, for example
    /// via [`Since::mark()`] or [`Since::mark_named()`].
    #[must_use]
    pub fn with_time_source<F>(mut self, source: F) -> Self
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        self.platform = PlatformFacade::custom(source);
        self
    }

    #[cfg(test)]
    pub(crate) fn with_platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Captures the current reading of the clock source of this measurer as a marker labeled
    /// [`DEFAULT_MARKER_LABEL`].
    #[must_use]
    pub fn mark(&self) -> TimeMarker {
        self.mark_named(DEFAULT_MARKER_LABEL)
    }

    /// Captures the current reading of the clock source of this measurer as a labeled marker.
    #[must_use]
    pub fn mark_named(&self, label: impl Into<Cow<'static, str>>) -> TimeMarker {
        TimeMarker::capture(&self.platform, label.into())
    }

    /// Returns the seconds elapsed since the marker.
    #[must_use]
    pub fn elapsed(&self, marker: &TimeMarker) -> f64 {
        self.platform.now() - marker.value()
    }

    /// Reads the clock and returns the measurement since the marker, ready to be emitted.
    ///
    /// The label of the marker is the default label of the emitted text.
    pub fn measure<'a>(&'a self, marker: &'a TimeMarker) -> Lap<'a> {
        Lap {
            since: self,
            seconds: self.elapsed(marker),
            label: Cow::Borrowed(marker.label()),
            format: None,
        }
    }
}

/// A measurement taken by [`Since::measure()`].
///
/// The duration is fixed when the lap is created. Every emission method returns it together
/// with a fresh [`TimeMarker`] (labeled [`DEFAULT_MARKER_LABEL`]) captured right after the
/// emission.
#[derive(Debug)]
#[must_use = "a lap does nothing unless its duration is read or emitted"]
pub struct Lap<'a> {
    since: &'a Since,
    seconds: f64,
    label: Cow<'a, str>,
    format: Option<TimeFormat>,
}

impl<'a> Lap<'a> {
    /// Overrides the label of emitted text.
    pub fn label(mut self, label: impl Into<Cow<'a, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Overrides the precision of emitted text.
    pub fn precision(self, precision: Precision) -> Self {
        self.format(TimeFormat::Fixed(precision))
    }

    /// Overrides the format of emitted text.
    pub fn format(mut self, format: TimeFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// The measured seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// The text that emission produces, without line terminator.
    #[must_use]
    pub fn line(&self) -> String {
        let format = self.format.as_ref().unwrap_or(&self.since.format);
        format_line(&self.label, self.seconds, format)
    }

    /// Prints the measurement to standard output.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print(self) -> (f64, TimeMarker) {
        println!("{}", self.line());
        (self.seconds, self.since.mark())
    }

    /// Writes the measurement and a line terminator to `writer`.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `writer`.
    pub fn write_to(self, writer: &mut impl Write) -> io::Result<(f64, TimeMarker)> {
        writeln!(writer, "{}", self.line())?;
        Ok((self.seconds, self.since.mark()))
    }

    /// Sends the measurement to the log sink at the given level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnconfiguredSink`] if the measurer has no log sink.
    pub fn log(self, level: Level) -> Result<(f64, TimeMarker)> {
        let sink = self
            .since
            .sink
            .as_deref()
            .ok_or(Error::UnconfiguredSink { level })?;

        level.emit(sink, &self.line());
        Ok((self.seconds, self.since.mark()))
    }

    /// Sends the measurement to the log sink at debug level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn debug(self) -> Result<(f64, TimeMarker)> {
        self.log(Level::Debug)
    }

    /// Sends the measurement to the log sink at info level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn info(self) -> Result<(f64, TimeMarker)> {
        self.log(Level::Info)
    }

    /// Sends the measurement to the log sink at warning level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn warning(self) -> Result<(f64, TimeMarker)> {
        self.log(Level::Warning)
    }

    /// Sends the measurement to the log sink at error level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn error(self) -> Result<(f64, TimeMarker)> {
        self.log(Level::Error)
    }
}
