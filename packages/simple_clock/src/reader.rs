//! Transient views that measure and emit the time elapsed since a stopwatch reference.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::stopwatch::Reference;
use crate::{Level, Precision, Result, Stopwatch, TimeFormat};

/// Measures the time since a stopwatch reference and moves the last call reference to now.
///
/// Obtained from [`Stopwatch::since_start()`] or [`Stopwatch::since_last_call()`]. The label
/// and format of emitted text default to the stopwatch configuration and can be overridden
/// for this one measurement before calling one of the consuming methods, which read the clock.
///
/// # Examples
///
/// ```
/// use simple_clock::{Precision, Stopwatch};
///
/// let mut stopwatch = Stopwatch::started();
///
/// // Prints "elapsed since start: 0.00s" (or a little more).
/// stopwatch.since_start().print();
///
/// // Prints "setup: 0.000s" (or a little more).
/// let seconds = stopwatch
///     .since_last_call()
///     .label("setup")
///     .precision(Precision::new(3))
///     .print();
/// assert!(seconds >= 0.0);
/// ```
#[derive(Debug)]
#[must_use = "the clock is only read when a consuming method such as get() or print() is called"]
pub struct UpdatingReader<'a> {
    stopwatch: &'a mut Stopwatch,
    reference: Reference<'a>,
    label: Option<Cow<'a, str>>,
    format: Option<TimeFormat>,
}

impl<'a> UpdatingReader<'a> {
    pub(crate) fn new(stopwatch: &'a mut Stopwatch, reference: Reference<'a>) -> Self {
        Self {
            stopwatch,
            reference,
            label: None,
            format: None,
        }
    }

    /// Overrides the label of emitted text.
    pub fn label(mut self, label: impl Into<Cow<'a, str>>) -> Self {
        self.label = Some(label.into());
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

    /// Moves the last call reference to now without measuring anything.
    pub fn call(self) {
        let now = self.stopwatch.now();
        self.stopwatch.checkpoint(now);
    }

    /// Returns the elapsed seconds.
    pub fn get(self) -> f64 {
        let (seconds, now) = self.stopwatch.measure(self.reference);
        self.stopwatch.checkpoint(now);
        seconds
    }

    /// Prints `"{label}: {value}s"` to standard output and returns the elapsed seconds.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print(self) -> f64 {
        let (seconds, line) = self.measure();
        println!("{line}");
        seconds
    }

    /// Writes `"{label}: {value}s"` and a line terminator to `writer` and returns the
    /// elapsed seconds.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `writer`. The clock has been read and the last call
    /// reference moved by then.
    pub fn write_to(self, writer: &mut impl Write) -> io::Result<f64> {
        let (seconds, line) = self.measure();
        writeln!(writer, "{line}")?;
        Ok(seconds)
    }

    /// Sends `"{label}: {value}s"` to the log sink at the given level and returns the
    /// elapsed seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnconfiguredSink`][crate::Error::UnconfiguredSink] if the stopwatch has
    /// no log sink. The clock is not read in that case.
    pub fn log(self, level: Level) -> Result<f64> {
        let sink = self.stopwatch.sink_for(level)?;
        let (seconds, line) = self.measure();
        level.emit(sink.as_ref(), &line);
        Ok(seconds)
    }

    /// Sends the measurement to the log sink at debug level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn debug(self) -> Result<f64> {
        self.log(Level::Debug)
    }

    /// Sends the measurement to the log sink at info level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn info(self) -> Result<f64> {
        self.log(Level::Info)
    }

    /// Sends the measurement to the log sink at warning level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn warning(self) -> Result<f64> {
        self.log(Level::Warning)
    }

    /// Sends the measurement to the log sink at error level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn error(self) -> Result<f64> {
        self.log(Level::Error)
    }

    fn measure(self) -> (f64, String) {
        let Self {
            stopwatch,
            reference,
            label,
            format,
        } = self;

        let (seconds, now) = stopwatch.measure(reference);
        stopwatch.checkpoint(now);

        let line = stopwatch.render_line(reference, label.as_deref(), format.as_ref(), seconds);
        (seconds, line)
    }
}

/// Measures the time since a stopwatch reference or marker without changing the stopwatch.
///
/// Obtained from [`Stopwatch::silent()`], [`Stopwatch::since()`] or
/// [`Stopwatch::since_value()`]. Offers the same overrides and consuming methods as
/// [`UpdatingReader`].
///
/// # Examples
///
/// ```
/// use simple_clock::Stopwatch;
///
/// let stopwatch = Stopwatch::started();
/// let marker = stopwatch.mark_named("phase 2");
///
/// // Prints "phase 2: 0.00s" (or a little more).
/// stopwatch.since(&marker).print();
///
/// // Prints "so far: 0.00s" (or a little more).
/// stopwatch.silent().since_start().label("so far").print();
/// ```
#[derive(Debug)]
#[must_use = "the clock is only read when a consuming method such as get() or print() is called"]
pub struct SilentReader<'a> {
    stopwatch: &'a Stopwatch,
    reference: Reference<'a>,
    label: Option<Cow<'a, str>>,
    format: Option<TimeFormat>,
}

impl<'a> SilentReader<'a> {
    pub(crate) fn new(stopwatch: &'a Stopwatch, reference: Reference<'a>) -> Self {
        Self {
            stopwatch,
            reference,
            label: None,
            format: None,
        }
    }

    /// Overrides the label of emitted text.
    pub fn label(mut self, label: impl Into<Cow<'a, str>>) -> Self {
        self.label = Some(label.into());
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

    /// Returns the elapsed seconds.
    pub fn get(self) -> f64 {
        self.stopwatch.measure(self.reference).0
    }

    /// Prints `"{label}: {value}s"` to standard output and returns the elapsed seconds.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print(self) -> f64 {
        let (seconds, line) = self.measure();
        println!("{line}");
        seconds
    }

    /// Writes `"{label}: {value}s"` and a line terminator to `writer` and returns the
    /// elapsed seconds.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `writer`.
    pub fn write_to(self, writer: &mut impl Write) -> io::Result<f64> {
        let (seconds, line) = self.measure();
        writeln!(writer, "{line}")?;
        Ok(seconds)
    }

    /// Sends `"{label}: {value}s"` to the log sink at the given level and returns the
    /// elapsed seconds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnconfiguredSink`][crate::Error::UnconfiguredSink] if the stopwatch has
    /// no log sink.
    pub fn log(self, level: Level) -> Result<f64> {
        let sink = self.stopwatch.sink_for(level)?;
        let (seconds, line) = self.measure();
        level.emit(sink.as_ref(), &line);
        Ok(seconds)
    }

    /// Sends the measurement to the log sink at debug level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn debug(self) -> Result<f64> {
        self.log(Level::Debug)
    }

    /// Sends the measurement to the log sink at info level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn info(self) -> Result<f64> {
        self.log(Level::Info)
    }

    /// Sends the measurement to the log sink at warning level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn warning(self) -> Result<f64> {
        self.log(Level::Warning)
    }

    /// Sends the measurement to the log sink at error level.
    ///
    /// # Errors
    ///
    /// See [`log()`][Self::log].
    pub fn error(self) -> Result<f64> {
        self.log(Level::Error)
    }

    fn measure(self) -> (f64, String) {
        let (seconds, _) = self.stopwatch.measure(self.reference);

        let line = self.stopwatch.render_line(
            self.reference,
            self.label.as_deref(),
            self.format.as_ref(),
            seconds,
        );
        (seconds, line)
    }
}
