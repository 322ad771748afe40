//! Stopwatch state and the queries that read and update its references.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::trace;

use crate::pal::{Platform, PlatformFacade};
use crate::{
    DEFAULT_MARKER_LABEL, Error, Level, LogSink, Result, SilentReader, StopwatchBuilder,
    StopwatchConfig, TimeFormat, TimeMarker, UpdatingReader, format_line,
};

/// Measures elapsed time since it was started and since the last non-silent query.
///
/// A stopwatch holds two references: the moment it was started and the moment of the last
/// call. Both are set by [`start()`][Self::start] and [`restart()`][Self::restart].
///
/// Queries come in two flavors:
///
/// * **Updating** queries ([`since_start()`][Self::since_start],
///   [`since_last_call()`][Self::since_last_call] and their shorthands) move the last call
///   reference to the moment of the query.
/// * **Silent** queries ([`silent()`][Self::silent], [`since()`][Self::since],
///   [`since_value()`][Self::since_value] and the `peek_*` shorthands) leave the stopwatch as
///   it is.
///
/// Any updating query moves the last call reference, including an updating query since
/// start. This lets a loop body be timed via the last call reference while the whole
/// operation is timed via the start reference, as long as only one of the two uses
/// updating queries.
///
/// # Examples
///
/// ```
/// use simple_clock::Stopwatch;
///
/// let mut stopwatch = Stopwatch::started();
///
/// for item in 0..3 {
///     // Process the item...
///     stopwatch.since_last_call().label(format!("item {item}")).print();
/// }
///
/// stopwatch.silent().since_start().print();
/// ```
///
/// # Thread safety
///
/// Queries that move the last call reference require exclusive access (`&mut self`). To
/// share a stopwatch between threads, wrap it in a `Mutex`. Concurrent updating queries then
/// still overwrite each other's last call reference, so each thread measures from whichever
/// update happened to land last.
#[derive(Debug)]
pub struct Stopwatch {
    config: StopwatchConfig,
    platform: PlatformFacade,
    sink: Option<Arc<dyn LogSink>>,

    started_at: f64,
    last_call: f64,
}

/// The timestamp a reader measures from.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Reference<'a> {
    Start,
    LastCall,
    At { value: f64, label: Option<&'a str> },
}

impl Stopwatch {
    /// Creates a builder for configuring a stopwatch before starting it.
    pub fn builder() -> StopwatchBuilder {
        StopwatchBuilder::new()
    }

    /// Creates a stopwatch with the default configuration and starts it.
    #[must_use]
    pub fn started() -> Self {
        StopwatchBuilder::new().start()
    }

    pub(crate) fn from_parts(
        config: StopwatchConfig,
        platform: PlatformFacade,
        sink: Option<Arc<dyn LogSink>>,
        base_time: Option<f64>,
    ) -> Self {
        let base_time = base_time.unwrap_or_else(|| platform.now());

        trace!(base_time, "stopwatch started");

        Self {
            config,
            platform,
            sink,
            started_at: base_time,
            last_call: base_time,
        }
    }

    /// Sets the start and last call references to the current reading of the clock.
    ///
    /// Calling this on a running stopwatch has the same effect as [`restart()`][Self::restart].
    /// Returns the new reference.
    pub fn start(&mut self) -> f64 {
        let now = self.platform.now();
        self.start_at(now)
    }

    /// Sets the start and last call references to the given raw timestamp.
    ///
    /// The timestamp is not validated. Returns the new reference.
    pub fn start_at(&mut self, base_time: f64) -> f64 {
        self.started_at = base_time;
        self.last_call = base_time;

        trace!(base_time, "stopwatch started");

        base_time
    }

    /// Sets the start and last call references to the current reading of the clock.
    ///
    /// Returns the new reference.
    pub fn restart(&mut self) -> f64 {
        self.start()
    }

    /// Sets the start and last call references to the given raw timestamp.
    ///
    /// Returns the new reference.
    pub fn restart_at(&mut self, base_time: f64) -> f64 {
        self.start_at(base_time)
    }

    /// The current reading of the clock source of this stopwatch, in seconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.platform.now()
    }

    /// Captures the current reading of the clock source of this stopwatch as a marker
    /// labeled [`DEFAULT_MARKER_LABEL`].
    #[must_use]
    pub fn mark(&self) -> TimeMarker {
        TimeMarker::capture(&self.platform, Cow::Borrowed(DEFAULT_MARKER_LABEL))
    }

    /// Captures the current reading of the clock source of this stopwatch as a marker.
    #[must_use]
    pub fn mark_named(&self, label: impl Into<Cow<'static, str>>) -> TimeMarker {
        TimeMarker::capture(&self.platform, label.into())
    }

    /// The raw timestamp the stopwatch was last started at.
    #[must_use]
    pub fn start_reference(&self) -> f64 {
        self.started_at
    }

    /// The raw timestamp of the last non-silent query (or of the last start).
    #[must_use]
    pub fn last_call_reference(&self) -> f64 {
        self.last_call
    }

    /// The formatting defaults of this stopwatch.
    #[must_use]
    pub fn config(&self) -> &StopwatchConfig {
        &self.config
    }

    /// Creates an updating reader that measures since the stopwatch was started.
    pub fn since_start(&mut self) -> UpdatingReader<'_> {
        UpdatingReader::new(self, Reference::Start)
    }

    /// Creates an updating reader that measures since the last non-silent query.
    pub fn since_last_call(&mut self) -> UpdatingReader<'_> {
        UpdatingReader::new(self, Reference::LastCall)
    }

    /// Provides access to readers that do not move the last call reference.
    pub fn silent(&self) -> SilentReaders<'_> {
        SilentReaders { stopwatch: self }
    }

    /// Creates a silent reader that measures since the given marker.
    ///
    /// The label of the marker is the default label of emitted measurements.
    pub fn since<'a>(&'a self, marker: &'a TimeMarker) -> SilentReader<'a> {
        SilentReader::new(
            self,
            Reference::At {
                value: marker.value(),
                label: Some(marker.label()),
            },
        )
    }

    /// Creates a silent reader that measures since the given raw timestamp.
    pub fn since_value(&self, value: f64) -> SilentReader<'_> {
        SilentReader::new(self, Reference::At { value, label: None })
    }

    /// Returns the seconds elapsed since start and moves the last call reference to now.
    pub fn elapsed_since_start(&mut self) -> f64 {
        self.since_start().get()
    }

    /// Returns the seconds elapsed since the last non-silent query and moves the last call
    /// reference to now.
    pub fn elapsed_since_last_call(&mut self) -> f64 {
        self.since_last_call().get()
    }

    /// Returns the seconds elapsed since start without changing the stopwatch.
    #[must_use]
    pub fn peek_since_start(&self) -> f64 {
        self.silent().since_start().get()
    }

    /// Returns the seconds elapsed since the last non-silent query without changing the
    /// stopwatch.
    #[must_use]
    pub fn peek_since_last_call(&self) -> f64 {
        self.silent().since_last_call().get()
    }

    /// Returns the seconds elapsed since the given marker.
    #[must_use]
    pub fn elapsed_since(&self, marker: &TimeMarker) -> f64 {
        self.since(marker).get()
    }

    /// Returns the seconds elapsed since the given raw timestamp.
    #[must_use]
    pub fn elapsed_since_value(&self, value: f64) -> f64 {
        self.since_value(value).get()
    }

    /// Reads the clock and returns the elapsed seconds together with the reading.
    pub(crate) fn measure(&self, reference: Reference<'_>) -> (f64, f64) {
        let now = self.platform.now();
        (now - self.reference_value(reference), now)
    }

    pub(crate) fn checkpoint(&mut self, now: f64) {
        self.last_call = now;
    }

    fn reference_value(&self, reference: Reference<'_>) -> f64 {
        match reference {
            Reference::Start => self.started_at,
            Reference::LastCall => self.last_call,
            Reference::At { value, .. } => value,
        }
    }

    /// Renders a measurement line, applying per-emission overrides over the defaults.
    pub(crate) fn render_line(
        &self,
        reference: Reference<'_>,
        label: Option<&str>,
        format: Option<&TimeFormat>,
        seconds: f64,
    ) -> String {
        let label = label.unwrap_or(match reference {
            Reference::Start => self.config.label_start(),
            Reference::LastCall => self.config.label_last_call(),
            Reference::At {
                label: Some(label), ..
            } => label,
            Reference::At { label: None, .. } => self.config.label_since(),
        });

        format_line(label, seconds, format.unwrap_or(self.config.format()))
    }

    /// Returns the sink for leveled emission, failing if none is configured.
    pub(crate) fn sink_for(&self, level: Level) -> Result<Arc<dyn LogSink>> {
        self.sink.clone().ok_or(Error::UnconfiguredSink { level })
    }
}

/// Readers of a [`Stopwatch`] that do not move its last call reference.
///
/// Obtained from [`Stopwatch::silent()`].
#[derive(Clone, Copy, Debug)]
pub struct SilentReaders<'a> {
    stopwatch: &'a Stopwatch,
}

impl<'a> SilentReaders<'a> {
    /// Creates a silent reader that measures since the stopwatch was started.
    pub fn since_start(self) -> SilentReader<'a> {
        SilentReader::new(self.stopwatch, Reference::Start)
    }

    /// Creates a silent reader that measures since the last non-silent query.
    pub fn since_last_call(self) -> SilentReader<'a> {
        SilentReader::new(self.stopwatch, Reference::LastCall)
    }
}
