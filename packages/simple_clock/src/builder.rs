//! Configuration of stopwatches before they are started.

use std::borrow::Cow;
use std::sync::Arc;

use crate::pal::PlatformFacade;
use crate::{Error, LogSink, Precision, Result, Stopwatch, TimeFormat};

/// Default label for measurements since the stopwatch was started.
pub const DEFAULT_LABEL_START: &str = "elapsed since start";

/// Default label for measurements since the last non-silent query.
pub const DEFAULT_LABEL_LAST_CALL: &str = "elapsed since last call";

/// Default label for measurements since a raw timestamp.
pub const DEFAULT_LABEL_SINCE: &str = "elapsed";

/// Immutable formatting defaults of a [`Stopwatch`].
///
/// Every value here can be overridden for a single emission via the reader methods
/// ([`label()`][crate::UpdatingReader::label], [`precision()`][crate::UpdatingReader::precision],
/// [`format()`][crate::UpdatingReader::format]).
///
/// | Setting | Default |
/// |---|---|
/// | format | fixed-point with [`Precision::DEFAULT`] (2 digits) |
/// | start label | [`DEFAULT_LABEL_START`] |
/// | last call label | [`DEFAULT_LABEL_LAST_CALL`] |
/// | raw timestamp label | [`DEFAULT_LABEL_SINCE`] |
#[derive(Clone, Debug)]
pub struct StopwatchConfig {
    format: TimeFormat,
    label_start: Cow<'static, str>,
    label_last_call: Cow<'static, str>,
    label_since: Cow<'static, str>,
}

impl StopwatchConfig {
    /// The format used when an emission does not override it.
    #[must_use]
    pub fn format(&self) -> &TimeFormat {
        &self.format
    }

    /// The label of measurements since the stopwatch was started.
    #[must_use]
    pub fn label_start(&self) -> &str {
        &self.label_start
    }

    /// The label of measurements since the last non-silent query.
    #[must_use]
    pub fn label_last_call(&self) -> &str {
        &self.label_last_call
    }

    /// The label of measurements since a raw timestamp.
    #[must_use]
    pub fn label_since(&self) -> &str {
        &self.label_since
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            format: TimeFormat::default(),
            label_start: Cow::Borrowed(DEFAULT_LABEL_START),
            label_last_call: Cow::Borrowed(DEFAULT_LABEL_LAST_CALL),
            label_since: Cow::Borrowed(DEFAULT_LABEL_SINCE),
        }
    }
}

/// Builder for configuring a [`Stopwatch`] before starting it.
///
/// A stopwatch only exists in the started state, so the builder is finished by one of the
/// start methods ([`start()`][Self::start] or [`start_at()`][Self::start_at]).
///
/// # Examples
///
/// ```
/// use simple_clock::{Precision, Stopwatch, TracingSink};
///
/// let mut stopwatch = Stopwatch::builder()
///     .precision(Precision::new(3))
///     .label_start("total")
///     .sink(TracingSink)
///     .start();
///
/// // Do some work...
///
/// stopwatch.since_start().info().unwrap();
/// ```
///
/// Precision from loosely typed input (e.g. a command line argument) is validated:
///
/// ```
/// use simple_clock::{Error, Stopwatch};
///
/// let result = Stopwatch::builder().try_precision("abc");
/// assert!(matches!(result, Err(Error::InvalidArgument { .. })));
/// ```
#[derive(Debug, Default)]
#[must_use = "a builder does nothing until the stopwatch is started"]
pub struct StopwatchBuilder {
    config: StopwatchConfig,
    platform: PlatformFacade,
    sink: Option<Arc<dyn LogSink>>,
}

impl StopwatchBuilder {
    /// Creates a builder with the default configuration and the real monotonic clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: StopwatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the default precision (number of fractional digits) of rendered durations.
    pub fn precision(mut self, precision: Precision) -> Self {
        self.config.format = TimeFormat::Fixed(precision);
        self
    }

    /// Sets the default precision from a value that must be a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the value cannot be converted to a precision.
    pub fn try_precision<P>(self, precision: P) -> Result<Self>
    where
        P: TryInto<Precision, Error = Error>,
    {
        Ok(self.precision(precision.try_into()?))
    }

    /// Sets the default format of rendered durations.
    pub fn format(mut self, format: TimeFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Sets the default label of measurements since start.
    pub fn label_start(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.config.label_start = label.into();
        self
    }

    /// Sets the default label of measurements since the last non-silent query.
    pub fn label_last_call(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.config.label_last_call = label.into();
        self
    }

    /// Sets the default label of measurements since a raw timestamp.
    pub fn label_since(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.config.label_since = label.into();
        self
    }

    /// Reads timestamps from the given function instead of the real monotonic clock.
    ///
    /// The function must return seconds since an arbitrary origin and must not go
    /// backwards. Regressions are not detected and surface as negative durations.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicU32, Ordering};
    ///
    /// use simple_clock::Stopwatch;
    ///
    /// let ticks = Arc::new(AtomicU32::new(0));
    /// let mut stopwatch = Stopwatch::builder()
    ///     .time_source({
    ///         let ticks = Arc::clone(&ticks);
    ///         move || f64::from(ticks.load(Ordering::Relaxed))
    ///     })
    ///     .start();
    ///
    /// ticks.store(5, Ordering::Relaxed);
    /// assert!((stopwatch.elapsed_since_start() - 5.0).abs() < f64::EPSILON);
    /// ```
    pub fn time_source<F>(mut self, source: F) -> Self
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        self.platform = PlatformFacade::custom(source);
        self
    }

    /// Sets the log sink used by leveled emission (`debug`, `info`, `warning`, `error`).
    pub fn sink(self, sink: impl LogSink + 'static) -> Self {
        self.shared_sink(Arc::new(sink))
    }

    /// Sets a log sink that may also be used elsewhere.
    pub fn shared_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    #[cfg(test)]
    pub(crate) fn platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Starts the stopwatch at the current reading of its clock source.
    #[must_use]
    pub fn start(self) -> Stopwatch {
        Stopwatch::from_parts(self.config, self.platform, self.sink, None)
    }

    /// Starts the stopwatch at the given raw timestamp instead of reading the clock.
    #[must_use]
    pub fn start_at(self, base_time: f64) -> Stopwatch {
        Stopwatch::from_parts(self.config, self.platform, self.sink, Some(base_time))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp, reason = "test clock readings are exact")]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;
    use crate::pal::FakePlatform;

    assert_impl_all!(StopwatchConfig: Send, Sync, Debug, Clone);
    assert_impl_all!(StopwatchBuilder: Send, Sync, Debug);

    #[test]
    fn default_config() {
        let config = StopwatchConfig::default();

        assert_eq!(config.format().render(1.0), "1.00s");
        assert_eq!(config.label_start(), "elapsed since start");
        assert_eq!(config.label_last_call(), "elapsed since last call");
        assert_eq!(config.label_since(), "elapsed");
    }

    #[test]
    fn builder_overrides_config() {
        let stopwatch = StopwatchBuilder::new()
            .precision(Precision::new(0))
            .label_start("total")
            .label_last_call("lap")
            .label_since(String::from("since"))
            .start();

        let config = stopwatch.config();
        assert_eq!(config.format().render(7.0), "7s");
        assert_eq!(config.label_start(), "total");
        assert_eq!(config.label_last_call(), "lap");
        assert_eq!(config.label_since(), "since");
    }

    #[test]
    fn try_precision_accepts_numeric_text() {
        let stopwatch = StopwatchBuilder::new().try_precision("1").unwrap().start();
        assert_eq!(stopwatch.config().format().render(2.26), "2.3s");
    }

    #[test]
    fn try_precision_rejects_garbage() {
        let result = StopwatchBuilder::new().try_precision("abc");

        match result {
            Err(Error::InvalidArgument { invalid_value, .. }) => assert_eq!(invalid_value, "abc"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn try_precision_rejects_negative() {
        assert!(StopwatchBuilder::new().try_precision(-3_i64).is_err());
    }

    #[test]
    fn try_precision_rejects_unrenderable_precision() {
        let result = StopwatchBuilder::new().try_precision("70000");

        assert!(matches!(
            result,
            Err(Error::InvalidArgument { ref invalid_value, .. }) if invalid_value == "70000"
        ));
    }

    #[test]
    fn start_reads_clock() {
        let fake = FakePlatform::new();
        fake.set_now(4.0);

        let stopwatch = StopwatchBuilder::new()
            .platform(PlatformFacade::fake(fake))
            .start();

        assert_eq!(stopwatch.start_reference(), 4.0);
        assert_eq!(stopwatch.last_call_reference(), 4.0);
    }

    #[test]
    fn start_at_does_not_read_clock() {
        let fake = FakePlatform::with_readings([100.0]);

        let mut stopwatch = StopwatchBuilder::new()
            .platform(PlatformFacade::fake(fake))
            .start_at(1.0);

        assert_eq!(stopwatch.start_reference(), 1.0);
        // The scripted reading is still the next one.
        assert_eq!(stopwatch.elapsed_since_start(), 99.0);
    }
}
