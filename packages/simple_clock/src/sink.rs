//! Severity-leveled destinations for emitted measurements.

use std::fmt::{self, Debug, Display};

/// Severity level at which a measurement is emitted to a [`LogSink`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Level {
    /// Diagnostic detail.
    Debug,

    /// Normal operational information.
    Info,

    /// Something unexpected that does not prevent progress.
    Warning,

    /// A failure.
    Error,
}

impl Level {
    /// Sends `message` to the method of `sink` that matches this level.
    pub fn emit(self, sink: &dyn LogSink, message: &str) {
        match self {
            Self::Debug => sink.debug(message),
            Self::Info => sink.info(message),
            Self::Warning => sink.warning(message),
            Self::Error => sink.error(message),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A logging destination that accepts messages at four severity levels.
///
/// Stopwatches and [`Since`][crate::Since] measurers forward rendered measurements to a sink
/// when one of the leveled emission methods (`debug`, `info`, `warning`, `error`) is used.
/// Use [`TracingSink`] to forward measurements to `tracing`, or implement this trait to
/// route them anywhere else.
///
/// # Examples
///
/// ```
/// use std::sync::Mutex;
///
/// use simple_clock::LogSink;
///
/// #[derive(Debug, Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl LogSink for Collect {
///     fn debug(&self, message: &str) {
///         self.0.lock().unwrap().push(format!("DEBUG {message}"));
///     }
///     fn info(&self, message: &str) {
///         self.0.lock().unwrap().push(format!("INFO {message}"));
///     }
///     fn warning(&self, message: &str) {
///         self.0.lock().unwrap().push(format!("WARN {message}"));
///     }
///     fn error(&self, message: &str) {
///         self.0.lock().unwrap().push(format!("ERROR {message}"));
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Debug + Send + Sync {
    /// Records a message at debug level.
    fn debug(&self, message: &str);

    /// Records a message at info level.
    fn info(&self, message: &str);

    /// Records a message at warning level.
    fn warning(&self, message: &str);

    /// Records a message at error level.
    fn error(&self, message: &str);
}

/// A [`LogSink`] that forwards measurements to the `tracing` macros of the same level.
///
/// Events are recorded with the `simple_clock` target, so they can be filtered separately
/// from the events of the calling code.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "simple_clock", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "simple_clock", "{message}");
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "simple_clock", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "simple_clock", "{message}");
    }
}
