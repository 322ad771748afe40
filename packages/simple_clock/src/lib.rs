#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Stopwatch utilities for measuring and reporting elapsed time within a process.
//!
//! The core functionality includes:
//! - [`Stopwatch`] - Measures time since it was started and since the last non-silent query
//! - [`TimeMarker`] - An immutable point in time, created by [`mark()`] or [`mark_named()`]
//! - [`Since`] - Measures time since markers, returning a fresh marker on every emission
//! - [`LogSink`] - Destination for measurements emitted at a severity level
//!
//! Durations are plain `f64` seconds. Emitted text has the form `"{label}: {value}s"`, with
//! the value rendered to a configurable [`Precision`] (2 fractional digits by default).
//!
//! # Simple usage
//!
//! ```
//! use simple_clock::Stopwatch;
//!
//! let mut stopwatch = Stopwatch::started();
//!
//! // Do some work...
//!
//! // Prints "elapsed since start: 0.00s" (or a little more).
//! let seconds = stopwatch.since_start().print();
//! assert!(seconds >= 0.0);
//! ```
//!
//! # Timing loop iterations
//!
//! Updating queries move the "last call" reference of the stopwatch to the moment of the
//! query, so each iteration of a loop can be measured separately, while silent queries leave
//! the stopwatch as it is:
//!
//! ```
//! use simple_clock::{Precision, Stopwatch};
//!
//! let mut stopwatch = Stopwatch::builder().precision(Precision::new(3)).start();
//!
//! for _ in 0..3 {
//!     // Do some work...
//!     let iteration = stopwatch.elapsed_since_last_call();
//!     let total = stopwatch.peek_since_start();
//!     assert!(iteration <= total);
//! }
//! ```
//!
//! Note that every updating query moves the last call reference, including updating queries
//! since start.
//!
//! # Logging
//!
//! Measurements can be sent to a [`LogSink`] instead of standard output. [`TracingSink`]
//! forwards them to `tracing`:
//!
//! ```
//! use simple_clock::{Stopwatch, TracingSink};
//!
//! let mut stopwatch = Stopwatch::builder().sink(TracingSink).start();
//!
//! // Do some work...
//!
//! stopwatch.since_start().label("work").info().unwrap();
//! ```
//!
//! Leveled emission on a stopwatch without a sink fails with [`Error::UnconfiguredSink`].
//!
//! # Threading
//!
//! A [`Stopwatch`] is `Send` and `Sync` but its updating queries take `&mut self`, so sharing
//! one between threads requires external synchronization such as a `Mutex`.

mod builder;
mod error;
mod format;
mod marker;
mod pal;
mod reader;
mod since;
mod sink;
mod stopwatch;

pub use builder::*;
pub use error::Error;
pub(crate) use error::Result;
pub use format::*;
pub use marker::*;
pub use reader::*;
pub use since::*;
pub use sink::*;
pub use stopwatch::{SilentReaders, Stopwatch};
