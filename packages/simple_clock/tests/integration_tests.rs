//! Integration tests for `simple_clock` against its public API.
//!
//! Deterministic tests inject a clock source backed by an atomic counter. Tests against the
//! real monotonic clock only assert lower bounds, as scheduling delays are unbounded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use simple_clock::{
    Error, Level, LogSink, Precision, Since, Stopwatch, TimeFormat, mark, mark_named,
};

/// A clock source whose reading is set by the test, in seconds.
#[derive(Clone, Debug, Default)]
struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    fn set(&self, seconds: f64) {
        self.0.store(seconds.to_bits(), Ordering::Relaxed);
    }

    fn source(&self) -> impl Fn() -> f64 + Send + Sync + 'static {
        let bits = Arc::clone(&self.0);
        move || f64::from_bits(bits.load(Ordering::Relaxed))
    }
}

/// A log sink that records every message with its level.
#[derive(Debug, Default)]
struct RecordingSink(Mutex<Vec<(Level, String)>>);

impl RecordingSink {
    fn record(&self, level: Level, message: &str) {
        self.0.lock().unwrap().push((level, message.to_owned()));
    }

    fn take(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

impl LogSink for RecordingSink {
    fn debug(&self, message: &str) {
        self.record(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn warning(&self, message: &str) {
        self.record(Level::Warning, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

fn assert_seconds(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected} seconds, got {actual}"
    );
}

#[test]
fn injected_clock_drives_all_queries() {
    let clock = ManualClock::default();
    let mut stopwatch = Stopwatch::builder().time_source(clock.source()).start_at(0.0);

    clock.set(1.0);
    assert_seconds(stopwatch.silent().since_start().get(), 1.0);

    clock.set(2.0);
    assert_seconds(stopwatch.silent().since_last_call().get(), 2.0);

    clock.set(3.0);
    assert_seconds(stopwatch.since_start().get(), 3.0);

    clock.set(4.0);
    assert_seconds(stopwatch.since_last_call().get(), 1.0);
}

#[test]
fn loop_iterations_and_total_do_not_interfere() {
    let clock = ManualClock::default();
    let mut stopwatch = Stopwatch::builder().time_source(clock.source()).start();

    let mut now = 0.0;
    for step in [0.5, 1.5, 0.25] {
        now += step;
        clock.set(now);

        assert_seconds(stopwatch.elapsed_since_last_call(), step);
        assert_seconds(stopwatch.peek_since_start(), now);
    }
}

#[test]
fn emitted_lines_match_format() {
    let clock = ManualClock::default();
    let mut stopwatch = Stopwatch::builder()
        .time_source(clock.source())
        .try_precision("0")
        .unwrap()
        .start_at(0.0);
    let mut output = Vec::new();

    clock.set(2.824);
    stopwatch
        .since_start()
        .label("X")
        .precision(Precision::new(2))
        .write_to(&mut output)
        .unwrap();

    clock.set(9.824);
    stopwatch.since_last_call().write_to(&mut output).unwrap();

    stopwatch
        .since_value(2.824)
        .format(TimeFormat::custom(|seconds| format!("{seconds:.3}")))
        .write_to(&mut output)
        .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "X: 2.82s\nelapsed since last call: 7s\nelapsed: 7.000s\n"
    );
}

#[test]
fn invalid_precision_is_rejected() {
    let error = Stopwatch::builder().try_precision("abc").unwrap_err();

    assert!(matches!(
        error,
        Error::InvalidArgument { ref invalid_value, .. } if invalid_value == "abc"
    ));
    assert!(error.to_string().contains("'abc'"));
}

#[test]
fn precision_beyond_renderable_range_is_rejected() {
    let clock = ManualClock::default();
    let builder = Stopwatch::builder().time_source(clock.source());

    let error = builder.try_precision("70000").unwrap_err();
    assert!(error.to_string().contains("'70000'"));

    let mut stopwatch = Stopwatch::builder()
        .time_source(clock.source())
        .try_precision("65535")
        .unwrap()
        .start_at(0.0);
    let mut output = Vec::new();

    clock.set(1.0);
    stopwatch.since_start().write_to(&mut output).unwrap();

    assert!(String::from_utf8(output).unwrap().starts_with("elapsed since start: 1.000"));
}

#[test]
fn leveled_emission_goes_to_custom_sink() {
    let clock = ManualClock::default();
    let sink = Arc::new(RecordingSink::default());

    let mut stopwatch = Stopwatch::builder()
        .time_source(clock.source())
        .shared_sink(Arc::clone(&sink) as Arc<dyn LogSink>)
        .label_start("total")
        .start_at(0.0);

    clock.set(1.0);
    stopwatch.since_start().debug().unwrap();
    stopwatch.silent().since_start().info().unwrap();
    stopwatch.since_last_call().label("lap").warning().unwrap();
    stopwatch.silent().since_start().log(Level::Error).unwrap();

    assert_eq!(
        sink.take(),
        vec![
            (Level::Debug, "total: 1.00s".to_owned()),
            (Level::Info, "total: 1.00s".to_owned()),
            (Level::Warning, "lap: 0.00s".to_owned()),
            (Level::Error, "total: 1.00s".to_owned()),
        ]
    );
}

#[test]
fn leveled_emission_without_sink_is_an_error() {
    let mut stopwatch = Stopwatch::started();

    let error = stopwatch.since_start().warning().unwrap_err();

    assert!(matches!(
        error,
        Error::UnconfiguredSink {
            level: Level::Warning
        }
    ));
}

#[test]
fn since_chains_markers() {
    let clock = ManualClock::default();
    let sink = Arc::new(RecordingSink::default());
    let since = Since::new()
        .with_time_source(clock.source())
        .with_shared_sink(Arc::clone(&sink) as Arc<dyn LogSink>);

    let marker = since.mark_named("fetch");
    clock.set(1.25);
    let (seconds, marker) = since.measure(&marker).info().unwrap();
    assert_seconds(seconds, 1.25);

    clock.set(2.0);
    let (seconds, _) = since.measure(&marker).label("parse").info().unwrap();
    assert_seconds(seconds, 0.75);

    assert_eq!(
        sink.take(),
        vec![
            (Level::Info, "fetch: 1.25s".to_owned()),
            (Level::Info, "parse: 0.75s".to_owned()),
        ]
    );
}

#[test]
fn stopwatch_shared_between_threads_via_mutex() {
    let clock = ManualClock::default();
    let stopwatch = Arc::new(Mutex::new(
        Stopwatch::builder().time_source(clock.source()).start_at(0.0),
    ));

    clock.set(5.0);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let stopwatch = Arc::clone(&stopwatch);
            thread::spawn(move || stopwatch.lock().unwrap().elapsed_since_start())
        })
        .collect();

    for handle in handles {
        assert_seconds(handle.join().unwrap(), 5.0);
    }

    assert_seconds(stopwatch.lock().unwrap().last_call_reference(), 5.0);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri is too slow for meaningful real time measurements.
fn real_clock_measures_sleep() {
    const SLEEP: Duration = Duration::from_millis(50);

    let mut stopwatch = Stopwatch::started();
    let marker = mark_named("before sleep");

    thread::sleep(SLEEP);

    assert!(stopwatch.peek_since_start() >= SLEEP.as_secs_f64());
    assert!(stopwatch.elapsed_since(&marker) >= SLEEP.as_secs_f64());
    assert!(Since::new().elapsed(&marker) >= SLEEP.as_secs_f64());
    assert!(stopwatch.elapsed_since_last_call() >= SLEEP.as_secs_f64());

    // The last call reference moved, so the next reading is much shorter.
    assert!(stopwatch.peek_since_last_call() < stopwatch.peek_since_start());
}

#[test]
#[cfg_attr(miri, ignore)] // Miri is too slow for meaningful real time measurements.
fn free_markers_share_origin_with_stopwatches() {
    let first = mark();
    let stopwatch = Stopwatch::started();
    let second = stopwatch.mark();

    assert!(second.value() >= first.value());
}
