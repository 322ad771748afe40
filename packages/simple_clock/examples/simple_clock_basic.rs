//! Example that demonstrates the different ways of reading and emitting measurements.
//!
//! The leveled measurements go to `tracing`, so they are only visible when the application
//! installs a subscriber.

use std::thread;
use std::time::Duration;

use simple_clock::{Precision, Since, Stopwatch, TimeFormat, TracingSink, mark_named};

fn main() {
    let mut stopwatch = Stopwatch::builder()
        .precision(Precision::new(3))
        .label_start("total")
        .sink(TracingSink)
        .start();

    thread::sleep(Duration::from_millis(25));

    // Updating query: the next "since last call" measurement starts from here.
    let first = stopwatch.since_start().print();
    println!("Raw value of the first reading: {first}");

    thread::sleep(Duration::from_millis(10));

    // Silent queries leave the stopwatch as it is.
    stopwatch.silent().since_last_call().label("peek").print();
    stopwatch
        .silent()
        .since_start()
        .format(TimeFormat::custom(|seconds| format!("{seconds:>10.6}")))
        .label("total (padded)")
        .print();

    // Leveled emission to the configured sink.
    if let Err(e) = stopwatch.since_last_call().info() {
        eprintln!("Failed to log measurement: {e}");
    }

    // Markers and the Since measurer chain each emission into the next measurement.
    let since = Since::new();
    let marker = mark_named("first step");
    thread::sleep(Duration::from_millis(5));
    let (_, marker) = since.measure(&marker).print();
    thread::sleep(Duration::from_millis(5));
    since.measure(&marker).label("second step").print();

    // Markers can also be measured by a stopwatch without changing it.
    let marker = stopwatch.mark_named("since marker");
    stopwatch.since(&marker).print();
}
