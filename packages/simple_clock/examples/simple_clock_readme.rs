//! Example that demonstrates the basic usage of the `simple_clock` package.
//!
//! This times the iterations of a loop and the loop as a whole.
#![expect(
    clippy::arithmetic_side_effects,
    reason = "this is example code that doesn't need production-level safety"
)]

use simple_clock::Stopwatch;

fn main() {
    let mut stopwatch = Stopwatch::started();

    for i in 0..3 {
        let mut sum = 0_u64;
        for j in 0..(i + 1) * 100_000 {
            sum += j * j;
        }
        std::hint::black_box(sum);

        stopwatch
            .since_last_call()
            .label(format!("iteration {i}"))
            .print();
    }

    stopwatch.silent().since_start().label("all iterations").print();
}
