//! CPU busy-work.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Occupy the calling thread with arithmetic work for at least `duration`.
///
/// The accumulator is routed through [`black_box`] so the loop survives
/// optimization and stays visible to an external CPU-utilization observer.
/// Callers on an async runtime must run this under `spawn_blocking`; it
/// never yields. Returns the number of inner rounds completed.
pub fn burn_for(duration: Duration) -> u64 {
    let start = Instant::now();
    let mut checksum: u64 = 0;
    let mut rounds: u64 = 0;

    while start.elapsed() < duration {
        for x in 0..10_000u64 {
            checksum = checksum.wrapping_add(black_box(x * x));
        }
        rounds += 1;
    }

    black_box(checksum);
    rounds
}
