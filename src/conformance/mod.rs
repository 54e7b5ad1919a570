//! Cross-width conformance checking.
//!
//! A vector of width `N` must agree bit for bit with `N` one-lane vectors holding the same
//! values. [`run_conformance`] draws random inputs, evaluates every operation once on the
//! wide vector and once lane by lane on the one-lane reference, and counts the lanes that
//! differ in a [`ConformanceReport`]. Floats run on `f32` lanes, integers on `i32`, `u8`
//! and `i64` lanes.
//!
//! Fused multiply-add is left out: backends are allowed to round it differently.

mod checks;
mod report;

pub use report::{ConformanceReport, OpStats};

use rand::{SeedableRng, rngs::StdRng};
use tqdm::tqdm;
use tracing::{debug, info, warn};

/// Runs `rounds` randomized rounds at width `N`, seeded with `seed`.
pub fn run_conformance<const N: usize>(rounds: usize, seed: u64) -> ConformanceReport {
    info!(width = N, rounds, seed, "starting conformance run");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = ConformanceReport::new(N, rounds, seed);

    for round in tqdm(0..rounds) {
        checks::float_round::<N>(&mut rng, &mut report);
        checks::int_round::<i32, N>(&mut rng, &mut report);
        checks::int_round::<u8, N>(&mut rng, &mut report);
        checks::int_round::<i64, N>(&mut rng, &mut report);
        checks::memory_round::<N>(&mut rng, &mut report);
        debug!(round, mismatches = report.total_mismatches(), "round done");
    }

    if report.is_clean() {
        info!(
            width = N,
            checks = report.total_checks(),
            "every lane matched the reference"
        );
    } else {
        warn!(
            width = N,
            mismatches = report.total_mismatches(),
            failing = ?report.failing_operations(),
            "lanes differ from the reference"
        );
    }
    report
}
