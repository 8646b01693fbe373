//! Growth-curve benchmark of the palindrome strategies.
//!
//! The runner times each [`Strategy`] over nested prefixes of a plate set and
//! collects a bounded sample of detected palindromes from the full set.

use std::hint::black_box;
use std::time::Instant;

use log::{debug, info};
use rand::Rng;

use crate::palindrome::{Strategy, is_palindrome_iterative};
use crate::synthetic::generate_plates;
use crate::{GrowthSample, Plate, PlateCounts};

/// Default upper bound on plates per request.
pub const MAX_PLATES: usize = 1_000_000;

/// Configuration for the benchmark runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Number of growth steps sampled.
    /// Default: 5
    pub steps: usize,

    /// Hard cap on returned palindrome samples, regardless of request size.
    /// Default: 20
    pub display_cap: usize,

    /// Upper bound on plates generated per request. Larger requests are
    /// clamped to it.
    /// Default: 1,000,000
    pub max_plates: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            steps: 5,
            display_cap: 20,
            max_plates: MAX_PLATES,
        }
    }
}

impl BenchmarkConfig {
    /// How many detected palindromes to return for a target count.
    pub fn display_limit(&self, target_palindromes: usize) -> usize {
        target_palindromes.min(self.display_cap)
    }
}

/// Output of a benchmark run before it is shaped for the wire.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkReport {
    /// One sample per growth step, ascending by size.
    pub samples: Vec<GrowthSample>,
    /// Detected palindromic plates, in plate order.
    pub detected: Vec<Plate>,
}

impl BenchmarkReport {
    /// The largest growth step, if any steps ran.
    pub fn final_sample(&self) -> Option<&GrowthSample> {
        self.samples.last()
    }
}

/// Subset sizes for each growth step: `(total / steps) * i` for `i` in `1..=steps`.
///
/// Integer division truncates, so the last size may fall short of `total`.
pub fn growth_sizes(total: usize, steps: usize) -> Vec<usize> {
    if steps == 0 {
        return Vec::new();
    }
    let step_size = total / steps;
    (1..=steps).map(|i| step_size * i).collect()
}

/// Time one strategy over every plate in `plates`, in milliseconds.
///
/// Elapsed time is taken at microsecond precision.
pub fn time_strategy(strategy: Strategy, plates: &[Plate]) -> f64 {
    let start = Instant::now();
    for plate in plates {
        black_box(strategy.check(black_box(plate)));
    }
    start.elapsed().as_micros() as f64 / 1000.0
}

/// Measure both strategies over each growth prefix of `plates`.
///
/// The iterative pass over a prefix completes before the recursive pass over
/// the same prefix starts.
pub fn measure_growth(plates: &[Plate], steps: usize) -> Vec<GrowthSample> {
    growth_sizes(plates.len(), steps)
        .into_iter()
        .map(|size| {
            let subset = &plates[..size];
            let iterative_millis = time_strategy(Strategy::Iterative, subset);
            let recursive_millis = time_strategy(Strategy::Recursive, subset);
            debug!(
                "[Benchmark] size={} iterative={:.3}ms recursive={:.3}ms",
                size, iterative_millis, recursive_millis
            );
            GrowthSample {
                size,
                iterative_millis,
                recursive_millis,
            }
        })
        .collect()
}

/// Scan `plates` in order and keep the first `limit` palindromes.
pub fn collect_palindromes(plates: &[Plate], limit: usize) -> Vec<Plate> {
    plates
        .iter()
        .filter(|plate| is_palindrome_iterative(plate))
        .take(limit)
        .cloned()
        .collect()
}

/// Run the growth benchmark and sample collection over a plate set.
pub fn run(plates: &[Plate], display_limit: usize, config: &BenchmarkConfig) -> BenchmarkReport {
    BenchmarkReport {
        samples: measure_growth(plates, config.steps),
        detected: collect_palindromes(plates, display_limit),
    }
}

/// Generate plates for `counts` and benchmark them.
pub fn benchmark_plates<R: Rng + ?Sized>(
    counts: PlateCounts,
    config: &BenchmarkConfig,
    rng: &mut R,
) -> BenchmarkReport {
    let plates = generate_plates(counts.total, counts.target_palindromes, rng);
    let report = run(
        &plates,
        config.display_limit(counts.target_palindromes),
        config,
    );

    if let Some(last) = report.final_sample() {
        info!(
            "[Benchmark] {} plates ({} forced palindromes): iterative {:.2}ms, recursive {:.2}ms, {} samples",
            counts.total,
            counts.target_palindromes,
            last.iterative_millis,
            last.recursive_millis,
            report.detected.len()
        );
    }

    report
}
