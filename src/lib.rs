//! # platebench
//!
//! Benchmark comparing iterative and recursive palindrome detection over
//! synthetic vehicle plates.
//!
//! This library provides:
//! - A plate generator with a known number of forced palindromes
//! - Iterative and recursive palindrome predicates
//! - A growth-curve benchmark runner with bounded palindrome sampling
//! - An HTTP endpoint returning timing curves as JSON
//!
//! ## Features
//!
//! - **`server`** (default) - axum HTTP server and the `platebench-cli` binary
//!
//! ## Quick Start
//!
//! ```rust
//! use platebench::{BenchmarkConfig, BenchmarkRequest, BenchmarkResponse, benchmark_plates};
//!
//! let config = BenchmarkConfig::default();
//! let request = BenchmarkRequest { n: 10, x: 3, seed: Some(7) };
//! let mut rng = request.scenario(&config).rng();
//! let report = benchmark_plates(request.counts(&config), &config, &mut rng);
//! let response = BenchmarkResponse::from_report(&report);
//!
//! assert_eq!(response.graph_labels, vec![2, 4, 6, 8, 10]);
//! assert!(response.samples.len() <= 3);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{PlateBenchError, Result};

// Palindrome predicates
pub mod palindrome;
pub use palindrome::{Strategy, is_palindrome_iterative, is_palindrome_recursive};

// Plate generation
pub mod synthetic;
pub use synthetic::{GeneratedPlates, PlateScenario, generate_plates};

// Growth-curve benchmark
pub mod benchmark;
pub use benchmark::{BenchmarkConfig, BenchmarkReport, benchmark_plates, run};

// HTTP endpoint
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "server")]
pub use server::{ServerConfig, router};

// ============================================================================
// Core Types
// ============================================================================

/// A generated vehicle registration string, e.g. `"A 121 A"`.
pub type Plate = String;

/// Timings for one growth step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthSample {
    /// Number of plates in this step's prefix
    pub size: usize,
    /// Iterative pass duration in milliseconds
    pub iterative_millis: f64,
    /// Recursive pass duration in milliseconds
    pub recursive_millis: f64,
}

/// Plate counts after clamping a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlateCounts {
    /// Never greater than the configured `max_plates`.
    pub total: usize,
    /// Never greater than `total`.
    pub target_palindromes: usize,
}

impl PlateCounts {
    /// Clamp signed counts: negatives become zero, the total never exceeds
    /// `max_plates`, the target never exceeds the total.
    ///
    /// The upper bound keeps a single request from allocating more plates
    /// than the process can hold.
    pub fn clamped(total: i64, target_palindromes: i64, max_plates: usize) -> Self {
        let total = usize::try_from(total).unwrap_or(0).min(max_plates);
        let target_palindromes = usize::try_from(target_palindromes)
            .unwrap_or(0)
            .min(total);
        Self {
            total,
            target_palindromes,
        }
    }
}

/// Body of `POST /api/benchmark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BenchmarkRequest {
    /// Total plate count
    #[serde(default)]
    pub n: i64,
    /// Target palindrome count
    #[serde(default)]
    pub x: i64,
    /// Optional RNG seed for reproducible plate sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl BenchmarkRequest {
    /// Counts with negative or oversized values clamped to `config`.
    pub fn counts(&self, config: &BenchmarkConfig) -> PlateCounts {
        PlateCounts::clamped(self.n, self.x, config.max_plates)
    }

    /// Generator scenario for this request.
    pub fn scenario(&self, config: &BenchmarkConfig) -> PlateScenario {
        let counts = self.counts(config);
        PlateScenario {
            total: counts.total,
            target_palindromes: counts.target_palindromes,
            seed: self.seed,
        }
    }
}

/// JSON payload returned by `POST /api/benchmark`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResponse {
    /// Final-step iterative time, e.g. `"0.42 ms"`
    pub iterative_time: String,
    /// Final-step recursive time, e.g. `"0.57 ms"`
    pub recursive_time: String,
    pub iterative_raw: f64,
    pub recursive_raw: f64,
    /// Subset size per growth step
    pub graph_labels: Vec<usize>,
    pub graph_iterative: Vec<f64>,
    pub graph_recursive: Vec<f64>,
    /// Detected palindromic plates, at most `min(x, 20)`
    pub samples: Vec<Plate>,
}

impl BenchmarkResponse {
    /// Shape a benchmark report for the wire.
    pub fn from_report(report: &BenchmarkReport) -> Self {
        let (iterative_raw, recursive_raw) = report
            .final_sample()
            .map_or((0.0, 0.0), |s| (s.iterative_millis, s.recursive_millis));

        Self {
            iterative_time: format_millis(iterative_raw),
            recursive_time: format_millis(recursive_raw),
            iterative_raw,
            recursive_raw,
            graph_labels: report.samples.iter().map(|s| s.size).collect(),
            graph_iterative: report.samples.iter().map(|s| s.iterative_millis).collect(),
            graph_recursive: report.samples.iter().map(|s| s.recursive_millis).collect(),
            samples: report.detected.clone(),
        }
    }
}

/// Format milliseconds with two decimals, e.g. `"1.25 ms"`.
pub fn format_millis(millis: f64) -> String {
    format!("{:.2} ms", millis)
}
