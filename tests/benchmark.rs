//! Tests for the growth benchmark and response assembly

use platebench::benchmark::{MAX_PLATES, collect_palindromes, growth_sizes, measure_growth};
use platebench::{
    BenchmarkConfig, BenchmarkReport, BenchmarkRequest, BenchmarkResponse, GrowthSample,
    PlateCounts, benchmark_plates, is_palindrome_iterative, run,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn respond(n: i64, x: i64, seed: u64) -> BenchmarkResponse {
    let request = BenchmarkRequest {
        n,
        x,
        seed: Some(seed),
    };
    let config = BenchmarkConfig::default();
    let mut rng = request.scenario(&config).rng();
    let report = benchmark_plates(request.counts(&config), &config, &mut rng);
    BenchmarkResponse::from_report(&report)
}

#[test]
fn test_end_to_end_small_request() {
    let response = respond(10, 3, 11);

    assert_eq!(response.graph_labels, vec![2, 4, 6, 8, 10]);
    assert!(response.samples.len() <= 3);
    assert!(response.samples.iter().all(|p| is_palindrome_iterative(p)));
    assert_eq!(response.graph_iterative.len(), 5);
    assert_eq!(response.graph_recursive.len(), 5);
    assert!(response.graph_iterative.iter().all(|&t| t >= 0.0));
    assert!(response.graph_recursive.iter().all(|&t| t >= 0.0));
}

#[test]
fn test_samples_reach_target_when_enough_palindromes() {
    // 3 forced palindromes guarantee the scan fills a limit of 3
    let response = respond(10, 3, 12);
    assert_eq!(response.samples.len(), 3);
}

#[test]
fn test_sample_bound_capped_at_twenty() {
    let response = respond(1_000, 500, 13);
    assert_eq!(response.samples.len(), 20);
}

#[test]
fn test_zero_target_returns_no_samples() {
    // Even coincidental palindromes stay hidden when no samples were asked for
    let response = respond(2_000, 0, 14);
    assert!(response.samples.is_empty());
}

#[test]
fn test_growth_labels_follow_formula() {
    for n in [0_i64, 3, 5, 7, 12, 99, 1_000] {
        let response = respond(n, n / 2, 15);
        let step = n as usize / 5;
        let expected: Vec<usize> = (1..=5).map(|i| step * i).collect();
        assert_eq!(response.graph_labels, expected, "n = {}", n);
        assert!(response.graph_labels.windows(2).all(|w| w[0] <= w[1]));
        assert!(*response.graph_labels.last().unwrap() <= n as usize);
    }
}

#[test]
fn test_final_step_fields_match_graph() {
    let response = respond(500, 50, 16);
    assert_eq!(response.iterative_raw, response.graph_iterative[4]);
    assert_eq!(response.recursive_raw, response.graph_recursive[4]);
    assert_eq!(response.iterative_time, format!("{:.2} ms", response.iterative_raw));
    assert_eq!(response.recursive_time, format!("{:.2} ms", response.recursive_raw));
    assert!(response.iterative_time.ends_with(" ms"));
}

#[test]
fn test_counts_clamped() {
    assert_eq!(
        PlateCounts::clamped(-5, -2, MAX_PLATES),
        PlateCounts {
            total: 0,
            target_palindromes: 0
        }
    );
    assert_eq!(
        PlateCounts::clamped(10, 50, MAX_PLATES),
        PlateCounts {
            total: 10,
            target_palindromes: 10
        }
    );
    assert_eq!(
        PlateCounts::clamped(10, -1, MAX_PLATES),
        PlateCounts {
            total: 10,
            target_palindromes: 0
        }
    );
}

#[test]
fn test_huge_total_clamped_to_max_plates() {
    let counts = PlateCounts::clamped(1 << 40, 1, MAX_PLATES);
    assert_eq!(
        counts,
        PlateCounts {
            total: MAX_PLATES,
            target_palindromes: 1
        }
    );

    let request = BenchmarkRequest {
        n: 1 << 40,
        x: 1 << 40,
        seed: None,
    };
    let config = BenchmarkConfig {
        max_plates: 50,
        ..BenchmarkConfig::default()
    };
    assert_eq!(request.counts(&config).total, 50);
    assert_eq!(request.counts(&config).target_palindromes, 50);
    assert_eq!(request.scenario(&config).total, 50);
}

#[test]
fn test_negative_request_yields_empty_response() {
    let response = respond(-10, -3, 17);
    assert_eq!(response.graph_labels, vec![0; 5]);
    assert!(response.samples.is_empty());
}

#[test]
fn test_oversized_target_clamps_to_total() {
    let response = respond(4, 10, 18);
    assert_eq!(response.samples.len(), 4);
}

#[test]
fn test_measure_growth_uses_prefixes() {
    let mut rng = StdRng::seed_from_u64(19);
    let plates = platebench::generate_plates(23, 5, &mut rng);
    let samples = measure_growth(&plates, 5);
    let sizes: Vec<usize> = samples.iter().map(|s| s.size).collect();
    assert_eq!(sizes, growth_sizes(23, 5));
    assert_eq!(sizes, vec![4, 8, 12, 16, 20]);
}

#[test]
fn test_collect_scans_full_set_in_order() {
    let plates: Vec<String> = ["B 123 C", "A 121 A", "D 111 E", "C 343 C"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(
        collect_palindromes(&plates, 5),
        vec!["A 121 A".to_string(), "C 343 C".to_string()]
    );
}

#[test]
fn test_custom_step_count() {
    let config = BenchmarkConfig {
        steps: 4,
        display_cap: 2,
        ..BenchmarkConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(20);
    let plates = platebench::generate_plates(40, 10, &mut rng);
    let report = run(&plates, config.display_limit(10), &config);
    assert_eq!(report.samples.len(), 4);
    assert_eq!(report.detected.len(), 2);
}

#[test]
fn test_empty_report_response() {
    let response = BenchmarkResponse::from_report(&BenchmarkReport::default());
    assert_eq!(response.iterative_time, "0.00 ms");
    assert_eq!(response.recursive_raw, 0.0);
    assert!(response.graph_labels.is_empty());
}

#[test]
fn test_response_json_field_names() {
    let report = BenchmarkReport {
        samples: vec![GrowthSample {
            size: 2,
            iterative_millis: 0.5,
            recursive_millis: 1.25,
        }],
        detected: vec!["A 121 A".to_string()],
    };
    let json = serde_json::to_value(BenchmarkResponse::from_report(&report)).unwrap();

    assert_eq!(json["iterativeTime"], "0.50 ms");
    assert_eq!(json["recursiveTime"], "1.25 ms");
    assert_eq!(json["iterativeRaw"], 0.5);
    assert_eq!(json["recursiveRaw"], 1.25);
    assert_eq!(json["graphLabels"], serde_json::json!([2]));
    assert_eq!(json["graphIterative"], serde_json::json!([0.5]));
    assert_eq!(json["graphRecursive"], serde_json::json!([1.25]));
    assert_eq!(json["samples"], serde_json::json!(["A 121 A"]));
}
