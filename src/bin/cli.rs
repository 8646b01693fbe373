//! platebench CLI - serve the benchmark endpoint or run it once locally
//!
//! Usage:
//!   platebench-cli serve [--host <host>] [--port <port>]
//!   platebench-cli run <n> <x> [--seed <seed>] [--json]

use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;

use platebench::server::{ServerConfig, run_server};
use platebench::{BenchmarkConfig, BenchmarkRequest, BenchmarkResponse, benchmark_plates};

#[derive(Parser)]
#[command(name = "platebench-cli")]
#[command(about = "Iterative vs recursive palindrome benchmark over synthetic plates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct RunnerArgs {
    /// Number of growth steps sampled
    #[arg(long, default_value = "5")]
    steps: usize,

    /// Maximum number of palindrome samples returned
    #[arg(long, default_value = "20")]
    display_cap: usize,

    /// Upper bound on plates generated per request
    #[arg(long, default_value = "1000000")]
    max_plates: usize,
}

impl RunnerArgs {
    fn config(&self) -> BenchmarkConfig {
        BenchmarkConfig {
            steps: self.steps,
            display_cap: self.display_cap,
            max_plates: self.max_plates,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        #[command(flatten)]
        runner: RunnerArgs,
    },

    /// Run a single benchmark and print the result
    Run {
        /// Total plate count
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Target palindrome count
        #[arg(allow_negative_numbers = true)]
        x: i64,

        /// RNG seed for a reproducible plate set
        #[arg(long)]
        seed: Option<u64>,

        /// Print the JSON response instead of a summary
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        runner: RunnerArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    match cli.command {
        Commands::Serve { host, port, runner } => {
            let config = ServerConfig {
                host,
                port,
                benchmark: runner.config(),
            };
            if let Err(e) = run_server(config) {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
        Commands::Run {
            n,
            x,
            seed,
            json,
            runner,
        } => {
            let request = BenchmarkRequest { n, x, seed };
            let config = runner.config();
            let response = run_once(&request, &config);
            if json {
                match serde_json::to_string_pretty(&response) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_summary(&request, &config, &response);
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_once(request: &BenchmarkRequest, config: &BenchmarkConfig) -> BenchmarkResponse {
    let mut rng = request.scenario(config).rng();
    let report = benchmark_plates(request.counts(config), config, &mut rng);
    BenchmarkResponse::from_report(&report)
}

fn print_summary(
    request: &BenchmarkRequest,
    config: &BenchmarkConfig,
    response: &BenchmarkResponse,
) {
    let counts = request.counts(config);

    println!("\n{}", "=".repeat(60));
    println!(
        "PALINDROME BENCHMARK: {} plates, {} forced palindromes",
        counts.total, counts.target_palindromes
    );
    println!("{}", "=".repeat(60));

    println!("\n  {:>10}  {:>14}  {:>14}", "size", "iterative", "recursive");
    for ((size, iterative), recursive) in response
        .graph_labels
        .iter()
        .zip(&response.graph_iterative)
        .zip(&response.graph_recursive)
    {
        println!(
            "  {:>10}  {:>11.3} ms  {:>11.3} ms",
            size, iterative, recursive
        );
    }

    println!("\n{}", "-".repeat(60));
    println!("Iterative: {}", response.iterative_time);
    println!("Recursive: {}", response.recursive_time);
    println!("{}", "-".repeat(60));

    println!("\nSamples ({}):", response.samples.len());
    for plate in &response.samples {
        println!("  - {}", plate);
    }
}
