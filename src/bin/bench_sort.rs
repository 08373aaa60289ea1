//! Benchmark the sort strategies at various scales.
//!
//! Run with: cargo run --release --bin bench_sort
//!
//! Usage:
//!   bench_sort               Run default size (1m)
//!   bench_sort 100k 1m 4m    Run multiple sizes
//!   bench_sort -n 10         Run 10 iterations per strategy
//!   bench_sort --verify      Check every output (order + permutation)
//!
//! For per-phase timing of the parallel strategy, build with:
//!   cargo run --release --features timing --bin bench_sort

use clap::Parser;
use halfsort::generate::random_ints;
use halfsort::validation::check_sort;
use halfsort::{parallel_sort, sequential_sort};
use std::time::Instant;

type SortFn = fn(&mut [i32]);

fn parse_count(s: &str) -> Result<usize, String> {
    let s = s.to_lowercase();
    let (num_str, multiplier) = if s.ends_with('m') {
        (&s[..s.len() - 1], 1_000_000)
    } else if s.ends_with('k') {
        (&s[..s.len() - 1], 1_000)
    } else {
        (s.as_str(), 1)
    };

    num_str
        .parse::<f64>()
        .map(|n| (n * multiplier as f64) as usize)
        .map_err(|e| format!("Invalid number '{}': {}", s, e))
}

fn format_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{}k", n / 1_000)
    } else {
        format!("{}", n)
    }
}

fn format_rate(count: usize, ms: f64) -> String {
    if ms <= 0.0 {
        return "N/A".to_string();
    }
    let per_sec = count as f64 / (ms / 1000.0);
    if per_sec >= 1_000_000.0 {
        format!("{:.2}M/s", per_sec / 1_000_000.0)
    } else if per_sec >= 1_000.0 {
        format!("{:.1}k/s", per_sec / 1000.0)
    } else {
        format!("{:.0}/s", per_sec)
    }
}

#[derive(Parser)]
#[command(name = "bench_sort")]
#[command(about = "Benchmark sequential vs two-way parallel sorting")]
struct Args {
    /// Element counts to benchmark (e.g., 100k, 1m, 4M)
    #[arg(value_parser = parse_count)]
    sizes: Vec<usize>,

    /// Random seed
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Iterations per strategy (averages out scheduler noise)
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: usize,

    /// Check that every output is a non-decreasing permutation of the input
    #[arg(long)]
    verify: bool,
}

struct StrategyStats {
    label: &'static str,
    min_ms: f64,
    max_ms: f64,
    avg_ms: f64,
}

fn run_strategy(
    label: &'static str,
    input: &[i32],
    sort: SortFn,
    repeat: usize,
    verify: bool,
) -> StrategyStats {
    let mut times_ms = Vec::with_capacity(repeat);

    for _ in 0..repeat {
        let mut buf = input.to_vec();
        let t0 = Instant::now();
        sort(&mut buf);
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);

        if verify {
            let report = check_sort(input, &buf);
            if !report.is_valid() {
                eprintln!(
                    "WARNING: {} failed validation for n={}: {}",
                    label,
                    input.len(),
                    report.summary()
                );
            }
        }
    }

    let min_ms = times_ms.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_ms = times_ms.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let avg_ms = times_ms.iter().sum::<f64>() / times_ms.len() as f64;

    StrategyStats {
        label,
        min_ms,
        max_ms,
        avg_ms,
    }
}

struct BenchResult {
    n: usize,
    sequential: StrategyStats,
    parallel: StrategyStats,
}

impl BenchResult {
    fn speedup(&self) -> f64 {
        self.sequential.avg_ms / self.parallel.avg_ms
    }
}

fn main() {
    let args = Args::parse();
    assert!(args.repeat > 0, "--repeat must be > 0");

    println!("halfsort Benchmark");
    println!("==================\n");

    let sizes: Vec<usize> = if args.sizes.is_empty() {
        vec![1_000_000]
    } else {
        args.sizes
    };

    println!("Configuration:");
    println!("  seed = {}", args.seed);
    println!(
        "  sizes = {:?}",
        sizes.iter().map(|&n| format_num(n)).collect::<Vec<_>>()
    );
    if args.repeat > 1 {
        println!("  repeat = {}", args.repeat);
    }
    if args.verify {
        println!("  verify = enabled");
    }

    #[cfg(feature = "timing")]
    println!("  timing = enabled (per-phase timing will be printed)");

    let mut results: Vec<BenchResult> = Vec::new();

    for &n in &sizes {
        println!("\n{}", "=".repeat(60));
        println!("Benchmarking n = {}", format_num(n));
        println!("{}", "=".repeat(60));

        let t_gen = Instant::now();
        let data = random_ints(n, args.seed);
        println!(
            "Data generation: {:.1}ms",
            t_gen.elapsed().as_secs_f64() * 1000.0
        );

        let sequential =
            run_strategy("Sequential sort", &data, sequential_sort, args.repeat, args.verify);
        let parallel = run_strategy(
            "Parallel sort (2 threads)",
            &data,
            parallel_sort,
            args.repeat,
            args.verify,
        );

        let result = BenchResult {
            n,
            sequential,
            parallel,
        };

        println!("\nResults:");
        for stats in [&result.sequential, &result.parallel] {
            if args.repeat > 1 {
                println!(
                    "  {:<26} avg {:>8.1}ms  (min {:.1}ms, max {:.1}ms, {})",
                    stats.label,
                    stats.avg_ms,
                    stats.min_ms,
                    stats.max_ms,
                    format_rate(n, stats.avg_ms)
                );
            } else {
                println!(
                    "  {:<26} {:>8.1}ms  ({})",
                    stats.label,
                    stats.avg_ms,
                    format_rate(n, stats.avg_ms)
                );
            }
        }
        println!("  Speedup: {:.2}x", result.speedup());

        results.push(result);
    }

    if results.len() > 1 {
        println!("\n\n{}", "=".repeat(60));
        println!("SUMMARY");
        println!("{}", "=".repeat(60));
        println!(
            "{:>10} | {:>12} | {:>12} | {:>8}",
            "n", "sequential", "parallel", "speedup"
        );
        println!("{:-<10}-+-{:-<12}-+-{:-<12}-+-{:-<8}", "", "", "", "");

        for r in &results {
            println!(
                "{:>10} | {:>10.1}ms | {:>10.1}ms | {:>7.2}x",
                format_num(r.n),
                r.sequential.avg_ms,
                r.parallel.avg_ms,
                r.speedup()
            );
        }
    }

    println!("\nBenchmark complete.");
}
