//! Interactive sequential-vs-parallel sort comparison.
//!
//! Prompts for an array size on stdin, fills an array with that many random
//! integers, and reports wall-clock time for the sequential baseline and the
//! two-way parallel strategy, each run on its own copy of the data.
//!
//! Run with: cargo run --release --bin demo_sort

use halfsort::generate::random_ints_from_entropy;
use halfsort::{parallel_sort, sequential_sort, time_sort};
use std::io::{self, BufRead, Write};

fn read_size() -> usize {
    print!("Enter the size of the array: ");
    io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() || line.trim().is_empty() {
        eprintln!("expected an array size on stdin");
        std::process::exit(2);
    }

    match line.trim().parse::<usize>() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("invalid array size '{}': {}", line.trim(), e);
            std::process::exit(2);
        }
    }
}

fn main() {
    let size = read_size();
    let original = random_ints_from_entropy(size);

    println!("{}", time_sort("Sequential sort", &original, sequential_sort));
    println!(
        "{}",
        time_sort("Parallel sort (2 threads)", &original, parallel_sort)
    );
}
