//! Trigram Counting Benchmark
//!
//! Measures the throughput of each pipeline stage on a real text file, such
//! as a Project Gutenberg book or a concatenated corpus.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenize**: Splitting raw bytes into words
//! 2. **Count**: Building the frequency table from pre-split words
//! 3. **Pipeline**: Tokenize + count + rank together
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/triplets_bench /path/to/book.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Pipeline ===
//! --------------------------------
//! Mode        : Pipeline
//! Elapsed     : 0.041 s
//! Throughput  : 0.142 GiB/s
//! Tokens      : 1_093_412
//! Tokens/sec  : 26_668_585
//! --------------------------------
//! ```
//!
//! Build with `--release`; debug numbers are meaningless.

use std::hint::black_box;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use triplets_core::analyzer::Tokenizer;
use triplets_core::{analyze, read_input, FrequencyTable, ReportConfig};

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

/// Measure tokenize/count/rank throughput on a text file.
#[derive(Parser)]
#[command(name = "triplets_bench", version, about)]
struct Cli {
    /// Path to the input text file
    input: PathBuf,

    /// Number of measured runs per stage
    #[arg(long, default_value_t = MEASURE_RUNS)]
    runs: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("triplets_bench=info")),
        )
        .init();

    let cli = Cli::parse();
    let runs = cli.runs.max(1);

    let input = read_input(&cli.input)?;
    info!(path = %cli.input.display(), size = %fmt_bytes(input.len() as u64), runs, "loaded");

    bench_tokenize(&input, runs);
    bench_count(&input, runs)?;
    bench_pipeline(&input, runs)?;

    Ok(())
}

fn bench_tokenize(input: &[u8], runs: usize) {
    let tokenizer = Tokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        let mut sink = 0u64;
        tokenizer.tokenize(input, |_w, _p| sink += 1);
        black_box(sink);
    });

    let mut tokens = 0u64;
    let elapsed = measure(runs, || {
        let mut local = 0u64;
        tokenizer.tokenize(input, |_w, _p| local += 1);
        tokens = black_box(local);
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_count(input: &[u8], runs: usize) -> Result<()> {
    let words = Tokenizer::new().tokens(input);

    println!("=== Count ===");

    // Surface InsufficientData once, before timing
    FrequencyTable::from_tokens(&words)?;

    warmup(|| {
        black_box(FrequencyTable::from_tokens(&words).map(|t| t.total()).ok());
    });

    let elapsed = measure(runs, || {
        black_box(FrequencyTable::from_tokens(&words).map(|t| t.total()).ok());
    });

    print_perf("Count", input.len(), elapsed, words.len() as u64);
    Ok(())
}

fn bench_pipeline(input: &[u8], runs: usize) -> Result<()> {
    let config = ReportConfig::default();

    println!("=== Pipeline ===");

    let report = analyze(input, &config)?;

    warmup(|| {
        black_box(analyze(input, &config).ok());
    });

    let elapsed = measure(runs, || {
        black_box(analyze(input, &config).ok());
    });

    print_perf("Pipeline", input.len(), elapsed, report.stats.tokens as u64);
    println!("{report}\n");
    Ok(())
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(runs: usize, mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..runs {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / runs as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
