//! Caption Throughput Benchmarking Tool
//!
//! Measures the hashtag synthesis pipeline on a file of captions (one per
//! line). Designed to give realistic throughput numbers for feed-sized
//! workloads.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalization**: lowercasing and whitespace collapsing alone
//! 2. **Synthesis**: the full pipeline through a reusable engine
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/caption_bench /path/to/captions.txt
//! ```
//!
//! ## Output
//!
//! For each stage the benchmark prints elapsed time, caption throughput,
//! and (for synthesis) tags produced per second.
//!
//! Run with `--release`, use a large caption file for stable measurements,
//! and pin to a core with `taskset` if you want reproducible numbers.

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use creatorskit_core::analyzer::normalizer::CaptionNormalizer;
use creatorskit_core::HashtagEngine;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: caption_bench <path>");
        std::process::exit(1);
    }

    let bytes = fs::read(&args[1])?;
    let input = std::str::from_utf8(&bytes).expect("input must be valid UTF-8");
    let captions: Vec<&str> = input.lines().collect();

    println!("File size : {}", fmt_bytes(input.len() as u64));
    println!("Captions  : {}\n", fmt_count(captions.len() as u64));

    bench_normalize(&captions);
    bench_synthesize(&captions);

    Ok(())
}

fn bench_normalize(captions: &[&str]) {
    let normalizer = CaptionNormalizer::default();
    let mut out = String::with_capacity(256);

    println!("=== Normalize ===");

    warmup(|| {
        for caption in captions {
            normalizer.normalize_into(caption, &mut out);
            std::hint::black_box(out.len());
        }
    });

    let elapsed = measure(|| {
        for caption in captions {
            normalizer.normalize_into(caption, &mut out);
            std::hint::black_box(out.len());
        }
    });

    print_perf("Normalize", captions.len() as u64, elapsed, 0);
}

fn bench_synthesize(captions: &[&str]) {
    let mut engine = HashtagEngine::new();

    println!("=== Synthesize ===");

    warmup(|| {
        for caption in captions {
            let _ = engine.generate(caption);
        }
    });

    let mut tags = 0u64;
    let elapsed = measure(|| {
        let mut local = 0u64;
        for caption in captions {
            if let Ok(result) = engine.generate(caption) {
                local += result.len() as u64;
            }
        }
        tags = local;
        std::hint::black_box(tags);
    });

    print_perf("Synthesize", captions.len() as u64, elapsed, tags);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, captions: u64, elapsed: Duration, tags: u64) {
    let secs = elapsed.as_secs_f64();

    println!("--------------------------------");
    println!("Mode         : {}", label);
    println!("Elapsed      : {:.3} s", secs);
    println!(
        "Captions/sec : {}",
        fmt_count((captions as f64 / secs) as u64)
    );

    if tags > 0 {
        println!("Tags         : {}", fmt_count(tags));
        println!("Tags/sec     : {}", fmt_count((tags as f64 / secs) as u64));
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
