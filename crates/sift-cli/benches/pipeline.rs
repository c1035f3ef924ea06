//! Benchmark harness: measures scan → ingest → search → render performance.
//!
//! Run with: cargo bench -p sift-cli
//!
//! Plain timing loop, no external benchmark framework.

use std::fs;
use std::time::Instant;

use sift_index::SearchEngine;
use sift_render::JsonlWriter;
use sift_scanner::{ScanOptions, expand_paths};

const WORDS: &[&str] = &[
    "ownership", "borrowing", "lifetime", "compiler", "memory", "thread", "channel", "parser",
    "token", "index", "ranking", "query", "document", "frequency", "vector", "cache",
];

fn create_synthetic_corpus(doc_count: usize) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    for i in 0..doc_count {
        let mut text = String::new();
        for j in 0..200 {
            text.push_str(WORDS[(i * 7 + j * 3 + j / 5) % WORDS.len()]);
            text.push(if j % 12 == 11 { '\n' } else { ' ' });
        }
        text.push_str(&format!("unique{i}\n"));
        fs::write(root.join(format!("doc_{i:05}.txt")), text).unwrap();
    }

    dir
}

fn bench_ingest(paths: &[String]) -> SearchEngine {
    let mut engine = SearchEngine::new();
    engine.ingest_many(paths);
    engine
}

fn run_benchmark(label: &str, doc_count: usize, query: &str) {
    let dir = create_synthetic_corpus(doc_count);
    let iterations = 5;
    let inputs = vec![dir.path().to_path_buf()];

    // Warmup
    let paths = expand_paths(&inputs, &ScanOptions::default()).unwrap();
    let _ = bench_ingest(&paths);

    // Scan benchmark
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = expand_paths(&inputs, &ScanOptions::default()).unwrap();
    }
    let scan_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    // Ingest benchmark
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_ingest(&paths);
    }
    let ingest_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    // Search benchmark: first query fills the cache, later ones reuse it
    let engine = bench_ingest(&paths);
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = engine.search(query, Some(20));
    }
    let search_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    // Render benchmark
    let results = engine.search(query, Some(20));
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = JsonlWriter::new(query)
            .max_results(Some(20))
            .render(&results, engine.count())
            .unwrap();
    }
    let render_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    let total_ms = scan_ms + ingest_ms + search_ms + render_ms;

    println!("{label}:");
    println!("  Docs:   {doc_count}");
    println!("  Scan:   {scan_ms:.1}ms");
    println!("  Ingest: {ingest_ms:.1}ms");
    println!("  Search: {search_ms:.1}ms");
    println!("  Render: {render_ms:.1}ms");
    println!("  Total:  {total_ms:.1}ms");
    println!();
}

fn main() {
    println!("Sift Pipeline Benchmarks");
    println!("========================\n");

    run_benchmark("Small corpus (50 docs)", 50, "borrowing lifetime unique7");
    run_benchmark("Medium corpus (200 docs)", 200, "borrowing lifetime unique7");
    run_benchmark("Large corpus (1000 docs)", 1000, "borrowing lifetime unique7");

    println!("Done.");
}
