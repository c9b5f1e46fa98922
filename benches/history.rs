//! Benchmarks for edit history operations
//!
//! Run with: cargo bench history

use divan::Bencher;
use stackpad::model::Document;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn sample_text(line_count: usize) -> String {
    "The quick brown fox jumps over the lazy dog.\n".repeat(line_count)
}

// ============================================================================
// Insert
// ============================================================================

#[divan::bench(args = [10, 100, 1_000])]
fn insert_many(bencher: Bencher, count: usize) {
    bencher.bench_local(|| {
        let mut doc = Document::new();
        for _ in 0..count {
            doc.insert("word");
        }
        divan::black_box(doc.len_chars())
    });
}

#[divan::bench(args = [10, 100, 1_000])]
fn insert_then_undo_all(bencher: Bencher, count: usize) {
    bencher.bench_local(|| {
        let mut doc = Document::new();
        for _ in 0..count {
            doc.insert("word");
        }
        while doc.undo().is_ok() {}
        divan::black_box(doc.len_chars())
    });
}

// ============================================================================
// Delete all
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn delete_all(bencher: Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher
        .with_inputs(|| Document::with_text(&text))
        .bench_local_values(|mut doc| {
            let removed = doc.delete_all("the");
            divan::black_box(removed.ok())
        });
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn delete_all_then_undo(bencher: Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher
        .with_inputs(|| Document::with_text(&text))
        .bench_local_values(|mut doc| {
            let _ = doc.delete_all("o");
            let _ = doc.undo();
            divan::black_box(doc.len_chars())
        });
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn delete_all_undo_redo(bencher: Bencher, line_count: usize) {
    let text = sample_text(line_count);
    bencher
        .with_inputs(|| Document::with_text(&text))
        .bench_local_values(|mut doc| {
            let _ = doc.delete_all("fox");
            let _ = doc.undo();
            let _ = doc.redo();
            divan::black_box(doc.len_chars())
        });
}

// ============================================================================
// Search
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn find_all_occurrences(bencher: Bencher, line_count: usize) {
    let doc = Document::with_text(&sample_text(line_count));
    bencher.bench_local(|| divan::black_box(doc.find_all_occurrences("o")));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn find_all_overlapping(bencher: Bencher, line_count: usize) {
    let doc = Document::with_text(&"aaaa ".repeat(line_count));
    bencher.bench_local(|| divan::black_box(doc.find_all_occurrences("aa")));
}
