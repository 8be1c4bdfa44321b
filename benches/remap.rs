//! Benchmarks for the offset-remapping hot path
//!
//! Run with: cargo bench remap

use ghostline::{ContentChange, DocumentId, HistoryStore};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn store_with_entries(n: usize) -> (HistoryStore, DocumentId) {
    let doc = DocumentId::new("file:///bench.rs");
    let mut store = HistoryStore::new();
    for line in 0..n {
        store.ensure_initialized(&doc, line, "original text");
        store.commit(&doc, line, "edited text", 20);
    }
    (store, doc)
}

#[divan::bench(args = [100, 1000, 10_000])]
fn shift_all_entries(n: usize) {
    let (mut store, doc) = store_with_entries(n);
    let changes = [ContentChange::new(0, 0, "\ninserted")];
    store.remap(&doc, divan::black_box(&changes));
}

#[divan::bench(args = [100, 1000, 10_000])]
fn merge_middle_span(n: usize) {
    let (mut store, doc) = store_with_entries(n);
    let changes = [ContentChange::new(n / 4, n / 2, "merged")];
    store.remap(&doc, divan::black_box(&changes));
}

#[divan::bench(args = [1, 8, 32])]
fn batch_of_changes(batch: usize) {
    let (mut store, doc) = store_with_entries(1000);
    let changes: Vec<ContentChange> = (0..batch)
        .map(|i| ContentChange::new(i * 10, i * 10, "\nnew line"))
        .collect();
    store.remap(&doc, divan::black_box(&changes));
}

#[divan::bench]
fn single_line_edit_early_out() {
    let (mut store, doc) = store_with_entries(10_000);
    let changes = [ContentChange::new(5000, 5000, "typed")];
    store.remap(&doc, divan::black_box(&changes));
}
