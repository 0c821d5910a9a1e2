//! Benchmarks for grammar artifact loading.
//!
//! Loading runs the full validation pass over the tables, so this
//! measures the per-process cost of bringing a grammar up.

// Benchmark code - panicking on a load failure is fine here
#![allow(missing_docs)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_load(c: &mut Criterion) {
    c.bench_function("load_ucode_grammar", |b| {
        b.iter(|| {
            let language = tabula::load(black_box(&tabula_ucode::GRAMMAR))
                .expect("ucode grammar should load");
            black_box(language.table_size())
        });
    });
}

criterion_group!(benches, bench_load);
criterion_main!(benches);
