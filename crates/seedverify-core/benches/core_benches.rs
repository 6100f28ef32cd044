//! Criterion benchmarks for seedverify-core hot paths.
//!
//! Covers: word lookup, prefix prediction and checksum validation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use seedverify_core::checksum::valid_checksum;
use seedverify_core::predict::next_letters;
use seedverify_core::wordlist::index_of;

const PHRASE_24: &str = "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo \
                         zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote";

fn bench_index_of(c: &mut Criterion) {
    c.bench_function("index_of/zoo", |b| b.iter(|| index_of(black_box("zoo"))));
    c.bench_function("index_of/miss", |b| b.iter(|| index_of(black_box("zzzz"))));
}

fn bench_next_letters(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_letters");
    for prefix in ["a", "ab", "act", "zon"] {
        group.bench_function(prefix, |b| b.iter(|| next_letters(black_box(prefix))));
    }
    group.finish();
}

fn bench_valid_checksum(c: &mut Criterion) {
    c.bench_function("valid_checksum/24", |b| {
        b.iter(|| valid_checksum(black_box(PHRASE_24)))
    });
}

criterion_group!(benches, bench_index_of, bench_next_letters, bench_valid_checksum);
criterion_main!(benches);
