//! Criterion benchmarks for the respell suggestion engine.
//!
//! Covers the dominant cost path (the full-dictionary scan behind
//! `suggest`) plus the membership test and the raw similarity measures.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use respell::spelling::{
    Dictionary, SuggestConfig, SuggestionEngine, common_percent, similarity_metric,
};
use std::hint::black_box;

/// Generate a deterministic synthetic dictionary from affix combinations.
fn synthetic_words(count: usize) -> Vec<String> {
    let prefixes = ["re", "un", "in", "de", "pro", "con", "per", "sub"];
    let stems = [
        "spell", "check", "word", "rank", "score", "match", "form", "state", "light", "grade",
    ];
    let suffixes = ["", "s", "ing", "ed", "er", "ly", "ment", "ness"];

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let prefix = prefixes[i % prefixes.len()];
        let stem = stems[(i / prefixes.len()) % stems.len()];
        let suffix = suffixes[(i / (prefixes.len() * stems.len())) % suffixes.len()];
        words.push(format!("{prefix}{stem}{suffix}"));
    }
    words
}

fn bench_suggest(c: &mut Criterion) {
    let dictionary: Dictionary = synthetic_words(640).into_iter().collect();
    let dictionary_size = dictionary.len();
    let engine = SuggestionEngine::with_config(
        dictionary,
        SuggestConfig {
            max_length_diff: 2,
            min_common_percent: 0.7,
            max_suggestions: Some(10),
        },
    );

    let typos = ["respel", "unchekc", "prostade", "subgarde", "inlihgt"];

    let mut group = c.benchmark_group("suggest");
    group.throughput(Throughput::Elements(dictionary_size as u64));
    group.bench_function("full_dictionary_scan", |b| {
        b.iter(|| {
            for typo in &typos {
                black_box(engine.suggest(black_box(typo)));
            }
        })
    });
    group.bench_function("is_valid_word", |b| {
        b.iter(|| {
            black_box(engine.is_valid_word(black_box("respelling")));
            black_box(engine.is_valid_word(black_box("respel")));
        })
    });
    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");
    group.bench_function("similarity_metric", |b| {
        b.iter(|| black_box(similarity_metric(black_box("respelling"), black_box("respel"))))
    });
    group.bench_function("common_percent", |b| {
        b.iter(|| black_box(common_percent(black_box("respelling"), black_box("respel"))))
    });
    group.finish();
}

criterion_group!(benches, bench_suggest, bench_similarity);
criterion_main!(benches);
