//! Criterion benchmarks for the hot paths: model construction and the
//! bounded sampling loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use versecraft::generate::{generate_lines, remove_internal_repetition};
use versecraft::lexicon::WordListFilter;
use versecraft::markov::MarkovModel;

fn synthetic_corpus() -> String {
    let openers = ["we chase", "you hold", "they find", "i keep", "she sings", "he rides"];
    let objects = [
        "the fading light",
        "a silver dream",
        "the open road",
        "a quiet storm",
        "the morning sun",
        "an empty street",
    ];
    let closers = [
        "until the morning comes",
        "beneath the city glow",
        "across the endless night",
        "beyond the furthest shore",
        "inside a beating heart",
        "against the falling rain",
    ];
    let mut lines = Vec::new();
    for o in openers {
        for obj in objects {
            for c in closers {
                lines.push(format!("{o} {obj} {c}"));
            }
        }
    }
    lines.join("\n")
}

fn bench_model_build(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    c.bench_function("markov_build_state3", |b| {
        b.iter(|| MarkovModel::build(black_box(&corpus), 3).unwrap())
    });
    c.bench_function("markov_build_state2", |b| {
        b.iter(|| MarkovModel::build(black_box(&corpus), 2).unwrap())
    });
}

fn bench_line_generation(c: &mut Criterion) {
    let corpus = synthetic_corpus();
    let model = MarkovModel::build(&corpus, 2).unwrap();
    let filter = WordListFilter::builtin();
    c.bench_function("generate_lines_4_to_8", |b| {
        b.iter(|| generate_lines(black_box(&model), 4, 8, 12, &filter))
    });
}

fn bench_repetition_removal(c: &mut Criterion) {
    let line = "dance dance dance dance under the lights under the lights";
    c.bench_function("remove_internal_repetition", |b| {
        b.iter(|| remove_internal_repetition(black_box(line)))
    });
}

criterion_group!(
    benches,
    bench_model_build,
    bench_line_generation,
    bench_repetition_removal
);
criterion_main!(benches);
