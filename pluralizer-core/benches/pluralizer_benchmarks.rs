//! Performance benchmarks for the pluralization transformers
//!
//! Run with: cargo bench --bench pluralizer_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pluralizer_core::{Gender, Lexicon, Pluralizer};
use std::hint::black_box;

const NOUNS: &[&str] = &[
    "sword", "bus", "fox", "knife", "leaf", "city", "day", "cactus", "analysis", "person",
    "glamdring", "staff", "potion", "wand",
];

const VERBS: &[&str] = &[
    "hisses", "catches", "glorifies", "stays", "eats", "is", "has", "squigglfonox",
];

/// Generate a phrase with `words` adjectives in front of the head noun
fn generate_phrase(words: usize) -> String {
    let mut phrase = String::from("a ");
    for _ in 0..words {
        phrase.push_str("shiny ");
    }
    phrase.push_str("bag of holding");
    phrase
}

/// Benchmark single-noun pluralization with and without the dictionary
fn bench_nouns(c: &mut Criterion) {
    let mut group = c.benchmark_group("nouns");
    group.throughput(Throughput::Elements(NOUNS.len() as u64));

    for (name, engine) in [
        ("builtin", Pluralizer::new()),
        ("rules_only", Pluralizer::with_lexicon(Lexicon::empty())),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for noun in NOUNS {
                    black_box(engine.noun(black_box(noun), 2));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark verb agreement
fn bench_verbs(c: &mut Criterion) {
    let engine = Pluralizer::new();
    let mut group = c.benchmark_group("verbs");
    group.throughput(Throughput::Elements(VERBS.len() as u64));

    group.bench_function("agreement", |b| {
        b.iter(|| {
            for verb in VERBS {
                black_box(engine.verb(black_box(verb)));
            }
        });
    });

    group.finish();
}

/// Benchmark noun phrases of growing length
fn bench_phrases(c: &mut Criterion) {
    let engine = Pluralizer::new();
    let mut group = c.benchmark_group("noun_phrases");

    for words in [0, 4, 16, 64] {
        let phrase = generate_phrase(words);
        group.throughput(Throughput::Bytes(phrase.len() as u64));
        group.bench_with_input(BenchmarkId::new("words", words), &phrase, |b, phrase| {
            b.iter(|| black_box(engine.noun_phrase(black_box(phrase), 7)));
        });
    }

    group.finish();
}

/// Benchmark option parsing and verb-option resolution
fn bench_options(c: &mut Criterion) {
    let engine = Pluralizer::new();
    let mut group = c.benchmark_group("options");

    let explicit = r#"("is not":"are not") sure"#;
    let derived = "(catches) the ball";

    group.bench_function("parse_explicit", |b| {
        b.iter(|| black_box(engine.parse_option(black_box(explicit), 1)));
    });
    group.bench_function("verb_option_derived", |b| {
        b.iter(|| black_box(engine.verb_option_for(black_box(derived), Gender::Plural)));
    });

    group.finish();
}

criterion_group!(benches, bench_nouns, bench_verbs, bench_phrases, bench_options);
criterion_main!(benches);
