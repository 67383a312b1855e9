//! Batch classification throughput benchmarks.
//!
//! # Running
//! ```bash
//! cargo bench --package chartype-batch
//! ```

use chartype_batch::{BatchEngine, BatchRequest};
use chartype_core::classifier::{Classifier, UnicodeClassifier};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ─── Input factory ────────────────────────────────────────────────────────────

const SAMPLES: [&str; 5] = [
    "The quick brown fox jumps over the lazy dog.",
    "Zwölf Boxkämpfer jagen Viktor quer über den großen Sylter Deich",
    "いろはにほへと ちりぬるを わかよたれそ つねならむ",
    "Съешь же ещё этих мягких французских булок, да выпей чаю",
    "🙂 emoji 🚀 mixed ✓ with ascii 123",
];

fn make_batch(n: usize) -> Vec<Option<String>> {
    (0..n)
        .map(|i| {
            if i % 50 == 0 {
                None
            } else {
                Some(SAMPLES[i % SAMPLES.len()].repeat(1 + i % 3))
            }
        })
        .collect()
}

fn total_bytes(batch: &[Option<String>]) -> u64 {
    batch.iter().flatten().map(|s| s.len() as u64).sum()
}

// ─── Benchmarks ───────────────────────────────────────────────────────────────

fn bench_sequential(c: &mut Criterion) {
    let engine = BatchEngine::default();

    let mut group = c.benchmark_group("sequential_classify");
    for batch_size in [100, 1_000, 10_000] {
        let batch = make_batch(batch_size);
        group.throughput(Throughput::Bytes(total_bytes(&batch)));
        group.bench_with_input(BenchmarkId::from_parameter(batch_size), &batch, |b, batch| {
            b.iter(|| engine.classify(BatchRequest::from_inputs(batch)));
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let engine = BatchEngine::default();

    let mut group = c.benchmark_group("parallel_classify_rayon");
    for batch_size in [1_000, 10_000, 100_000] {
        let batch = make_batch(batch_size);
        group.throughput(Throughput::Bytes(total_bytes(&batch)));
        group.bench_with_input(BenchmarkId::from_parameter(batch_size), &batch, |b, batch| {
            b.iter(|| {
                engine.classify(
                    BatchRequest::from_inputs(batch)
                        .parallel(true)
                        .chunk_size(1_000),
                )
            });
        });
    }
    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let classifier = UnicodeClassifier::new();

    c.bench_function("category_of_single", |b| {
        b.iter(|| classifier.category_of(black_box(0x4E2D)));
    });
}

criterion_group!(benches, bench_sequential, bench_parallel, bench_classifier);
criterion_main!(benches);
