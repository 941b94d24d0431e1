use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vembed_embedding::{EmbeddingModel, Pipeline, StridedAverageModel};

fn make_sine(freq_hz: f32, n_samples: usize, sample_rate: usize) -> Vec<f32> {
    (0..n_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            0.5 * (freq_hz * 2.0 * std::f32::consts::PI * t).sin()
        })
        .collect()
}

fn bench_strided_30s(c: &mut Criterion) {
    let model = StridedAverageModel::default();
    let pcm = make_sine(440.0, 480000, 16000);

    c.bench_function("strided_extract_30s", |b| {
        b.iter(|| {
            let _ = black_box(model.extract(black_box(&pcm)));
        });
    });
}

fn bench_pipeline_10s(c: &mut Criterion) {
    let pipeline = Pipeline::default();
    let pcm = make_sine(440.0, 160000, 16000);

    c.bench_function("pipeline_run_10s", |b| {
        b.iter(|| {
            let _ = black_box(pipeline.run(black_box(pcm.clone())));
        });
    });
}

criterion_group!(benches, bench_strided_30s, bench_pipeline_10s);
criterion_main!(benches);
