//! Benchmarks for curve sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use guilloche::presets::preset;
use guilloche::{CurveConfig, Method, QualityConfig};

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");
    let quality = QualityConfig::default();

    for method in Method::ALL {
        let params = preset(method);
        group.bench_with_input(
            BenchmarkId::new("method", method.as_str()),
            &params,
            |b, params| b.iter(|| params.sample(black_box(&quality))),
        );
    }

    group.finish();
}

fn bench_quality_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("quality_levels");
    let params = preset(Method::Trochoid);

    // Finer angle steps mean more vertices for the same curve
    for angle_deg in [2.0, 1.0, 0.35, 0.1] {
        let quality = QualityConfig::new(angle_deg, 2.0, 120_000);
        group.bench_with_input(
            BenchmarkId::new("max_angle_deg", format!("{:.2}", angle_deg)),
            &quality,
            |b, quality| b.iter(|| params.sample(black_box(quality))),
        );
    }

    group.finish();
}

fn bench_fixed_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_count");
    let quality = QualityConfig::default();

    for method in Method::ALL.into_iter().filter(|m| m.is_fixed_count()) {
        let params = preset(method);
        group.bench_with_input(
            BenchmarkId::new("method", method.as_str()),
            &params,
            |b, params| b.iter(|| params.sample(black_box(&quality))),
        );
    }

    group.finish();
}

fn bench_config_round_trip(c: &mut Criterion) {
    let json = r#"{
        "method": "rhodonea",
        "params": { "A": 140, "k": 7, "variant": "sin" },
        "quality": { "maxAngleStepDeg": 0.35, "maxSegLenPx": 2.0, "maxVerts": 120000 }
    }"#;

    c.bench_function("config_parse_and_sample", |b| {
        b.iter(|| {
            CurveConfig::from_json(black_box(json))
                .and_then(|config| config.sample())
                .map(|sampled| sampled.stats.vertices)
        })
    });
}

criterion_group!(
    benches,
    bench_presets,
    bench_quality_levels,
    bench_fixed_count,
    bench_config_round_trip
);
criterion_main!(benches);
