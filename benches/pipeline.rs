//! Pipeline benchmark: telemetry → features → full analysis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use survey_sentinel::config::RiskConfig;
use survey_sentinel::features::FeatureExtractor;
use survey_sentinel::model::Scorer;
use survey_sentinel::risk::RiskEngine;
use survey_sentinel::telemetry::{BehavioralData, KeystrokeEvent, MouseSample};

fn make_response(samples: usize) -> BehavioralData {
    let mut data = BehavioralData::empty("bench-survey", "bench-response");
    data.mouse_movements = (0..samples)
        .map(|i| MouseSample {
            x: (i as f64).sin() * 200.0,
            y: (i as f64).cos() * 120.0,
            timestamp: i as i64 * 16,
            velocity: Some(1.0 + (i % 7) as f64 * 0.1),
        })
        .collect();
    data.keystrokes = (0..samples / 4)
        .map(|i| KeystrokeEvent {
            key: format!("k{}", i % 26),
            timestamp: i as i64 * 180,
            dwell_time: 80.0 + (i % 5) as f64,
            flight_time: 120.0 + (i % 9) as f64,
        })
        .collect();
    data.response_times = (0..40).map(|i| 1.5 + (i % 6) as f64).collect();
    data.answer_patterns = (0..40).map(|i| format!("opt_{}", i % 4)).collect();
    data
}

fn bench_feature_extraction(c: &mut Criterion) {
    let extractor = FeatureExtractor::new();
    let data = make_response(1000);

    c.bench_function("feature_extract_1000_samples", |b| {
        b.iter(|| black_box(extractor.extract(black_box(&data))))
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    let engine = RiskEngine::new(Scorer::heuristic(), RiskConfig::default());
    let data = make_response(1000);

    c.bench_function("analyze_1000_samples", |b| {
        b.iter(|| black_box(engine.analyze(black_box(&data))))
    });
}

criterion_group!(benches, bench_feature_extraction, bench_full_analysis);
criterion_main!(benches);
