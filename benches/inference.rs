//! Scoring benchmark: feature vector → probability on the heuristic path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use survey_sentinel::features::{FeatureVector, FEATURE_DIM};
use survey_sentinel::model::Scorer;

fn bench_heuristic_score(c: &mut Criterion) {
    let scorer = Scorer::heuristic();
    let fv = FeatureVector::sanitized([0.1; FEATURE_DIM]);

    c.bench_function("heuristic_score_24d", |b| {
        b.iter(|| scorer.score(black_box(&fv)))
    });
}

criterion_group!(benches, bench_heuristic_score);
criterion_main!(benches);
