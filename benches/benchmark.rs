// Performance benchmarks for model building and query paths
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use etoile_core::{RestaurantRecord, StarRating};
use etoile_engine::{EngineConfig, RecommendationEngine};
use etoile_similarity::{SimilarityMatrix, TfIdfConfig, TfIdfVectorizer};
use rand::prelude::*;

const CUISINES: &[&str] = &[
    "french", "contemporary", "seafood", "japanese", "sushi", "italian", "pizza",
    "korean", "mexican", "creative", "modern cuisine", "classic cuisine", "thai",
    "vegetarian", "steakhouse", "cantonese", "market cuisine", "farm to table",
];

fn generate_cuisine(rng: &mut impl Rng) -> String {
    let terms = rng.random_range(1..=3);
    (0..terms)
        .filter_map(|_| CUISINES.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(", ")
}

fn generate_records(count: usize) -> Vec<RestaurantRecord> {
    let mut rng = rand::rng();
    (0..count)
        .map(|i| {
            let stars = match rng.random_range(0..3) {
                0 => StarRating::One,
                1 => StarRating::Two,
                _ => StarRating::Three,
            };
            RestaurantRecord::new(
                format!("restaurant number {}", i),
                generate_cuisine(&mut rng),
                "City",
                "Region",
                "$$$",
                stars,
            )
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 700, 2000].iter() {
        let documents: Vec<String> = generate_records(*size).into_iter().map(|r| r.cuisine).collect();

        group.bench_with_input(BenchmarkId::new("tfidf_fit_transform", size), &documents, |b, docs| {
            b.iter(|| black_box(TfIdfVectorizer::fit_transform(docs, TfIdfConfig::default())));
        });

        let (_, vectors) = TfIdfVectorizer::fit_transform(&documents, TfIdfConfig::default());
        group.bench_with_input(BenchmarkId::new("similarity_matrix", size), &vectors, |b, vectors| {
            b.iter(|| black_box(SimilarityMatrix::build(vectors)));
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    let engine = RecommendationEngine::from_records(generate_records(700), EngineConfig::default());

    group.bench_function("exact_name", |b| {
        b.iter(|| black_box(engine.recommend(black_box("restaurant number 350"), 5)));
    });

    group.bench_function("misspelled_name", |b| {
        b.iter(|| black_box(engine.recommend(black_box("restaurnt numbr 35O"), 5)));
    });

    group.finish();
}

fn benchmark_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    let engine = RecommendationEngine::from_records(generate_records(700), EngineConfig::default());

    group.bench_function("find_closest_match", |b| {
        b.iter(|| black_box(engine.find_closest_match(black_box("restaurant nmber 12"))));
    });

    group.bench_function("suggestions", |b| {
        b.iter(|| black_box(engine.suggestions(black_box("numbr 9"), 10)));
    });

    group.bench_function("search_by_cuisine", |b| {
        b.iter(|| black_box(engine.search_by_cuisine(black_box("seafood"), 10)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_recommend, benchmark_lookup);
criterion_main!(benches);
