use centroids::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        clustering_kmeans_uniform,
        assigning_nearest_centers,
        extracting_person_names,
}

fn uniform(n: usize, d: usize) -> Vec<Point> {
    let ref mut rng = SmallRng::seed_from_u64(KMEANS_SEED);
    (0..n)
        .map(|_| Point::from((0..d).map(|_| rng.random::<Energy>()).collect::<Vec<Energy>>()))
        .collect::<Vec<Point>>()
}

fn clustering_kmeans_uniform(c: &mut criterion::Criterion) {
    let points = uniform(4096, 8);
    c.bench_function("cluster 4096 uniform points into 16 groups", |b| {
        b.iter(|| cluster(points.clone(), 16, 10))
    });
}

fn assigning_nearest_centers(c: &mut criterion::Criterion) {
    let run = Segmentation::new(uniform(4096, 8), 16, 10).unwrap();
    c.bench_function("assign 4096 points to 16 centers", |b| {
        b.iter(|| run.assign())
    });
}

fn extracting_person_names(c: &mut criterion::Criterion) {
    let recognizer = Lexicon::new(["Alice Johnson", "Bob Smith", "Charlie Brown"]);
    let documents = [(
        "doc_1",
        "Alice Johnson met Bob Smith in Paris and later emailed Charlie Brown.",
    )];
    c.bench_function("extract person names from a document", |b| {
        b.iter(|| person_names(&documents, &recognizer))
    });
}
