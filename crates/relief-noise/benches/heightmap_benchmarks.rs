use criterion::{Criterion, black_box, criterion_group, criterion_main};
use relief_noise::*;

fn bench_height_map_256(c: &mut Criterion) {
    let settings = NoiseSettings::default();
    let offsets = generate_random_offsets(&settings, &mut SeedSource::Fixed(0).rng());
    c.bench_function("height_map_256", |bencher| {
        bencher.iter(|| black_box(compute_height_map(256, 256, &settings, &offsets, None)))
    });
}

fn bench_height_map_simplex_256(c: &mut Criterion) {
    let settings = NoiseSettings {
        basis: NoiseBasis::Simplex,
        ..Default::default()
    };
    let offsets = generate_random_offsets(&settings, &mut SeedSource::Fixed(0).rng());
    c.bench_function("height_map_simplex_256", |bencher| {
        bencher.iter(|| black_box(compute_height_map(256, 256, &settings, &offsets, None)))
    });
}

fn bench_normal_map_256(c: &mut Criterion) {
    let settings = NoiseSettings::default();
    let offsets = generate_random_offsets(&settings, &mut SeedSource::Fixed(0).rng());
    let heights = compute_height_map(256, 256, &settings, &offsets, None);
    c.bench_function("normal_map_256", |bencher| {
        bencher.iter(|| black_box(compute_normal_map(black_box(&heights))))
    });
}

fn bench_full_pipeline_128(c: &mut Criterion) {
    let settings = NoiseSettings::default();
    let regions = RegionsSettings::default();
    let options = GenerationOptions::default();
    c.bench_function("generate_128", |bencher| {
        bencher.iter(|| {
            let mut rng = SeedSource::Fixed(1).rng();
            black_box(generate(128, 128, &settings, &regions, &options, &mut rng))
        })
    });
}

criterion_group!(
    benches,
    bench_height_map_256,
    bench_height_map_simplex_256,
    bench_normal_map_256,
    bench_full_pipeline_128,
);
criterion_main!(benches);
