use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sightline::graph::build_visibility_graph;
use sightline::route::plan_route;
use sightline::scene::{generate_scene, GeneratorConfig, Scene};

fn reduced_scene(seed: u64) -> Scene {
    let mut scene = generate_scene(&GeneratorConfig::default(), ChaCha8Rng::seed_from_u64(seed))
        .expect("default generator config places obstacles");
    scene.reduce_to_hulls();
    scene
}

fn bench_visibility_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_graph");
    for seed in [1u64, 7, 42] {
        let scene = reduced_scene(seed);
        let vertices = scene.vertex_count();
        group.bench_with_input(BenchmarkId::new("build", vertices), &scene, |b, scene| {
            b.iter(|| build_visibility_graph(black_box(scene)))
        });
    }
    group.finish();
}

fn bench_plan_route(c: &mut Criterion) {
    let scene = generate_scene(&GeneratorConfig::default(), ChaCha8Rng::seed_from_u64(42))
        .expect("default generator config places obstacles");
    c.bench_function("plan_route", |b| {
        b.iter(|| {
            let mut scene = scene.clone();
            plan_route(black_box(&mut scene))
        })
    });
}

criterion_group!(benches, bench_visibility_graph, bench_plan_route);
criterion_main!(benches);
