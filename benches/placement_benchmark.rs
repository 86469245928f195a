// benches/placement_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DMat4;

use spiral_pattern::host_lib::{replay_placements, MemoryScene};
use spiral_pattern::{PatternParameters, SpiralPlacementGenerator};
use rand::Rng;

fn random_parameters(rng: &mut impl Rng, dual: bool) -> PatternParameters {
    let instances = rng.gen_range(20..=400);
    let primary_pitch = rng.gen_range(0.05..2.0);
    let secondary_pitch = if dual { rng.gen_range(0.01..1.0) } else { 0.0 };
    PatternParameters::new(instances, primary_pitch, secondary_pitch, 10.0)
        .expect("benchmark parameters are in range")
}

fn placement_benchmark_fn(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    const NUM_BENCH_PATTERNS: usize = 100;
    let single: Vec<PatternParameters> =
        (0..NUM_BENCH_PATTERNS).map(|_| random_parameters(&mut rng, false)).collect();
    let dual: Vec<PatternParameters> =
        (0..NUM_BENCH_PATTERNS).map(|_| random_parameters(&mut rng, true)).collect();

    let mut group = c.benchmark_group("PlacementOperations");

    group.bench_function("generate_single_spiral_100_patterns", |b| {
        let mut iter = single.iter().cycle();
        b.iter(|| SpiralPlacementGenerator::generate(black_box(iter.next().unwrap())))
    });

    group.bench_function("generate_dual_spiral_100_patterns", |b| {
        let mut iter = dual.iter().cycle();
        b.iter(|| SpiralPlacementGenerator::generate(black_box(iter.next().unwrap())))
    });

    group.bench_function("replay_default_pattern_into_memory_scene", |b| {
        let placements = SpiralPlacementGenerator::generate(&PatternParameters::default());
        b.iter(|| {
            let mut scene = MemoryScene::new();
            let seed = scene.add_body("Seed", DMat4::IDENTITY);
            replay_placements(&mut scene, &seed, black_box(&placements)).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, placement_benchmark_fn);
criterion_main!(benches);
