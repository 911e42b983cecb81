use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec3;
use trail_walker::core::InputState;
use trail_walker::loaders::ActorModel;
use trail_walker::math::CatmullRomCurve;
use trail_walker::rig::{pose_at, update_camera};
use trail_walker::{MovementMode, SceneConfig, World};

/// Zig-zag trail with `n` control points
fn zigzag(n: usize) -> CatmullRomCurve {
    let points = (0..n)
        .map(|i| DVec3::new(i as f64 * 10.0, 0.0, if i % 2 == 0 { -10.0 } else { 10.0 }))
        .collect();
    CatmullRomCurve::new(points).unwrap()
}

/// Benchmark: building the arc length table
fn bench_curve_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_construction");
    for n in [2, 8, 64] {
        let points: Vec<DVec3> = zigzag(n).control_points().to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| black_box(CatmullRomCurve::new(points.clone()).unwrap()))
        });
    }
    group.finish();
}

/// Benchmark: arc-length point and tangent queries
fn bench_pose_at(c: &mut Criterion) {
    let curve = SceneConfig::default().curve().unwrap();

    c.bench_function("pose_at", |b| {
        let mut progress = 0.0;
        b.iter(|| {
            progress = (progress + 0.0137) % 1.0;
            black_box(pose_at(&curve, black_box(progress)))
        })
    });
}

/// Benchmark: camera smoothing step
fn bench_update_camera(c: &mut Criterion) {
    let target = DVec3::new(10.0, 5.0, -3.0);
    c.bench_function("update_camera", |b| {
        b.iter(|| black_box(update_camera(black_box(DVec3::ZERO), target, 0.1)))
    });
}

/// Benchmark: one full world tick
fn bench_world_tick(c: &mut Criterion) {
    let mut world = World::new(SceneConfig::default(), MovementMode::FollowPath).unwrap();
    world.receive_actor(Ok(ActorModel::hiker()));
    let forward = InputState { forward: true, ..Default::default() };
    let backward = InputState { backward: true, ..Default::default() };

    c.bench_function("world_tick", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            black_box(world.tick(if flip { &forward } else { &backward }))
        })
    });
}

criterion_group!(
    benches,
    bench_curve_construction,
    bench_pose_at,
    bench_update_camera,
    bench_world_tick,
);

criterion_main!(benches);
