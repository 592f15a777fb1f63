use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use stagehand::picking::{PickMode, Ray, Shape};
use stagehand::pose::{mirror, JointPose, JointRotation};
use stagehand::scene::{EntityKind, Scene};

/// A grid of props with a few characters mixed in, each with an icon.
fn grid_scene(side: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..side {
        for j in 0..side {
            let kind = if (i + j) % 5 == 0 {
                EntityKind::Character
            } else {
                EntityKind::Object
            };
            let position = Vec3::new(i as f32 * 2.0, 0.0, j as f32 * -2.0);
            let id = scene.add_entity(format!("e{i}_{j}"), kind, position);
            let _ = scene.attach_hit_shape(
                &id,
                Shape::cuboid(position + Vec3::Y, Vec3::new(1.0, 2.0, 1.0)),
            );
            let _ = scene.attach_icon(&id, Shape::Sphere {
                center: position + Vec3::Y * 2.5,
                radius: 0.4,
            });
        }
    }
    scene
}

fn picking_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_entity");

    for side in [10, 30, 60] {
        let scene = grid_scene(side);
        let selector = scene.selector();
        let ray = Ray::new(Vec3::new(4.0, 1.0, 10.0), Vec3::NEG_Z);
        let overhead = Ray::new(Vec3::new(4.0, 30.0, 4.0), Vec3::new(0.0, -1.0, -1.0));

        group.bench_function(format!("{}_direct", side * side), |b| {
            b.iter(|| {
                black_box(selector.pick_entity(
                    black_box(&ray),
                    scene.entities(),
                    PickMode::Direct,
                ))
            })
        });
        group.bench_function(format!("{}_icon", side * side), |b| {
            b.iter(|| {
                black_box(selector.pick_entity(
                    black_box(&overhead),
                    scene.entities(),
                    PickMode::Icon,
                ))
            })
        });
    }
    group.finish();
}

fn mirror_benchmark(c: &mut Criterion) {
    let mut pose = JointPose::new();
    for finger in ["Thumb", "Index", "Middle", "Ring", "Pinky"] {
        for joint in 1..=4 {
            let _ = pose.insert(
                format!("LeftHand{finger}{joint}"),
                JointRotation::new(0.1 * joint as f32, -0.2, 0.35),
            );
        }
    }

    c.bench_function("mirror_hand_pose", |b| {
        b.iter(|| black_box(mirror(black_box(&pose), None)))
    });
}

criterion_group!(benches, picking_benchmark, mirror_benchmark);
criterion_main!(benches);
