// Copyright 2025 the Stagepad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use stagepad_cluster::{ClusterConfig, Marker, ReferenceMode};
use stagepad_gesture::{GestureResolver, PointerEvent, Scene};
use stagepad_view::{StageGeometry, ViewState, ViewTransform};

fn markers() -> Vec<Marker> {
    (0..64_u32)
        .map(|i| {
            let p = Point::new(40.0 + f64::from(i % 16) * 60.0, 40.0 + f64::from(i / 16) * 100.0);
            Marker::new(i + 1, p, 20.0).with_cluster(i % 4)
        })
        .collect()
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("stagepad_gesture");
    let stage = StageGeometry::new(20.0, 10.0);
    let view = ViewTransform::new(ViewState::fit_stage(&stage), stage, Size::new(1000.0, 500.0), 20.0);
    let markers = markers();
    let clusters: Vec<ClusterConfig> = (1..4)
        .map(|id| ClusterConfig::new(id, ReferenceMode::Barycenter))
        .collect();
    let scene = Scene::new(&markers, &clusters, &view);

    let downs: Vec<PointerEvent> = markers
        .iter()
        .take(10)
        .enumerate()
        .map(|(i, m)| PointerEvent::down(i as u64, m.position))
        .collect();
    let moves: Vec<PointerEvent> = downs
        .iter()
        .map(|e| PointerEvent::moved(e.id, e.position + Vec2::new(3.0, -2.0)))
        .collect();

    group.bench_function("classify_10", |b| {
        b.iter_batched(
            GestureResolver::new,
            |mut resolver| black_box(resolver.process(&downs, &scene)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("move_10_drags", |b| {
        b.iter_batched(
            || {
                let mut resolver = GestureResolver::new();
                resolver.process(&downs, &scene);
                resolver
            },
            |mut resolver| black_box(resolver.process(&moves, &scene)),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
