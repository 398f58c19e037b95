// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_inertia::{
    DragEvent, EventKind, Friction, InertiaDrag, InertiaPhase, ManualFrames, NoObservers,
    PressInput,
};

type Drag = InertiaDrag<ManualFrames>;

/// A drag released with velocity `(speed, speed / 2)`.
fn flung(friction: f64, speed: f64) -> Drag {
    let friction = Friction::new(friction).expect("valid friction");
    let mut drag = InertiaDrag::with_friction(ManualFrames::new(), NoObservers, friction);
    drag.on_press_start(PressInput::pointer(Point::ZERO));
    drag.on_frame();
    drag.on_press_move(PressInput::pointer(Point::new(speed, speed / 2.0)));
    drag.on_frame();
    drag.on_press_end();
    drag
}

fn run_until_idle(drag: &mut Drag) -> usize {
    let mut frames = 0;
    while drag.frame_pending() && drag.on_frame() != InertiaPhase::Idle {
        frames += 1;
    }
    frames
}

fn bench_tracking(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracking");
    for &n in &[60usize, 600] {
        // Wobbling path, two moves per frame.
        let path: Vec<Point> = (0..n * 2)
            .map(|i| Point::new(i as f64 * 1.5, ((i % 7) as f64) - 3.0))
            .collect();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("moves_and_frames_n{n}"), |b| {
            b.iter_batched(
                || InertiaDrag::new(ManualFrames::new(), NoObservers),
                |mut drag: Drag| {
                    drag.on_press_start(PressInput::pointer(Point::ZERO));
                    for pair in path.chunks(2) {
                        for &p in pair {
                            drag.on_press_move(PressInput::pointer(p));
                        }
                        drag.on_frame();
                    }
                    black_box(drag.velocity());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_coasting(c: &mut Criterion) {
    let mut group = c.benchmark_group("coasting");
    for &friction in &[0.5, 0.85, 0.97] {
        group.bench_function(format!("until_idle_friction_{friction}"), |b| {
            b.iter_batched(
                || flung(friction, 40.0),
                |mut drag| black_box(run_until_idle(&mut drag)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish");
    for &listeners in &[1usize, 8, 64] {
        group.throughput(Throughput::Elements(listeners as u64));
        group.bench_function(format!("coasting_listeners_{listeners}"), |b| {
            b.iter_batched(
                || {
                    let drag = flung(0.85, 40.0);
                    for _ in 0..listeners {
                        drag.subscribe(
                            EventKind::InertiaMove,
                            Rc::new(|ev: &DragEvent, _: &Drag| {
                                black_box(ev.accumulated());
                            }),
                        );
                    }
                    drag
                },
                |mut drag| black_box(run_until_idle(&mut drag)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tracking, bench_coasting, bench_publish);
criterion_main!(benches);
