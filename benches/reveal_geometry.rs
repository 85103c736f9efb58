// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Rectangle, Size};
use iced_reveal::domain::reveal::{RevealPercent, SlideMode};
use iced_reveal::ui::reveal::{Message, RawPointer, RevealConfig, RevealGeometry, State};
use std::hint::black_box;

fn geometry_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_geometry");
    let size = Size::new(1920.0, 1080.0);
    let handle = Some(Size::new(40.0, 40.0));

    group.bench_function("compute_sweep", |b| {
        b.iter(|| {
            for step in 0..=100 {
                let percent = RevealPercent::new(step as f32);
                black_box(RevealGeometry::compute(
                    black_box(percent),
                    size,
                    2.0,
                    handle,
                ));
            }
        });
    });

    group.finish();
}

fn drag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal_drag");
    let bounds = Rectangle::new(Point::ORIGIN, Size::new(1920.0, 1080.0));

    group.bench_function("drag_200_moves", |b| {
        b.iter(|| {
            let mut state = State::new(&RevealConfig {
                slide_mode: SlideMode::Drag,
                ..RevealConfig::default()
            });
            state.update(Message::Pointer {
                bounds,
                input: RawPointer::MouseDown { x: 960.0 },
            });
            let listener = state.listener_key();
            for i in 0..200 {
                state.update(Message::Window {
                    listener,
                    input: RawPointer::MouseMove { x: i as f32 * 10.0 },
                });
            }
            state.update(Message::Window {
                listener,
                input: RawPointer::MouseUp,
            });
            black_box(state.percent())
        });
    });

    group.finish();
}

criterion_group!(benches, geometry_benchmark, drag_benchmark);
criterion_main!(benches);
