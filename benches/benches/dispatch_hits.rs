// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_dispatch::dispatcher::Dispatcher;
use understory_dispatch::hover::HoverState;
use understory_dispatch::types::PointerEvent;
use understory_view_tree::{
    ContainerConfig, FlowLayout, Frame, RecordingSurface, View, ViewId, ViewTree,
};

/// A drawn flow grid of `n * n` cells, each 10x10, all registered.
fn drawn_grid(n: usize) -> (ViewTree, Dispatcher<ViewId>) {
    let side = n as f64 * 10.0;
    let mut tree = ViewTree::new();
    let root = tree.insert_container(
        View::new(Frame::new(0.0, 0.0, side, side)),
        ContainerConfig::default().with_layout(FlowLayout::default()),
    );
    let mut dispatcher = Dispatcher::new();
    for _ in 0..n * n {
        let cell = tree.insert_view(View::new(Frame::new(0.0, 0.0, 10.0, 10.0)));
        let _ = tree.add_child(root, cell);
        dispatcher.register(cell, |e: &PointerEvent| {
            black_box(e.pos);
        });
    }
    tree.draw_frame(root, &mut RecordingSurface::new(Rect::new(0.0, 0.0, side, side)));
    (tree, dispatcher)
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for &n in &[16usize, 64] {
        let (tree, mut dispatcher) = drawn_grid(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("press_n{}", n), |b| {
            let event = PointerEvent::press((55.0, 55.0));
            b.iter(|| black_box(dispatcher.dispatch(&event, &tree)))
        });
        group.bench_function(format!("hover_sweep_n{}", n), |b| {
            let mut hover = HoverState::new();
            let mut x = 0.0;
            b.iter(|| {
                x = (x + 7.0) % (n as f64 * 10.0);
                let hits = dispatcher.hits(Point::new(x, 25.0), &tree);
                black_box(hover.update(&hits));
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
