// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect};
use peniko::Color;
use understory_view_tree::{
    ContainerConfig, FlowLayout, Frame, Label, NoLayout, RecordingSurface, View, ViewId, ViewTree,
};

fn flow_tree(n: usize) -> (ViewTree, ViewId) {
    let mut tree = ViewTree::new();
    let root = tree.insert_container(
        View::new(Frame::new(0.0, 0.0, 800.0, 600.0)).with_background_color(Color::WHITE),
        ContainerConfig::default()
            .with_padding(Insets::uniform(8.0))
            .with_layout(FlowLayout::new(4.0, 4.0)),
    );
    for i in 0..n {
        let item = tree.insert_view(
            View::new(Frame::ZERO)
                .with_border(1.0, Color::BLACK)
                .with_content(Label::new(format!("item {i}")).with_font_size(12.0)),
        );
        let _ = tree.add_child(root, item);
    }
    (tree, root)
}

/// Nested containers, `depth` levels of `fanout` children each.
fn nested_tree(depth: usize, fanout: usize) -> (ViewTree, ViewId) {
    fn grow(tree: &mut ViewTree, parent: ViewId, depth: usize, fanout: usize) {
        for i in 0..fanout {
            let frame = Frame::new(i as f64 * 3.0, i as f64 * 2.0, 40.0, 30.0);
            if depth == 0 {
                let leaf = tree.insert_view(View::new(frame).with_background_color(Color::BLACK));
                let _ = tree.add_child(parent, leaf);
            } else {
                let node = tree.insert_container(
                    View::new(frame),
                    ContainerConfig::default()
                        .with_padding(Insets::uniform(1.0))
                        .with_layout(NoLayout),
                );
                let _ = tree.add_child(parent, node);
                grow(tree, node, depth - 1, fanout);
            }
        }
    }
    let mut tree = ViewTree::new();
    let root = tree.insert_container(
        View::new(Frame::new(0.0, 0.0, 800.0, 600.0)),
        ContainerConfig::default(),
    );
    grow(&mut tree, root, depth, fanout);
    (tree, root)
}

fn bench_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow_frame");
    for &n in &[16usize, 128, 1024] {
        let (mut tree, root) = flow_tree(n);
        let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("draw_frame_n{}", n), |b| {
            b.iter(|| {
                tree.draw_frame(root, &mut surface);
                black_box(surface.take_ops().len());
            })
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_frame");
    for &(depth, fanout) in &[(2usize, 8usize), (4, 4), (6, 3)] {
        let (mut tree, root) = nested_tree(depth, fanout);
        let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_function(format!("draw_frame_d{}_f{}", depth, fanout), |b| {
            b.iter(|| {
                tree.draw_frame(root, &mut surface);
                black_box(surface.take_ops().len());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flow, bench_nested);
criterion_main!(benches);
