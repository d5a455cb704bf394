// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View tree basics: containers, padding, relative origins, and scoped paint.
//!
//! This example builds a padded container with two children, draws it several
//! times, and shows that child positions stay put between frames and that a
//! child's paint state never leaks to its siblings.
//!
//! Run:
//! - `cargo run -p understory_demos --example view_tree_basics`
//! - `RUST_LOG=debug cargo run -p understory_demos --example view_tree_basics`

use kurbo::{Insets, Point, Rect};
use peniko::Color;
use tracing_subscriber::EnvFilter;
use understory_view_tree::{
    Background, ContainerConfig, Frame, RecordingSurface, Surface, SurfaceOp, View, ViewError,
    ViewTree,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = ViewTree::new();
    let root = tree.insert_container(
        View::new(Frame::new(20.0, 20.0, 200.0, 120.0))
            .with_background_color(Color::WHITE)
            .with_border(2.0, Color::BLACK),
        ContainerConfig::default().with_padding(Insets::new(10.0, 5.0, 10.0, 5.0)),
    );

    // A custom painter that changes the fill color and never resets it.
    let striped = tree.insert_view(View::new(Frame::new(0.0, 0.0, 60.0, 40.0)).with_background(
        Background::custom(|surface: &mut dyn Surface, view: &View| {
            let r = view.frame.rect();
            surface.set_fill(Color::from_rgb8(0xcc, 0x33, 0x33));
            for i in 0..4 {
                let y = r.y0 + f64::from(i) * 10.0;
                surface.fill_rect(Rect::new(r.x0, y, r.x1, y + 5.0));
            }
        }),
    ));
    let plain = tree.insert_view(
        View::new(Frame::new(80.0, 0.0, 60.0, 40.0)).with_border(1.0, Color::BLACK),
    );
    tree.add_child(root, striped).unwrap();
    tree.add_child(root, plain).unwrap();
    assert!(tree.is_container(root));
    assert!(!tree.is_container(plain));

    // A view has exactly one owner.
    let other = tree.insert_container(View::default(), ContainerConfig::default());
    match tree.add_child(other, plain) {
        Err(err @ ViewError::OwnershipConflict { .. }) => println!("rejected: {err}"),
        result => panic!("unexpected result: {result:?}"),
    }

    let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 320.0, 240.0));
    for frame in 0..3 {
        tree.draw_frame(root, &mut surface);
        let ops = surface.take_ops();
        println!(
            "== Frame {frame}: {} ops, striped at {:?}, plain at {:?}",
            ops.len(),
            tree.frame(striped).unwrap().origin,
            tree.frame(plain).unwrap().origin,
        );
        if frame == 0 {
            for op in &ops {
                println!("  {op:?}");
            }
        }
        // The plain view's border is stroked with the default fill state intact.
        assert!(ops.iter().any(|op| matches!(
            op,
            SurfaceOp::StrokeRect { color, .. } if *color == Color::BLACK
        )));
    }

    // Absolute = container origin + (left, top) padding + relative origin.
    assert_eq!(tree.frame(striped).unwrap().origin, Point::new(30.0, 25.0));
    assert_eq!(tree.frame(plain).unwrap().origin, Point::new(110.0, 25.0));
    assert!(tree.is_intersect(plain, Point::new(170.0, 65.0)));
    assert_eq!(tree.frames(), 3);

    // Moving a child after capture goes through its relative origin.
    tree.set_relative_origin(plain, Point::new(100.0, 50.0));
    tree.draw_frame(root, &mut surface);
    println!("== moved plain to {:?}", tree.frame(plain).unwrap().origin);
    assert_eq!(tree.frame(plain).unwrap().origin, Point::new(130.0, 75.0));
}
