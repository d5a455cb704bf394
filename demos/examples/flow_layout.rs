// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow layout driven by a fixed-rate frame loop.
//!
//! This example fills a flow container with labels, runs a simulated 30 fps
//! clock, and grows one label between frames so the rows reflow.
//!
//! Run:
//! - `cargo run -p understory_demos --example flow_layout`

use core::time::Duration;

use kurbo::{Insets, Rect};
use peniko::Color;
use tracing_subscriber::EnvFilter;
use understory_view_tree::{
    ContainerConfig, FlowLayout, Frame, FrameLoop, Label, RecordingSurface, View, ViewTree,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = ViewTree::new();
    let root = tree.insert_container(
        View::new(Frame::new(0.0, 0.0, 160.0, 200.0)).with_background_color(Color::WHITE),
        ContainerConfig::default()
            .with_padding(Insets::uniform(4.0))
            .with_layout(FlowLayout::new(2.0, 4.0)),
    );

    let words = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
    let labels: Vec<_> = words
        .iter()
        .map(|w| {
            let id = tree.insert_view(
                View::new(Frame::ZERO)
                    .with_border(1.0, Color::BLACK)
                    .with_content(Label::new(*w).with_padding(Insets::uniform(2.0))),
            );
            tree.add_child(root, id).unwrap();
            id
        })
        .collect();

    let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 160.0, 200.0));
    let mut pacing = FrameLoop::new(30);
    pacing.start();

    let mut now = Duration::ZERO;
    let tick = Duration::from_millis(10);
    while pacing.frames() < 3 {
        if pacing.poll(now) {
            if pacing.frames() == 2 {
                // Longer text: the first row reflows on this frame.
                tree.view_mut(labels[0])
                    .unwrap()
                    .set_content(Some(Box::new(
                        Label::new("alpha alpha alpha").with_padding(Insets::uniform(2.0)),
                    )));
            }
            tree.draw_frame(root, &mut surface);
            let _ = surface.take_ops();
            println!("== Frame {} at {:?}", pacing.frames(), now);
            for (w, id) in words.iter().zip(&labels) {
                let frame = tree.frame(*id).unwrap();
                println!(
                    "  {w:>8}: at ({}, {}) size {}x{}",
                    frame.x(),
                    frame.y(),
                    frame.width(),
                    frame.height()
                );
            }
        }
        now += tick;
    }
    pacing.stop();
    assert!(!pacing.poll(now));
}
