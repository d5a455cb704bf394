// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer dispatch and hover over a drawn view tree.
//!
//! Two overlapping views both receive a press, in registration order. A
//! pointer sweep then reports hover enter/leave transitions.
//!
//! Run:
//! - `cargo run -p understory_demos --example dispatch_basics`
//! - `RUST_LOG=trace cargo run -p understory_demos --example dispatch_basics`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};
use peniko::Color;
use tracing_subscriber::EnvFilter;
use understory_dispatch::dispatcher::Dispatcher;
use understory_dispatch::hover::{HoverEvent, HoverState};
use understory_dispatch::types::{PointerEvent, PointerKind};
use understory_view_tree::{ContainerConfig, Frame, RecordingSurface, View, ViewFlags, ViewTree};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = ViewTree::new();
    let root = tree.insert_container(
        View::new(Frame::new(0.0, 0.0, 200.0, 200.0)).with_flags(ViewFlags::VISIBLE),
        ContainerConfig::default(),
    );
    let red = tree.insert_view(
        View::new(Frame::new(10.0, 10.0, 80.0, 80.0))
            .with_background_color(Color::from_rgb8(0xdd, 0x22, 0x22)),
    );
    let blue = tree.insert_view(
        View::new(Frame::new(50.0, 50.0, 80.0, 80.0))
            .with_background_color(Color::from_rgb8(0x22, 0x22, 0xdd)),
    );
    tree.add_child(root, red).unwrap();
    tree.add_child(root, blue).unwrap();
    tree.draw_frame(root, &mut RecordingSurface::new(Rect::new(0.0, 0.0, 200.0, 200.0)));

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new();
    for (name, id) in [("root", root), ("red", red), ("blue", blue)] {
        let log = log.clone();
        dispatcher.register(id, move |e: &PointerEvent| {
            log.borrow_mut().push((name, e.kind));
        });
    }

    println!("== Registered: {:?}", dispatcher.keys().collect::<Vec<_>>());
    assert_eq!(dispatcher.len(), 3);

    // The root is not pickable, so only the two colored views are hit.
    let n = dispatcher.dispatch(&PointerEvent::press((60.0, 60.0)), &tree);
    println!("== Press at (60, 60) reached {n} handlers: {:?}", log.borrow());
    assert_eq!(
        *log.borrow(),
        vec![("red", PointerKind::Press), ("blue", PointerKind::Press)]
    );

    let mut hover = HoverState::new();
    for x in [5.0, 30.0, 70.0, 120.0, 180.0] {
        let pt = Point::new(x, x);
        let hits = dispatcher.hits(pt, &tree);
        let transitions = hover.update(&hits);
        println!("== Move to {pt:?}");
        for t in &transitions {
            match t {
                HoverEvent::Enter(id) if *id == red => println!("  enter red"),
                HoverEvent::Enter(_) => println!("  enter blue"),
                HoverEvent::Leave(id) if *id == red => println!("  leave red"),
                HoverEvent::Leave(_) => println!("  leave blue"),
            }
        }
    }
    assert!(hover.current().is_empty());
}
