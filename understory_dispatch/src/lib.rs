// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Dispatch: deliver pointer events to every view under the pointer.
//!
//! ## Overview
//!
//! This crate keeps a registry of event handlers keyed by view and routes each
//! [`PointerEvent`](crate::types::PointerEvent) to all registered views whose geometry contains
//! the event position.
//! It does not own geometry. A [`HitTest`](crate::types::HitTest) source answers containment
//! queries, normally from the frames written by the most recent draw.
//!
//! ## Delivery
//!
//! - Handlers are invoked in registration order.
//! - Overlapping views all receive the event. Nothing consumes it and there is no z-order
//!   priority, so a press over two stacked views reaches both.
//! - Re-registering a key replaces its handler without changing its position.
//!
//! ## Workflow
//!
//! 1) Register: [`Dispatcher::register`](crate::dispatcher::Dispatcher::register) one handler
//!    per view key.
//! 2) Draw: render the frame so the hit-test source holds current geometry.
//! 3) Dispatch: feed each surface-local event to
//!    [`Dispatcher::dispatch`](crate::dispatcher::Dispatcher::dispatch).
//! 4) Hover: optionally pass [`Dispatcher::hits`](crate::dispatcher::Dispatcher::hits) for move
//!    events to [`HoverState`](crate::hover::HoverState) to derive enter/leave transitions.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_dispatch::dispatcher::Dispatcher;
//! use understory_dispatch::types::{HitTest, PointerEvent};
//!
//! struct Boxes(Vec<Rect>);
//!
//! impl HitTest<usize> for Boxes {
//!     fn is_intersect(&self, key: &usize, pt: Point) -> bool {
//!         self.0.get(*key).is_some_and(|r| r.contains(pt))
//!     }
//! }
//!
//! let boxes = Boxes(vec![
//!     Rect::new(0.0, 0.0, 50.0, 50.0),
//!     Rect::new(25.0, 25.0, 75.0, 75.0),
//! ]);
//! let mut dispatcher: Dispatcher<usize> = Dispatcher::new();
//! dispatcher.register(0, |e: &PointerEvent| println!("first: {:?}", e.kind));
//! dispatcher.register(1, |e: &PointerEvent| println!("second: {:?}", e.kind));
//!
//! assert_eq!(dispatcher.dispatch(&PointerEvent::press((30.0, 30.0)), &boxes), 2);
//! assert_eq!(dispatcher.dispatch(&PointerEvent::press((10.0, 10.0)), &boxes), 1);
//! ```
//!
//! With the `view_tree_adapter` feature, `understory_view_tree::ViewTree` implements
//! [`HitTest`](crate::types::HitTest) for its view ids, honoring the `PICKABLE` flag.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod dispatcher;
pub mod hover;
pub mod types;
