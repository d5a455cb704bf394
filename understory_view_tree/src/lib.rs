// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory View Tree: a minimal retained-mode view tree for 2D surfaces.
//!
//! Understory View Tree composes rectangular views into a hierarchy that is measured,
//! laid out, painted, and hit-tested once per frame.
//!
//! - Views carry absolute geometry, a background (none, solid, or custom painter), a border,
//!   and optional leaf [`Content`] that can report an intrinsic size.
//! - Containers own an ordered list of children, padding, and an optional [`LayoutManager`].
//! - Every frame is a full redraw: there is no damage tracking.
//!
//! ## Relative origins
//!
//! A container remembers, for each child, the position the child occupies inside its
//! content box. The first time a container draws after a child is added, it captures the
//! child's current position as that relative origin. From then on the child's absolute
//! position is recomputed every frame as
//! `container origin + (padding left, padding top) + relative origin`, so repeated draws
//! never accumulate offsets. A layout manager that places a child rewrites the relative
//! origin at the same time.
//!
//! ## Painting
//!
//! A container paints itself, runs its layout manager, then paints each child in order
//! (later children on top). Each child's whole subtree is painted inside a saved
//! [`Surface`] state, so fill, stroke, and font changes never leak to siblings.
//!
//! ## Ownership
//!
//! All views live in a [`ViewTree`] arena and are addressed by generational [`ViewId`]s.
//! A view has at most one owner; [`ViewTree::add_child`] rejects a view that already has
//! one with [`ViewError::OwnershipConflict`].
//!
//! ## API overview
//!
//! - [`ViewTree`]: arena managing views, containers, ownership, and drawing.
//! - [`View`], [`Background`], [`Border`], [`Content`]: the base visual node.
//! - [`ContainerConfig`]: padding and layout supplied when inserting a container.
//! - [`LayoutManager`], [`LayoutCx`], [`NoLayout`], [`FlowLayout`]: layout strategies.
//! - [`Surface`], [`SurfaceExt`]: the drawing contract and its scoped save/restore guard.
//! - [`Frame`]: geometry primitive with an edge-inclusive point test.
//! - [`FrameLoop`]: fixed-rate frame pacing for a host scheduler.
//! - [`RecordingSurface`], [`Label`]: an in-memory surface and a text leaf.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use peniko::Color;
//! use understory_view_tree::{
//!     ContainerConfig, FlowLayout, Frame, RecordingSurface, View, ViewTree,
//! };
//!
//! let mut tree = ViewTree::new();
//! let root = tree.insert_container(
//!     View::new(Frame::new(10.0, 10.0, 100.0, 100.0)).with_background_color(Color::WHITE),
//!     ContainerConfig::default().with_layout(FlowLayout::default()),
//! );
//!
//! let mut items = Vec::new();
//! for _ in 0..3 {
//!     let item = tree.insert_view(View::new(Frame::new(0.0, 0.0, 40.0, 20.0)));
//!     tree.add_child(root, item).unwrap();
//!     items.push(item);
//! }
//!
//! let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 200.0, 200.0));
//! tree.draw_frame(root, &mut surface);
//!
//! // Two items fit on the first row; the third wraps.
//! assert_eq!(tree.frame(items[1]).unwrap().origin, Point::new(50.0, 10.0));
//! assert_eq!(tree.frame(items[2]).unwrap().origin, Point::new(10.0, 30.0));
//! assert!(tree.is_intersect(items[2], Point::new(50.0, 50.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod label;
mod layout;
mod pacing;
mod recording;
mod surface;
mod tree;
mod types;
mod view;

pub use error::ViewError;
pub use label::Label;
pub use layout::{FlowLayout, LayoutCx, LayoutManager, NoLayout};
pub use pacing::{DEFAULT_FPS, FrameLoop};
pub use recording::{PaintState, RecordingSurface, SurfaceOp};
pub use surface::{SavedState, Surface, SurfaceExt};
pub use tree::{ContainerConfig, ViewTree};
pub use types::{Frame, ViewFlags, ViewId};
pub use view::{Background, Border, Content, PaintFn, View};
