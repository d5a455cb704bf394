// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the view tree: view identifiers, flags, and the frame primitive.

use kurbo::{Point, Rect, Size};

/// Identifier for a view in a [`ViewTree`](crate::ViewTree).
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On [`destroy`](crate::ViewTree::destroy), the slot is freed; any existing `ViewId`
///   that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ViewId`.
///
/// Stale `ViewId`s never alias a different live view because the generation must match.
/// Use [`ViewTree::is_alive`](crate::ViewTree::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ViewId(pub(crate) u32, pub(crate) u32);

impl ViewId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// View flags controlling painting and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u8 {
        /// View is painted. A hidden view skips itself and its whole subtree.
        const VISIBLE  = 0b0000_0001;
        /// View participates in hit testing.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Axis-aligned geometry of a view: an origin and a size.
///
/// Unlike [`kurbo::Rect::contains`], [`Frame::contains`] is closed on all four
/// edges, so a point on the right or bottom edge is inside.
///
/// Negative sizes are accepted as-is; nothing here validates geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Top-left corner.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
}

impl Frame {
    /// The empty frame at the origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Create a frame from its left, top, width, and height.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a frame covering `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            origin: rect.origin(),
            size: rect.size(),
        }
    }

    /// Left edge.
    pub const fn x(&self) -> f64 {
        self.origin.x
    }

    /// Top edge.
    pub const fn y(&self) -> f64 {
        self.origin.y
    }

    /// Width.
    pub const fn width(&self) -> f64 {
        self.size.width
    }

    /// Height.
    pub const fn height(&self) -> f64 {
        self.size.height
    }

    /// The frame as a [`Rect`].
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// True iff `pt` lies inside the frame or on any of its edges.
    pub fn contains(&self, pt: Point) -> bool {
        let right = self.origin.x + self.size.width;
        let bottom = self.origin.y + self.size.height;
        pt.x >= self.origin.x && pt.x <= right && pt.y >= self.origin.y && pt.y <= bottom
    }
}

impl From<Rect> for Frame {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl From<Frame> for Rect {
    fn from(frame: Frame) -> Self {
        frame.rect()
    }
}
