// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for dispatch: pointer events and the hit-test seam.
//!
//! ## Overview
//!
//! A [`PointerEvent`] arrives already translated into surface-local coordinates.
//! The [`Dispatcher`](crate::dispatcher::Dispatcher) asks a [`HitTest`] source
//! whether each registered key contains the event position.

use kurbo::Point;

/// What the pointer did.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// A button went down.
    Press,
    /// The pointer moved.
    Move,
    /// A button went up.
    Release,
}

/// A pointer event in surface-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position relative to the surface's top-left corner.
    pub pos: Point,
    /// Event kind.
    pub kind: PointerKind,
}

impl PointerEvent {
    /// Create an event of `kind` at `pos`.
    pub fn new(pos: impl Into<Point>, kind: PointerKind) -> Self {
        Self {
            pos: pos.into(),
            kind,
        }
    }

    /// A [`PointerKind::Press`] at `pos`.
    pub fn press(pos: impl Into<Point>) -> Self {
        Self::new(pos, PointerKind::Press)
    }

    /// A [`PointerKind::Move`] to `pos`.
    pub fn move_to(pos: impl Into<Point>) -> Self {
        Self::new(pos, PointerKind::Move)
    }

    /// A [`PointerKind::Release`] at `pos`.
    pub fn release(pos: impl Into<Point>) -> Self {
        Self::new(pos, PointerKind::Release)
    }
}

/// Answers whether the geometry behind a key contains a point.
///
/// Implementations should use the geometry from the most recent draw. Keys
/// that are unknown to the source must report `false`.
pub trait HitTest<K> {
    /// Returns `true` if `key`'s bounds contain `pt`.
    fn is_intersect(&self, key: &K, pt: Point) -> bool;
}

impl<K, T: HitTest<K> + ?Sized> HitTest<K> for &T {
    #[inline]
    fn is_intersect(&self, key: &K, pt: Point) -> bool {
        (**self).is_intersect(key, pt)
    }
}
