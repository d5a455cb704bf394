// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions from successive hit sets.
//!
//! ## Usage
//!
//! 1) On each pointer move, collect the keys under the pointer with
//!    [`Dispatcher::hits`](crate::dispatcher::Dispatcher::hits).
//! 2) Call [`HoverState::update`] with those keys to get `Enter(..)` / `Leave(..)` transitions.
//!
//! Since every key under the pointer receives events, every key under the
//! pointer is also hovered; there is no single hover target.
//!
//! ## Minimal example
//!
//! ```
//! use understory_dispatch::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(&[1, 2]), vec![HoverEvent::Enter(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(&[1, 3]), vec![HoverEvent::Leave(2), HoverEvent::Enter(3)]);
//! ```

use alloc::vec::Vec;

/// Tracks which keys are currently hovered.
///
/// Ordering semantics:
/// - Leave events are emitted first, in reverse of the order the keys were hovered.
/// - Enter events follow, in the order of the new hit list (delivery order).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Vec<K>,
}

/// A hover transition event.
///
/// Returned by [`HoverState::update`] and [`HoverState::clear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer moved onto the key's geometry.
    Enter(K),
    /// The pointer moved off the key's geometry.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The currently hovered keys.
    pub fn current(&self) -> &[K] {
        &self.current
    }

    /// Returns `true` if `key` is hovered.
    pub fn is_hovered(&self, key: K) -> bool {
        self.current.contains(&key)
    }

    /// Forget all hovered keys, returning their leave events.
    ///
    /// Use this when the pointer leaves the surface.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let out = self.current.iter().rev().map(|&k| HoverEvent::Leave(k)).collect();
        self.current.clear();
        out
    }

    /// Replace the hovered set with `hits` and return the transitions.
    ///
    /// Keys present in both the old and new sets produce no event.
    pub fn update(&mut self, hits: &[K]) -> Vec<HoverEvent<K>> {
        let mut out = Vec::new();
        for &k in self.current.iter().rev() {
            if !hits.contains(&k) {
                out.push(HoverEvent::Leave(k));
            }
        }
        for &k in hits {
            if !self.current.contains(&k) {
                out.push(HoverEvent::Enter(k));
            }
        }
        self.current.clear();
        self.current.extend_from_slice(hits);
        out
    }
}
