// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing for Understory View Tree.
//!
//! ## Feature
//!
//! Enable with `view_tree_adapter`.
//!
//! ## Notes
//!
//! A [`ViewTree`] answers from each view's absolute frame, which is written
//! when its container draws. Dispatch after drawing the frame to hit the
//! geometry the user sees. Stale ids never hit, and neither do views without
//! [`ViewFlags::PICKABLE`]. Views in a hidden subtree (the view itself or any
//! owner lacking [`ViewFlags::VISIBLE`]) never hit either, since their frames
//! are no longer kept current.

use kurbo::Point;
use understory_view_tree::{ViewFlags, ViewId, ViewTree};

use crate::types::HitTest;

impl HitTest<ViewId> for ViewTree {
    fn is_intersect(&self, key: &ViewId, pt: Point) -> bool {
        let Some(view) = self.view(*key) else {
            return false;
        };
        view.flags.contains(ViewFlags::PICKABLE) && view.frame.contains(pt) && shown(self, *key)
    }
}

/// True if `id` and every owner above it are visible.
fn shown(tree: &ViewTree, id: ViewId) -> bool {
    let mut cur = Some(id);
    while let Some(id) = cur {
        match tree.view(id) {
            Some(view) if view.flags.contains(ViewFlags::VISIBLE) => cur = tree.owner(id),
            _ => return false,
        }
    }
    true
}
