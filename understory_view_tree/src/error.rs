// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by tree mutations.

use crate::types::ViewId;

/// Why a [`ViewTree::add_child`](crate::ViewTree::add_child) call was rejected.
///
/// A rejected call leaves the tree exactly as it was.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// The child already belongs to a container. Remove it from its owner first.
    #[error("view {child:?} is already owned by container {owner:?}")]
    OwnershipConflict {
        /// The view being added.
        child: ViewId,
        /// Its current owner.
        owner: ViewId,
    },
    /// The id does not refer to a live view in this tree.
    #[error("view {0:?} is not alive in this tree")]
    UnknownView(ViewId),
    /// The target of `add_child` is a plain view, not a container.
    #[error("view {0:?} is not a container")]
    NotAContainer(ViewId),
    /// The child is the container itself or one of its ancestors.
    #[error("adding {child:?} to {container:?} would make the tree cyclic")]
    Cycle {
        /// The container that was asked to adopt.
        container: ViewId,
        /// The view being added.
        child: ViewId,
    },
}
