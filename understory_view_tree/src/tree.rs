// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: storage, ownership, drawing.

use alloc::rc::Rc;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Insets, Point, Size, Vec2};

use crate::error::ViewError;
use crate::layout::{LayoutCx, LayoutManager};
use crate::surface::{Surface, SurfaceExt};
use crate::types::{Frame, ViewFlags, ViewId};
use crate::view::{Background, Border, View};

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena of views and containers.
///
/// Every view lives here from [`insert_view`](Self::insert_view) (or
/// [`insert_container`](Self::insert_container)) until
/// [`destroy`](Self::destroy), whether or not it is attached to a container.
/// Containers own their children through this arena; a child refers back to its
/// owner by [`ViewId`] only.
pub struct ViewTree {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    frames: u64,
}

impl core::fmt::Debug for ViewTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let containers = self
            .nodes
            .iter()
            .flatten()
            .filter(|n| n.container.is_some())
            .count();
        f.debug_struct("ViewTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("containers", &containers)
            .field("free_list", &self.free_list.len())
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

/// Container settings supplied at insertion.
#[derive(Clone, Default)]
pub struct ContainerConfig {
    /// Space between the container's frame and its content box.
    pub padding: Insets,
    /// Strategy run before children are positioned each frame.
    pub layout: Option<Rc<dyn LayoutManager>>,
}

impl core::fmt::Debug for ContainerConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContainerConfig")
            .field("padding", &self.padding)
            .field("has_layout", &self.layout.is_some())
            .finish()
    }
}

impl ContainerConfig {
    /// Set the padding.
    pub fn with_padding(mut self, padding: impl Into<Insets>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Attach a layout manager.
    pub fn with_layout(mut self, layout: impl LayoutManager + 'static) -> Self {
        self.layout = Some(Rc::new(layout));
        self
    }
}

struct ContainerData {
    children: Vec<ViewId>,
    layout: Option<Rc<dyn LayoutManager>>,
    padding: Insets,
    // Child position local to the content box; captured on the first draw after adding.
    relative_origins: HashMap<ViewId, Point>,
}

impl ContainerData {
    fn new(config: ContainerConfig) -> Self {
        Self {
            children: Vec::new(),
            layout: config.layout,
            padding: config.padding,
            relative_origins: HashMap::new(),
        }
    }
}

struct Node {
    generation: u32,
    owner: Option<ViewId>,
    view: View,
    container: Option<ContainerData>,
}

impl ViewTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            frames: 0,
        }
    }

    /// Insert a standalone, unowned view.
    pub fn insert_view(&mut self, view: View) -> ViewId {
        self.insert_node(view, None)
    }

    /// Insert a standalone, unowned container.
    pub fn insert_container(&mut self, view: View, config: ContainerConfig) -> ViewId {
        self.insert_node(view, Some(ContainerData::new(config)))
    }

    fn insert_node(&mut self, view: View, container: Option<ContainerData>) -> ViewId {
        let make = |generation| Node {
            generation,
            owner: None,
            view,
            container,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(make(generation));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ViewId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(make(generation)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ViewId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        ViewId::new(idx, generation)
    }

    /// Append `child` to `container`'s children.
    ///
    /// The child is painted after (on top of) and laid out after the existing
    /// children. Its relative origin is captured on the container's next draw,
    /// so a position assigned before then is honored.
    ///
    /// # Errors
    ///
    /// - [`ViewError::UnknownView`] if either id is stale.
    /// - [`ViewError::NotAContainer`] if `container` is a plain view.
    /// - [`ViewError::OwnershipConflict`] if `child` already has an owner.
    /// - [`ViewError::Cycle`] if `child` is `container` or one of its ancestors.
    ///
    /// Nothing is modified when an error is returned.
    pub fn add_child(&mut self, container: ViewId, child: ViewId) -> Result<(), ViewError> {
        let child_owner = self
            .node_opt(child)
            .ok_or(ViewError::UnknownView(child))?
            .owner;
        let target = self
            .node_opt(container)
            .ok_or(ViewError::UnknownView(container))?;
        if target.container.is_none() {
            return Err(ViewError::NotAContainer(container));
        }
        if let Some(owner) = child_owner {
            tracing::debug!(?child, ?owner, ?container, "rejected add_child: already owned");
            return Err(ViewError::OwnershipConflict { child, owner });
        }
        if self.is_ancestor_or_self(child, container) {
            return Err(ViewError::Cycle { container, child });
        }
        if let Some(data) = self.container_mut(container) {
            data.children.push(child);
        }
        self.node_mut(child).owner = Some(container);
        tracing::debug!(?child, ?container, "added child");
        Ok(())
    }

    /// Detach `child` from `container`.
    ///
    /// Clears the owner, removes the child from the sequence, and forgets its
    /// relative origin so a later `add_child` captures a fresh one. A child that
    /// was drawn is moved back to that relative origin, so the next owner
    /// captures its local position rather than this container's offset.
    ///
    /// Returns `false` if `child` was not a child of `container`.
    pub fn remove_child(&mut self, container: ViewId, child: ViewId) -> bool {
        if self.owner(child) != Some(container) {
            return false;
        }
        let Some(data) = self.container_mut(container) else {
            return false;
        };
        data.children.retain(|c| *c != child);
        let relative = data.relative_origins.remove(&child);
        let node = self.node_mut(child);
        node.owner = None;
        if let Some(relative) = relative {
            node.view.frame.origin = relative;
        }
        tracing::debug!(?child, ?container, "removed child");
        true
    }

    /// Remove a view (and, for containers, its subtree) from the tree.
    ///
    /// The view is detached from its owner first. All removed ids become stale.
    pub fn destroy(&mut self, id: ViewId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(owner) = self.node(id).owner {
            self.remove_child(owner, id);
        }
        let children = self.children(id).to_vec();
        for child in children {
            // Children are detached as they are destroyed.
            self.destroy(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
        tracing::debug!(?id, "destroyed view");
    }

    /// True if `id` refers to a live view.
    pub fn is_alive(&self, id: ViewId) -> bool {
        self.node_opt(id).is_some()
    }

    /// True if `id` refers to a live container.
    pub fn is_container(&self, id: ViewId) -> bool {
        self.node_opt(id).is_some_and(|n| n.container.is_some())
    }

    /// Number of live views.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// True if no views are alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of frames drawn through [`draw_frame`](Self::draw_frame).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The view stored at `id`.
    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.node_opt(id).map(|n| &n.view)
    }

    /// Mutable access to the view stored at `id`.
    ///
    /// Geometry written here on an owned child is overwritten by its
    /// container's next draw once the relative origin has been captured; use
    /// [`set_relative_origin`](Self::set_relative_origin) to move it instead.
    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.node_opt_mut(id).map(|n| &mut n.view)
    }

    /// Current absolute geometry of `id`.
    pub fn frame(&self, id: ViewId) -> Option<Frame> {
        self.view(id).map(|v| v.frame)
    }

    /// The container owning `id`, if any.
    pub fn owner(&self, id: ViewId) -> Option<ViewId> {
        self.node_opt(id).and_then(|n| n.owner)
    }

    /// Children of `id` in paint order. Empty for plain views and stale ids.
    pub fn children(&self, id: ViewId) -> &[ViewId] {
        match self.container(id) {
            Some(c) => &c.children,
            None => &[],
        }
    }

    /// Padding of a container.
    pub fn padding(&self, id: ViewId) -> Option<Insets> {
        self.container(id).map(|c| c.padding)
    }

    /// Recorded relative origin of `child` within its owner, if captured.
    pub fn relative_origin(&self, child: ViewId) -> Option<Point> {
        let owner = self.owner(child)?;
        self.container(owner)?.relative_origins.get(&child).copied()
    }

    /// Move an owned child to `pos`, local to its owner's content box.
    ///
    /// Returns `false` if `child` has no owner.
    pub fn set_relative_origin(&mut self, child: ViewId, pos: Point) -> bool {
        match self.owner(child) {
            Some(owner) => self.place_child(owner, child, pos),
            None => false,
        }
    }

    /// Update a view's geometry.
    pub fn set_frame(&mut self, id: ViewId, frame: Frame) {
        if let Some(v) = self.view_mut(id) {
            v.frame = frame;
        }
    }

    /// Update a view's position, keeping its size.
    pub fn set_origin(&mut self, id: ViewId, origin: Point) {
        if let Some(v) = self.view_mut(id) {
            v.frame.origin = origin;
        }
    }

    /// Update a view's size, keeping its position.
    pub fn set_size(&mut self, id: ViewId, size: Size) {
        if let Some(v) = self.view_mut(id) {
            v.frame.size = size;
        }
    }

    /// Update a view's background.
    pub fn set_background(&mut self, id: ViewId, background: impl Into<Background>) {
        if let Some(v) = self.view_mut(id) {
            v.background = background.into();
        }
    }

    /// Update a view's border.
    pub fn set_border(&mut self, id: ViewId, border: Border) {
        if let Some(v) = self.view_mut(id) {
            v.border = border;
        }
    }

    /// Update a view's flags.
    pub fn set_flags(&mut self, id: ViewId, flags: ViewFlags) {
        if let Some(v) = self.view_mut(id) {
            v.flags = flags;
        }
    }

    /// Update a container's padding.
    pub fn set_padding(&mut self, id: ViewId, padding: impl Into<Insets>) {
        if let Some(c) = self.container_mut(id) {
            c.padding = padding.into();
        }
    }

    /// Replace or remove a container's layout manager.
    pub fn set_layout(&mut self, id: ViewId, layout: Option<Rc<dyn LayoutManager>>) {
        if let Some(c) = self.container_mut(id) {
            c.layout = layout;
        }
    }

    /// True iff `pt` lies inside the last drawn geometry of `id`, edges included.
    ///
    /// Stale ids never intersect.
    pub fn is_intersect(&self, id: ViewId, pt: Point) -> bool {
        self.view(id).is_some_and(|v| v.is_intersect(pt.x, pt.y))
    }

    /// Refresh the intrinsic size of `id`. See [`View::measure`].
    pub fn measure(&mut self, id: ViewId, surface: &mut dyn Surface) {
        if let Some(v) = self.view_mut(id) {
            v.measure(surface);
        }
    }

    /// Clear the surface's viewport and draw `root`.
    pub fn draw_frame(&mut self, root: ViewId, surface: &mut dyn Surface) {
        self.frames = self.frames.wrapping_add(1);
        tracing::trace!(frame = self.frames, ?root, "drawing frame");
        let viewport = surface.viewport();
        surface.clear(viewport);
        let mut scoped = surface.saved();
        self.draw(root, &mut *scoped);
    }

    /// Draw `id` and, for containers, its subtree.
    ///
    /// A container paints itself, runs its layout manager, then for each child
    /// in order: captures the child's current position as its relative origin
    /// if none is recorded, moves the child to
    /// `origin + (padding.left, padding.top) + relative origin`, and draws it
    /// with the surface state saved around the child's whole subtree.
    ///
    /// Views without [`ViewFlags::VISIBLE`] are skipped with their subtree.
    pub fn draw(&mut self, id: ViewId, surface: &mut dyn Surface) {
        let Some(node) = self.node_opt(id) else {
            return;
        };
        if !node.view.flags.contains(ViewFlags::VISIBLE) {
            return;
        }
        node.view.draw(surface);
        let Some(layout) = node.container.as_ref().map(|c| c.layout.clone()) else {
            return;
        };
        if let Some(layout) = layout {
            layout.layout(&mut LayoutCx::new(self, id), surface);
        }

        let Some(node) = self.node_opt(id) else {
            return;
        };
        let Some(data) = node.container.as_ref() else {
            return;
        };
        let content_origin = node.view.frame.origin + Vec2::new(data.padding.x0, data.padding.y0);
        let children = data.children.clone();
        for child in children {
            let Some(relative) = self.capture_relative_origin(id, child) else {
                continue;
            };
            self.node_mut(child).view.frame.origin = content_origin + relative.to_vec2();
            let mut scoped = surface.saved();
            self.draw(child, &mut *scoped);
        }
    }

    // --- internals ---

    /// Record `pos` as `child`'s relative origin in `container` and move it there.
    pub(crate) fn place_child(&mut self, container: ViewId, child: ViewId, pos: Point) -> bool {
        if self.owner(child) != Some(container) {
            return false;
        }
        if let Some(data) = self.container_mut(container) {
            data.relative_origins.insert(child, pos);
        }
        self.node_mut(child).view.frame.origin = pos;
        true
    }

    fn capture_relative_origin(&mut self, container: ViewId, child: ViewId) -> Option<Point> {
        let current = self.node_opt(child)?.view.frame.origin;
        let data = self.container_mut(container)?;
        let relative = *data.relative_origins.entry(child).or_insert_with(|| {
            tracing::debug!(?child, ?container, origin = ?current, "captured relative origin");
            current
        });
        Some(relative)
    }

    fn is_ancestor_or_self(&self, candidate: ViewId, of: ViewId) -> bool {
        let mut cur = Some(of);
        while let Some(id) = cur {
            if id == candidate {
                return true;
            }
            cur = self.owner(id);
        }
        false
    }

    fn container(&self, id: ViewId) -> Option<&ContainerData> {
        self.node_opt(id)?.container.as_ref()
    }

    fn container_mut(&mut self, id: ViewId) -> Option<&mut ContainerData> {
        self.node_opt_mut(id)?.container.as_mut()
    }

    fn node(&self, id: ViewId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling ViewId")
    }

    fn node_mut(&mut self, id: ViewId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling ViewId")
    }

    fn node_opt(&self, id: ViewId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.generation()).then_some(n)
    }

    fn node_opt_mut(&mut self, id: ViewId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }
}
