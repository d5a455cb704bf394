// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout strategies for containers.
//!
//! ## Overview
//!
//! A [`LayoutManager`] runs once per frame for the container it is attached to,
//! after the container paints itself and before its children are positioned and
//! painted. It works through a [`LayoutCx`], which exposes the container's
//! children and content box and lets the strategy measure and place them.
//!
//! Positions handed to [`LayoutCx::place`] are local to the container's content
//! box (origin at the top-left corner inside the padding). The container turns
//! them into absolute positions when it paints, so a layout pass never needs to
//! know where the container itself sits.
//!
//! ## Strategies
//!
//! - [`NoLayout`]: leaves children where they were put.
//! - [`FlowLayout`]: wraps children left to right, then row to row.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::surface::Surface;
use crate::tree::ViewTree;
use crate::types::ViewId;

/// Strategy that positions a container's children.
pub trait LayoutManager {
    /// Measure and place the children reachable through `cx`.
    fn layout(&self, cx: &mut LayoutCx<'_>, surface: &mut dyn Surface);
}

/// The no-op strategy: children keep their externally assigned positions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoLayout;

impl LayoutManager for NoLayout {
    fn layout(&self, _cx: &mut LayoutCx<'_>, _surface: &mut dyn Surface) {}
}

/// Access to one container during its layout pass.
#[derive(Debug)]
pub struct LayoutCx<'a> {
    tree: &'a mut ViewTree,
    container: ViewId,
}

impl<'a> LayoutCx<'a> {
    pub(crate) fn new(tree: &'a mut ViewTree, container: ViewId) -> Self {
        Self { tree, container }
    }

    /// The container's children in paint order.
    pub fn children(&self) -> &[ViewId] {
        self.tree.children(self.container)
    }

    /// Size of the content box: the container's size less its padding.
    pub fn content_size(&self) -> Size {
        let Some(frame) = self.tree.frame(self.container) else {
            return Size::ZERO;
        };
        let padding = self.tree.padding(self.container).unwrap_or_default();
        Size::new(
            frame.width() - padding.x_value(),
            frame.height() - padding.y_value(),
        )
    }

    /// Width of the content box.
    pub fn content_width(&self) -> f64 {
        self.content_size().width
    }

    /// Refresh `child`'s intrinsic size. See [`View::measure`](crate::View::measure).
    pub fn measure(&mut self, child: ViewId, surface: &mut dyn Surface) {
        self.tree.measure(child, surface);
    }

    /// Current size of `child`, or zero if it is not alive.
    pub fn size_of(&self, child: ViewId) -> Size {
        self.tree.frame(child).map(|f| f.size).unwrap_or(Size::ZERO)
    }

    /// Place `child` at `pos`, local to the content box.
    ///
    /// This also becomes the child's recorded relative origin, so repeated
    /// draws keep it there. Views that are not children of this container are
    /// ignored.
    pub fn place(&mut self, child: ViewId, pos: Point) {
        self.tree.place_child(self.container, child, pos);
    }
}

/// Wraps children left to right and starts a new row when one does not fit.
///
/// Each child is measured first. A child that does not fit in the remaining
/// width of a row that already holds something moves to a new row at `x = 0`,
/// which starts `child.height + vertical_gap` below the previous row, where
/// `child` is the child being wrapped (rows are not padded to their tallest
/// member). A child wider than the content box on an empty row stays at `x = 0`
/// and overflows; nothing is shrunk.
///
/// Horizontal spacing: the cursor advances by `width + 2 * horizontal_gap` per
/// child, while the fit test only counts `width + horizontal_gap`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlowLayout {
    /// Horizontal spacing between children on a row.
    pub horizontal_gap: f64,
    /// Vertical spacing between rows.
    pub vertical_gap: f64,
}

impl FlowLayout {
    /// A flow layout with the given gaps.
    pub const fn new(horizontal_gap: f64, vertical_gap: f64) -> Self {
        Self {
            horizontal_gap,
            vertical_gap,
        }
    }
}

impl LayoutManager for FlowLayout {
    fn layout(&self, cx: &mut LayoutCx<'_>, surface: &mut dyn Surface) {
        let available = cx.content_width();
        let children: Vec<ViewId> = cx.children().to_vec();
        let mut cursor = Point::ZERO;
        let mut row_occupied = false;
        for child in children {
            cx.measure(child, surface);
            let size = cx.size_of(child);
            let occupy = self.horizontal_gap + size.width;
            if row_occupied && cursor.x + occupy > available {
                cursor.x = 0.0;
                cursor.y += size.height + self.vertical_gap;
            }
            cx.place(child, cursor);
            cursor.x += occupy + self.horizontal_gap;
            row_occupied = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingSurface;
    use crate::tree::ContainerConfig;
    use crate::types::Frame;
    use crate::view::View;
    use alloc::vec;
    use kurbo::{Insets, Rect};

    fn surface() -> RecordingSurface {
        RecordingSurface::new(Rect::new(0.0, 0.0, 500.0, 500.0))
    }

    fn flow_container(tree: &mut ViewTree, width: f64, flow: FlowLayout) -> ViewId {
        tree.insert_container(
            View::new(Frame::new(0.0, 0.0, width, 300.0)),
            ContainerConfig::default().with_layout(flow),
        )
    }

    fn add_boxes(tree: &mut ViewTree, parent: ViewId, sizes: &[(f64, f64)]) -> Vec<ViewId> {
        sizes
            .iter()
            .map(|&(w, h)| {
                let id = tree.insert_view(View::new(Frame::new(0.0, 0.0, w, h)));
                tree.add_child(parent, id).unwrap();
                id
            })
            .collect()
    }

    #[test]
    fn third_child_wraps_in_a_hundred_wide_box() {
        let mut tree = ViewTree::new();
        let root = flow_container(&mut tree, 100.0, FlowLayout::default());
        let kids = add_boxes(&mut tree, root, &[(40.0, 10.0), (40.0, 10.0), (40.0, 10.0)]);
        tree.draw(root, &mut surface());
        let origins: Vec<Point> = kids
            .iter()
            .map(|&k| tree.relative_origin(k).unwrap())
            .collect();
        assert_eq!(
            origins,
            vec![
                Point::new(0.0, 0.0),
                Point::new(40.0, 0.0),
                Point::new(0.0, 10.0),
            ]
        );
    }

    #[test]
    fn oversize_single_child_stays_at_origin() {
        let mut tree = ViewTree::new();
        let root = flow_container(&mut tree, 100.0, FlowLayout::new(5.0, 5.0));
        let kids = add_boxes(&mut tree, root, &[(250.0, 30.0)]);
        tree.draw(root, &mut surface());
        assert_eq!(tree.relative_origin(kids[0]), Some(Point::ZERO));
        assert_eq!(tree.frame(kids[0]).unwrap().origin, Point::ZERO);
    }

    #[test]
    fn oversize_later_child_starts_its_own_row() {
        let mut tree = ViewTree::new();
        let root = flow_container(&mut tree, 100.0, FlowLayout::default());
        let kids = add_boxes(&mut tree, root, &[(30.0, 10.0), (150.0, 20.0), (30.0, 10.0)]);
        tree.draw(root, &mut surface());
        assert_eq!(tree.relative_origin(kids[1]), Some(Point::new(0.0, 20.0)));
        // The next child also wraps, by its own height.
        assert_eq!(tree.relative_origin(kids[2]), Some(Point::new(0.0, 30.0)));
    }

    #[test]
    fn gaps_shape_the_cursor() {
        let mut tree = ViewTree::new();
        let root = flow_container(&mut tree, 100.0, FlowLayout::new(5.0, 3.0));
        let kids = add_boxes(&mut tree, root, &[(20.0, 10.0), (20.0, 10.0), (20.0, 12.0)]);
        tree.draw(root, &mut surface());
        // Cursor after each child: +20 +2*5 = 30 per child; fit test counts 25.
        assert_eq!(tree.relative_origin(kids[0]), Some(Point::new(0.0, 0.0)));
        assert_eq!(tree.relative_origin(kids[1]), Some(Point::new(30.0, 0.0)));
        assert_eq!(tree.relative_origin(kids[2]), Some(Point::new(60.0, 0.0)));

        let more = add_boxes(&mut tree, root, &[(20.0, 12.0)]);
        tree.draw(root, &mut surface());
        // 90 + 25 > 100: wraps by its own height plus the vertical gap.
        assert_eq!(tree.relative_origin(more[0]), Some(Point::new(0.0, 15.0)));
    }

    #[test]
    fn content_width_excludes_horizontal_padding() {
        let mut tree = ViewTree::new();
        let root = tree.insert_container(
            View::new(Frame::new(10.0, 10.0, 120.0, 100.0)),
            ContainerConfig::default()
                .with_padding(Insets::new(10.0, 5.0, 10.0, 5.0))
                .with_layout(FlowLayout::default()),
        );
        let kids = add_boxes(&mut tree, root, &[(50.0, 10.0), (50.0, 10.0), (50.0, 10.0)]);
        tree.draw(root, &mut surface());
        // Content box is 100 wide, so the third child wraps.
        assert_eq!(tree.relative_origin(kids[2]), Some(Point::new(0.0, 10.0)));
        // Absolute = container origin + (left, top) padding + relative origin.
        assert_eq!(tree.frame(kids[2]).unwrap().origin, Point::new(20.0, 25.0));
        assert_eq!(tree.frame(kids[1]).unwrap().origin, Point::new(70.0, 15.0));
    }

    #[test]
    fn no_layout_keeps_hand_placed_children() {
        let mut tree = ViewTree::new();
        let root = tree.insert_container(
            View::new(Frame::new(100.0, 100.0, 50.0, 50.0)),
            ContainerConfig::default().with_layout(NoLayout),
        );
        let child = tree.insert_view(View::new(Frame::new(7.0, 9.0, 5.0, 5.0)));
        tree.add_child(root, child).unwrap();
        tree.draw(root, &mut surface());
        assert_eq!(tree.relative_origin(child), Some(Point::new(7.0, 9.0)));
        assert_eq!(tree.frame(child).unwrap().origin, Point::new(107.0, 109.0));
    }

    #[test]
    fn flow_reacts_to_measured_size_changes() {
        use crate::label::Label;
        let mut tree = ViewTree::new();
        let root = flow_container(&mut tree, 100.0, FlowLayout::default());
        // 10 chars at 10px with 0.5 advance = 50 wide.
        let a = tree.insert_view(View::new(Frame::ZERO).with_content(
            Label::new("0123456789").with_font_size(10.0),
        ));
        let b = tree.insert_view(View::new(Frame::ZERO).with_content(
            Label::new("0123456789").with_font_size(10.0),
        ));
        tree.add_child(root, a).unwrap();
        tree.add_child(root, b).unwrap();
        tree.draw(root, &mut surface());
        assert_eq!(tree.relative_origin(b), Some(Point::new(50.0, 0.0)));

        let wider = Label::new("0123456789012").with_font_size(10.0);
        tree.view_mut(a)
            .unwrap()
            .set_content(Some(alloc::boxed::Box::new(wider)));
        tree.draw(root, &mut surface());
        // 65 + 50 > 100, so `b` now wraps; the relative origin follows the layout.
        assert_eq!(tree.relative_origin(b), Some(Point::new(0.0, 10.0)));
        assert_eq!(tree.frame(b).unwrap().origin, Point::new(0.0, 10.0));
    }
}
