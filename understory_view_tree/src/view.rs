// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The base visual node: geometry, background, border, and optional content.
//!
//! ## Painting order
//!
//! [`View::draw`] paints the background, then the border, then the content.
//! A [`Background::Custom`] painter receives the surface and the view itself;
//! [`Background::Solid`] fills the whole frame; [`Background::None`] paints nothing.
//! The border is stroked only when its width is positive.
//!
//! ## Measurement
//!
//! [`View::measure`] asks the attached [`Content`] for an intrinsic size and, if
//! one is reported, replaces the view's width and height. Without content the
//! geometry stays whatever it was constructed or laid out with.

use alloc::boxed::Box;
use alloc::rc::Rc;

use kurbo::{Point, Size};
use peniko::Color;

use crate::surface::Surface;
use crate::types::{Frame, ViewFlags};

/// A custom background painter.
///
/// Called with the surface and the view being painted, using the view's
/// absolute geometry.
pub type PaintFn = Rc<dyn Fn(&mut dyn Surface, &View)>;

/// How a view paints behind its border and content.
#[derive(Clone, Default)]
pub enum Background {
    /// Nothing is painted.
    #[default]
    None,
    /// The whole frame is filled with a color.
    Solid(Color),
    /// A custom painter runs instead of a fill.
    Custom(PaintFn),
}

impl Background {
    /// Wrap a closure as a [`Background::Custom`] painter.
    pub fn custom(f: impl Fn(&mut dyn Surface, &View) + 'static) -> Self {
        Self::Custom(Rc::new(f))
    }
}

impl core::fmt::Debug for Background {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Solid(color) => f.debug_tuple("Solid").field(color).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

/// Outline stroked around a view's frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Border {
    /// Stroke width. Nothing is stroked unless this is positive.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

impl Border {
    /// A border of `width` in `color`.
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width: 0.0,
            color: Color::BLACK,
        }
    }
}

/// Leaf content hosted by a view.
///
/// Implementations report an intrinsic size and paint themselves inside the
/// view's frame after its background and border.
pub trait Content {
    /// Report the size this content needs, if it has an intrinsic one.
    ///
    /// Must be free of side effects other than transient surface state, so
    /// repeated calls return the same answer.
    fn measure(&self, surface: &mut dyn Surface) -> Option<Size> {
        let _ = surface;
        None
    }

    /// Paint into `frame`, which is the view's absolute geometry.
    fn paint(&self, surface: &mut dyn Surface, frame: Frame);
}

/// A rectangular paintable node.
pub struct View {
    /// Absolute geometry used for painting and hit testing.
    pub frame: Frame,
    /// Background painted first.
    pub background: Background,
    /// Border stroked over the background.
    pub border: Border,
    /// Painting and picking flags.
    pub flags: ViewFlags,
    content: Option<Box<dyn Content>>,
}

impl core::fmt::Debug for View {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("View")
            .field("frame", &self.frame)
            .field("background", &self.background)
            .field("border", &self.border)
            .field("flags", &self.flags)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(Frame::ZERO)
    }
}

impl View {
    /// Create a view with the given geometry and nothing to paint.
    pub fn new(frame: impl Into<Frame>) -> Self {
        Self {
            frame: frame.into(),
            background: Background::None,
            border: Border::default(),
            flags: ViewFlags::default(),
            content: None,
        }
    }

    /// Set the background.
    pub fn with_background(mut self, background: impl Into<Background>) -> Self {
        self.background = background.into();
        self
    }

    /// Set a solid background color.
    pub fn with_background_color(self, color: Color) -> Self {
        self.with_background(Background::Solid(color))
    }

    /// Set the border.
    pub fn with_border(mut self, width: f64, color: Color) -> Self {
        self.border = Border::new(width, color);
        self
    }

    /// Set the flags.
    pub fn with_flags(mut self, flags: ViewFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Attach leaf content.
    pub fn with_content(mut self, content: impl Content + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    /// Replace or remove the leaf content.
    pub fn set_content(&mut self, content: Option<Box<dyn Content>>) {
        self.content = content;
    }

    /// True iff `(x, y)` lies inside the current frame, edges included.
    pub fn is_intersect(&self, x: f64, y: f64) -> bool {
        self.frame.contains(Point::new(x, y))
    }

    /// Update width and height from the content's intrinsic size, if any.
    pub fn measure(&mut self, surface: &mut dyn Surface) {
        if let Some(size) = self.content.as_ref().and_then(|c| c.measure(surface)) {
            self.frame.size = size;
        }
    }

    /// Paint background, border, and content, in that order.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let rect = self.frame.rect();
        match &self.background {
            Background::None => {}
            Background::Solid(color) => {
                surface.set_fill(*color);
                surface.fill_rect(rect);
            }
            Background::Custom(paint) => paint(surface, self),
        }
        if self.border.width > 0.0 {
            surface.set_stroke(self.border.width, self.border.color);
            surface.stroke_rect(rect);
        }
        if let Some(content) = &self.content {
            content.paint(surface, self.frame);
        }
    }
}
