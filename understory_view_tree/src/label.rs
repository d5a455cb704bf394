// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line text content.

use alloc::string::String;

use kurbo::{Insets, Size, Vec2};
use peniko::Color;

use crate::surface::{Surface, SurfaceExt};
use crate::types::Frame;
use crate::view::Content;

/// A single line of text sized from the surface's text metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The text.
    pub text: String,
    /// Font size.
    pub font_size: f64,
    /// Text color.
    pub color: Color,
    /// Space between the frame and the text.
    pub padding: Insets,
}

impl Label {
    /// A label with the default font size (`14.0`), black text, and no padding.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 14.0,
            color: Color::BLACK,
            padding: Insets::ZERO,
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the padding around the text.
    pub fn with_padding(mut self, padding: impl Into<Insets>) -> Self {
        self.padding = padding.into();
        self
    }
}

impl Content for Label {
    fn measure(&self, surface: &mut dyn Surface) -> Option<Size> {
        let text = surface.with_saved(|s| {
            s.set_font(self.font_size);
            s.measure_text(&self.text)
        });
        Some(Size::new(
            text.width + self.padding.x_value(),
            text.height + self.padding.y_value(),
        ))
    }

    fn paint(&self, surface: &mut dyn Surface, frame: Frame) {
        surface.set_font(self.font_size);
        surface.set_fill(self.color);
        let origin = frame.origin + Vec2::new(self.padding.x0, self.padding.y0);
        surface.fill_text(&self.text, origin);
    }
}
