// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Surface`] that records paint operations.
//!
//! Useful for tests, headless runs, and benchmarks. Each draw operation is
//! recorded together with the paint state it was issued under, so callers can
//! assert both what was painted and that state did not leak between views.
//!
//! Text is measured with fixed advance metrics: every `char` is
//! `font_size * advance_ratio` wide and a line is `font_size` tall.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::surface::Surface;

/// Paint state tracked by [`RecordingSurface`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PaintState {
    /// Current fill color.
    pub fill: Color,
    /// Current stroke color.
    pub stroke: Color,
    /// Current stroke width.
    pub stroke_width: f64,
    /// Current font size.
    pub font_size: f64,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: Color::BLACK,
            stroke_width: 1.0,
            font_size: 10.0,
        }
    }
}

/// A recorded surface operation.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Paint state pushed.
    Save,
    /// Paint state popped.
    Restore,
    /// Area cleared.
    Clear(Rect),
    /// Rectangle filled.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color in effect.
        color: Color,
    },
    /// Rectangle outline stroked.
    StrokeRect {
        /// Stroked outline.
        rect: Rect,
        /// Stroke width in effect.
        width: f64,
        /// Stroke color in effect.
        color: Color,
    },
    /// Text filled.
    FillText {
        /// The text.
        text: String,
        /// Top-left corner of the text box.
        origin: Point,
        /// Fill color in effect.
        color: Color,
        /// Font size in effect.
        font_size: f64,
    },
}

/// A [`Surface`] that records operations instead of rasterizing them.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    viewport: Rect,
    advance_ratio: f64,
    state: PaintState,
    stack: Vec<PaintState>,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create a surface covering `viewport` with default paint state.
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            advance_ratio: 0.5,
            state: PaintState::default(),
            stack: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Set the per-`char` advance as a fraction of the font size.
    pub fn with_advance_ratio(mut self, ratio: f64) -> Self {
        self.advance_ratio = ratio;
        self
    }

    /// Current paint state.
    pub fn state(&self) -> PaintState {
        self.state
    }

    /// Number of saved states not yet restored.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Operations recorded so far.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the log empty.
    ///
    /// Paint state and the save stack are left untouched.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }

    /// Iterate the filled rectangles in paint order, with their colors.
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::FillRect { rect, color } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn save(&mut self) {
        self.stack.push(self.state);
        self.ops.push(SurfaceOp::Save);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
            self.ops.push(SurfaceOp::Restore);
        }
    }

    fn clear(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::Clear(rect));
    }

    fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    fn set_stroke(&mut self, width: f64, color: Color) {
        self.state.stroke_width = width;
        self.state.stroke = color;
    }

    fn set_font(&mut self, size: f64) {
        self.state.font_size = size;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::FillRect {
            rect,
            color: self.state.fill,
        });
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(SurfaceOp::StrokeRect {
            rect,
            width: self.state.stroke_width,
            color: self.state.stroke,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point) {
        self.ops.push(SurfaceOp::FillText {
            text: text.to_string(),
            origin,
            color: self.state.fill,
            font_size: self.state.font_size,
        });
    }

    fn measure_text(&mut self, text: &str) -> Size {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Character counts stay far below 2^52."
        )]
        let chars = text.chars().count() as f64;
        Size::new(
            chars * self.state.font_size * self.advance_ratio,
            self.state.font_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut s = RecordingSurface::new(Rect::ZERO);
        s.restore();
        assert!(s.ops().is_empty());
        assert_eq!(s.state(), PaintState::default());
    }

    #[test]
    fn draw_ops_capture_state_in_effect() {
        let mut s = RecordingSurface::new(Rect::new(0.0, 0.0, 50.0, 50.0));
        let red = Color::from_rgb8(255, 0, 0);
        s.set_fill(red);
        s.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0));
        s.set_stroke(2.0, Color::WHITE);
        s.stroke_rect(Rect::new(1.0, 1.0, 4.0, 4.0));
        assert_eq!(
            s.ops(),
            &[
                SurfaceOp::FillRect {
                    rect: Rect::new(0.0, 0.0, 5.0, 5.0),
                    color: red,
                },
                SurfaceOp::StrokeRect {
                    rect: Rect::new(1.0, 1.0, 4.0, 4.0),
                    width: 2.0,
                    color: Color::WHITE,
                },
            ]
        );
    }

    #[test]
    fn text_metrics_follow_font_size() {
        let mut s = RecordingSurface::new(Rect::ZERO);
        s.set_font(20.0);
        assert_eq!(s.measure_text("abcd"), Size::new(40.0, 20.0));
        let mut wide = RecordingSurface::new(Rect::ZERO).with_advance_ratio(1.0);
        assert_eq!(wide.measure_text("ab"), Size::new(20.0, 10.0));
    }
}
