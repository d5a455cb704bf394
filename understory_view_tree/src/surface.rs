// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The raster surface contract consumed by the view tree.
//!
//! ## Overview
//!
//! A [`Surface`] is a 2D drawing context with a small amount of mutable paint
//! state (fill color, stroke width and color, font size) and a save/restore stack
//! for that state. Views paint through it and leaf content measures text with it.
//!
//! Device-pixel-ratio correction, canvas sizing, and presentation belong to the
//! backend implementing this trait. [`RecordingSurface`](crate::RecordingSurface)
//! is an in-memory implementation that records operations.
//!
//! ## Scoped state
//!
//! [`SurfaceExt::saved`] pairs a `save` with a guaranteed `restore`: the returned
//! [`SavedState`] restores when dropped, on every exit path including unwinding.
//! Containers wrap each child's whole subtree draw in one of these guards.

use core::ops::{Deref, DerefMut};

use kurbo::{Point, Rect, Size};
use peniko::Color;

/// Minimal drawing context.
///
/// Paint operations use the current state set through `set_fill`, `set_stroke`,
/// and `set_font`. `save` pushes a copy of that state and `restore` pops it;
/// unbalanced `restore` calls are ignored by well-behaved implementations.
pub trait Surface {
    /// Visible area of the surface in surface-local coordinates.
    fn viewport(&self) -> Rect;

    /// Push a copy of the current paint state.
    fn save(&mut self);

    /// Pop the most recently saved paint state.
    fn restore(&mut self);

    /// Clear `rect` to transparent.
    fn clear(&mut self, rect: Rect);

    /// Set the current fill color.
    fn set_fill(&mut self, color: Color);

    /// Set the current stroke width and color.
    fn set_stroke(&mut self, width: f64, color: Color);

    /// Set the current font size used by `fill_text` and `measure_text`.
    fn set_font(&mut self, size: f64);

    /// Fill `rect` with the current fill color.
    fn fill_rect(&mut self, rect: Rect);

    /// Stroke the outline of `rect` with the current stroke.
    fn stroke_rect(&mut self, rect: Rect);

    /// Fill `text` with its top-left corner at `origin`.
    fn fill_text(&mut self, text: &str, origin: Point);

    /// Report the size `text` would occupy with the current font.
    fn measure_text(&mut self, text: &str) -> Size;
}

/// Convenience helpers for [`Surface`] implementations and callers.
///
/// This is separate from [`Surface`] so that `&mut dyn Surface` stays usable.
pub trait SurfaceExt: Surface {
    /// Save the paint state and return a guard that restores it when dropped.
    #[inline]
    fn saved(&mut self) -> SavedState<'_, Self> {
        self.save();
        SavedState { surface: self }
    }

    /// Run `f` with the paint state saved, restoring it afterwards.
    ///
    /// Unlike a bare `save`/`restore` pair, the state is restored even if `f` panics.
    #[inline]
    fn with_saved<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = self.saved();
        f(&mut *guard)
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

/// Guard returned by [`SurfaceExt::saved`].
///
/// Dereferences to the underlying surface and calls [`Surface::restore`] on drop.
pub struct SavedState<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<S: Surface + ?Sized> core::fmt::Debug for SavedState<'_, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SavedState").finish_non_exhaustive()
    }
}

impl<S: Surface + ?Sized> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
