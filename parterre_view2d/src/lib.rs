// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre View 2D: the seat-map viewport.
//!
//! A small, headless model of the map camera: a uniform zoom factor and a
//! view-space pan offset mapping world coordinates (where seat geometry
//! lives) into the rendering viewport. It focuses on:
//! - Coordinate conversion between world and view space.
//! - Anchor-preserving wheel zoom with a hard scale clamp.
//! - Unclamped panning: content may be dragged fully off-screen; recovery
//!   is a higher layer's job (see `parterre_motion`).
//! - Fitting the whole map into the view with a margin.
//!
//! It does **not** own a scene or any input handling. Callers wire pointer
//! and wheel events into pan/zoom operations at a higher layer and use
//! [`Viewport::visible_world_rect`] for culling and off-content checks.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use parterre_view2d::Viewport;
//!
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! view.fit_to_content(Rect::new(0.0, 0.0, 400.0, 300.0), 20.0);
//!
//! // Convert a view-space pointer position into world space for hit testing.
//! let world = view.view_to_world_point(Point::new(400.0, 300.0));
//! let back = view.world_to_view_point(world);
//! assert!((back.x - 400.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform is the plain offset form `view = world * scale + offset`;
//!   the scale is uniform and rotation is out of scope.
//! - The scale is clamped to `[0.1, 5.0]` at every mutation site, so no
//!   sequence of zoom gestures can escape the range.
//! - Fitting never zooms *in* past 1:1; a tiny map stays at natural size
//!   rather than filling the window with three seats.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Affine, Point, Rect, Vec2};

/// Smallest permitted zoom scale.
pub const MIN_SCALE: f64 = 0.1;

/// Largest permitted zoom scale.
pub const MAX_SCALE: f64 = 5.0;

/// Pan/zoom camera over the seat map's world plane.
///
/// Tracks a rectangular view region, a uniform `scale`, and a view-space
/// `offset` such that `view = world * scale + offset`. One instance exists
/// per map view; it mutates continuously during gestures and is discarded
/// with the view.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    view_rect: Rect,
    scale: f64,
    offset: Vec2,
}

impl Viewport {
    /// Creates a viewport covering `view_rect` at scale `1.0` with zero
    /// offset.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self {
            view_rect,
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Returns the view rectangle.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle (for example on host resize). Scale and
    /// offset are left untouched.
    pub fn set_view_rect(&mut self, rect: Rect) {
        self.view_rect = rect;
    }

    /// Returns the current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamping it between [`MIN_SCALE`] and [`MAX_SCALE`].
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Returns the current view-space pan offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the pan offset directly.
    ///
    /// Used by pan gestures that anchor on the pointer-down position. No
    /// clamping is applied.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Pans by a view-space delta.
    ///
    /// Unconditional: the content may end up entirely outside the view.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Zooms by `factor` around a view-space anchor point.
    ///
    /// The world point under the anchor stays put: the offset is recomputed
    /// so the anchor's view position is invariant under the scale change.
    /// Non-positive factors are ignored; the resulting scale is clamped.
    pub fn zoom_about(&mut self, anchor_view: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return;
        }
        // view = world * s + o  ⇒  keeping `anchor_view` fixed across the
        // scale change means scaling its distance to the offset.
        let ratio = new_scale / self.scale;
        let anchor = anchor_view.to_vec2();
        self.offset = anchor - (anchor - self.offset) * ratio;
        self.scale = new_scale;
    }

    /// Fits `bounds` into the view rectangle, inset by `margin` on every
    /// side, and centers it.
    ///
    /// The fitted scale never exceeds `1.0` (small maps render at natural
    /// size) and respects the global clamp. Degenerate bounds or view
    /// rectangles are a no-op.
    pub fn fit_to_content(&mut self, bounds: Rect, margin: f64) {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return;
        }
        let usable_w = self.view_rect.width() - 2.0 * margin;
        let usable_h = self.view_rect.height() - 2.0 * margin;
        if usable_w <= 0.0 || usable_h <= 0.0 {
            return;
        }

        let scale = (usable_w / bounds.width())
            .min(usable_h / bounds.height())
            .min(1.0)
            .clamp(MIN_SCALE, MAX_SCALE);
        self.scale = scale;
        self.offset = self.view_rect.center().to_vec2() - bounds.center().to_vec2() * scale;
    }

    /// Converts a world-space point into view space.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.offset).to_point()
    }

    /// Converts a view-space point into world space.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Converts a world-space rectangle into view space.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        let p0 = self.world_to_view_point(rect.origin());
        let p1 = self.world_to_view_point(Point::new(rect.max_x(), rect.max_y()));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Converts a view-space rectangle into world space.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        let p0 = self.view_to_world_point(rect.origin());
        let p1 = self.view_to_world_point(Point::new(rect.max_x(), rect.max_y()));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// The world-space rectangle currently visible through the view.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world_rect(self.view_rect)
    }

    /// The world→view transform as an affine, for handing to a renderer.
    #[must_use]
    pub fn world_to_view_affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Viewport {
        Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0))
    }

    #[test]
    fn world_view_roundtrip() {
        let mut vp = view();
        vp.set_scale(2.5);
        vp.set_offset(Vec2::new(-120.0, 45.0));

        let world = Point::new(10.0, -5.0);
        let back = vp.view_to_world_point(vp.world_to_view_point(world));
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let mut vp = view();
        vp.set_offset(Vec2::new(33.0, -7.0));

        let anchor = Point::new(400.0, 300.0);
        let world_before = vp.view_to_world_point(anchor);
        vp.zoom_about(anchor, 1.7);
        let world_after = vp.view_to_world_point(anchor);

        assert!((world_after.x - world_before.x).abs() < 1e-9);
        assert!((world_after.y - world_before.y).abs() < 1e-9);
    }

    #[test]
    fn scale_clamps_under_repeated_extreme_zoom() {
        let mut vp = view();
        let anchor = Point::new(100.0, 100.0);
        for _ in 0..50 {
            vp.zoom_about(anchor, 10.0);
        }
        assert_eq!(vp.scale(), MAX_SCALE);
        for _ in 0..50 {
            vp.zoom_about(anchor, 0.01);
        }
        assert_eq!(vp.scale(), MIN_SCALE);
    }

    #[test]
    fn pan_is_unclamped() {
        let mut vp = view();
        vp.pan_by(Vec2::new(1e6, -1e6));
        assert_eq!(vp.offset(), Vec2::new(1e6, -1e6));

        // Content is now nowhere near the view.
        let visible = vp.visible_world_rect();
        let content = Rect::new(0.0, 0.0, 400.0, 300.0);
        assert_eq!(visible.intersect(content).area(), 0.0);
    }

    #[test]
    fn fit_to_content_centers_with_margin() {
        let mut vp = view();
        let bounds = Rect::new(0.0, 0.0, 4000.0, 2000.0);
        vp.fit_to_content(bounds, 20.0);

        // Scale is limited by the tighter axis: (800-40)/4000 = 0.19.
        assert!((vp.scale() - 0.19).abs() < 1e-12);

        // The content center lands on the view center.
        let center_view = vp.world_to_view_point(bounds.center());
        assert!((center_view.x - 400.0).abs() < 1e-9);
        assert!((center_view.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn fit_to_content_never_zooms_in_past_natural_size() {
        let mut vp = view();
        vp.fit_to_content(Rect::new(0.0, 0.0, 50.0, 40.0), 20.0);
        assert_eq!(vp.scale(), 1.0);
    }

    #[test]
    fn fit_to_content_ignores_degenerate_input() {
        let mut vp = view();
        let before = vp.clone();
        vp.fit_to_content(Rect::new(10.0, 10.0, 10.0, 50.0), 20.0);
        assert_eq!(vp, before);

        // Margin larger than the view.
        vp.fit_to_content(Rect::new(0.0, 0.0, 100.0, 100.0), 500.0);
        assert_eq!(vp, before);
    }

    #[test]
    fn affine_matches_point_mapping() {
        let mut vp = view();
        vp.set_scale(0.5);
        vp.set_offset(Vec2::new(12.0, 34.0));

        let p = Point::new(64.0, -32.0);
        let via_affine = vp.world_to_view_affine() * p;
        let via_points = vp.world_to_view_point(p);
        assert!((via_affine - via_points).hypot() < 1e-12);
    }
}
