// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use kurbo::Rect;
use parterre_motion::DEFAULT_DURATION_MS;
use parterre_render::Theme;

/// Configuration for one [`SeatMapEngine`](crate::SeatMapEngine) instance.
///
/// One engine is constructed per map view; screens that used to duplicate
/// hover/drag/transform state inline now differ only in the config they
/// pass here. All fields have working defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// View rectangle in view/device coordinates.
    pub view_rect: Rect,
    /// Theme colors and metrics (includes the highlight scale factors).
    pub theme: Theme,
    /// Maximum view-space movement, per axis, for a pointer gesture to
    /// count as a click rather than a drag. Also the minimum rubber-band
    /// extent.
    pub click_threshold: f64,
    /// Margin around the content when fitting it into the view.
    pub fit_margin: f64,
    /// Duration of the off-content recovery animation in milliseconds.
    pub recovery_duration_ms: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            view_rect: Rect::new(0.0, 0.0, 800.0, 600.0),
            theme: Theme::default(),
            click_threshold: 5.0,
            fit_margin: 40.0,
            recovery_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}
