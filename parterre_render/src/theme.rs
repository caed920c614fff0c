// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme colors and metrics for the scene builder.

use peniko::Color;

/// Colors and metrics used by style resolution and scene assembly.
///
/// The defaults reproduce the back office's stock look; hosts override
/// individual fields through `EngineConfig` rather than subclassing
/// anything.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Backdrop panel painted behind all objects.
    pub backdrop: Color,
    /// Padding around the content union for the backdrop panel.
    pub backdrop_padding: f64,
    /// Corner radius of the backdrop panel.
    pub backdrop_radius: f64,
    /// Fill for sold objects.
    pub sold: Color,
    /// Fill for locked and reserved objects.
    pub blocked: Color,
    /// Fill for available objects excluded by the active price filter.
    pub filtered_out: Color,
    /// Stroke for filtered-out objects.
    pub filtered_out_stroke: Color,
    /// Fill for selected objects.
    pub selected: Color,
    /// Drop-shadow/glow color for selected objects.
    pub selected_glow: Color,
    /// Glow color for hovered objects.
    pub hover_glow: Color,
    /// Neutral fallback fill when a price has no palette color.
    pub unpriced: Color,
    /// Fill for scene and decoration fixtures.
    pub fixture: Color,
    /// Fill for passages.
    pub passage: Color,
    /// Stroke for passages.
    pub passage_stroke: Color,
    /// Label text color.
    pub label: Color,
    /// Base label font size in world units.
    pub label_size: f64,
    /// Stroke width for stroked rules.
    pub stroke_width: f64,
    /// Rubber-band interior preview fill (translucent).
    pub band_fill: Color,
    /// Rubber-band outline color.
    pub band_outline: Color,
    /// Rubber-band outline width in view units.
    pub band_outline_width: f64,
    /// Scale-up factor for hovered/selected seats.
    pub seat_highlight_scale: f64,
    /// Scale-up factor for hovered/selected special zones.
    pub zone_highlight_scale: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(245, 246, 248, 255),
            backdrop: Color::from_rgba8(255, 255, 255, 255),
            backdrop_padding: 40.0,
            backdrop_radius: 12.0,
            sold: Color::from_rgba8(189, 193, 198, 255),
            blocked: Color::from_rgba8(141, 146, 153, 255),
            filtered_out: Color::from_rgba8(224, 226, 229, 255),
            filtered_out_stroke: Color::from_rgba8(176, 180, 186, 255),
            selected: Color::from_rgba8(37, 99, 235, 255),
            selected_glow: Color::from_rgba8(37, 99, 235, 110),
            hover_glow: Color::from_rgba8(59, 130, 246, 140),
            unpriced: Color::from_rgba8(158, 163, 170, 255),
            fixture: Color::from_rgba8(209, 213, 219, 255),
            passage: Color::from_rgba8(180, 185, 192, 255),
            passage_stroke: Color::from_rgba8(134, 140, 148, 255),
            label: Color::from_rgba8(31, 41, 55, 255),
            label_size: 9.0,
            stroke_width: 1.0,
            band_fill: Color::from_rgba8(59, 130, 246, 40),
            band_outline: Color::from_rgba8(37, 99, 235, 255),
            band_outline_width: 1.0,
            seat_highlight_scale: 1.15,
            zone_highlight_scale: 1.08,
        }
    }
}
