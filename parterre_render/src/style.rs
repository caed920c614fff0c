// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-object style resolution.
//!
//! A deterministic rule table evaluated top to bottom, first match wins:
//!
//! | status/kind | fill | stroke |
//! |---|---|---|
//! | sold | muted gray | none |
//! | locked / reserved | darker gray | none |
//! | scene / decoration | neutral gray | none |
//! | passage | mid gray | visible |
//! | available, outside the active price filter | light gray | visible |
//! | available, selected | accent blue + glow | none |
//! | available, unselected | price band color or neutral fallback | none |
//!
//! The status rows outrank everything; the fixture rows sit above the
//! "available" rows so passages and decorations never pick up price
//! colors. Hover or selection on an eligible object additionally applies
//! a uniform scale-up about the object center plus a glow.

use parterre_model::{MapObject, ObjectKind, SeatStatus};
use peniko::Color;

use crate::palette::color_for_price;
use crate::theme::Theme;

/// Stroke of a styled object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in world units.
    pub width: f64,
}

/// Resolved visual style for one object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    /// Fill color.
    pub fill: Color,
    /// Optional stroke.
    pub stroke: Option<StrokeStyle>,
    /// Optional glow (drop shadow) color.
    pub glow: Option<Color>,
    /// Uniform scale-up factor about the object center; `1.0` when the
    /// object is not highlighted.
    pub scale: f64,
}

/// Interaction state of one object at style-resolution time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObjectState {
    /// The object is in the current selection.
    pub selected: bool,
    /// The object is under the pointer.
    pub hovered: bool,
    /// An active price filter exists and the object is not a member.
    pub filtered_out: bool,
}

/// Resolves the style for `object` under `state`.
#[must_use]
pub fn resolve_style(object: &MapObject, state: ObjectState, theme: &Theme) -> Style {
    let mut style = base_style(object, state, theme);

    // Highlight only eligible objects: clickable, available, not filtered.
    let eligible =
        object.clickable() && !object.status.blocks_interaction() && !state.filtered_out;
    if eligible && (state.hovered || state.selected) {
        style.scale = match object.kind {
            ObjectKind::SpecialZone => theme.zone_highlight_scale,
            _ => theme.seat_highlight_scale,
        };
        if style.glow.is_none() {
            style.glow = Some(theme.hover_glow);
        }
    }
    style
}

fn base_style(object: &MapObject, state: ObjectState, theme: &Theme) -> Style {
    let plain = |fill: Color| Style {
        fill,
        stroke: None,
        glow: None,
        scale: 1.0,
    };

    match object.status {
        SeatStatus::Sold => return plain(theme.sold),
        SeatStatus::Locked | SeatStatus::Reserved => return plain(theme.blocked),
        SeatStatus::Available => {}
    }

    match object.kind {
        ObjectKind::Scene | ObjectKind::Decoration => plain(theme.fixture),
        ObjectKind::Passage => Style {
            fill: theme.passage,
            stroke: Some(StrokeStyle {
                color: theme.passage_stroke,
                width: theme.stroke_width,
            }),
            glow: None,
            scale: 1.0,
        },
        ObjectKind::Seat | ObjectKind::SpecialZone => {
            if state.filtered_out {
                Style {
                    fill: theme.filtered_out,
                    stroke: Some(StrokeStyle {
                        color: theme.filtered_out_stroke,
                        width: theme.stroke_width,
                    }),
                    glow: None,
                    scale: 1.0,
                }
            } else if state.selected {
                Style {
                    fill: theme.selected,
                    stroke: None,
                    glow: Some(theme.selected_glow),
                    scale: 1.0,
                }
            } else {
                let fill = object
                    .price
                    .and_then(color_for_price)
                    .unwrap_or(theme.unpriced);
                plain(fill)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;
    use parterre_model::Shape;

    fn theme() -> Theme {
        Theme::default()
    }

    fn seat() -> MapObject {
        MapObject::seat("s1", Rect::new(0.0, 0.0, 10.0, 10.0), 1, 1, "z1")
    }

    #[test]
    fn sold_outranks_everything() {
        let mut object = seat();
        object.status = SeatStatus::Sold;
        object.price = Some(1250.0);
        let style = resolve_style(
            &object,
            ObjectState {
                selected: true,
                hovered: true,
                filtered_out: false,
            },
            &theme(),
        );
        assert_eq!(style.fill, theme().sold);
        assert_eq!(style.stroke, None);
        // Sold objects never highlight, even if stale state says hovered.
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.glow, None);
    }

    #[test]
    fn reserved_and_locked_share_the_blocked_fill() {
        for status in [SeatStatus::Reserved, SeatStatus::Locked] {
            let mut object = seat();
            object.status = status;
            let style = resolve_style(&object, ObjectState::default(), &theme());
            assert_eq!(style.fill, theme().blocked);
            assert_eq!(style.stroke, None);
        }
    }

    #[test]
    fn filter_exclusion_beats_price_color() {
        let mut object = seat();
        object.price = Some(1250.0);
        let style = resolve_style(
            &object,
            ObjectState {
                filtered_out: true,
                ..ObjectState::default()
            },
            &theme(),
        );
        assert_eq!(style.fill, theme().filtered_out);
        assert!(style.stroke.is_some());
    }

    #[test]
    fn selected_gets_accent_and_glow() {
        let style = resolve_style(
            &seat(),
            ObjectState {
                selected: true,
                ..ObjectState::default()
            },
            &theme(),
        );
        assert_eq!(style.fill, theme().selected);
        assert_eq!(style.glow, Some(theme().selected_glow));
        assert_eq!(style.scale, theme().seat_highlight_scale);
    }

    #[test]
    fn unselected_priced_seat_uses_the_palette() {
        let mut object = seat();
        object.price = Some(1250.0);
        let style = resolve_style(&object, ObjectState::default(), &theme());
        assert_eq!(style.fill, color_for_price(1250.0).unwrap());

        let mut unpriced = seat();
        unpriced.price = None;
        let style = resolve_style(&unpriced, ObjectState::default(), &theme());
        assert_eq!(style.fill, theme().unpriced);
    }

    #[test]
    fn hover_scales_by_kind() {
        let hover = ObjectState {
            hovered: true,
            ..ObjectState::default()
        };
        let seat_style = resolve_style(&seat(), hover, &theme());
        assert_eq!(seat_style.scale, theme().seat_highlight_scale);
        assert_eq!(seat_style.glow, Some(theme().hover_glow));

        let zone =
            MapObject::special_zone("sz1", Rect::new(0.0, 0.0, 40.0, 40.0), 6, "z1");
        let zone_style = resolve_style(&zone, hover, &theme());
        assert_eq!(zone_style.scale, theme().zone_highlight_scale);
    }

    #[test]
    fn fixtures_never_pick_up_price_colors() {
        let mut stage = MapObject::fixture(
            "stage",
            ObjectKind::Scene,
            Shape::Rect { radius: 0.0 },
            Rect::new(0.0, 0.0, 100.0, 30.0),
        );
        stage.price = Some(1250.0);
        let style = resolve_style(&stage, ObjectState::default(), &theme());
        assert_eq!(style.fill, theme().fixture);

        let passage = MapObject::fixture(
            "p",
            ObjectKind::Passage,
            Shape::Rect { radius: 0.0 },
            Rect::new(0.0, 0.0, 100.0, 10.0),
        );
        let style = resolve_style(&passage, ObjectState::default(), &theme());
        assert_eq!(style.fill, theme().passage);
        assert!(style.stroke.is_some());
    }
}
