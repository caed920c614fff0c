// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene assembly: the retained display list handed to the host.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Affine, BezPath, Point, Rect, RoundedRect};
use parterre_model::{MapSnapshot, ObjectId, ObjectKind};
use peniko::Color;

use crate::style::{ObjectState, Style, resolve_style};
use crate::theme::Theme;

/// One drawing operation in paint order.
///
/// Geometry is world-space; the owning [`Scene`] carries the world→view
/// affine to apply while rasterizing. The rubber-band outline width and
/// label sizes are the exceptions noted on their fields.
#[derive(Clone, Debug)]
pub enum SceneItem {
    /// Fill the whole canvas.
    Background {
        /// Fill color.
        color: Color,
    },
    /// Rounded panel behind all objects.
    Backdrop {
        /// Panel geometry (content union plus padding).
        panel: RoundedRect,
        /// Fill color.
        color: Color,
    },
    /// One map object's outline with its resolved style.
    Object {
        /// Object id, for host-side correlation (cursors, test hooks).
        id: ObjectId,
        /// World-space outline, highlight scale-up already applied.
        outline: BezPath,
        /// Resolved fill/stroke/glow.
        style: Style,
    },
    /// Text overlay centered on an object.
    Label {
        /// Text content.
        text: String,
        /// World-space center.
        center: Point,
        /// Font size in world units (already highlight-scaled).
        size: f64,
        /// Text color.
        color: Color,
    },
    /// Rubber-band interior preview.
    BandFill {
        /// World-space band rectangle.
        rect: Rect,
        /// Translucent fill color.
        color: Color,
    },
    /// Rubber-band outline, painted last.
    BandOutline {
        /// World-space band rectangle.
        rect: Rect,
        /// Outline color.
        color: Color,
        /// Outline width in *view* units (constant on screen regardless of
        /// zoom).
        width: f64,
    },
}

/// The full display list for one repaint.
///
/// Repaints are total: every state change that affects visuals rebuilds
/// the whole scene. Object counts are bounded (hundreds per map), so this
/// stays cheap and keeps the contract trivially simple.
#[derive(Clone, Debug)]
pub struct Scene {
    /// World→view transform to apply while rasterizing.
    pub world_to_view: Affine,
    /// Items in paint order.
    pub items: Vec<SceneItem>,
}

/// Interaction inputs for scene assembly.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneParams<'a> {
    /// Currently selected ids.
    pub selected: &'a [ObjectId],
    /// Currently hovered id.
    pub hovered: Option<&'a ObjectId>,
    /// Active price filter, if any.
    pub active_prices: Option<&'a HashSet<ObjectId>>,
    /// In-progress rubber band in world space.
    pub rubber_band: Option<Rect>,
}

/// Builds the display list for the current state.
///
/// Paint order: background, backdrop panel, objects in snapshot (paint)
/// order with their labels, then the rubber-band preview and outline.
#[must_use]
pub fn build_scene(
    snapshot: &MapSnapshot,
    world_to_view: Affine,
    params: &SceneParams<'_>,
    theme: &Theme,
) -> Scene {
    let mut items = Vec::with_capacity(snapshot.len() * 2 + 4);

    items.push(SceneItem::Background {
        color: theme.background,
    });

    if let Some(bounds) = snapshot.content_bounds() {
        let panel = RoundedRect::from_rect(
            bounds.inflate(theme.backdrop_padding, theme.backdrop_padding),
            theme.backdrop_radius,
        );
        items.push(SceneItem::Backdrop {
            panel,
            color: theme.backdrop,
        });
    }

    for object in snapshot.objects() {
        let filtered_out = match params.active_prices {
            Some(prices) => object
                .price_id
                .as_ref()
                .is_none_or(|id| !prices.contains(id)),
            None => false,
        };
        let state = ObjectState {
            selected: params.selected.contains(&object.id),
            hovered: params.hovered == Some(&object.id),
            filtered_out,
        };
        let style = resolve_style(object, state, theme);

        let mut outline = object.shape.outline(object.bounds);
        if style.scale != 1.0 {
            let center = object.center().to_vec2();
            outline.apply_affine(
                Affine::translate(center)
                    * Affine::scale(style.scale)
                    * Affine::translate(-center),
            );
        }
        items.push(SceneItem::Object {
            id: object.id.clone(),
            outline,
            style,
        });

        if let Some(text) = label_text(object) {
            items.push(SceneItem::Label {
                text,
                center: object.center(),
                size: theme.label_size * style.scale,
                color: theme.label,
            });
        }
    }

    if let Some(band) = params.rubber_band {
        items.push(SceneItem::BandFill {
            rect: band,
            color: theme.band_fill,
        });
        items.push(SceneItem::BandOutline {
            rect: band,
            color: theme.band_outline,
            width: theme.band_outline_width,
        });
    }

    Scene {
        world_to_view,
        items,
    }
}

fn label_text(object: &parterre_model::MapObject) -> Option<String> {
    match object.kind {
        ObjectKind::Seat => object.seat_number.map(|n| n.to_string()),
        ObjectKind::SpecialZone => object.capacity.map(|c| c.to_string()),
        ObjectKind::Scene | ObjectKind::Decoration | ObjectKind::Passage => None,
    }
}
