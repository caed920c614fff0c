// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine: modal pointer interaction over one map view.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Rect};
use parterre_capacity::{available_count, expand};
use parterre_hit::{HitFilter, hit_test, intersect_rect};
use parterre_model::{MapObject, MapSnapshot, ObjectId, ObjectKind, SeatStatus};
use parterre_motion::Animator;
use parterre_render::{Scene, SceneParams, build_scene};
use parterre_select::{RubberBandEffect, Selection};
use parterre_tooltip::UNKNOWN_ZONE;
use parterre_view2d::Viewport;
use smallvec::smallvec;

use crate::config::EngineConfig;
use crate::events::{CursorIcon, EngineEvent, Events, Mode, QuantityError};

/// Active pointer gesture.
#[derive(Clone, Debug, PartialEq)]
enum DragState {
    None,
    Panning {
        /// Pointer-down view position minus the offset at that moment;
        /// moving sets `offset = pointer − anchor`.
        anchor: kurbo::Vec2,
        start_view: Point,
    },
    RubberBand {
        start_world: Point,
        current_world: Point,
    },
}

/// The seat-map canvas engine.
///
/// One instance per map view. The engine owns the mutable interaction
/// state (viewport, selection, hover, drag, recovery animation) over an
/// immutable [`MapSnapshot`], consumes pointer/wheel/frame input, and
/// reports every externally visible change as [`EngineEvent`]s. It owns no
/// UI and performs no I/O; price-assignment requests and quantity
/// selectors are the host's side of the conversation.
///
/// All methods are synchronous; there is one logical writer (the UI
/// thread) so no internal synchronization exists.
#[derive(Clone, Debug)]
pub struct SeatMapEngine {
    snapshot: MapSnapshot,
    config: EngineConfig,
    viewport: Viewport,
    selection: Selection<ObjectId>,
    hovered: Option<ObjectId>,
    mode: Mode,
    drag: DragState,
    animator: Animator,
    active_prices: Option<HashSet<ObjectId>>,
}

impl SeatMapEngine {
    /// Creates an engine over a merged snapshot.
    ///
    /// The viewport starts at identity (scale `1.0`, zero offset); call
    /// [`SeatMapEngine::fit_to_content`] to frame the whole map.
    #[must_use]
    pub fn new(snapshot: MapSnapshot, config: EngineConfig) -> Self {
        let viewport = Viewport::new(config.view_rect);
        Self {
            snapshot,
            config,
            viewport,
            selection: Selection::new(),
            hovered: None,
            mode: Mode::ZoomPan,
            drag: DragState::None,
            animator: Animator::new(),
            active_prices: None,
        }
    }

    /// The merged snapshot this engine renders.
    #[must_use]
    pub fn snapshot(&self) -> &MapSnapshot {
        &self.snapshot
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<ObjectId> {
        &self.selection
    }

    /// Currently hovered object id, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&ObjectId> {
        self.hovered.as_ref()
    }

    /// Returns `true` while a recovery animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Switches the interaction mode.
    pub fn set_mode(&mut self, mode: Mode) -> Events {
        if self.mode == mode {
            return smallvec![];
        }
        self.mode = mode;
        self.drag = DragState::None;
        smallvec![EngineEvent::ModeChanged { mode }]
    }

    /// Updates the view rectangle (host resize).
    pub fn set_view_rect(&mut self, rect: Rect) -> Events {
        self.viewport.set_view_rect(rect);
        smallvec![EngineEvent::RepaintNeeded]
    }

    /// Replaces the active price filter.
    ///
    /// `None` clears the filter. A hovered object that the new filter
    /// excludes loses its hover immediately.
    pub fn set_active_price_filter(&mut self, filter: Option<HashSet<ObjectId>>) -> Events {
        self.active_prices = filter;
        let mut events: Events = smallvec![];
        if let Some(hovered) = self.hovered.clone() {
            let still_eligible = self
                .snapshot
                .get(&hovered)
                .is_some_and(|object| self.filter().admits(object));
            if !still_eligible {
                self.hovered = None;
                events.push(EngineEvent::TooltipCleared);
                events.push(EngineEvent::Cursor {
                    icon: CursorIcon::Default,
                });
            }
        }
        events.push(EngineEvent::RepaintNeeded);
        events
    }

    /// Fits the whole map into the view with the configured margin.
    pub fn fit_to_content(&mut self) -> Events {
        let Some(bounds) = self.snapshot.content_bounds() else {
            return smallvec![];
        };
        self.viewport.fit_to_content(bounds, self.config.fit_margin);
        smallvec![EngineEvent::RepaintNeeded]
    }

    /// Pointer pressed at a view-space position.
    ///
    /// Starts a pan (in [`Mode::ZoomPan`]) or a rubber band (in
    /// [`Mode::Selection`]). Grabbing the map cancels any in-flight
    /// recovery animation.
    pub fn pointer_down(&mut self, view: Point) -> Events {
        self.animator.cancel();
        self.drag = match self.mode {
            Mode::ZoomPan => DragState::Panning {
                anchor: view.to_vec2() - self.viewport.offset(),
                start_view: view,
            },
            Mode::Selection => {
                let world = self.viewport.view_to_world_point(view);
                DragState::RubberBand {
                    start_world: world,
                    current_world: world,
                }
            }
        };
        smallvec![]
    }

    /// Pointer moved to a view-space position.
    ///
    /// While panning this drags the map; while banding it grows the band;
    /// otherwise it drives hover and tooltip state.
    pub fn pointer_move(&mut self, view: Point) -> Events {
        match &mut self.drag {
            DragState::Panning { anchor, .. } => {
                self.viewport.set_offset(view.to_vec2() - *anchor);
                smallvec![EngineEvent::RepaintNeeded]
            }
            DragState::RubberBand { current_world, .. } => {
                *current_world = self.viewport.view_to_world_point(view);
                smallvec![EngineEvent::RepaintNeeded]
            }
            DragState::None => self.update_hover(view),
        }
    }

    /// Pointer released at a view-space position.
    ///
    /// Ends the gesture: a pan that never left the click threshold becomes
    /// a click; a real pan that left no content visible starts the
    /// recovery animation; a rubber band finalizes against the selection
    /// and reverts the mode to [`Mode::ZoomPan`].
    pub fn pointer_up(&mut self, view: Point) -> Events {
        match core::mem::replace(&mut self.drag, DragState::None) {
            DragState::None => smallvec![],
            DragState::Panning { start_view, .. } => {
                let dx = (view.x - start_view.x).abs();
                let dy = (view.y - start_view.y).abs();
                if dx < self.config.click_threshold && dy < self.config.click_threshold {
                    self.handle_click(view)
                } else {
                    self.maybe_start_recovery();
                    smallvec![]
                }
            }
            DragState::RubberBand {
                start_world,
                current_world,
            } => self.finish_rubber_band(start_world, current_world),
        }
    }

    /// Wheel zoom by `factor` around the pointer position.
    pub fn wheel(&mut self, view: Point, factor: f64) -> Events {
        self.animator.cancel();
        let before = self.viewport.clone();
        self.viewport.zoom_about(view, factor);
        if self.viewport == before {
            smallvec![]
        } else {
            smallvec![EngineEvent::RepaintNeeded]
        }
    }

    /// Advances the recovery animation to the host clock `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Events {
        match self.animator.tick(now_ms) {
            Some(offset) => {
                self.viewport.set_offset(offset);
                smallvec![EngineEvent::RepaintNeeded]
            }
            None => smallvec![],
        }
    }

    /// Host response to a [`EngineEvent::QuantityPrompt`].
    ///
    /// Validates `quantity` against the zone's current availability
    /// *before* any mutation; a rejected request changes nothing. A stale
    /// zone id is a silent no-op. On success the zone's first `quantity`
    /// offerable identities (primary first, then non-blocked virtual
    /// slots) join the selection.
    pub fn choose_zone_quantity(
        &mut self,
        zone_object_id: &ObjectId,
        quantity: u32,
    ) -> Result<Events, QuantityError> {
        let Some(object) = self.snapshot.get(zone_object_id).cloned() else {
            return Ok(smallvec![]);
        };
        if object.kind != ObjectKind::SpecialZone || !object.clickable() {
            return Ok(smallvec![]);
        }
        let capacity = object.capacity.unwrap_or(1);
        let available = available_count(&object.id, capacity, |id| self.snapshot.status_of(id));
        if quantity == 0 || quantity > available {
            return Err(QuantityError::OutOfRange {
                requested: quantity,
                available,
            });
        }

        let mut offerable: Vec<ObjectId> = Vec::with_capacity(available as usize);
        for (slot, id) in expand(&object.id, capacity).into_iter().enumerate() {
            let offered = slot == 0
                || matches!(
                    self.snapshot.status_of(&id),
                    SeatStatus::Available | SeatStatus::Reserved
                );
            if offered {
                offerable.push(id);
            }
        }
        offerable.truncate(quantity as usize);
        self.selection.extend_with(offerable);

        Ok(smallvec![
            self.selection_event(),
            EngineEvent::RepaintNeeded,
        ])
    }

    /// Builds the display list for the current state.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let rubber_band = match &self.drag {
            DragState::RubberBand {
                start_world,
                current_world,
            } => Some(Rect::from_points(*start_world, *current_world)),
            _ => None,
        };
        let params = SceneParams {
            selected: self.selection.items(),
            hovered: self.hovered.as_ref(),
            active_prices: self.active_prices.as_ref(),
            rubber_band,
        };
        build_scene(
            &self.snapshot,
            self.viewport.world_to_view_affine(),
            &params,
            &self.config.theme,
        )
    }

    fn filter(&self) -> HitFilter<'_> {
        match &self.active_prices {
            Some(prices) => HitFilter::selectable().with_active_prices(prices),
            None => HitFilter::selectable(),
        }
    }

    fn selection_event(&self) -> EngineEvent {
        EngineEvent::SeatsSelected {
            ids: self.selection.items().to_vec(),
        }
    }

    fn zone_name(&self, object: &MapObject) -> String {
        match &object.zone_id {
            Some(zone_id) => match self.snapshot.zone(zone_id) {
                Some(zone) => zone.name.clone(),
                None => zone_id.as_str().into(),
            },
            None => UNKNOWN_ZONE.into(),
        }
    }

    fn update_hover(&mut self, view: Point) -> Events {
        let world = self.viewport.view_to_world_point(view);
        let hit: Option<MapObject> = {
            let filter = self.filter();
            hit_test(world, self.snapshot.objects(), &filter).cloned()
        };
        match hit {
            Some(object) => {
                let text = parterre_tooltip::resolve(&object, &self.snapshot).to_string();
                let entered = self.hovered.as_ref() != Some(&object.id);
                self.hovered = Some(object.id.clone());
                // The tooltip follows the pointer even within one object;
                // a newer payload simply supersedes the previous one.
                let mut events: Events = smallvec![EngineEvent::Tooltip {
                    x: view.x,
                    y: view.y,
                    text,
                }];
                if entered {
                    events.push(EngineEvent::Cursor {
                        icon: CursorIcon::Pointer,
                    });
                    events.push(EngineEvent::RepaintNeeded);
                }
                events
            }
            None => {
                if self.hovered.take().is_some() {
                    smallvec![
                        EngineEvent::TooltipCleared,
                        EngineEvent::Cursor {
                            icon: CursorIcon::Default,
                        },
                        EngineEvent::RepaintNeeded,
                    ]
                } else {
                    smallvec![]
                }
            }
        }
    }

    fn handle_click(&mut self, view: Point) -> Events {
        let world = self.viewport.view_to_world_point(view);
        let hit: Option<MapObject> = {
            let filter = self.filter();
            hit_test(world, self.snapshot.objects(), &filter).cloned()
        };
        let Some(object) = hit else {
            return smallvec![];
        };
        match object.kind {
            ObjectKind::SpecialZone => {
                let capacity = object.capacity.unwrap_or(1);
                let available =
                    available_count(&object.id, capacity, |id| self.snapshot.status_of(id));
                smallvec![EngineEvent::QuantityPrompt {
                    zone_name: self.zone_name(&object),
                    zone_object_id: object.id,
                    capacity,
                    available,
                    unit_price: object.price,
                }]
            }
            ObjectKind::Seat => {
                self.selection.toggle(object.id.clone());
                smallvec![
                    EngineEvent::SeatClicked { id: object.id },
                    self.selection_event(),
                    EngineEvent::RepaintNeeded,
                ]
            }
            // The selectable filter admits no other kinds.
            _ => smallvec![],
        }
    }

    fn finish_rubber_band(&mut self, start_world: Point, current_world: Point) -> Events {
        let mut events: Events = smallvec![];

        // The gesture is over either way: the mode reverts automatically.
        self.mode = Mode::ZoomPan;
        events.push(EngineEvent::ModeChanged {
            mode: Mode::ZoomPan,
        });

        let start_view = self.viewport.world_to_view_point(start_world);
        let current_view = self.viewport.world_to_view_point(current_world);
        let discarded = (current_view.x - start_view.x).abs() < self.config.click_threshold
            && (current_view.y - start_view.y).abs() < self.config.click_threshold;

        if !discarded {
            let band = Rect::from_points(start_world, current_world);
            let ids: Vec<ObjectId> = {
                let filter = self.filter();
                intersect_rect(band, self.snapshot.objects(), &filter)
                    .into_iter()
                    .map(|object| object.id.clone())
                    .collect()
            };
            let effect = self.selection.apply_rubber_band(&ids);
            if effect != RubberBandEffect::None {
                events.push(self.selection_event());
            }
        }

        // The band preview disappears even when the band was discarded.
        events.push(EngineEvent::RepaintNeeded);
        events
    }

    fn maybe_start_recovery(&mut self) {
        let visible = self.viewport.visible_world_rect();
        let any_visible = self
            .snapshot
            .objects()
            .iter()
            .any(|object| object.bounds.intersect(visible).area() > 0.0);
        if any_visible {
            return;
        }

        let center = visible.center();
        let nearest = self.snapshot.objects().iter().min_by(|a, b| {
            let da = (a.center() - center).hypot2();
            let db = (b.center() - center).hypot2();
            da.partial_cmp(&db).unwrap_or(core::cmp::Ordering::Equal)
        });
        let Some(nearest) = nearest else {
            // Empty map: nothing to return to.
            return;
        };

        let target = self.viewport.view_rect().center().to_vec2()
            - nearest.center().to_vec2() * self.viewport.scale();
        self.animator.start(
            self.viewport.offset(),
            target,
            self.config.recovery_duration_ms,
        );
    }
}
