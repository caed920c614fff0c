// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events the engine reports back to its host, and boundary errors.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use parterre_model::ObjectId;
use smallvec::SmallVec;

/// Interaction mode of the engine.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Dragging pans, the wheel zooms, clicks select single objects.
    #[default]
    ZoomPan,
    /// Dragging draws a rubber-band selection rectangle. Reverts to
    /// [`Mode::ZoomPan`] when the band finishes.
    Selection,
}

/// Pointer cursor the host should display.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CursorIcon {
    /// The host's default cursor.
    #[default]
    Default,
    /// Pointing hand over an interactive object.
    Pointer,
}

/// Buffer of events produced by one engine call.
///
/// Most calls emit zero to three events; the inline capacity keeps the
/// per-gesture path allocation-free.
pub type Events = SmallVec<[EngineEvent; 4]>;

/// Outbound notification from the engine to its host.
///
/// The engine owns no UI: tooltips, quantity selectors, and cursors are
/// all rendered by the host in response to these events. A newer hover or
/// tooltip event supersedes the previous one: last write wins, there is
/// nothing to cancel.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    /// A clickable seat was clicked (its selection membership toggled).
    SeatClicked {
        /// The seat's id.
        id: ObjectId,
    },
    /// The selection changed; carries the full new selection.
    SeatsSelected {
        /// Selected ids in insertion order.
        ids: Vec<ObjectId>,
    },
    /// The interaction mode changed.
    ModeChanged {
        /// The new mode.
        mode: Mode,
    },
    /// A special zone was clicked: the host should present a quantity
    /// selector and answer via `SeatMapEngine::choose_zone_quantity`.
    QuantityPrompt {
        /// The special-zone object id.
        zone_object_id: ObjectId,
        /// Display name of the zone (already fallback-resolved).
        zone_name: String,
        /// Total capacity of the zone.
        capacity: u32,
        /// Identities currently offered (see `parterre_capacity`).
        available: u32,
        /// Price per identity, if assigned.
        unit_price: Option<f64>,
    },
    /// Hover tooltip content at a view-space position.
    Tooltip {
        /// View-space x of the pointer.
        x: f64,
        /// View-space y of the pointer.
        y: f64,
        /// Pre-formatted tooltip text (newline-separated lines).
        text: String,
    },
    /// The pointer left all interactive objects; hide the tooltip.
    TooltipCleared,
    /// The host should switch the pointer cursor.
    Cursor {
        /// Cursor to display.
        icon: CursorIcon,
    },
    /// Visual state changed; the host should rebuild and repaint the scene.
    ///
    /// Repaints are total; there is no partial invalidation.
    RepaintNeeded,
}

/// Rejection of a quantity-selector response.
///
/// Raised at the boundary, before any selection mutation: no partial
/// expansion ever happens.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum QuantityError {
    /// The requested quantity is outside `1..=available`.
    OutOfRange {
        /// The rejected quantity.
        requested: u32,
        /// Identities currently offered for the zone.
        available: u32,
    },
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                requested,
                available,
            } => write!(
                f,
                "quantity {requested} is outside the available range 1..={available}"
            ),
        }
    }
}

impl core::error::Error for QuantityError {}
