// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical map object.

use kurbo::{Point, Rect};

use crate::shape::Shape;
use crate::types::{ObjectId, ObjectKind, SeatStatus};

/// One renderable/selectable entity on the seat map.
///
/// After the merge step (see [`MapSnapshot`](crate::MapSnapshot)) there is
/// exactly one `MapObject` per id, with `status`, `price`, and `price_id`
/// already resolved from the live session source, the static price
/// assignment, or their defaults, in that priority order. The engine
/// crates never consult any other source.
#[derive(Clone, Debug, PartialEq)]
pub struct MapObject {
    /// Unique id within the map.
    pub id: ObjectId,
    /// Entity kind.
    pub kind: ObjectKind,
    /// Shape geometry, interpreted relative to `bounds`.
    pub shape: Shape,
    /// World-space bounding box. Always present; hit testing and
    /// intersection queries operate on this box alone.
    pub bounds: Rect,
    /// Row number; meaningful only for seats.
    pub row: Option<u32>,
    /// Seat number within the row; meaningful only for seats.
    pub seat_number: Option<u32>,
    /// Weak reference to a [`Zone`](crate::Zone) (lookup-only).
    pub zone_id: Option<ObjectId>,
    /// Capacity; present (and greater than one) only on special zones.
    pub capacity: Option<u32>,
    /// Resolved sale status.
    pub status: SeatStatus,
    /// Resolved numeric price, if any.
    pub price: Option<f64>,
    /// Resolved price id from the assignment table, if any. Used for
    /// active-price-filter membership.
    pub price_id: Option<ObjectId>,
}

impl MapObject {
    /// Creates a seat with the given row/seat coordinates and zone.
    #[must_use]
    pub fn seat(id: &str, bounds: Rect, row: u32, seat_number: u32, zone_id: &str) -> Self {
        Self {
            id: id.into(),
            kind: ObjectKind::Seat,
            shape: Shape::Circle,
            bounds,
            row: Some(row),
            seat_number: Some(seat_number),
            zone_id: Some(zone_id.into()),
            capacity: None,
            status: SeatStatus::Available,
            price: None,
            price_id: None,
        }
    }

    /// Creates a special zone of the given capacity.
    #[must_use]
    pub fn special_zone(id: &str, bounds: Rect, capacity: u32, zone_id: &str) -> Self {
        Self {
            id: id.into(),
            kind: ObjectKind::SpecialZone,
            shape: Shape::Rect { radius: 4.0 },
            bounds,
            row: None,
            seat_number: None,
            zone_id: Some(zone_id.into()),
            capacity: Some(capacity),
            status: SeatStatus::Available,
            price: None,
            price_id: None,
        }
    }

    /// Creates a non-interactive object (scene, decoration, or passage).
    #[must_use]
    pub fn fixture(id: &str, kind: ObjectKind, shape: Shape, bounds: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            shape,
            bounds,
            row: None,
            seat_number: None,
            zone_id: None,
            capacity: None,
            status: SeatStatus::Available,
            price: None,
            price_id: None,
        }
    }

    /// Whether this object reacts to clicks at all.
    ///
    /// Seats are clickable only when row, seat number, and zone are all
    /// present; special zones when the zone is present; everything else
    /// never. Status is deliberately not part of this predicate: a sold
    /// seat is still a *clickable kind* of object, it is merely filtered
    /// out of hit results by eligibility (see `parterre_hit`).
    #[must_use]
    pub fn clickable(&self) -> bool {
        match self.kind {
            ObjectKind::Seat => {
                self.row.is_some() && self.seat_number.is_some() && self.zone_id.is_some()
            }
            ObjectKind::SpecialZone => self.zone_id.is_some(),
            ObjectKind::Scene | ObjectKind::Decoration | ObjectKind::Passage => false,
        }
    }

    /// Center of the bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Area of the bounding box; the paint-order sort key.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.bounds.area()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_clickability_requires_row_seat_and_zone() {
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        let seat = MapObject::seat("s1", b, 1, 2, "z1");
        assert!(seat.clickable());

        let mut no_row = seat.clone();
        no_row.row = None;
        assert!(!no_row.clickable());

        let mut no_zone = seat.clone();
        no_zone.zone_id = None;
        assert!(!no_zone.clickable());
    }

    #[test]
    fn special_zone_clickability_requires_zone() {
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        let zone = MapObject::special_zone("sz1", b, 5, "z1");
        assert!(zone.clickable());

        let mut orphan = zone.clone();
        orphan.zone_id = None;
        assert!(!orphan.clickable());
    }

    #[test]
    fn fixtures_are_never_clickable() {
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        for kind in [ObjectKind::Scene, ObjectKind::Decoration, ObjectKind::Passage] {
            let fixture = MapObject::fixture("f", kind, Shape::Rect { radius: 0.0 }, b);
            assert!(!fixture.clickable());
        }
    }

    #[test]
    fn sold_seat_is_still_a_clickable_kind() {
        let b = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut seat = MapObject::seat("s1", b, 1, 1, "z1");
        seat.status = SeatStatus::Sold;
        assert!(seat.clickable());
    }
}
