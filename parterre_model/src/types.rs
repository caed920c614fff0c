// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifier and lookup-table types shared across the workspace.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

/// Identifier for a map object, zone, or price.
///
/// Ids are opaque strings unique within one map. The wrapper is cheap to
/// clone (`Arc<str>` inside) because ids travel through selections, events,
/// and lookup tables constantly while the underlying text never changes.
///
/// Virtual seat identities derived from special zones (see the
/// `parterre_capacity` crate) are ordinary `ObjectId`s; nothing in this type
/// distinguishes them from stored ids.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObjectId(Arc<str>);

impl ObjectId {
    /// Creates an id from a string slice.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(Arc::from(id))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(Arc::from(id.as_str()))
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kind of a renderable/selectable map entity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ObjectKind {
    /// An individually addressable seat.
    Seat,
    /// A single geometric object standing in for a block of `capacity`
    /// interchangeable seats with no individual geometry.
    SpecialZone,
    /// Stage/scene marker.
    Scene,
    /// Decorative element (pillars, labels, artwork).
    Decoration,
    /// Walkable passage between seating blocks.
    Passage,
}

/// Sale status of a seat or virtual seat identity.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SeatStatus {
    /// Offered for sale.
    #[default]
    Available,
    /// Held by an in-progress order.
    Reserved,
    /// Sold.
    Sold,
    /// Administratively locked.
    Locked,
}

impl SeatStatus {
    /// Returns `true` when the status blocks hover and selection.
    ///
    /// Reserved, sold, and locked objects are never hoverable or selectable
    /// regardless of geometry.
    #[must_use]
    pub fn blocks_interaction(self) -> bool {
        !matches!(self, Self::Available)
    }
}

/// A named grouping of map objects.
///
/// Many [`MapObject`](crate::MapObject)s reference one `Zone` by id; the
/// reference is lookup-only (no ownership).
#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    /// Zone id, referenced by `MapObject::zone_id`.
    pub id: ObjectId,
    /// Human-readable display name.
    pub name: String,
    /// Optional display color.
    pub color: Option<peniko::Color>,
}

impl Zone {
    /// Creates a zone with no display color.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }
}

/// A price record from the pricing table.
#[derive(Clone, Debug, PartialEq)]
pub struct Price {
    /// Price id, referenced by [`PriceAssignment`].
    pub id: ObjectId,
    /// Numeric value in the venue currency's minor-free unit.
    pub value: f64,
    /// ISO currency code, e.g. `"KZT"`.
    pub currency: String,
    /// Optional display color overriding the derived palette color.
    pub color: Option<peniko::Color>,
    /// Human-readable price name.
    pub name: String,
}

/// Links one seat (or virtual seat identity) to one price.
///
/// A seat has zero or one assignment at a time; re-assigning replaces the
/// previous link. Assignments are independent of map-object lifetime, so an
/// assignment may reference an id that no longer exists; such entries are
/// skipped by the merge step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceAssignment {
    /// Seat or virtual seat id.
    pub seat_id: ObjectId,
    /// Assigned price id.
    pub price_id: ObjectId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_roundtrips_and_compares() {
        let a = ObjectId::new("seat-1");
        let b: ObjectId = "seat-1".into();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "seat-1");
        assert_eq!(alloc::format!("{a}"), "seat-1");
    }

    #[test]
    fn default_status_is_available() {
        assert_eq!(SeatStatus::default(), SeatStatus::Available);
        assert!(!SeatStatus::Available.blocks_interaction());
        assert!(SeatStatus::Reserved.blocks_interaction());
        assert!(SeatStatus::Sold.blocks_interaction());
        assert!(SeatStatus::Locked.blocks_interaction());
    }
}
