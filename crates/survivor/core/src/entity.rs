//! Descriptors of sensed objects, as reported by the host.
//!
//! Identity is carried by [`EntityHash`]. "Nothing there" is always expressed
//! as `Option::None`, never as a zero hash.

use strum::Display;

use crate::math::Vec2;

/// Host-assigned identity of a sensed object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityHash(pub u64);

/// Broad category of an entity in the field of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Item,
    Enemy,
    PurgeZone,
}

/// Entity handle enumerated from the field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityInfo {
    pub kind: EntityKind,
    pub location: Vec2,
    pub hash: EntityHash,
}

/// Item category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    Pistol,
    Medkit,
    Food,
    Garbage,
}

impl ItemKind {
    /// Whether the item can be kept in the inventory.
    pub const fn is_storable(self) -> bool {
        !matches!(self, ItemKind::Garbage)
    }
}

/// Detailed item descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInfo {
    pub kind: ItemKind,
    pub location: Vec2,
    pub hash: EntityHash,
}

impl ItemInfo {
    pub fn new(kind: ItemKind, location: Vec2, hash: EntityHash) -> Self {
        Self {
            kind,
            location,
            hash,
        }
    }
}

/// Detailed enemy descriptor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyInfo {
    pub location: Vec2,
    pub hash: EntityHash,
    pub health: i32,
    pub size: f32,
}

/// Hazardous circular area.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurgeZoneInfo {
    pub center: Vec2,
    pub radius: f32,
    pub hash: EntityHash,
}

impl PurgeZoneInfo {
    /// Whether `point` lies strictly inside the zone.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }
}

/// A house seen in the field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HouseInfo {
    pub center: Vec2,
    pub size: Vec2,
}

impl HouseInfo {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }
}
