//! Long-lived memory: remembered items and discovered houses.

use crate::entity::{HouseInfo, ItemInfo};
use crate::math::Vec2;

/// Items seen but not yet collected.
///
/// Unordered by contract; entries are identified by location.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemMemory {
    items: Vec<ItemInfo>,
}

impl ItemMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemInfo> {
        self.items.iter()
    }

    pub fn contains_location(&self, location: Vec2) -> bool {
        self.items.iter().any(|item| item.location == location)
    }

    /// Adds `item` unless an item at the same location is already known.
    ///
    /// Returns `true` if the item was new.
    pub fn remember(&mut self, item: ItemInfo) -> bool {
        if self.contains_location(item.location) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Drops the item at `location` (swap-remove, order not preserved).
    pub fn forget(&mut self, location: Vec2) -> Option<ItemInfo> {
        let index = self
            .items
            .iter()
            .position(|item| item.location == location)?;
        Some(self.items.swap_remove(index))
    }

    /// Closest remembered item accepted by `filter` within `max_range` of `from`.
    pub fn closest_within<F>(&self, from: Vec2, max_range: f32, filter: F) -> Option<ItemInfo>
    where
        F: Fn(&ItemInfo) -> bool,
    {
        let max_sq = max_range * max_range;
        self.items
            .iter()
            .filter(|&item| filter(item))
            .map(|item| (item.location.distance_squared(from), item))
            .filter(|(distance_sq, _)| *distance_sq <= max_sq)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, item)| *item)
    }
}

/// Distinct houses in discovery order plus the patrol cursor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscoveredHouses {
    houses: Vec<HouseInfo>,
    patrol_index: usize,
}

impl DiscoveredHouses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.houses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HouseInfo> {
        self.houses.iter()
    }

    /// Appends `house` unless one with the same center and size is known.
    ///
    /// Returns `true` if the house was new.
    pub fn add_if_new(&mut self, house: HouseInfo) -> bool {
        let known = self
            .houses
            .iter()
            .any(|h| h.center == house.center && h.size == house.size);
        if known {
            return false;
        }
        self.houses.push(house);
        true
    }

    /// Most recently discovered house.
    pub fn latest(&self) -> Option<&HouseInfo> {
        self.houses.last()
    }

    pub fn patrol_index(&self) -> usize {
        self.patrol_index
    }

    /// Current patrol house; the cursor moves to the next house (wrapping)
    /// once `position` is within `arrive_margin_sq` of the current one.
    pub fn patrol_target(&mut self, position: Vec2, arrive_margin_sq: f32) -> Option<HouseInfo> {
        if self.houses.is_empty() {
            return None;
        }

        self.patrol_index %= self.houses.len();
        let current = self.houses[self.patrol_index];
        if current.center.distance_squared(position) < arrive_margin_sq {
            self.patrol_index = (self.patrol_index + 1) % self.houses.len();
        }
        Some(self.houses[self.patrol_index])
    }
}
