//! Region-partitioned inventory bookkeeping.
//!
//! The host inventory is a flat slot array. The agent partitions it into three
//! contiguous regions, in order: guns, medkits, food. Each region has its own
//! maximum, and a slot's region is a pure function of the cumulative sizes.
//!
//! ```text
//! slot:   0     1     2      3      4     5 ...
//!        [gun] [gun] [med]  [med]  [food] (unused)
//! ```

use core::ops::Range;

use crate::entity::{ItemInfo, ItemKind};
use crate::error::InventoryError;

/// Per-region maxima.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryLimits {
    pub guns: usize,
    pub medkits: usize,
    pub food: usize,
}

impl InventoryLimits {
    pub const fn total(&self) -> usize {
        self.guns + self.medkits + self.food
    }
}

impl Default for InventoryLimits {
    fn default() -> Self {
        Self {
            guns: 2,
            medkits: 2,
            food: 1,
        }
    }
}

/// Slot array mirrored from the host, plus live per-region counts.
///
/// Invariant: for each region, `count(kind) <= max(kind)` and `count(kind)`
/// equals the number of occupied slots in that region.
#[derive(Clone, Debug, PartialEq)]
pub struct Inventory {
    limits: InventoryLimits,
    counts: [usize; 3],
    slots: Vec<Option<ItemInfo>>,
}

impl Inventory {
    /// Creates an empty inventory over `capacity` host slots.
    pub fn new(limits: InventoryLimits, capacity: usize) -> Result<Self, InventoryError> {
        if limits.total() > capacity {
            return Err(InventoryError::CapacityTooSmall {
                required: limits.total(),
                capacity,
            });
        }

        Ok(Self {
            limits,
            counts: [0; 3],
            slots: vec![None; capacity],
        })
    }

    pub fn limits(&self) -> InventoryLimits {
        self.limits
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot range reserved for `kind`, or `None` for items that are never stored.
    pub fn region(&self, kind: ItemKind) -> Option<Range<usize>> {
        let InventoryLimits {
            guns,
            medkits,
            food,
        } = self.limits;
        match kind {
            ItemKind::Pistol => Some(0..guns),
            ItemKind::Medkit => Some(guns..guns + medkits),
            ItemKind::Food => Some(guns + medkits..guns + medkits + food),
            ItemKind::Garbage => None,
        }
    }

    pub fn max(&self, kind: ItemKind) -> usize {
        self.region(kind).map_or(0, |range| range.len())
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        region_index(kind).map_or(0, |index| self.counts[index])
    }

    /// Whether a region still has room for `kind`.
    pub fn needs(&self, kind: ItemKind) -> bool {
        kind.is_storable() && self.count(kind) < self.max(kind)
    }

    pub fn needs_any(&self) -> bool {
        [ItemKind::Pistol, ItemKind::Medkit, ItemKind::Food]
            .into_iter()
            .any(|kind| self.needs(kind))
    }

    pub fn is_armed(&self) -> bool {
        self.count(ItemKind::Pistol) > 0
    }

    pub fn slot(&self, index: usize) -> Option<&ItemInfo> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Occupied slots of a region, in slot order.
    pub fn occupied(&self, kind: ItemKind) -> impl Iterator<Item = (usize, &ItemInfo)> + '_ {
        self.region(kind)
            .unwrap_or(0..0)
            .filter_map(move |index| self.slot(index).map(|item| (index, item)))
    }

    /// Lowest free slot of the region for `kind`.
    pub fn first_free_slot(&self, kind: ItemKind) -> Result<usize, InventoryError> {
        let region = self
            .region(kind)
            .ok_or(InventoryError::NotStorable { kind })?;
        let max = region.len();
        region
            .into_iter()
            .find(|&index| self.slots[index].is_none())
            .ok_or(InventoryError::RegionFull { kind, max })
    }

    /// Stores `item` in the first free slot of its region and returns that slot.
    pub fn store(&mut self, item: ItemInfo) -> Result<usize, InventoryError> {
        let slot = self.first_free_slot(item.kind)?;
        self.put(slot, item)?;
        Ok(slot)
    }

    /// Stores `item` at a specific slot of its region.
    pub fn put(&mut self, slot: usize, item: ItemInfo) -> Result<(), InventoryError> {
        let kind = item.kind;
        self.check_region(slot, kind)?;
        if self.slots[slot].is_some() {
            return Err(InventoryError::RegionFull {
                kind,
                max: self.max(kind),
            });
        }

        self.slots[slot] = Some(item);
        if let Some(index) = region_index(kind) {
            self.counts[index] += 1;
        }
        Ok(())
    }

    /// Empties `slot`, which must belong to the region for `kind`.
    pub fn take(&mut self, kind: ItemKind, slot: usize) -> Result<ItemInfo, InventoryError> {
        self.check_region(slot, kind)?;
        let item = self.slots[slot]
            .take()
            .ok_or(InventoryError::EmptySlot { slot })?;
        if let Some(index) = region_index(kind) {
            self.counts[index] -= 1;
        }
        Ok(item)
    }

    fn check_region(&self, slot: usize, kind: ItemKind) -> Result<(), InventoryError> {
        let region = self
            .region(kind)
            .ok_or(InventoryError::NotStorable { kind })?;
        if region.contains(&slot) {
            Ok(())
        } else {
            Err(InventoryError::SlotOutsideRegion { slot, kind })
        }
    }
}

const fn region_index(kind: ItemKind) -> Option<usize> {
    match kind {
        ItemKind::Pistol => Some(0),
        ItemKind::Medkit => Some(1),
        ItemKind::Food => Some(2),
        ItemKind::Garbage => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityHash;
    use crate::math::Vec2;
    use proptest::prelude::*;

    fn item(kind: ItemKind, hash: u64) -> ItemInfo {
        ItemInfo::new(kind, Vec2::new(hash as f32, 0.0), EntityHash(hash))
    }

    fn inventory() -> Inventory {
        Inventory::new(InventoryLimits::default(), 5).expect("default limits fit 5 slots")
    }

    #[test]
    fn regions_are_contiguous() {
        let inv = inventory();
        assert_eq!(inv.region(ItemKind::Pistol), Some(0..2));
        assert_eq!(inv.region(ItemKind::Medkit), Some(2..4));
        assert_eq!(inv.region(ItemKind::Food), Some(4..5));
        assert_eq!(inv.region(ItemKind::Garbage), None);
    }

    #[test]
    fn capacity_must_cover_limits() {
        let err = Inventory::new(InventoryLimits::default(), 4).unwrap_err();
        assert_eq!(
            err,
            InventoryError::CapacityTooSmall {
                required: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn store_rejects_full_region() {
        let mut inv = inventory();
        assert_eq!(inv.store(item(ItemKind::Food, 1)), Ok(4));
        assert!(!inv.needs(ItemKind::Food));
        assert_eq!(
            inv.store(item(ItemKind::Food, 2)),
            Err(InventoryError::RegionFull {
                kind: ItemKind::Food,
                max: 1
            })
        );
    }

    #[test]
    fn store_reuses_freed_slot() {
        let mut inv = inventory();
        assert_eq!(inv.store(item(ItemKind::Pistol, 1)), Ok(0));
        assert_eq!(inv.store(item(ItemKind::Pistol, 2)), Ok(1));
        inv.take(ItemKind::Pistol, 0).expect("slot 0 holds a pistol");
        assert_eq!(inv.store(item(ItemKind::Pistol, 3)), Ok(0));
        assert_eq!(inv.count(ItemKind::Pistol), 2);
    }

    #[test]
    fn take_checks_region_and_occupancy() {
        let mut inv = inventory();
        inv.store(item(ItemKind::Medkit, 1)).expect("room for a medkit");
        assert_eq!(
            inv.take(ItemKind::Medkit, 0),
            Err(InventoryError::SlotOutsideRegion {
                slot: 0,
                kind: ItemKind::Medkit
            })
        );
        assert_eq!(
            inv.take(ItemKind::Medkit, 3),
            Err(InventoryError::EmptySlot { slot: 3 })
        );
        assert!(inv.take(ItemKind::Medkit, 2).is_ok());
        assert_eq!(inv.count(ItemKind::Medkit), 0);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Store(ItemKind),
        Take(ItemKind, usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        let kind = prop_oneof![
            Just(ItemKind::Pistol),
            Just(ItemKind::Medkit),
            Just(ItemKind::Food),
            Just(ItemKind::Garbage),
        ];
        prop_oneof![
            kind.clone().prop_map(Op::Store),
            (kind, 0usize..8).prop_map(|(k, slot)| Op::Take(k, slot)),
        ]
    }

    proptest! {
        #[test]
        fn counts_never_exceed_limits(ops in prop::collection::vec(op(), 0..64)) {
            let mut inv = Inventory::new(InventoryLimits::default(), 8).unwrap();
            for (hash, op) in ops.into_iter().enumerate() {
                match op {
                    Op::Store(kind) => {
                        if let Ok(slot) = inv.store(item(kind, hash as u64)) {
                            prop_assert!(inv.region(kind).unwrap().contains(&slot));
                        }
                    }
                    Op::Take(kind, slot) => {
                        let _ = inv.take(kind, slot);
                    }
                }

                for kind in [ItemKind::Pistol, ItemKind::Medkit, ItemKind::Food] {
                    prop_assert!(inv.count(kind) <= inv.max(kind));
                    prop_assert_eq!(inv.count(kind), inv.occupied(kind).count());
                    for (_, stored) in inv.occupied(kind) {
                        prop_assert_eq!(stored.kind, kind);
                    }
                }
                for slot in inv.limits().total()..inv.capacity() {
                    prop_assert!(inv.slot(slot).is_none());
                }
            }
        }
    }
}
