//! Error types for domain state validation.
//!
//! These never escape a tick: the policy layer logs them and turns them into a
//! `Failure` of the node that hit them.

use thiserror::Error;

use crate::entity::ItemKind;

/// Inventory bookkeeping errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("{kind} items cannot be stored in the inventory")]
    NotStorable { kind: ItemKind },

    #[error("no free {kind} slot ({max} of {max} in use)")]
    RegionFull { kind: ItemKind, max: usize },

    #[error("slot {slot} is outside the {kind} region")]
    SlotOutsideRegion { slot: usize, kind: ItemKind },

    #[error("slot {slot} is empty")]
    EmptySlot { slot: usize },

    #[error("regions need {required} slots but the host only has {capacity}")]
    CapacityTooSmall { required: usize, capacity: usize },
}
