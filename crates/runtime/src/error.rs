//! Error types surfaced by the agent runtime.
//!
//! Inside a tick every error is turned into a `Failure` status by the leaf that
//! hit it; these types only escape at construction time or from the host.
use survivor_core::{EntityHash, InventoryError};
use thiserror::Error;

use crate::blackboard::BlackboardError;

pub type Result<T> = std::result::Result<T, AgentError>;

/// Rejections reported by a [`crate::SurvivalHost`] command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("entity {hash:?} is not in the field of view")]
    UnknownEntity { hash: EntityHash },

    #[error("entity {hash:?} is out of grab range")]
    OutOfGrabRange { hash: EntityHash },

    #[error("entity {hash:?} is not an item")]
    NotAnItem { hash: EntityHash },

    #[error("inventory slot {slot} does not exist")]
    InvalidSlot { slot: usize },

    #[error("inventory slot {slot} is empty")]
    EmptySlot { slot: usize },

    #[error("inventory slot {slot} is already occupied")]
    SlotOccupied { slot: usize },

    #[error("inventory slot {slot} is locked")]
    SlotLocked { slot: usize },
}

/// Failures while building or driving a [`crate::SurvivorAgent`].
#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Blackboard(#[from] BlackboardError),

    #[error(transparent)]
    Host(#[from] HostError),
}
