//! Evaluation context handed to every node of the survivor tree.
//!
//! [`AgentContext`] plays the blackboard role for the tree. It bundles:
//!
//! - the host, for sensor queries and commands
//! - the typed [`Blackboard`] holding per-tick snapshots, staged values and
//!   cross-tick maneuver state
//! - the collections the blackboard entries conceptually point at (this tick's
//!   [`Perception`], the [`Inventory`] mirror, [`ItemMemory`] and
//!   [`DiscoveredHouses`]), owned here so nodes borrow them for the duration of
//!   one tick instead of holding handles across ticks.

use survivor_core::{AgentConfig, AgentInfo, DiscoveredHouses, Inventory, ItemMemory};
use tracing::warn;

use crate::blackboard::{BbKey, Blackboard, BlackboardError};
use crate::host::SurvivalHost;
use crate::keys;
use crate::perception::Perception;

pub struct AgentContext<H> {
    pub host: H,
    pub config: AgentConfig,
    pub blackboard: Blackboard,
    pub perception: Perception,
    pub inventory: Inventory,
    pub memory: ItemMemory,
    pub houses: DiscoveredHouses,
}

impl<H: SurvivalHost> AgentContext<H> {
    pub fn new(host: H, config: AgentConfig, inventory: Inventory, blackboard: Blackboard) -> Self {
        Self {
            host,
            config,
            blackboard,
            perception: Perception::default(),
            inventory,
            memory: ItemMemory::new(),
            houses: DiscoveredHouses::new(),
        }
    }

    /// Copies the value under `key`.
    pub fn get<T: Clone + 'static>(&self, key: BbKey<T>) -> Result<T, BlackboardError> {
        self.blackboard.get(key).cloned()
    }

    pub fn set<T: 'static>(&mut self, key: BbKey<T>, value: T) -> Result<(), BlackboardError> {
        self.blackboard.set(key, value)
    }

    /// Writes `value`, logging instead of failing.
    ///
    /// Used outside the tree where there is no node to fail.
    pub fn put<T: 'static>(&mut self, key: BbKey<T>, value: T) {
        if let Err(err) = self.blackboard.set(key, value) {
            warn!(error = %err, "blackboard write dropped");
        }
    }

    /// This tick's agent snapshot.
    pub fn agent(&self) -> Result<AgentInfo, BlackboardError> {
        self.get(keys::AGENT_INFO)
    }
}

impl<H> std::fmt::Debug for AgentContext<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentContext")
            .field("blackboard", &self.blackboard)
            .field("perception", &self.perception)
            .field("inventory", &self.inventory)
            .field("memory", &self.memory)
            .field("houses", &self.houses)
            .finish_non_exhaustive()
    }
}
