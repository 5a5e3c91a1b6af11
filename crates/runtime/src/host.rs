//! Boundary with the simulation host.
//!
//! The host owns the world: it answers sensor queries for the current tick and
//! executes the few commands the agent issues (grab, destroy, inventory
//! operations). Everything else the agent does is expressed through the
//! [`SteeringOutput`](survivor_core::SteeringOutput) returned from
//! [`SurvivorAgent::update`](crate::SurvivorAgent::update).
//!
//! Enumeration follows the host's indexing convention: `entity_in_fov(i)` and
//! `house_in_fov(i)` are called with `0, 1, 2, ...` until they return `None`.

use survivor_core::{
    AgentInfo, EnemyInfo, EntityInfo, HouseInfo, ItemInfo, PurgeZoneInfo, Vec2, WorldInfo,
};

use crate::error::HostError;

/// Simulation host driving one survivor agent.
pub trait SurvivalHost {
    // ===== sensors =====

    fn agent_info(&self) -> AgentInfo;

    fn world_info(&self) -> WorldInfo;

    /// Number of inventory slots the host provides.
    fn inventory_capacity(&self) -> usize;

    /// Entity at `index` in the field of view.
    fn entity_in_fov(&self, index: usize) -> Option<EntityInfo>;

    /// House at `index` in the field of view.
    fn house_in_fov(&self, index: usize) -> Option<HouseInfo>;

    fn item_info(&self, entity: &EntityInfo) -> Option<ItemInfo>;

    fn enemy_info(&self, entity: &EntityInfo) -> Option<EnemyInfo>;

    fn purge_zone_info(&self, entity: &EntityInfo) -> Option<PurgeZoneInfo>;

    /// Nearest walkable point towards `target`.
    fn closest_path_point(&self, target: Vec2) -> Vec2;

    /// Health restored by a medkit.
    fn medkit_health(&self, item: &ItemInfo) -> Option<i32>;

    /// Energy restored by a food item.
    fn food_energy(&self, item: &ItemInfo) -> Option<i32>;

    /// Remaining ammunition of a weapon.
    fn weapon_ammo(&self, item: &ItemInfo) -> Option<i32>;

    // ===== commands =====

    /// Picks up `entity`, which must be within grab range.
    fn grab_item(&mut self, entity: &EntityInfo) -> Result<ItemInfo, HostError>;

    fn destroy_item(&mut self, entity: &EntityInfo) -> Result<(), HostError>;

    fn inventory_add(&mut self, slot: usize, item: &ItemInfo) -> Result<(), HostError>;

    /// Uses the item in `slot` once (heal, eat or fire).
    fn inventory_use(&mut self, slot: usize) -> Result<(), HostError>;

    fn inventory_remove(&mut self, slot: usize) -> Result<(), HostError>;
}
