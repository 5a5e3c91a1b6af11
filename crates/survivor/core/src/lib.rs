//! Domain model for the survivor agent.
//!
//! Pure data and algorithms with no knowledge of the behavior tree or the host:
//! - [`agent`]: per-tick vitals, world bounds and the steering record
//! - [`entity`]: descriptors of sensed items, enemies, purge zones and houses
//! - [`inventory`]: region-partitioned slot bookkeeping
//! - [`memory`]: remembered items and discovered houses
//! - [`search`]: the expanding square exploration walk
//! - [`strafe`]: evasive 180° turn state
//! - [`math`]: minimal planar vector and angle helpers

pub mod agent;
pub mod config;
pub mod entity;
pub mod error;
pub mod inventory;
pub mod math;
pub mod memory;
pub mod search;
pub mod strafe;

pub use agent::{AgentInfo, SteeringOutput, WorldInfo};
pub use config::AgentConfig;
pub use entity::{
    EnemyInfo, EntityHash, EntityInfo, EntityKind, HouseInfo, ItemInfo, ItemKind, PurgeZoneInfo,
};
pub use error::InventoryError;
pub use inventory::{Inventory, InventoryLimits};
pub use math::{Vec2, angle_delta, bearing, wrap_angle};
pub use memory::{DiscoveredHouses, ItemMemory};
pub use search::{Direction, ExpandingSearch};
pub use strafe::StrafeInfo;
