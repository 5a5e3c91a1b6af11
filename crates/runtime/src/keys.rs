//! Blackboard keys shared by the survivor tree.
//!
//! Every key is registered with its initial value when the agent is built
//! (see [`register_defaults`]), so a missing key inside a tick is a wiring bug.
//!
//! Keys holding `Option<T>` are written by staging conditionals: `Some` is what
//! the conditional found, `None` means the guarded actions have nothing to act on.

use survivor_core::{
    AgentConfig, AgentInfo, EnemyInfo, ExpandingSearch, HouseInfo, ItemInfo, PurgeZoneInfo,
    SteeringOutput, StrafeInfo, Vec2, WorldInfo,
};

use crate::blackboard::{BbKey, Blackboard, BlackboardError};

// ============================================================================
// Per-tick snapshots and output
// ============================================================================

pub const AGENT_INFO: BbKey<AgentInfo> = BbKey::new("AgentInfo");
pub const WORLD_INFO: BbKey<WorldInfo> = BbKey::new("WorldInfo");
pub const STEERING_OUTPUT: BbKey<SteeringOutput> = BbKey::new("SteeringOutput");

/// Point the movement actions steer towards.
pub const TARGET: BbKey<Vec2> = BbKey::new("Target");

/// Run mode for this tick. Cleared at the start of every update.
pub const IS_RUNNING: BbKey<bool> = BbKey::new("IsRunning");

// ============================================================================
// Cross-tick maneuver state
// ============================================================================

pub const STRAFE_INFO: BbKey<StrafeInfo> = BbKey::new("StrafeInfo");
pub const EXPANDING_SEARCH: BbKey<ExpandingSearch> = BbKey::new("ExpandingSquareSearchData");

/// Set when a house was added to the discovered list this tick.
pub const IS_NEW_HOUSE_DISCOVERED: BbKey<bool> = BbKey::new("IsNewHouseDiscovered");
pub const IS_GOING_TO_HOUSE: BbKey<bool> = BbKey::new("IsGoingToHouse");
pub const HOUSE_TARGET: BbKey<Option<HouseInfo>> = BbKey::new("HouseTarget");

pub const ITEM_FETCH_MAX_RANGE: BbKey<f32> = BbKey::new("ItemFetchMaxRange");

// ============================================================================
// Staged by conditionals
// ============================================================================

/// Medkit slot to consume.
pub const MEDKIT_TO_USE: BbKey<Option<usize>> = BbKey::new("MedkitToUse");
/// Food slot to consume.
pub const FOOD_TO_USE: BbKey<Option<usize>> = BbKey::new("FoodToUse");
pub const DANGEROUS_PURGE_ZONE: BbKey<Option<PurgeZoneInfo>> = BbKey::new("DangerousPurgeZone");
/// Nearest visible enemy.
pub const ENEMY_TARGET: BbKey<Option<EnemyInfo>> = BbKey::new("EnemyTarget");
pub const GARBAGE_SEEN: BbKey<Option<ItemInfo>> = BbKey::new("GarbageSeen");
/// Remembered item the agent is walking to.
pub const ITEM_BEING_FETCHED: BbKey<Option<ItemInfo>> = BbKey::new("ItemBeingFetched");
/// House discovered this tick.
pub const NEW_HOUSE: BbKey<Option<HouseInfo>> = BbKey::new("NewHouse");

/// Registers every key with its initial value.
pub fn register_defaults(
    bb: &mut Blackboard,
    config: &AgentConfig,
    agent: AgentInfo,
    world: WorldInfo,
) -> Result<(), BlackboardError> {
    bb.set(AGENT_INFO, agent)?;
    bb.set(WORLD_INFO, world)?;
    bb.set(STEERING_OUTPUT, SteeringOutput::default())?;
    bb.set(TARGET, Vec2::ZERO)?;
    bb.set(IS_RUNNING, false)?;

    bb.set(STRAFE_INFO, StrafeInfo::default())?;
    bb.set(
        EXPANDING_SEARCH,
        ExpandingSearch::new(config.search_leg_distance, Vec2::ZERO),
    )?;
    bb.set(IS_NEW_HOUSE_DISCOVERED, false)?;
    bb.set(IS_GOING_TO_HOUSE, false)?;
    bb.set(HOUSE_TARGET, None)?;
    bb.set(ITEM_FETCH_MAX_RANGE, config.item_fetch_max_range)?;

    bb.set(MEDKIT_TO_USE, None)?;
    bb.set(FOOD_TO_USE, None)?;
    bb.set(DANGEROUS_PURGE_ZONE, None)?;
    bb.set(ENEMY_TARGET, None)?;
    bb.set(GARBAGE_SEEN, None)?;
    bb.set(ITEM_BEING_FETCHED, None)?;
    bb.set(NEW_HOUSE, None)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_register_every_key() {
        let mut bb = Blackboard::new();
        register_defaults(
            &mut bb,
            &AgentConfig::default(),
            AgentInfo::default(),
            WorldInfo::default(),
        )
        .unwrap();

        assert_eq!(bb.len(), 18);
        assert_eq!(bb.get(ITEM_FETCH_MAX_RANGE).copied(), Ok(75.0));
        assert_eq!(bb.get(EXPANDING_SEARCH).map(|s| s.step), Ok(0));
        assert_eq!(bb.get(MEDKIT_TO_USE).copied(), Ok(None));
    }
}
