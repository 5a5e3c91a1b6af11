//! Predicates and staging probes.
//!
//! Predicates ([`Check`](super::Check)) answer yes/no. Probes
//! ([`Probe`](super::Probe)) look something up for the actions that follow
//! them; the [`staged`](super::staged) adapter stores the result under the
//! matching key. Probes never write to the context themselves.

use survivor_core::{EnemyInfo, HouseInfo, ItemInfo, ItemKind, PurgeZoneInfo};

use crate::context::AgentContext;
use crate::error::Result;
use crate::host::SurvivalHost;
use crate::keys;

/// Vitals closer than this to their maximum count as full.
const VITALS_EPSILON: f32 = 0.0001;

// ============================================================================
// Survival
// ============================================================================

pub fn is_hurt<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    let agent = ctx.agent()?;
    Ok(ctx.config.max_health - agent.health > VITALS_EPSILON)
}

pub fn is_hungry<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    let agent = ctx.agent()?;
    Ok(ctx.config.max_energy - agent.energy > VITALS_EPSILON)
}

/// First medkit slot, in slot order, whose heal is smaller than the damage taken.
///
/// A medkit that would heal the whole deficit (or more) is kept for later.
pub fn medkit_to_use<H: SurvivalHost>(ctx: &AgentContext<H>) -> Result<Option<usize>> {
    let agent = ctx.agent()?;
    let deficit = ctx.config.max_health - agent.health;
    Ok(first_under_restoring(ctx, ItemKind::Medkit, deficit, |host, item| {
        host.medkit_health(item)
    }))
}

/// Food counterpart of [`medkit_to_use`].
pub fn food_to_use<H: SurvivalHost>(ctx: &AgentContext<H>) -> Result<Option<usize>> {
    let agent = ctx.agent()?;
    let deficit = ctx.config.max_energy - agent.energy;
    Ok(first_under_restoring(ctx, ItemKind::Food, deficit, |host, item| {
        host.food_energy(item)
    }))
}

fn first_under_restoring<H, F>(
    ctx: &AgentContext<H>,
    kind: ItemKind,
    deficit: f32,
    restores: F,
) -> Option<usize>
where
    H: SurvivalHost,
    F: Fn(&H, &ItemInfo) -> Option<i32>,
{
    ctx.inventory
        .occupied(kind)
        .find(|&(_, item)| restores(&ctx.host, item).is_some_and(|amount| (amount as f32) < deficit))
        .map(|(slot, _)| slot)
}

pub fn dangerous_purge_zone<H: SurvivalHost>(ctx: &AgentContext<H>) -> Result<Option<PurgeZoneInfo>> {
    let agent = ctx.agent()?;
    Ok(ctx.perception.zone_containing(agent.position))
}

// ============================================================================
// Combat
// ============================================================================

pub fn nearest_enemy<H: SurvivalHost>(ctx: &AgentContext<H>) -> Result<Option<EnemyInfo>> {
    let agent = ctx.agent()?;
    Ok(ctx.perception.nearest_enemy(agent.position))
}

pub fn sees_enemy<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    Ok(!ctx.perception.enemies.is_empty())
}

pub fn is_armed<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    Ok(ctx.inventory.is_armed())
}

/// Whether the heading points at the staged enemy.
///
/// Compares `|dot(heading, to_enemy) - 1|` against a tolerance that is looser
/// within two thirds of the FOV range, where the angle swings quickly.
pub fn is_facing_enemy<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    let Some(enemy) = ctx.get(keys::ENEMY_TARGET)? else {
        return Ok(false);
    };
    let agent = ctx.agent()?;

    let to_enemy = (enemy.location - agent.position).normalized();
    let dot = agent.heading().dot(to_enemy);

    let near_range = agent.fov_range * 2.0 / 3.0;
    let tolerance = if agent.position.distance_squared(enemy.location) > near_range * near_range {
        ctx.config.facing_tolerance_far
    } else {
        ctx.config.facing_tolerance_near
    };

    Ok((dot - 1.0).abs() < tolerance)
}

pub fn is_strafing<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    Ok(ctx.get(keys::STRAFE_INFO)?.active)
}

pub fn was_bitten<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    Ok(ctx.agent()?.was_bitten)
}

// ============================================================================
// Looting
// ============================================================================

pub fn sees_item<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    Ok(!ctx.perception.items.is_empty())
}

/// First visible garbage item.
pub fn garbage_seen<H: SurvivalHost>(ctx: &AgentContext<H>) -> Result<Option<ItemInfo>> {
    Ok(ctx
        .perception
        .item_details(&ctx.host)
        .map(|(_, item)| item)
        .find(|item| item.kind == ItemKind::Garbage))
}

pub fn garbage_in_grab_range<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    let Some(garbage) = ctx.get(keys::GARBAGE_SEEN)? else {
        return Ok(false);
    };
    Ok(ctx.agent()?.can_grab(garbage.location))
}

pub fn needs_item<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    Ok(ctx.inventory.needs_any())
}

/// Closest remembered item of a needed kind within the fetch range.
pub fn item_to_fetch<H: SurvivalHost>(ctx: &AgentContext<H>) -> Result<Option<ItemInfo>> {
    let agent = ctx.agent()?;
    let max_range = ctx.get(keys::ITEM_FETCH_MAX_RANGE)?;
    Ok(ctx
        .memory
        .closest_within(agent.position, max_range, |item| ctx.inventory.needs(item.kind)))
}

// ============================================================================
// Exploration
// ============================================================================

/// Whether a house visit is in progress.
///
/// Also points [`TARGET`](keys::TARGET) at the house and ends the visit once
/// the agent reaches its center; the tick that arrives still counts as going.
pub fn is_going_to_house<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    if !ctx.get(keys::IS_GOING_TO_HOUSE)? {
        return Ok(false);
    }
    let Some(house) = ctx.get(keys::HOUSE_TARGET)? else {
        ctx.set(keys::IS_GOING_TO_HOUSE, false)?;
        return Ok(false);
    };

    let agent = ctx.agent()?;
    if agent.position.distance_squared(house.center) < ctx.config.house_arrive_margin_sq {
        ctx.set(keys::IS_GOING_TO_HOUSE, false)?;
    }
    ctx.set(keys::TARGET, house.center)?;
    Ok(true)
}

/// House discovered during this tick, if any.
pub fn new_house<H: SurvivalHost>(ctx: &AgentContext<H>) -> Result<Option<HouseInfo>> {
    if !ctx.get(keys::IS_NEW_HOUSE_DISCOVERED)? {
        return Ok(None);
    }
    Ok(ctx.houses.latest().copied())
}

/// Exploration ends once the search waypoint leaves the world bounds.
pub fn is_done_exploring<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<bool> {
    let search = ctx.get(keys::EXPANDING_SEARCH)?;
    let world = ctx.get(keys::WORLD_INFO)?;
    Ok(search.is_exhausted(&world))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::test_support;
    use survivor_core::{AgentInfo, EnemyInfo, EntityHash, Vec2};

    fn hurt_agent(health: f32) -> AgentInfo {
        AgentInfo {
            health,
            energy: 10.0,
            fov_range: 30.0,
            ..AgentInfo::default()
        }
    }

    #[test]
    fn medkit_prefers_first_under_healing_slot() {
        let mut ctx = test_support::context(hurt_agent(5.0));
        let three = ctx.host.stock_medkit(3);
        let seven = ctx.host.stock_medkit(7);
        let slot_of_three = ctx.inventory.store(three).unwrap();
        ctx.inventory.store(seven).unwrap();

        assert!(is_hurt(&mut ctx).unwrap());
        assert_eq!(medkit_to_use(&ctx).unwrap(), Some(slot_of_three));
    }

    #[test]
    fn medkit_covering_the_deficit_is_kept() {
        let mut ctx = test_support::context(hurt_agent(8.0));
        let big = ctx.host.stock_medkit(7);
        ctx.inventory.store(big).unwrap();

        assert_eq!(medkit_to_use(&ctx).unwrap(), None);
    }

    #[test]
    fn full_health_is_not_hurt() {
        let mut ctx = test_support::context(hurt_agent(10.0));
        assert!(!is_hurt(&mut ctx).unwrap());
    }

    fn face_enemy_at(distance: f32, offset: f32) -> bool {
        // Orientation 0 faces -y.
        let mut ctx = test_support::context(hurt_agent(10.0));
        let enemy = EnemyInfo {
            location: Vec2::new(offset, -distance),
            hash: EntityHash(1),
            health: 3,
            size: 1.0,
        };
        ctx.set(keys::ENEMY_TARGET, Some(enemy)).unwrap();
        is_facing_enemy(&mut ctx).unwrap()
    }

    #[test]
    fn facing_tolerance_is_looser_up_close() {
        // 1 - cos(0.11) ~ 0.006: inside the near tolerance, outside the far one.
        let near = 10.0_f32;
        let far = 25.0_f32;
        assert!(face_enemy_at(near, near * 0.11_f32.tan()));
        assert!(!face_enemy_at(far, far * 0.11_f32.tan()));
        assert!(face_enemy_at(far, 0.0));
    }

    #[test]
    fn no_staged_enemy_is_not_facing() {
        let mut ctx = test_support::context(hurt_agent(10.0));
        assert!(!is_facing_enemy(&mut ctx).unwrap());
    }

    #[test]
    fn house_visit_ends_on_arrival_but_still_targets() {
        let mut ctx = test_support::context(hurt_agent(10.0));
        let house = HouseInfo::new(Vec2::new(0.5, 0.5), Vec2::new(10.0, 10.0));
        ctx.set(keys::IS_GOING_TO_HOUSE, true).unwrap();
        ctx.set(keys::HOUSE_TARGET, Some(house)).unwrap();

        assert!(is_going_to_house(&mut ctx).unwrap());
        assert_eq!(ctx.get(keys::TARGET), Ok(house.center));
        assert_eq!(ctx.get(keys::IS_GOING_TO_HOUSE), Ok(false));
        assert!(!is_going_to_house(&mut ctx).unwrap());
    }
}
