//! Action leaves: inventory use, combat, looting and target selection.
//!
//! Actions that change the inventory validate against the local
//! [`Inventory`](survivor_core::Inventory) mirror first. The mirror then
//! follows every host command that took effect, so a rejected command never
//! leaves it describing an item the agent no longer holds.

use behavior_tree::Status;
use survivor_core::{ItemInfo, ItemKind, StrafeInfo};
use tracing::{debug, warn};

use crate::blackboard::BbKey;
use crate::context::AgentContext;
use crate::error::Result;
use crate::host::SurvivalHost;
use crate::keys;

use super::steering;

// ============================================================================
// Survival
// ============================================================================

pub fn use_medkit<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    consume_staged(ctx, ItemKind::Medkit, keys::MEDKIT_TO_USE)
}

pub fn use_food<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    consume_staged(ctx, ItemKind::Food, keys::FOOD_TO_USE)
}

/// Uses up the single-use item staged under `key`.
fn consume_staged<H: SurvivalHost>(
    ctx: &mut AgentContext<H>,
    kind: ItemKind,
    key: BbKey<Option<usize>>,
) -> Result<Status> {
    let Some(slot) = ctx.get(key)? else {
        return Ok(Status::Failure);
    };
    let in_region = ctx.inventory.region(kind).is_some_and(|r| r.contains(&slot));
    if !in_region || ctx.inventory.slot(slot).is_none() {
        debug!(slot, %kind, "staged slot no longer holds the item");
        return Ok(Status::Failure);
    }

    ctx.host.inventory_use(slot)?;
    // Used up from here on, whether or not the host lets go of the slot.
    ctx.inventory.take(kind, slot)?;
    ctx.set(key, None)?;
    if let Err(err) = ctx.host.inventory_remove(slot) {
        warn!(slot, %kind, error = %err, "used item left in host slot");
    }

    debug!(slot, %kind, "consumed");
    Ok(Status::Success)
}

/// Runs from the staged purge zone's center.
pub fn leave_purge_zone<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let Some(zone) = ctx.get(keys::DANGEROUS_PURGE_ZONE)? else {
        return Ok(Status::Failure);
    };

    ctx.set(keys::TARGET, zone.center)?;
    ctx.set(keys::IS_RUNNING, true)?;
    steering::flee(ctx)
}

// ============================================================================
// Combat
// ============================================================================

/// Fires the gun with the least ammunition left.
///
/// Firing interrupts a strafe. A gun that runs dry is dropped.
pub fn shoot<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    if !ctx.inventory.is_armed() {
        return Ok(Status::Failure);
    }

    if ctx.get(keys::STRAFE_INFO)?.active {
        ctx.set(keys::STRAFE_INFO, StrafeInfo::default())?;
    }

    let emptiest = ctx
        .inventory
        .occupied(ItemKind::Pistol)
        .filter_map(|(slot, gun)| ctx.host.weapon_ammo(gun).map(|ammo| (ammo, slot, *gun)))
        .min_by_key(|&(ammo, slot, _)| (ammo, slot));
    let Some((_, slot, gun)) = emptiest else {
        return Ok(Status::Failure);
    };

    ctx.host.inventory_use(slot)?;
    let ammo_left = ctx.host.weapon_ammo(&gun).unwrap_or(0);
    debug!(slot, ammo_left, "fired");

    if ammo_left <= 0 {
        ctx.host.inventory_remove(slot)?;
        ctx.inventory.take(ItemKind::Pistol, slot)?;
        debug!(slot, "dropped empty gun");
    }
    Ok(Status::Success)
}

pub fn set_enemy_as_target<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let Some(enemy) = ctx.get(keys::ENEMY_TARGET)? else {
        return Ok(Status::Failure);
    };
    ctx.set(keys::TARGET, enemy.location)?;
    Ok(Status::Success)
}

// ============================================================================
// Looting
// ============================================================================

/// Picks up the first visible item the inventory has room for.
///
/// Targets the item either way so the following seek walks to it; fails only
/// when nothing visible is needed.
pub fn pickup_item<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let wanted = ctx
        .perception
        .item_details(&ctx.host)
        .find(|(_, item)| ctx.inventory.needs(item.kind));
    let Some((entity, _)) = wanted else {
        return Ok(Status::Failure);
    };

    let agent = ctx.agent()?;
    if agent.can_grab(entity.location) {
        match ctx.host.grab_item(&entity) {
            Ok(item) => {
                // Gone from the world from here on, stored or not.
                ctx.memory.forget(item.location);
                ctx.set(keys::ITEM_BEING_FETCHED, None)?;
                match store_grabbed(ctx, &item) {
                    Ok(slot) => debug!(slot, kind = %item.kind, "picked up"),
                    Err(err) => warn!(kind = %item.kind, error = %err, "grabbed item not stored"),
                }
            }
            Err(err) => debug!(error = %err, "grab rejected"),
        }
    }

    ctx.set(keys::TARGET, entity.location)?;
    Ok(Status::Success)
}

/// Adds a grabbed item to the host inventory, then to the mirror.
fn store_grabbed<H: SurvivalHost>(ctx: &mut AgentContext<H>, item: &ItemInfo) -> Result<usize> {
    let slot = ctx.inventory.first_free_slot(item.kind)?;
    ctx.host.inventory_add(slot, item)?;
    ctx.inventory.put(slot, *item)?;
    Ok(slot)
}

/// Destroys the staged garbage item.
pub fn destroy_garbage<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let Some(garbage) = ctx.get(keys::GARBAGE_SEEN)? else {
        return Ok(Status::Failure);
    };
    let Some(entity) = ctx.perception.item_at(garbage.location) else {
        return Ok(Status::Failure);
    };

    ctx.memory.forget(garbage.location);
    ctx.host.destroy_item(&entity)?;
    ctx.set(keys::GARBAGE_SEEN, None)?;
    debug!(hash = entity.hash.0, "destroyed garbage");
    Ok(Status::Success)
}

pub fn set_garbage_as_target<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let Some(garbage) = ctx.get(keys::GARBAGE_SEEN)? else {
        return Ok(Status::Failure);
    };
    ctx.set(keys::TARGET, garbage.location)?;
    Ok(Status::Success)
}

pub fn set_fetch_target<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let Some(item) = ctx.get(keys::ITEM_BEING_FETCHED)? else {
        return Ok(Status::Failure);
    };
    ctx.set(keys::TARGET, item.location)?;
    Ok(Status::Success)
}

// ============================================================================
// Exploration
// ============================================================================

/// Starts a visit to the house discovered this tick.
pub fn go_to_new_house<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let Some(house) = ctx.get(keys::NEW_HOUSE)? else {
        return Ok(Status::Failure);
    };
    ctx.set(keys::HOUSE_TARGET, Some(house))?;
    ctx.set(keys::IS_GOING_TO_HOUSE, true)?;
    ctx.set(keys::TARGET, house.center)?;
    debug!(x = house.center.x, y = house.center.y, "heading to new house");
    Ok(Status::Success)
}

/// Advances the expanding square on arrival and targets its waypoint.
///
/// Runs if the agent was bitten since the last tick.
pub fn expanding_square_search<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let agent = ctx.agent()?;
    if agent.was_bitten {
        ctx.set(keys::IS_RUNNING, true)?;
    }

    let mut search = ctx.get(keys::EXPANDING_SEARCH)?;
    if search.advance_if_arrived(agent.position, ctx.config.search_arrive_margin_sq) {
        ctx.set(keys::EXPANDING_SEARCH, search)?;
        debug!(
            step = search.step,
            x = search.waypoint.x,
            y = search.waypoint.y,
            "search waypoint advanced"
        );
    }

    let target = ctx.host.closest_path_point(search.waypoint);
    ctx.set(keys::TARGET, target)?;
    Ok(Status::Success)
}

/// Patrols the discovered houses in discovery order.
pub fn set_house_as_target<H: SurvivalHost>(ctx: &mut AgentContext<H>) -> Result<Status> {
    let agent = ctx.agent()?;
    let margin = ctx.config.patrol_arrive_margin_sq;
    let Some(house) = ctx.houses.patrol_target(agent.position, margin) else {
        return Ok(Status::Failure);
    };
    ctx.set(keys::TARGET, house.center)?;
    Ok(Status::Success)
}
