use core::f32::consts::{PI, TAU};

use survivor_core::{
    AgentConfig, AgentInfo, ExpandingSearch, HouseInfo, ItemInfo, ItemKind, SteeringOutput, Vec2,
    WorldInfo,
};
use survivor_runtime::keys;
use survivor_runtime::subtrees::combat;
use survivor_runtime::{HostCommand, SandboxHost, SurvivalHost, SurvivorAgent};

fn agent_at(x: f32, y: f32) -> AgentInfo {
    AgentInfo {
        position: Vec2::new(x, y),
        max_linear_speed: 5.0,
        max_angular_speed: PI,
        health: 10.0,
        energy: 10.0,
        fov_range: 20.0,
        fov_angle: TAU,
        grab_range: 2.0,
        ..AgentInfo::default()
    }
}

fn world() -> WorldInfo {
    WorldInfo::new(Vec2::ZERO, Vec2::new(400.0, 400.0))
}

fn survivor(agent: AgentInfo) -> SurvivorAgent<SandboxHost> {
    let host = SandboxHost::new(agent, world(), 5);
    SurvivorAgent::new(host, AgentConfig::default()).unwrap()
}

/// Puts `item` into both the agent's inventory mirror and the host's slots.
fn give(survivor: &mut SurvivorAgent<SandboxHost>, item: ItemInfo) -> usize {
    let ctx = survivor.context_mut();
    let slot = ctx.inventory.store(item).unwrap();
    ctx.host.inventory_add(slot, &item).unwrap();
    slot
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}

fn used_slots(survivor: &SurvivorAgent<SandboxHost>) -> Vec<usize> {
    survivor
        .host()
        .commands()
        .iter()
        .filter_map(|command| match command {
            HostCommand::Use { slot } => Some(*slot),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Survival
// ============================================================================

#[test]
fn hurt_agent_uses_first_under_healing_medkit() {
    let mut survivor = survivor(AgentInfo {
        health: 5.0,
        ..agent_at(0.0, 0.0)
    });
    let three = survivor.host_mut().stock_medkit(3);
    let seven = survivor.host_mut().stock_medkit(7);
    let slot_of_three = give(&mut survivor, three);
    let slot_of_seven = give(&mut survivor, seven);

    survivor.update(0.1);

    assert_eq!(used_slots(&survivor), vec![slot_of_three]);
    assert_eq!(survivor.inventory().count(ItemKind::Medkit), 1);
    assert_eq!(
        survivor.inventory().slot(slot_of_seven).map(|item| item.hash),
        Some(seven.hash)
    );
    assert_eq!(survivor.host().agent().health, 8.0);
}

#[test]
fn hungry_agent_eats_under_restoring_food() {
    let mut survivor = survivor(AgentInfo {
        energy: 4.0,
        ..agent_at(0.0, 0.0)
    });
    let food = survivor.host_mut().stock_food(2);
    let slot = give(&mut survivor, food);

    survivor.update(0.1);

    assert_eq!(used_slots(&survivor), vec![slot]);
    assert_eq!(survivor.inventory().count(ItemKind::Food), 0);
}

#[test]
fn healing_outranks_combat() {
    let mut survivor = survivor(AgentInfo {
        health: 5.0,
        ..agent_at(0.0, 0.0)
    });
    survivor.host_mut().spawn_enemy(Vec2::new(0.0, -10.0), 3);
    let gun = survivor.host_mut().stock_pistol(10);
    give(&mut survivor, gun);
    let medkit = survivor.host_mut().stock_medkit(1);
    let medkit_slot = give(&mut survivor, medkit);

    survivor.update(0.1);

    assert_eq!(used_slots(&survivor), vec![medkit_slot]);
    assert_eq!(survivor.host().weapon_ammo(&gun), Some(10));
}

#[test]
fn purge_zone_makes_agent_run_outward() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    survivor
        .host_mut()
        .spawn_purge_zone(Vec2::new(5.0, 0.0), 10.0);

    let output = survivor.update(0.1);

    assert!(approx(output.linear_velocity, Vec2::new(-5.0, 0.0)));
    assert!(output.run_mode);
    assert!(output.auto_orient);

    // Run mode does not outlive the tick that asked for it.
    survivor.host_mut().set_agent(agent_at(-50.0, 0.0));
    let output = survivor.update(0.1);
    assert!(!output.run_mode);
}

// ============================================================================
// Combat
// ============================================================================

#[test]
fn armed_agent_shoots_enemy_it_faces() {
    // Orientation 0 faces -y.
    let mut survivor = survivor(agent_at(0.0, 0.0));
    survivor.host_mut().spawn_enemy(Vec2::new(0.0, -10.0), 1);
    let gun = survivor.host_mut().stock_pistol(3);
    let slot = give(&mut survivor, gun);

    survivor.update(0.1);

    assert_eq!(used_slots(&survivor), vec![slot]);
    assert_eq!(survivor.host().enemy_count(), 0);
    assert_eq!(survivor.host().weapon_ammo(&gun), Some(2));
}

#[test]
fn armed_agent_turns_towards_nearest_enemy() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    survivor.host_mut().spawn_enemy(Vec2::new(0.0, 15.0), 1);
    survivor.host_mut().spawn_enemy(Vec2::new(10.0, 0.0), 1);
    let gun = survivor.host_mut().stock_pistol(3);
    give(&mut survivor, gun);

    let output = survivor.update(0.1);

    assert!(used_slots(&survivor).is_empty());
    assert!(!output.auto_orient);
    // Nearest enemy is a quarter turn to the left of the heading.
    assert!((output.angular_velocity - PI / 2.0 * 50.0).abs() < 1e-2);
    assert_eq!(
        survivor.context().get(keys::TARGET),
        Ok(Vec2::new(10.0, 0.0))
    );
}

#[test]
fn unarmed_agent_ignores_enemies() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    survivor.host_mut().spawn_enemy(Vec2::new(0.0, -10.0), 1);

    let output = survivor.update(0.1);

    assert!(output.auto_orient);
    // First search leg goes left.
    assert!(approx(output.linear_velocity, Vec2::new(-5.0, 0.0)));
}

#[test]
fn bite_from_behind_starts_strafe_when_armed() {
    let mut survivor = survivor(AgentInfo {
        was_bitten: true,
        bitten: true,
        linear_velocity: Vec2::new(0.0, -3.0),
        ..agent_at(0.0, 0.0)
    });
    let gun = survivor.host_mut().stock_pistol(3);
    give(&mut survivor, gun);

    let output = survivor.update(0.1);

    let strafe = survivor.context().get(keys::STRAFE_INFO).unwrap();
    assert!(strafe.active);
    assert!(!output.auto_orient);
    assert!(approx(output.linear_velocity, Vec2::new(0.0, -5.0)));

    // The strafe carries on after the bite is over.
    survivor.host_mut().set_agent(agent_at(0.0, 0.0));
    survivor.update(0.1);
    assert!(survivor.context().get(keys::STRAFE_INFO).unwrap().active);
}

/// Runs only the bite-evasion branch and reports whether a strafe started.
fn bite_starts_strafe(enemy_in_view: bool, armed: bool) -> bool {
    let agent = AgentInfo {
        was_bitten: true,
        bitten: true,
        ..agent_at(0.0, 0.0)
    };
    let host = SandboxHost::new(agent, world(), 5);
    let mut survivor =
        SurvivorAgent::with_tree(host, AgentConfig::default(), combat::evade_bite()).unwrap();
    if enemy_in_view {
        survivor.host_mut().spawn_enemy(Vec2::new(0.0, 8.0), 1);
    }
    if armed {
        let gun = survivor.host_mut().stock_pistol(3);
        give(&mut survivor, gun);
    }

    survivor.update(0.1);
    survivor.context().get(keys::STRAFE_INFO).unwrap().active
}

#[test]
fn bite_strafe_needs_a_gun_and_no_enemy_in_view() {
    assert!(bite_starts_strafe(false, true));
    assert!(!bite_starts_strafe(true, true));
    assert!(!bite_starts_strafe(false, false));
}

#[test]
fn bitten_unarmed_agent_runs_while_exploring() {
    let mut survivor = survivor(AgentInfo {
        was_bitten: true,
        bitten: true,
        ..agent_at(0.0, 0.0)
    });

    let output = survivor.update(0.1);

    assert!(output.run_mode);
    assert!(approx(output.linear_velocity, Vec2::new(-5.0, 0.0)));
    assert!(!survivor.context().get(keys::STRAFE_INFO).unwrap().active);
}

// ============================================================================
// Looting
// ============================================================================

#[test]
fn needed_item_in_range_is_picked_up() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    let pistol = survivor
        .host_mut()
        .spawn_item(ItemKind::Pistol, Vec2::new(1.0, 0.0), 6);

    let output = survivor.update(0.1);

    assert!(survivor.inventory().is_armed());
    assert!(survivor.context().memory.is_empty());
    assert_eq!(
        survivor.host().commands(),
        &[
            HostCommand::Grab { hash: pistol.hash },
            HostCommand::Add {
                slot: 0,
                hash: pistol.hash
            },
        ]
    );
    // Within the stop margin of the item.
    assert_eq!(output.linear_velocity, Vec2::ZERO);
}

#[test]
fn grabbed_item_that_cannot_be_stored_is_not_chased() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    // Host slot 0 is filled without the agent knowing.
    let squatter = survivor.host_mut().stock_pistol(1);
    survivor.host_mut().inventory_add(0, &squatter).unwrap();
    let pistol = survivor
        .host_mut()
        .spawn_item(ItemKind::Pistol, Vec2::new(1.0, 0.0), 6);

    survivor.update(0.1);

    assert!(
        survivor
            .host()
            .commands()
            .contains(&HostCommand::Grab { hash: pistol.hash })
    );
    assert_eq!(survivor.host().entity_count(), 0);
    assert!(!survivor.inventory().is_armed());
    assert!(survivor.context().memory.is_empty());
    assert_eq!(survivor.context().get(keys::ITEM_BEING_FETCHED), Ok(None));

    // Nothing left to fetch: the agent goes back to exploring.
    let output = survivor.update(0.1);
    assert_eq!(survivor.context().get(keys::ITEM_BEING_FETCHED), Ok(None));
    assert!(approx(output.linear_velocity, Vec2::new(-5.0, 0.0)));
}

#[test]
fn needed_item_out_of_range_is_approached() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    survivor
        .host_mut()
        .spawn_item(ItemKind::Food, Vec2::new(0.0, 10.0), 3);

    let output = survivor.update(0.1);

    assert!(survivor.host().commands().is_empty());
    assert_eq!(survivor.context().memory.len(), 1);
    assert!(approx(output.linear_velocity, Vec2::new(0.0, 5.0)));
}

#[test]
fn garbage_is_destroyed_in_reach_and_approached_otherwise() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    let far = survivor
        .host_mut()
        .spawn_item(ItemKind::Garbage, Vec2::new(10.0, 0.0), 0);

    let output = survivor.update(0.1);
    assert!(approx(output.linear_velocity, Vec2::new(5.0, 0.0)));
    assert!(survivor.host().commands().is_empty());

    survivor.host_mut().set_agent(agent_at(9.0, 0.0));
    survivor.update(0.1);
    assert_eq!(
        survivor.host().commands(),
        &[HostCommand::Destroy { hash: far.hash }]
    );
    assert!(survivor.context().memory.is_empty());
    assert_eq!(survivor.context().get(keys::GARBAGE_SEEN), Ok(None));
}

#[test]
fn remembered_item_is_fetched_after_leaving_view() {
    let mut survivor = survivor(AgentInfo {
        fov_range: 40.0,
        ..agent_at(0.0, 0.0)
    });
    survivor
        .host_mut()
        .spawn_item(ItemKind::Medkit, Vec2::new(30.0, 0.0), 4);
    survivor.update(0.1);
    assert_eq!(survivor.context().memory.len(), 1);

    // Turn a blind eye: the medkit is only remembered now.
    survivor.host_mut().set_agent(AgentInfo {
        fov_range: 5.0,
        ..agent_at(0.0, 0.0)
    });
    let output = survivor.update(0.1);

    let fetched = survivor
        .context()
        .get(keys::ITEM_BEING_FETCHED)
        .unwrap()
        .map(|item| item.location);
    assert_eq!(fetched, Some(Vec2::new(30.0, 0.0)));
    assert!(approx(output.linear_velocity, Vec2::new(5.0, 0.0)));
}

#[test]
fn remembered_item_beyond_fetch_range_is_ignored() {
    let mut survivor = survivor(AgentInfo {
        fov_range: 100.0,
        ..agent_at(0.0, 0.0)
    });
    survivor
        .host_mut()
        .spawn_item(ItemKind::Medkit, Vec2::new(90.0, 0.0), 4);
    survivor.update(0.1);

    survivor.host_mut().set_agent(AgentInfo {
        fov_range: 5.0,
        ..agent_at(0.0, 0.0)
    });
    survivor.update(0.1);

    assert_eq!(survivor.context().get(keys::ITEM_BEING_FETCHED), Ok(None));
}

// ============================================================================
// Exploration
// ============================================================================

#[test]
fn search_at_step_two_steers_to_next_waypoint() {
    let mut survivor = survivor(agent_at(-25.0, 25.0));
    {
        let ctx = survivor.context_mut();
        ctx.set(
            keys::EXPANDING_SEARCH,
            ExpandingSearch {
                leg: 25.0,
                step: 2,
                waypoint: Vec2::new(-25.0, 25.0),
            },
        )
        .unwrap();
        ctx.set(keys::TARGET, Vec2::new(100.0, -100.0)).unwrap();
    }

    let output = survivor.update(0.1);

    let search = survivor.context().get(keys::EXPANDING_SEARCH).unwrap();
    assert_eq!(search.step, 3);
    assert_eq!(search.waypoint, Vec2::new(25.0, 25.0));
    assert!(approx(output.linear_velocity, Vec2::new(5.0, 0.0)));
}

#[test]
fn new_house_is_visited_until_reached() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    let house = HouseInfo::new(Vec2::new(0.0, 15.0), Vec2::new(8.0, 8.0));
    survivor.host_mut().add_house(house);

    let output = survivor.update(0.1);
    assert_eq!(survivor.context().get(keys::IS_GOING_TO_HOUSE), Ok(true));
    assert!(approx(output.linear_velocity, Vec2::new(0.0, 5.0)));

    // Same house seen again: not new, but the visit continues.
    let output = survivor.update(0.1);
    assert_eq!(
        survivor.context().get(keys::IS_NEW_HOUSE_DISCOVERED),
        Ok(false)
    );
    assert!(approx(output.linear_velocity, Vec2::new(0.0, 5.0)));

    survivor.host_mut().set_agent(agent_at(0.0, 14.5));
    survivor.update(0.1);
    assert_eq!(survivor.context().get(keys::IS_GOING_TO_HOUSE), Ok(false));
    assert_eq!(survivor.context().houses.len(), 1);
}

#[test]
fn exhausted_search_falls_back_to_patrol() {
    let mut survivor = survivor(agent_at(0.0, 0.0));
    survivor
        .context_mut()
        .set(
            keys::EXPANDING_SEARCH,
            ExpandingSearch {
                leg: 25.0,
                step: 40,
                waypoint: Vec2::new(500.0, 0.0),
            },
        )
        .unwrap();

    // No houses known: nothing applies and the previous output stands.
    let output = survivor.update(0.1);
    assert_eq!(output, SteeringOutput::default());

    let first = HouseInfo::new(Vec2::new(-10.0, 0.0), Vec2::new(5.0, 5.0));
    let second = HouseInfo::new(Vec2::new(0.0, -12.0), Vec2::new(5.0, 5.0));
    survivor.context_mut().houses.add_if_new(first);
    survivor.context_mut().houses.add_if_new(second);

    let output = survivor.update(0.1);
    assert!(approx(output.linear_velocity, Vec2::new(-5.0, 0.0)));

    survivor.host_mut().set_agent(agent_at(-9.0, 0.0));
    let output = survivor.update(0.1);
    assert_eq!(survivor.context().houses.patrol_index(), 1);
    let expected = (Vec2::new(0.0, -12.0) - Vec2::new(-9.0, 0.0)).normalized() * 5.0;
    assert!(approx(output.linear_velocity, expected));
}
