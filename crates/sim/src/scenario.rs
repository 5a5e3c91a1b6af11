//! Seeded world layout for headless runs.
use core::f32::consts::{FRAC_PI_2, PI};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use survivor_core::{AgentInfo, HouseInfo, ItemKind, Vec2, WorldInfo};
use survivor_runtime::SandboxHost;

const WORLD_SIZE: f32 = 300.0;
const INVENTORY_CAPACITY: usize = 5;
const HOUSES: usize = 6;
const ITEMS: usize = 24;
const ENEMIES: usize = 6;
const PURGE_ZONES: usize = 2;

/// Builds a sandbox with houses, loot, enemies and purge zones scattered
/// around the origin. The same seed always yields the same world.
pub fn generate(seed: u64) -> SandboxHost {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = WORLD_SIZE / 2.0;

    let agent = AgentInfo {
        position: Vec2::ZERO,
        max_linear_speed: 5.0,
        max_angular_speed: PI,
        health: 10.0,
        energy: 10.0,
        fov_range: 20.0,
        fov_angle: FRAC_PI_2 * 1.5,
        grab_range: 2.0,
        ..AgentInfo::default()
    };
    let world = WorldInfo::new(Vec2::ZERO, Vec2::new(WORLD_SIZE, WORLD_SIZE));
    let mut host = SandboxHost::new(agent, world, INVENTORY_CAPACITY);

    let point = |rng: &mut StdRng, margin: f32| {
        Vec2::new(
            rng.gen_range(-half + margin..half - margin),
            rng.gen_range(-half + margin..half - margin),
        )
    };

    for _ in 0..HOUSES {
        let size = Vec2::new(rng.gen_range(8.0..16.0), rng.gen_range(8.0..16.0));
        host.add_house(HouseInfo::new(point(&mut rng, 20.0), size));
    }

    for _ in 0..ITEMS {
        let (kind, value) = match rng.gen_range(0..4) {
            0 => (ItemKind::Pistol, rng.gen_range(1..8)),
            1 => (ItemKind::Medkit, rng.gen_range(1..6)),
            2 => (ItemKind::Food, rng.gen_range(1..6)),
            _ => (ItemKind::Garbage, 0),
        };
        host.spawn_item(kind, point(&mut rng, 5.0), value);
    }

    for _ in 0..ENEMIES {
        let location = point(&mut rng, 10.0);
        host.spawn_enemy(location, rng.gen_range(1..4));
    }

    for _ in 0..PURGE_ZONES {
        let center = point(&mut rng, 30.0);
        host.spawn_purge_zone(center, rng.gen_range(10.0..25.0));
    }

    host
}

#[cfg(test)]
mod tests {
    use super::*;
    use survivor_runtime::SurvivalHost;

    #[test]
    fn same_seed_same_world() {
        let a = generate(42);
        let b = generate(42);
        assert_eq!(a.entity_count(), b.entity_count());
        assert_eq!(a.entity_in_fov(0), b.entity_in_fov(0));
        assert_eq!(a.entity_count(), ITEMS + ENEMIES + PURGE_ZONES);
    }

    #[test]
    fn world_fits_inventory_defaults() {
        let host = generate(1);
        assert_eq!(host.inventory_capacity(), INVENTORY_CAPACITY);
        assert!(host.world_info().contains(host.agent().position));
    }
}
