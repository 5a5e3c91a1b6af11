//! In-memory [`SurvivalHost`] for tests and headless runs.
//!
//! The sandbox is an open field: every point is walkable, visibility is a
//! range-and-cone test around the agent, and [`SandboxHost::step`] integrates
//! a [`SteeringOutput`] with simple kinematics. Every command the agent issues
//! is appended to a log so tests can assert on host-side effects.

use std::collections::{BTreeMap, BTreeSet};

use strum::Display;
use survivor_core::{
    AgentInfo, EnemyInfo, EntityHash, EntityInfo, EntityKind, HouseInfo, ItemInfo, ItemKind,
    PurgeZoneInfo, SteeringOutput, Vec2, WorldInfo, angle_delta, bearing,
};

use crate::error::HostError;
use crate::host::SurvivalHost;

/// Cap applied when a medkit or food item restores vitals.
pub const MAX_VITALS: f32 = 10.0;
/// Distance at which an enemy bites.
pub const BITE_RANGE: f32 = 1.5;
/// Angular half-width of a shot.
pub const SHOT_SPREAD: f32 = 0.1;
/// Run mode multiplies the speed limit by this factor.
pub const RUN_FACTOR: f32 = 2.0;

/// Command received from the agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum HostCommand {
    Grab { hash: EntityHash },
    Destroy { hash: EntityHash },
    Add { slot: usize, hash: EntityHash },
    Use { slot: usize },
    Remove { slot: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Body {
    Item(ItemInfo),
    Enemy(EnemyInfo),
    PurgeZone(PurgeZoneInfo),
}

impl Body {
    fn entity(&self) -> EntityInfo {
        let (kind, location, hash) = match self {
            Body::Item(item) => (EntityKind::Item, item.location, item.hash),
            Body::Enemy(enemy) => (EntityKind::Enemy, enemy.location, enemy.hash),
            Body::PurgeZone(zone) => (EntityKind::PurgeZone, zone.center, zone.hash),
        };
        EntityInfo {
            kind,
            location,
            hash,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SandboxHost {
    agent: AgentInfo,
    world: WorldInfo,
    bodies: Vec<Body>,
    houses: Vec<HouseInfo>,
    /// Heal, energy or ammo per item hash.
    stats: BTreeMap<EntityHash, i32>,
    slots: Vec<Option<ItemInfo>>,
    locked: BTreeSet<usize>,
    commands: Vec<HostCommand>,
    next_hash: u64,
}

impl SandboxHost {
    pub fn new(agent: AgentInfo, world: WorldInfo, capacity: usize) -> Self {
        Self {
            agent,
            world,
            bodies: Vec::new(),
            houses: Vec::new(),
            stats: BTreeMap::new(),
            slots: vec![None; capacity],
            locked: BTreeSet::new(),
            commands: Vec::new(),
            next_hash: 1,
        }
    }

    // ===== scenario setup =====

    /// Places an item. `value` is its heal, energy or ammo (ignored for garbage).
    pub fn spawn_item(&mut self, kind: ItemKind, location: Vec2, value: i32) -> EntityInfo {
        let item = self.stock(kind, value);
        let item = ItemInfo { location, ..item };
        self.bodies.push(Body::Item(item));
        Body::Item(item).entity()
    }

    pub fn spawn_enemy(&mut self, location: Vec2, health: i32) -> EntityInfo {
        let enemy = EnemyInfo {
            location,
            hash: self.fresh_hash(),
            health,
            size: 1.0,
        };
        self.bodies.push(Body::Enemy(enemy));
        Body::Enemy(enemy).entity()
    }

    pub fn spawn_purge_zone(&mut self, center: Vec2, radius: f32) -> EntityInfo {
        let zone = PurgeZoneInfo {
            center,
            radius,
            hash: self.fresh_hash(),
        };
        self.bodies.push(Body::PurgeZone(zone));
        Body::PurgeZone(zone).entity()
    }

    pub fn add_house(&mut self, house: HouseInfo) {
        self.houses.push(house);
    }

    /// Creates an item that exists only as a descriptor, e.g. to pre-fill an
    /// inventory.
    pub fn stock(&mut self, kind: ItemKind, value: i32) -> ItemInfo {
        let hash = self.fresh_hash();
        if kind.is_storable() {
            self.stats.insert(hash, value);
        }
        ItemInfo::new(kind, Vec2::ZERO, hash)
    }

    pub fn stock_medkit(&mut self, health: i32) -> ItemInfo {
        self.stock(ItemKind::Medkit, health)
    }

    pub fn stock_food(&mut self, energy: i32) -> ItemInfo {
        self.stock(ItemKind::Food, energy)
    }

    pub fn stock_pistol(&mut self, ammo: i32) -> ItemInfo {
        self.stock(ItemKind::Pistol, ammo)
    }

    fn fresh_hash(&mut self) -> EntityHash {
        let hash = EntityHash(self.next_hash);
        self.next_hash += 1;
        hash
    }

    // ===== inspection =====

    pub fn agent(&self) -> &AgentInfo {
        &self.agent
    }

    pub fn set_agent(&mut self, agent: AgentInfo) {
        self.agent = agent;
    }

    pub fn slot(&self, index: usize) -> Option<&ItemInfo> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Items, enemies and purge zones still in the world.
    pub fn entity_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn enemy_count(&self) -> usize {
        self.bodies
            .iter()
            .filter(|body| matches!(body, Body::Enemy(_)))
            .count()
    }

    /// Makes `slot` refuse removals; items in it can still be used.
    pub fn lock_slot(&mut self, slot: usize) {
        self.locked.insert(slot);
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    // ===== simulation =====

    /// Advances the world by `dt` seconds under `output`.
    pub fn step(&mut self, output: &SteeringOutput, dt: f32) {
        let agent = &mut self.agent;

        let limit = if output.run_mode {
            agent.max_linear_speed * RUN_FACTOR
        } else {
            agent.max_linear_speed
        };
        let mut velocity = output.linear_velocity;
        if velocity.length() > limit {
            velocity = velocity.normalized() * limit;
        }
        agent.linear_velocity = velocity;
        agent.position += velocity * dt;

        if output.auto_orient {
            if velocity.length_squared() > f32::EPSILON {
                agent.orientation = bearing(Vec2::ZERO, velocity);
            }
        } else {
            let max = agent.max_angular_speed;
            agent.orientation += output.angular_velocity.clamp(-max, max) * dt;
        }

        agent.energy = (agent.energy - 0.1 * dt).max(0.0);

        let position = agent.position;
        let bites = self
            .bodies
            .iter()
            .filter(|body| match body {
                Body::Enemy(enemy) => enemy.location.distance_squared(position) < BITE_RANGE * BITE_RANGE,
                _ => false,
            })
            .count();
        let bitten = bites > 0;
        self.agent.was_bitten = bitten && !self.agent.bitten;
        self.agent.bitten = bitten;
        self.agent.health = (self.agent.health - bites as f32).max(0.0);
    }

    fn is_visible(&self, point: Vec2) -> bool {
        let agent = &self.agent;
        if agent.position.distance_squared(point) > agent.fov_range * agent.fov_range {
            return false;
        }
        if agent.fov_angle <= 0.0 || point == agent.position {
            return true;
        }
        angle_delta(bearing(agent.position, point), agent.orientation).abs() <= agent.fov_angle / 2.0
    }

    fn body_index(&self, hash: EntityHash) -> Result<usize, HostError> {
        self.bodies
            .iter()
            .position(|body| body.entity().hash == hash)
            .ok_or(HostError::UnknownEntity { hash })
    }

    fn occupied_slot(&self, slot: usize) -> Result<ItemInfo, HostError> {
        self.slots
            .get(slot)
            .ok_or(HostError::InvalidSlot { slot })?
            .ok_or(HostError::EmptySlot { slot })
    }

    fn stat_of(&self, item: &ItemInfo, kind: ItemKind) -> Option<i32> {
        (item.kind == kind)
            .then(|| self.stats.get(&item.hash).copied())
            .flatten()
    }

    /// Hits the enemy closest to the line of fire, if any.
    fn fire(&mut self) {
        let agent = self.agent;
        let target = self
            .bodies
            .iter_mut()
            .filter_map(|body| match body {
                Body::Enemy(enemy) => Some(enemy),
                _ => None,
            })
            .filter(|enemy| {
                agent.position.distance_squared(enemy.location) <= agent.fov_range * agent.fov_range
                    && angle_delta(bearing(agent.position, enemy.location), agent.orientation).abs()
                        < SHOT_SPREAD
            })
            .min_by(|a, b| {
                a.location
                    .distance_squared(agent.position)
                    .total_cmp(&b.location.distance_squared(agent.position))
            });
        if let Some(enemy) = target {
            enemy.health -= 1;
        }
        self.bodies
            .retain(|body| !matches!(body, Body::Enemy(enemy) if enemy.health <= 0));
    }
}

impl SurvivalHost for SandboxHost {
    fn agent_info(&self) -> AgentInfo {
        self.agent
    }

    fn world_info(&self) -> WorldInfo {
        self.world
    }

    fn inventory_capacity(&self) -> usize {
        self.slots.len()
    }

    fn entity_in_fov(&self, index: usize) -> Option<EntityInfo> {
        self.bodies
            .iter()
            .map(Body::entity)
            .filter(|entity| self.is_visible(entity.location))
            .nth(index)
    }

    fn house_in_fov(&self, index: usize) -> Option<HouseInfo> {
        self.houses
            .iter()
            .filter(|house| self.is_visible(house.center))
            .nth(index)
            .copied()
    }

    fn item_info(&self, entity: &EntityInfo) -> Option<ItemInfo> {
        self.bodies.iter().find_map(|body| match body {
            Body::Item(item) if item.hash == entity.hash => Some(*item),
            _ => None,
        })
    }

    fn enemy_info(&self, entity: &EntityInfo) -> Option<EnemyInfo> {
        self.bodies.iter().find_map(|body| match body {
            Body::Enemy(enemy) if enemy.hash == entity.hash => Some(*enemy),
            _ => None,
        })
    }

    fn purge_zone_info(&self, entity: &EntityInfo) -> Option<PurgeZoneInfo> {
        self.bodies.iter().find_map(|body| match body {
            Body::PurgeZone(zone) if zone.hash == entity.hash => Some(*zone),
            _ => None,
        })
    }

    fn closest_path_point(&self, target: Vec2) -> Vec2 {
        target
    }

    fn medkit_health(&self, item: &ItemInfo) -> Option<i32> {
        self.stat_of(item, ItemKind::Medkit)
    }

    fn food_energy(&self, item: &ItemInfo) -> Option<i32> {
        self.stat_of(item, ItemKind::Food)
    }

    fn weapon_ammo(&self, item: &ItemInfo) -> Option<i32> {
        self.stat_of(item, ItemKind::Pistol)
    }

    fn grab_item(&mut self, entity: &EntityInfo) -> Result<ItemInfo, HostError> {
        let hash = entity.hash;
        let index = self.body_index(hash)?;
        let Body::Item(item) = self.bodies[index] else {
            return Err(HostError::NotAnItem { hash });
        };
        if !self.agent.can_grab(item.location) {
            return Err(HostError::OutOfGrabRange { hash });
        }

        self.bodies.remove(index);
        self.commands.push(HostCommand::Grab { hash });
        Ok(item)
    }

    fn destroy_item(&mut self, entity: &EntityInfo) -> Result<(), HostError> {
        let hash = entity.hash;
        let index = self.body_index(hash)?;
        if !matches!(self.bodies[index], Body::Item(_)) {
            return Err(HostError::NotAnItem { hash });
        }

        self.bodies.remove(index);
        self.commands.push(HostCommand::Destroy { hash });
        Ok(())
    }

    fn inventory_add(&mut self, slot: usize, item: &ItemInfo) -> Result<(), HostError> {
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(HostError::InvalidSlot { slot })?;
        if entry.is_some() {
            return Err(HostError::SlotOccupied { slot });
        }

        *entry = Some(*item);
        self.commands.push(HostCommand::Add {
            slot,
            hash: item.hash,
        });
        Ok(())
    }

    fn inventory_use(&mut self, slot: usize) -> Result<(), HostError> {
        let item = self.occupied_slot(slot)?;
        self.commands.push(HostCommand::Use { slot });

        let value = self.stats.get(&item.hash).copied().unwrap_or(0);
        match item.kind {
            ItemKind::Medkit => {
                self.agent.health = (self.agent.health + value as f32).min(MAX_VITALS);
                self.stats.insert(item.hash, 0);
            }
            ItemKind::Food => {
                self.agent.energy = (self.agent.energy + value as f32).min(MAX_VITALS);
                self.stats.insert(item.hash, 0);
            }
            ItemKind::Pistol if value > 0 => {
                self.stats.insert(item.hash, value - 1);
                self.fire();
            }
            ItemKind::Pistol | ItemKind::Garbage => {}
        }
        Ok(())
    }

    fn inventory_remove(&mut self, slot: usize) -> Result<(), HostError> {
        self.occupied_slot(slot)?;
        if self.locked.contains(&slot) {
            return Err(HostError::SlotLocked { slot });
        }
        self.slots[slot] = None;
        self.commands.push(HostCommand::Remove { slot });
        Ok(())
    }
}
