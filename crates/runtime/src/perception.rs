//! Per-tick classification of what the agent can see.

use survivor_core::{EnemyInfo, EntityInfo, EntityKind, HouseInfo, ItemInfo, PurgeZoneInfo, Vec2};
use tracing::trace;

use crate::host::SurvivalHost;

/// Everything in the field of view this tick, split by kind.
///
/// Rebuilt from scratch at the start of every update; nothing here survives
/// into the next tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Perception {
    /// Item handles, in host enumeration order.
    pub items: Vec<EntityInfo>,
    pub enemies: Vec<EnemyInfo>,
    pub purge_zones: Vec<PurgeZoneInfo>,
    pub houses: Vec<HouseInfo>,
}

impl Perception {
    /// Enumerates the host's field of view.
    ///
    /// Entities whose details the host cannot resolve are skipped.
    pub fn sense<H: SurvivalHost>(host: &H) -> Self {
        let mut perception = Self::default();

        for entity in (0..).map_while(|index| host.entity_in_fov(index)) {
            match entity.kind {
                EntityKind::Item => perception.items.push(entity),
                EntityKind::Enemy => match host.enemy_info(&entity) {
                    Some(enemy) => perception.enemies.push(enemy),
                    None => trace!(hash = entity.hash.0, "enemy without details"),
                },
                EntityKind::PurgeZone => match host.purge_zone_info(&entity) {
                    Some(zone) => perception.purge_zones.push(zone),
                    None => trace!(hash = entity.hash.0, "purge zone without details"),
                },
            }
        }

        perception.houses = (0..).map_while(|index| host.house_in_fov(index)).collect();
        perception
    }

    /// Details of every visible item, in enumeration order.
    pub fn item_details<'a, H: SurvivalHost>(
        &'a self,
        host: &'a H,
    ) -> impl Iterator<Item = (EntityInfo, ItemInfo)> + 'a {
        self.items
            .iter()
            .filter_map(move |entity| host.item_info(entity).map(|item| (*entity, item)))
    }

    /// Visible item handle at exactly `location`.
    pub fn item_at(&self, location: Vec2) -> Option<EntityInfo> {
        self.items
            .iter()
            .find(|entity| entity.location == location)
            .copied()
    }

    pub fn nearest_enemy(&self, from: Vec2) -> Option<EnemyInfo> {
        self.enemies
            .iter()
            .min_by(|a, b| {
                a.location
                    .distance_squared(from)
                    .total_cmp(&b.location.distance_squared(from))
            })
            .copied()
    }

    /// First visible purge zone that contains `point`.
    pub fn zone_containing(&self, point: Vec2) -> Option<PurgeZoneInfo> {
        self.purge_zones
            .iter()
            .find(|zone| zone.contains(point))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survivor_core::EntityHash;

    fn enemy(x: f32, y: f32, hash: u64) -> EnemyInfo {
        EnemyInfo {
            location: Vec2::new(x, y),
            hash: EntityHash(hash),
            health: 5,
            size: 1.0,
        }
    }

    #[test]
    fn nearest_enemy_ignores_enumeration_order() {
        let perception = Perception {
            enemies: vec![enemy(10.0, 0.0, 1), enemy(0.0, 3.0, 2), enemy(-5.0, 0.0, 3)],
            ..Perception::default()
        };
        assert_eq!(
            perception.nearest_enemy(Vec2::ZERO).map(|e| e.hash),
            Some(EntityHash(2))
        );
        assert_eq!(Perception::default().nearest_enemy(Vec2::ZERO), None);
    }

    #[test]
    fn zone_containing_uses_radius() {
        let zone = PurgeZoneInfo {
            center: Vec2::new(0.0, 10.0),
            radius: 4.0,
            hash: EntityHash(9),
        };
        let perception = Perception {
            purge_zones: vec![zone],
            ..Perception::default()
        };
        assert_eq!(perception.zone_containing(Vec2::new(0.0, 7.0)), Some(zone));
        assert_eq!(perception.zone_containing(Vec2::new(0.0, 5.0)), None);
    }
}
