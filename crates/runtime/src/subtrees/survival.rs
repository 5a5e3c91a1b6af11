//! Self-preservation branches.

use behavior_tree::builder::sequence;

use crate::host::SurvivalHost;
use crate::keys;
use crate::nodes::{act, actions, check, conditions, staged};

use super::Node;

/// Hurt, and holding a medkit that under-heals → use it.
pub fn use_medkit<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        check("is_hurt", conditions::is_hurt),
        staged("should_use_medkit", keys::MEDKIT_TO_USE, conditions::medkit_to_use),
        act("use_medkit", actions::use_medkit),
    ])
}

/// Hungry, and holding food that under-restores → eat it.
pub fn eat_food<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        check("is_hungry", conditions::is_hungry),
        staged("should_eat", keys::FOOD_TO_USE, conditions::food_to_use),
        act("use_food", actions::use_food),
    ])
}

/// Inside a purge zone → run away from its center.
pub fn leave_purge_zone<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        staged(
            "is_in_purge_zone",
            keys::DANGEROUS_PURGE_ZONE,
            conditions::dangerous_purge_zone,
        ),
        act("leave_purge_zone", actions::leave_purge_zone),
    ])
}
