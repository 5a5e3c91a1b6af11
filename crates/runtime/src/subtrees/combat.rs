//! Fighting and evasion branches.

use behavior_tree::builder::{selector, sequence};

use crate::host::SurvivalHost;
use crate::keys;
use crate::nodes::{act, actions, check, check_not, conditions, staged, steering};

use super::Node;

/// Enemy visible and armed → shoot if facing it, otherwise turn towards it.
///
/// ```text
/// Sequence
///   ├─ enemy_in_fov (stages the nearest enemy)
///   ├─ is_armed
///   └─ Selector
///       ├─ Sequence [is_facing_enemy, shoot]
///       └─ Sequence [!is_facing_enemy, set_enemy_as_target, face]
/// ```
///
/// Unarmed agents fall through to the rest of the tree.
pub fn engage_enemy<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        staged("enemy_in_fov", keys::ENEMY_TARGET, conditions::nearest_enemy),
        check("is_armed", conditions::is_armed),
        selector(vec![
            sequence(vec![
                check("is_facing_enemy", conditions::is_facing_enemy),
                act("shoot", actions::shoot),
            ]),
            sequence(vec![
                check_not("is_not_facing_enemy", conditions::is_facing_enemy),
                act("set_enemy_as_target", actions::set_enemy_as_target),
                act("face", steering::face),
            ]),
        ]),
    ])
}

/// Mid-strafe → keep strafing.
pub fn continue_strafe<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        check("is_strafing", conditions::is_strafing),
        act("strafe_and_turn", steering::strafe_and_turn),
    ])
}

/// Bitten by something out of sight while armed → turn around to find it.
pub fn evade_bite<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        check("was_bitten", conditions::was_bitten),
        check_not("no_enemy_in_fov", conditions::sees_enemy),
        check("is_armed", conditions::is_armed),
        act("strafe_and_turn", steering::strafe_and_turn),
    ])
}
