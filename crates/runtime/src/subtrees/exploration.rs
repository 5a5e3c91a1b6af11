//! Exploration branches: house visits, the expanding square and patrol.

use behavior_tree::builder::sequence;

use crate::host::SurvivalHost;
use crate::keys;
use crate::nodes::{act, actions, check, check_not, conditions, staged, steering};

use super::Node;

/// House visit in progress → keep walking to it.
pub fn continue_house_visit<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        check("is_going_to_house", conditions::is_going_to_house),
        act("seek", steering::seek),
    ])
}

/// House discovered this tick → start visiting it.
pub fn visit_new_house<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        staged("new_house_discovered", keys::NEW_HOUSE, conditions::new_house),
        act("go_to_new_house", actions::go_to_new_house),
        act("seek", steering::seek),
    ])
}

/// World not fully explored → walk the expanding square.
pub fn explore<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        check_not("is_not_done_exploring", conditions::is_done_exploring),
        act("expanding_square_search", actions::expanding_square_search),
        act("seek", steering::seek),
    ])
}

/// Fallback → cycle through the discovered houses.
pub fn patrol_houses<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        act("set_house_as_target", actions::set_house_as_target),
        act("seek", steering::seek),
    ])
}
