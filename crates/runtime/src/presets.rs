//! The complete survivor decision tree.
//!
//! ```text
//! survivor()
//!   └─ Selector (first branch that does not fail wins the tick)
//!       ├─  1 survival::use_medkit
//!       ├─  2 survival::eat_food
//!       ├─  3 survival::leave_purge_zone
//!       ├─  4 combat::engage_enemy
//!       ├─  5 combat::continue_strafe
//!       ├─  6 combat::evade_bite
//!       ├─  7 looting::pickup_visible_item
//!       ├─  8 looting::clear_garbage
//!       ├─  9 looting::fetch_remembered_item
//!       ├─ 10 exploration::continue_house_visit
//!       ├─ 11 exploration::visit_new_house
//!       ├─ 12 exploration::explore
//!       └─ 13 exploration::patrol_houses
//! ```

use behavior_tree::builder::selector;

use crate::host::SurvivalHost;
use crate::subtrees::{Node, combat, exploration, looting, survival};

/// Root tree type driven by [`SurvivorAgent`](crate::SurvivorAgent).
pub type BehaviorTree<H> = Node<H>;

/// Priority-ordered root of the survivor policy.
pub fn survivor<H: SurvivalHost + 'static>() -> BehaviorTree<H> {
    selector(vec![
        survival::use_medkit(),
        survival::eat_food(),
        survival::leave_purge_zone(),
        combat::engage_enemy(),
        combat::continue_strafe(),
        combat::evade_bite(),
        looting::pickup_visible_item(),
        looting::clear_garbage(),
        looting::fetch_remembered_item(),
        exploration::continue_house_visit(),
        exploration::visit_new_house(),
        exploration::explore(),
        exploration::patrol_houses(),
    ])
}
