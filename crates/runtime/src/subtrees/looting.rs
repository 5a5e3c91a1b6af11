//! Item collection and cleanup branches.

use behavior_tree::builder::{selector, sequence};

use crate::host::SurvivalHost;
use crate::keys;
use crate::nodes::{act, actions, check, check_not, conditions, staged, steering};

use super::Node;

/// Item visible → grab it if needed and in range, and walk to it.
pub fn pickup_visible_item<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        check("sees_item", conditions::sees_item),
        act("pickup_item", actions::pickup_item),
        act("seek", steering::seek),
    ])
}

/// Garbage visible → destroy it when in reach, otherwise walk to it.
pub fn clear_garbage<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        staged("sees_garbage", keys::GARBAGE_SEEN, conditions::garbage_seen),
        selector(vec![
            sequence(vec![
                check("garbage_in_grab_range", conditions::garbage_in_grab_range),
                act("destroy_garbage", actions::destroy_garbage),
            ]),
            sequence(vec![
                check_not("garbage_out_of_range", conditions::garbage_in_grab_range),
                act("set_garbage_as_target", actions::set_garbage_as_target),
                act("seek", steering::seek),
            ]),
        ]),
    ])
}

/// Room in the inventory and a needed item remembered nearby → go get it.
pub fn fetch_remembered_item<H: SurvivalHost + 'static>() -> Node<H> {
    sequence(vec![
        check("needs_item", conditions::needs_item),
        staged(
            "needed_item_close",
            keys::ITEM_BEING_FETCHED,
            conditions::item_to_fetch,
        ),
        act("set_fetch_target", actions::set_fetch_target),
        act("seek", steering::seek),
    ])
}
