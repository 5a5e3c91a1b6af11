//! Branches of the survivor tree, grouped by concern.
//!
//! Each function returns one self-contained branch (usually a guarded
//! sequence) that fails cleanly when it does not apply, so the root selector
//! can fall through to the next one.
//!
//! ```text
//! survival     use_medkit, eat_food, leave_purge_zone
//! combat       engage_enemy, continue_strafe, evade_bite
//! looting      pickup_visible_item, clear_garbage, fetch_remembered_item
//! exploration  continue_house_visit, visit_new_house, explore, patrol_houses
//! ```

pub mod combat;
pub mod exploration;
pub mod looting;
pub mod survival;

pub use crate::nodes::Node;
