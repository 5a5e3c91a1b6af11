//! Leaf adapters and the policy functions they wrap.
//!
//! Policy functions are plain `fn`s over [`AgentContext`] that return
//! [`Result`]. The adapters here turn them into tree leaves: an error is logged
//! and becomes `Failure`, so a broken branch yields to its next sibling instead
//! of aborting the tick.
//!
//! - [`act`]: an [`Action`](behavior_tree::Action) leaf
//! - [`check`] / [`check_not`]: conditional leaves
//! - [`staged`]: a conditional that stores what it found under a blackboard key

pub mod actions;
pub mod conditions;
pub mod steering;

use behavior_tree::{Behavior, Status, builder};
use tracing::warn;

use crate::blackboard::BbKey;
use crate::context::AgentContext;
use crate::error::Result;
use crate::host::SurvivalHost;

/// Boxed node over the survivor context.
pub type Node<H> = Box<dyn Behavior<AgentContext<H>>>;

pub type Step<H> = fn(&mut AgentContext<H>) -> Result<Status>;
pub type Check<H> = fn(&mut AgentContext<H>) -> Result<bool>;
pub type Probe<H, T> = fn(&AgentContext<H>) -> Result<Option<T>>;

pub fn act<H: SurvivalHost + 'static>(name: &'static str, step: Step<H>) -> Node<H> {
    builder::action(move |ctx: &mut AgentContext<H>| match step(ctx) {
        Ok(status) => status,
        Err(err) => {
            warn!(node = name, error = %err, "action failed");
            Status::Failure
        }
    })
}

pub fn check<H: SurvivalHost + 'static>(name: &'static str, check: Check<H>) -> Node<H> {
    builder::condition(move |ctx: &mut AgentContext<H>| {
        check(ctx).unwrap_or_else(|err| {
            warn!(node = name, error = %err, "condition failed");
            false
        })
    })
}

/// Inverted conditional. An error still fails the leaf.
pub fn check_not<H: SurvivalHost + 'static>(name: &'static str, check: Check<H>) -> Node<H> {
    builder::inverted(move |ctx: &mut AgentContext<H>| {
        check(ctx).unwrap_or_else(|err| {
            warn!(node = name, error = %err, "condition failed");
            true
        })
    })
}

/// Conditional that runs `probe` and writes its result under `key`.
///
/// `Some` is stored and the leaf succeeds; `None` clears the key and the leaf
/// fails. Actions guarded by this leaf read the staged value back from `key`.
pub fn staged<H, T>(name: &'static str, key: BbKey<Option<T>>, probe: Probe<H, T>) -> Node<H>
where
    H: SurvivalHost + 'static,
    T: 'static,
{
    builder::condition(move |ctx: &mut AgentContext<H>| {
        let found = probe(ctx).unwrap_or_else(|err| {
            warn!(node = name, error = %err, "probe failed");
            None
        });
        let hit = found.is_some();
        match ctx.set(key, found) {
            Ok(()) => hit,
            Err(err) => {
                warn!(node = name, error = %err, "staging failed");
                false
            }
        }
    })
}
