//! Leaf behavior nodes.
//!
//! Leaves wrap plain functions or closures over the context:
//! - [`Action`]: runs a function and returns its status verbatim
//! - [`Conditional`]: maps a predicate onto `Success` / `Failure`
//! - [`InvertedConditional`]: maps a predicate onto `Failure` / `Success`
//!
//! Every leaf completes within the tick that evaluates it. Conditionals are
//! allowed to write to the context while they evaluate, so a predicate can stage
//! what it found (e.g. "the nearest needed item") for the actions guarded by it.

use crate::{Behavior, Status};

type ActionFn<C> = dyn Fn(&mut C) -> Status + Send + Sync;
type PredicateFn<C> = dyn Fn(&mut C) -> bool + Send + Sync;

/// Runs a function and returns its result.
///
/// This is the only leaf that is expected to request side effects outside the
/// context (e.g. issuing a command to a host).
pub struct Action<C> {
    run: Box<ActionFn<C>>,
}

impl<C> Action<C> {
    /// Creates an action leaf.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        Self { run: Box::new(run) }
    }
}

impl<C> Behavior<C> for Action<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (self.run)(ctx)
    }
}

/// Evaluates a predicate: `true` is `Success`, `false` is `Failure`.
pub struct Conditional<C> {
    predicate: Box<PredicateFn<C>>,
}

impl<C> Conditional<C> {
    /// Creates a conditional leaf.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&mut C) -> bool + Send + Sync + 'static,
    {
        Self { predicate: Box::new(predicate) }
    }
}

impl<C> Behavior<C> for Conditional<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool((self.predicate)(ctx))
    }
}

/// Evaluates a predicate: `true` is `Failure`, `false` is `Success`.
pub struct InvertedConditional<C> {
    predicate: Box<PredicateFn<C>>,
}

impl<C> InvertedConditional<C> {
    /// Creates an inverted conditional leaf.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&mut C) -> bool + Send + Sync + 'static,
    {
        Self { predicate: Box::new(predicate) }
    }
}

impl<C> Behavior<C> for InvertedConditional<C> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from_bool(!(self.predicate)(ctx))
    }
}
