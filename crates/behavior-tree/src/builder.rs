//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{Action, Behavior, Conditional, InvertedConditional, Selector, Sequence, Status};

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates an action leaf.
#[inline]
pub fn action<C: 'static, F>(run: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&mut C) -> Status + Send + Sync + 'static,
{
    Box::new(Action::new(run))
}

/// Creates a conditional leaf.
#[inline]
pub fn condition<C: 'static, F>(predicate: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&mut C) -> bool + Send + Sync + 'static,
{
    Box::new(Conditional::new(predicate))
}

/// Creates an inverted conditional leaf.
#[inline]
pub fn inverted<C: 'static, F>(predicate: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&mut C) -> bool + Send + Sync + 'static,
{
    Box::new(InvertedConditional::new(predicate))
}
