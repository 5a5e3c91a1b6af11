//! Lightweight behavior tree library for per-tick reactive agents.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! where the whole tree is re-evaluated from the root on every tick.
//!
//! - **No resumption**: No node keeps execution state between ticks
//! - **Static trees**: Built once, immutable afterwards
//! - **Context-driven**: Nodes communicate only through the context `C`
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Failure or Running
//! - Leaf nodes: [`Action`], [`Conditional`], [`InvertedConditional`]
//! - Composite nodes: [`Sequence`], [`Selector`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use leaf::{Action, Conditional, InvertedConditional};
pub use status::Status;
