//! Decision runtime for the survivor agent.
//!
//! This crate wires the generic behavior tree engine to the survivor domain
//! model. A host implements [`SurvivalHost`]; [`SurvivorAgent`] senses through
//! it every tick, evaluates the priority tree and hands back one
//! [`SteeringOutput`](survivor_core::SteeringOutput).
//!
//! Modules are organized by responsibility:
//! - [`blackboard`] and [`keys`] hold the typed shared state
//! - [`context`] bundles the blackboard with host, inventory and memory
//! - [`nodes`] are the policy leaves, [`subtrees`] group them into branches and
//!   [`presets`] assembles the root
//! - [`agent`] runs the per-tick loop
//! - [`sandbox`] is an in-memory host for tests and headless runs
//! - [`loader`] reads agent configuration from TOML
pub mod agent;
pub mod blackboard;
pub mod context;
pub mod error;
pub mod host;
pub mod keys;
pub mod loader;
pub mod nodes;
pub mod perception;
pub mod presets;
pub mod sandbox;
pub mod subtrees;

pub use agent::SurvivorAgent;
pub use blackboard::{BbKey, Blackboard, BlackboardError};
pub use context::AgentContext;
pub use error::{AgentError, HostError, Result};
pub use host::SurvivalHost;
pub use loader::ConfigLoader;
pub use perception::Perception;
pub use presets::BehaviorTree;
pub use sandbox::{HostCommand, SandboxHost};
