//! Per-tick driver: sense, remember, decide, actuate.

use behavior_tree::{Behavior, Status};
use survivor_core::{AgentConfig, Inventory, SteeringOutput};
use tracing::{debug, trace, warn};

use crate::blackboard::Blackboard;
use crate::context::AgentContext;
use crate::error::Result;
use crate::host::SurvivalHost;
use crate::keys;
use crate::perception::Perception;
use crate::presets::{self, BehaviorTree};

/// One survivor agent bound to its host.
///
/// The tree is built once in [`SurvivorAgent::new`] and evaluated from the
/// root on every [`update`](SurvivorAgent::update).
pub struct SurvivorAgent<H: SurvivalHost + 'static> {
    tree: BehaviorTree<H>,
    ctx: AgentContext<H>,
    ticks: u64,
}

impl<H: SurvivalHost + 'static> SurvivorAgent<H> {
    /// Builds an agent running the standard [`presets::survivor`] tree.
    pub fn new(host: H, config: AgentConfig) -> Result<Self> {
        Self::with_tree(host, config, presets::survivor())
    }

    /// Builds an agent running a custom tree over the same context.
    pub fn with_tree(host: H, config: AgentConfig, tree: BehaviorTree<H>) -> Result<Self> {
        let inventory = Inventory::new(config.inventory, host.inventory_capacity())?;

        let mut blackboard = Blackboard::new();
        keys::register_defaults(&mut blackboard, &config, host.agent_info(), host.world_info())?;

        debug!(
            capacity = inventory.capacity(),
            guns = config.inventory.guns,
            medkits = config.inventory.medkits,
            food = config.inventory.food,
            "survivor agent ready"
        );

        Ok(Self {
            tree,
            ctx: AgentContext::new(host, config, inventory, blackboard),
            ticks: 0,
        })
    }

    /// Runs one decision tick and returns the steering command for the host.
    ///
    /// `_dt` is accepted for the host's update signature; the policy itself is
    /// tick-rate independent.
    pub fn update(&mut self, _dt: f32) -> SteeringOutput {
        self.ticks += 1;
        let ctx = &mut self.ctx;

        ctx.put(keys::IS_NEW_HOUSE_DISCOVERED, false);
        ctx.put(keys::IS_RUNNING, false);

        ctx.perception = Perception::sense(&ctx.host);
        remember_visible_items(ctx);

        let agent = ctx.host.agent_info();
        ctx.put(keys::AGENT_INFO, agent);

        let houses = std::mem::take(&mut ctx.perception.houses);
        for house in &houses {
            if ctx.houses.add_if_new(*house) {
                ctx.put(keys::IS_NEW_HOUSE_DISCOVERED, true);
                debug!(x = house.center.x, y = house.center.y, "house discovered");
            }
        }
        ctx.perception.houses = houses;

        let status = self.tree.tick(ctx);
        trace!(tick = self.ticks, ?status, "tree evaluated");
        if status == Status::Failure {
            debug!(tick = self.ticks, "no branch applied");
        }

        match ctx.get(keys::STEERING_OUTPUT) {
            Ok(output) => output,
            Err(err) => {
                warn!(error = %err, "steering output unavailable");
                SteeringOutput::default()
            }
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn context(&self) -> &AgentContext<H> {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut AgentContext<H> {
        &mut self.ctx
    }

    pub fn host(&self) -> &H {
        &self.ctx.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.ctx.host
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.ctx.blackboard
    }

    pub fn inventory(&self) -> &Inventory {
        &self.ctx.inventory
    }

    pub fn into_host(self) -> H {
        self.ctx.host
    }
}

/// Adds newly seen items to memory, deduplicated by location.
fn remember_visible_items<H: SurvivalHost>(ctx: &mut AgentContext<H>) {
    let seen: Vec<_> = ctx
        .perception
        .item_details(&ctx.host)
        .map(|(_, item)| item)
        .collect();
    for item in seen {
        if ctx.memory.remember(item) {
            trace!(kind = %item.kind, x = item.location.x, y = item.location.y, "item remembered");
        }
    }
}
