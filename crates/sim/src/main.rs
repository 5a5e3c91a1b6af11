//! Headless survivor simulation.
//!
//! Builds a seeded sandbox world, then alternates agent decisions and host
//! physics for a fixed number of ticks.
//!
//! ```bash
//! SIM_TICKS=500 SIM_SEED=3 RUST_LOG=survivor_runtime=debug cargo run -p survivor-sim
//! ```
mod config;
mod scenario;

use anyhow::Result;
use survivor_core::{AgentConfig, ItemKind};
use survivor_runtime::{ConfigLoader, SurvivorAgent};

use crate::config::SimConfig;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let sim = SimConfig::from_env();
    let agent_config = match &sim.agent_config {
        Some(path) => ConfigLoader::load(path)?,
        None => AgentConfig::default(),
    };

    tracing::info!("Starting survivor simulation");
    tracing::info!("Seed: {}, ticks: {}, dt: {}", sim.seed, sim.ticks, sim.dt);

    let host = scenario::generate(sim.seed);
    let mut agent = SurvivorAgent::new(host, agent_config)?;

    for tick in 0..sim.ticks {
        let output = agent.update(sim.dt);
        agent.host_mut().step(&output, sim.dt);

        let state = *agent.host().agent();
        if tick % 100 == 0 {
            tracing::debug!(
                tick,
                x = state.position.x,
                y = state.position.y,
                health = state.health,
                energy = state.energy,
                "agent state"
            );
        }
        if state.health <= 0.0 {
            tracing::info!("Agent died at tick {}", tick);
            break;
        }
    }

    let state = *agent.host().agent();
    let inventory = agent.inventory();
    tracing::info!(
        "Finished after {} ticks: health {:.1}, energy {:.1}, houses {}, remembered items {}",
        agent.ticks(),
        state.health,
        state.energy,
        agent.context().houses.len(),
        agent.context().memory.len(),
    );
    tracing::info!(
        "Inventory: {} guns, {} medkits, {} food",
        inventory.count(ItemKind::Pistol),
        inventory.count(ItemKind::Medkit),
        inventory.count(ItemKind::Food),
    );

    Ok(())
}
