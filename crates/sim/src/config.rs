//! Simulation settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Headless run configuration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of ticks to run.
    pub ticks: u64,
    /// Seed for the scenario layout.
    pub seed: u64,
    /// Seconds per tick.
    pub dt: f32,
    /// Optional TOML file overriding the agent defaults.
    pub agent_config: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 2_000,
            seed: 7,
            dt: 0.1,
            agent_config: None,
        }
    }
}

impl SimConfig {
    /// Construct simulation configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SIM_TICKS` - Number of ticks to run (default: 2000)
    /// - `SIM_SEED` - Scenario seed (default: 7)
    /// - `SIM_DT` - Seconds per tick (default: 0.1)
    /// - `AGENT_CONFIG` - Path to an agent TOML file (default: built-in defaults)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ticks) = read_env::<u64>("SIM_TICKS") {
            config.ticks = ticks;
        }
        if let Some(seed) = read_env::<u64>("SIM_SEED") {
            config.seed = seed;
        }
        if let Some(dt) = read_env::<f32>("SIM_DT") {
            config.dt = dt.max(0.001);
        }
        config.agent_config = read_env::<PathBuf>("AGENT_CONFIG");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
