//! Agent configuration loader.

use std::path::Path;

use anyhow::Context as _;
use survivor_core::AgentConfig;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Loader for [`AgentConfig`] from TOML files.
///
/// Every field is optional in the file; missing ones keep their defaults.
///
/// ```toml
/// item_fetch_max_range = 60.0
///
/// [inventory]
/// guns = 1
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load agent config from {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<AgentConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
