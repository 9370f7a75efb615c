//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate config TOML.
    ///
    /// Rejects room ranges that cannot produce a single room; a grid too
    /// small for the rooms is left to the engine, which reports it as a
    /// setup error.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.min_room_size < config.max_room_size,
            "room size range [{}, {}) is empty",
            config.min_room_size,
            config.max_room_size
        );
        anyhow::ensure!(
            config.min_rooms < config.max_rooms,
            "room count range [{}, {}) is empty",
            config.min_rooms,
            config.max_rooms
        );

        Ok(config)
    }
}
