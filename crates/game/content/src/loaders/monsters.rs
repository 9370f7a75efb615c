//! Monster table loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::tables::MonsterTable;

/// Loader for floor-tiered monsters and boss names from RON files.
pub struct MonsterLoader;

impl MonsterLoader {
    pub fn load(path: &Path) -> LoadResult<MonsterTable> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate a monster table.
    ///
    /// Tiers must be in ascending floor order and non-empty, and at least one
    /// boss name must be present.
    pub fn parse(content: &str) -> LoadResult<MonsterTable> {
        let table: MonsterTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster table RON: {}", e))?;

        anyhow::ensure!(!table.tiers.is_empty(), "monster table has no tiers");
        anyhow::ensure!(table.is_sorted(), "monster tiers are not in ascending floor order");
        if let Some(tier) = table.tiers.iter().find(|tier| tier.kinds.is_empty()) {
            anyhow::bail!("monster tier up to floor {} has no kinds", tier.max_floor);
        }
        anyhow::ensure!(!table.bosses.is_empty(), "boss table is empty");

        Ok(table)
    }
}
