//! Ability catalog loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::tables::AbilityCatalog;

/// Loader for per-job ability lists from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse a catalog, rejecting hotkeys bound twice within one job and
    /// abilities with no effects.
    pub fn parse(content: &str) -> LoadResult<AbilityCatalog> {
        let catalog: AbilityCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;

        let conflicts = catalog.hotkey_conflicts();
        anyhow::ensure!(
            conflicts.is_empty(),
            "hotkeys bound more than once: {:?}",
            conflicts
        );

        let empty = catalog
            .entries()
            .iter()
            .flat_map(|entry| entry.abilities.iter())
            .find(|ability| ability.effects.is_empty());
        if let Some(ability) = empty {
            anyhow::bail!("ability {} has no effects", ability.id);
        }

        Ok(catalog)
    }
}
