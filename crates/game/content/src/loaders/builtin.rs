//! The embedded default data set.

use anyhow::Context;

use crate::loaders::{AbilityLoader, ConfigLoader, JobLoader, LoadResult, MonsterLoader};
use crate::tables::ContentBundle;

const CONFIG_TOML: &str = include_str!("../../data/config.toml");
const JOBS_RON: &str = include_str!("../../data/jobs.ron");
const MONSTERS_RON: &str = include_str!("../../data/monsters.ron");
const ABILITIES_RON: &str = include_str!("../../data/abilities.ron");

/// Parses the data files compiled into this crate.
pub fn load_builtin() -> LoadResult<ContentBundle> {
    Ok(ContentBundle {
        config: ConfigLoader::parse(CONFIG_TOML).context("built-in config.toml")?,
        jobs: JobLoader::parse(JOBS_RON).context("built-in jobs.ron")?,
        monsters: MonsterLoader::parse(MONSTERS_RON).context("built-in monsters.ron")?,
        abilities: AbilityLoader::parse(ABILITIES_RON).context("built-in abilities.ron")?,
    })
}
