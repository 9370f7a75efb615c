//! Content factory for building a content bundle from data files.

use std::path::{Path, PathBuf};

use game_core::GameConfig;

use crate::loaders::{AbilityLoader, ConfigLoader, JobLoader, LoadResult, MonsterLoader};
use crate::tables::{AbilityCatalog, ContentBundle, JobTable, MonsterTable};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── jobs.ron
/// ├── monsters.ron
/// └── abilities.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the job table from `jobs.ron`.
    pub fn load_jobs(&self) -> LoadResult<JobTable> {
        JobLoader::load(&self.data_dir.join("jobs.ron"))
    }

    /// Load monster tiers and boss names from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<MonsterTable> {
        MonsterLoader::load(&self.data_dir.join("monsters.ron"))
    }

    /// Load the per-job ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<AbilityCatalog> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load every file in the directory.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            config: self.load_config()?,
            jobs: self.load_jobs()?,
            monsters: self.load_monsters()?,
            abilities: self.load_abilities()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_files_name_the_path() {
        let factory = ContentFactory::new("/nonexistent/content");
        let err = factory.load_jobs().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/content/jobs.ron"));
    }

    #[test]
    fn crate_data_directory_loads() {
        let factory = ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
        let bundle = factory.load_all().unwrap();
        assert_eq!(bundle.jobs.len(), 22);
    }
}
