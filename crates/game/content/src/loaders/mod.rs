//! Content loaders for reading game data from files.
//!
//! Each loader parses one file into a table from [`crate::tables`]. RON is
//! used for content tables and TOML for the game configuration. The built-in
//! data set under `data/` is embedded at compile time (see [`builtin`]).

pub mod abilities;
pub mod builtin;
pub mod config;
pub mod factory;
pub mod jobs;
pub mod monsters;

pub use abilities::AbilityLoader;
pub use builtin::load_builtin;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use jobs::JobLoader;
pub use monsters::MonsterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
