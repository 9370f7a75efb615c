//! Data-driven content definitions and loaders.
//!
//! This crate houses the static game content and the loaders for its data
//! files:
//! - Job base-stat table (RON)
//! - Floor-tiered monster pools and boss names (RON)
//! - Per-job ability catalog (RON)
//! - Game configuration (TOML)
//!
//! The tables implement the `game-core` oracle traits directly; content is
//! consumed through [`game_core::Env`] and never appears in game state.

pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::{
    AbilityCatalog, ContentBundle, JobAbilities, JobTable, MonsterKind, MonsterTable, MonsterTier,
};

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ConfigLoader, ContentFactory, JobLoader, LoadResult, MonsterLoader,
    load_builtin,
};
