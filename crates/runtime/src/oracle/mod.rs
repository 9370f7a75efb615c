//! Runtime wrapper around the static content tables.
//!
//! The tables from `game-content` already implement the `game-core` oracle
//! traits; [`OracleManager`] shares them behind `Arc`s so the simulation
//! worker can build a [`GameEnv`] on demand from any task. The data is
//! immutable at runtime; dynamic state lives in [`game_core::GameState`].
use std::sync::Arc;

use game_content::{AbilityCatalog, ContentBundle, JobTable, MonsterTable};
use game_core::{Env, GameEnv};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    jobs: Arc<JobTable>,
    monsters: Arc<MonsterTable>,
    abilities: Arc<AbilityCatalog>,
}

impl OracleManager {
    pub fn new(
        jobs: Arc<JobTable>,
        monsters: Arc<MonsterTable>,
        abilities: Arc<AbilityCatalog>,
    ) -> Self {
        Self {
            jobs,
            monsters,
            abilities,
        }
    }

    /// Takes ownership of the bundle's tables. The bundle's `GameConfig` is
    /// not an oracle and is left to the caller.
    pub fn from_bundle(bundle: ContentBundle) -> Self {
        Self::new(
            Arc::new(bundle.jobs),
            Arc::new(bundle.monsters),
            Arc::new(bundle.abilities),
        )
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::new(
            self.jobs.as_ref(),
            self.monsters.as_ref(),
            self.abilities.as_ref(),
        )
        .as_game_env()
    }

    pub fn jobs(&self) -> &JobTable {
        &self.jobs
    }
}
