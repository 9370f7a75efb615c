//! In-memory content tables.
//!
//! Each table implements one of the `game-core` oracle traits, so a loaded
//! [`ContentBundle`] can be handed to the engine as a [`game_core::Env`].
mod abilities;
mod jobs;
mod monsters;

pub use abilities::{AbilityCatalog, JobAbilities};
pub use jobs::JobTable;
pub use monsters::{MonsterKind, MonsterTable, MonsterTier};

use game_core::{Env, GameConfig};

/// Everything a session needs besides the player's choices.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: GameConfig,
    pub jobs: JobTable,
    pub monsters: MonsterTable,
    pub abilities: AbilityCatalog,
}

impl ContentBundle {
    /// Borrows the tables as an engine environment.
    pub fn env(&self) -> Env<'_, JobTable, MonsterTable, AbilityCatalog> {
        Env::new(&self.jobs, &self.monsters, &self.abilities)
    }
}
