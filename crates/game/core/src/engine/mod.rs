//! Turn state machine.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. One
//! call to [`GameEngine::submit_intent`] runs one full turn: the player's
//! intent, every living monster, regeneration, cooldowns, the turn counter,
//! and the game-over check. Rejected intents return an
//! [`IntentRejection`] and leave the turn unconsumed.
//!
//! Work is split by concern across submodules, all as `impl GameEngine`
//! blocks:
//!
//! - `floor`: generation, population, and transitions
//! - `turns`: the per-turn sequence and player intent resolution
//! - `hooks`: the damage/targeting/XP surface shared by melee and abilities

mod errors;
mod events;
mod floor;
mod hooks;
mod intent;
mod turns;

pub use errors::{IntentRejection, TurnError};
pub use events::{TurnEvent, TurnReport};
pub use floor::monster_count;
pub use intent::Intent;

use crate::config::GameConfig;
use crate::env::{GameEnv, Job};
use crate::error::SetupError;
use crate::map::DungeonGenerator;
use crate::state::{GameState, Player, TurnPhase};

/// Drives a [`GameState`] through floors and turns.
///
/// Holds no state of its own beyond the events gathered while resolving the
/// current intent, so it can be created per call like a cursor.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    events: Vec<TurnEvent>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Generates floor 1 and opens the first turn.
    ///
    /// # Errors
    ///
    /// Fails when the configuration cannot produce a floor or the content
    /// oracles cannot populate it.
    pub fn start(&mut self, env: GameEnv<'_>) -> Result<Vec<TurnEvent>, SetupError> {
        let floor = self.state.turn.floor.max(1);
        self.enter_floor(env, floor, Arrival::FromAbove)?;
        Ok(self.take_events())
    }

    fn generator(&self) -> Result<DungeonGenerator, SetupError> {
        DungeonGenerator::new(&self.state.config)
    }

    fn push_event(&mut self, event: TurnEvent) {
        self.events.push(event);
    }

    fn take_events(&mut self) -> Vec<TurnEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_phase(&mut self, phase: TurnPhase) {
        self.state.turn.phase = phase;
    }
}

/// Which staircase the player arrives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Arrival {
    /// Came down: start on up stairs if the floor has them.
    FromAbove,
    /// Came up: start on the down stairs.
    FromBelow,
}

/// Builds a player from the job table and starts a session on floor 1.
///
/// # Errors
///
/// See [`GameEngine::start`]; also fails when `job` is missing from the job
/// table.
pub fn new_game(
    seed: u64,
    config: GameConfig,
    player_name: &str,
    job: Job,
    env: GameEnv<'_>,
) -> Result<GameState, SetupError> {
    let definition = env.job(job)?;
    let player = Player::from_job(player_name, definition);
    let mut state = GameState::new(seed, config, player);
    GameEngine::new(&mut state).start(env)?;
    Ok(state)
}
