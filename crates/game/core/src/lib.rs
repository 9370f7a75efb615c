//! Deterministic rules for a turn-based dungeon crawl.
//!
//! `game-core` owns the canonical simulation: floor generation, fog of war,
//! melee and ability resolution, monster movement, and the turn state machine.
//! It performs no I/O and reads content (jobs, monsters, abilities) through
//! the oracle traits in [`env`]. All state mutation flows through
//! [`engine::GameEngine`]; every random draw comes from the single seeded
//! stream held in [`GameState`], so a seed plus an intent sequence replays
//! exactly.
pub mod ability;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod map;
pub mod state;
pub mod vision;

pub use ability::CooldownTracker;
pub use config::GameConfig;
pub use engine::{
    GameEngine, Intent, IntentRejection, TurnError, TurnEvent, TurnReport, new_game,
};
pub use env::{
    AbilityDefinition, AbilityEffect, AbilityId, AbilityKind, AbilityOracle, CoreStats, Env,
    GameEnv, Job, JobDefinition, JobOracle, MonsterOracle, MonsterTemplate, OracleError, PcgRng,
    RngStream,
};
pub use error::{ErrorSeverity, GameError, SetupError};
pub use map::{DungeonGenerator, Room, TileGrid, TileKind};
pub use state::{
    Actor, EntityId, GameState, MessageLog, Monster, MonsterSnapshot, Player, PlayerSnapshot,
    Position, ResourceMeter, TurnPhase,
};
pub use vision::VisibilityTracker;
