//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities, the current
//! floor, turn bookkeeping, and the message log. Runtime layers query this
//! state but mutate it exclusively through the engine.
mod common;
mod entities;
mod log;
mod registry;
mod snapshot;
mod turn;

pub use common::{EntityId, Position, ResourceMeter};
pub use entities::{Actor, LevelUp, Monster, Player};
pub use log::MessageLog;
pub use registry::EntityRegistry;
pub use snapshot::{MonsterSnapshot, PlayerSnapshot};
pub use turn::{TurnPhase, TurnState};

use sha2::{Digest, Sha256};

use crate::ability::CooldownTracker;
use crate::config::GameConfig;
use crate::env::PcgRng;
use crate::map::{Room, TileGrid};
use crate::vision::VisibilityTracker;

/// Canonical snapshot of the deterministic game state.
///
/// Floor transition replaces `grid`, `rooms`, `visibility`, and the monster
/// list together; the player and the cooldown tracker are the only pieces
/// that carry over.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Seed the RNG stream was created from. Never modified.
    pub seed: u64,
    pub config: GameConfig,
    /// The single random stream threaded through generation, combat, and AI.
    pub rng: PcgRng,
    pub turn: TurnState,
    pub grid: TileGrid,
    /// Rooms of the current floor in placement order (one arena on boss floors).
    pub rooms: Vec<Room>,
    pub visibility: VisibilityTracker,
    pub entities: EntityRegistry,
    pub log: MessageLog,
    pub cooldowns: CooldownTracker,
}

impl GameState {
    /// Creates a state with a player but no floor yet.
    ///
    /// The engine generates floor 1 when the game starts; until then the grid
    /// is solid wall and the phase is `AwaitingFloorStart`.
    pub fn new(seed: u64, config: GameConfig, player: Player) -> Self {
        let (width, height) = (config.width, config.height);
        let log = MessageLog::new(config.effective_message_capacity());
        Self {
            seed,
            rng: PcgRng::seed_from_u64(seed),
            turn: TurnState::new(),
            grid: TileGrid::new(width, height),
            rooms: Vec::new(),
            visibility: VisibilityTracker::new(width, height),
            entities: EntityRegistry::new(player),
            log,
            cooldowns: CooldownTracker::new(),
            config,
        }
    }

    // ===== query surface =====

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn floor(&self) -> u32 {
        self.turn.floor
    }

    pub fn turn_number(&self) -> u64 {
        self.turn.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.turn.phase.is_terminal()
    }

    pub fn is_boss_floor(&self) -> bool {
        self.config.is_boss_floor(self.turn.floor)
    }

    pub fn player(&self) -> &Player {
        self.entities.player()
    }

    pub fn glyph_at(&self, position: Position) -> char {
        self.grid.glyph_at(position)
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.visibility.is_explored(position)
    }

    /// True when `position` is within the visibility radius of the player's
    /// present position.
    pub fn is_currently_visible(&self, position: Position) -> bool {
        VisibilityTracker::is_currently_visible(
            position,
            self.player().position(),
            self.config.visibility_radius,
        )
    }

    pub fn player_snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot::from(self.player())
    }

    /// Live monsters only, in spawn order.
    pub fn monster_snapshots(&self) -> Vec<MonsterSnapshot> {
        self.entities
            .living_monsters()
            .map(MonsterSnapshot::from)
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.log.snapshot()
    }

    /// SHA-256 over everything that makes two runs observably different:
    /// counters, tiles, stairs, exploration, every entity, cooldowns, and the
    /// message log.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();

        hasher.update(self.seed.to_le_bytes());
        hasher.update(self.turn.floor.to_le_bytes());
        hasher.update(self.turn.turn.to_le_bytes());
        hasher.update(self.turn.phase.as_ref().as_bytes());

        hasher.update(self.grid.width().to_le_bytes());
        hasher.update(self.grid.height().to_le_bytes());
        hasher.update(self.grid.tile_bytes().collect::<Vec<_>>());
        for stairs in [self.grid.down_stairs(), self.grid.up_stairs()] {
            match stairs {
                Some(p) => {
                    hasher.update([1u8]);
                    hash_position(&mut hasher, p);
                }
                None => hasher.update([0u8]),
            }
        }
        hasher.update(self.visibility.explored_bytes().collect::<Vec<_>>());

        let player = self.player();
        hash_actor(&mut hasher, &player.actor);
        hasher.update(player.job.as_ref().as_bytes());
        hasher.update(player.level.to_le_bytes());
        hasher.update(player.xp.to_le_bytes());

        for monster in self.entities.monsters() {
            hash_actor(&mut hasher, &monster.actor);
            hasher.update([u8::from(monster.is_boss)]);
        }

        for (entity, ability, turns) in self.cooldowns.iter() {
            hasher.update(entity.0.to_le_bytes());
            hasher.update(ability.as_str().as_bytes());
            hasher.update(turns.to_le_bytes());
        }

        for message in self.log.iter() {
            hasher.update(message.as_bytes());
            hasher.update([0u8]);
        }

        hasher.finalize().into()
    }
}

fn hash_position(hasher: &mut Sha256, position: Position) {
    hasher.update(position.x.to_le_bytes());
    hasher.update(position.y.to_le_bytes());
}

fn hash_actor(hasher: &mut Sha256, actor: &Actor) {
    hasher.update(actor.id.0.to_le_bytes());
    hasher.update(actor.name.as_bytes());
    hash_position(hasher, actor.position);
    for meter in [actor.hp, actor.mp] {
        hasher.update(meter.current.to_le_bytes());
        hasher.update(meter.maximum.to_le_bytes());
    }
    hasher.update(actor.attack.to_le_bytes());
    hasher.update(actor.defense.to_le_bytes());
}
