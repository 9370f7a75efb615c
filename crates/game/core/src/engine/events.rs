use crate::env::AbilityId;
use crate::state::{EntityId, LevelUp, Position};

/// Notable things that happened while resolving one intent.
///
/// The message log carries the player-facing text; these are the structured
/// counterpart for runtimes and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    FloorEntered { floor: u32, boss_floor: bool },
    MonsterSlain { id: EntityId, name: String, xp: u32 },
    LeveledUp(LevelUp),
    /// The boss fell and the down staircase was carved.
    BossDefeated { name: String, stairs: Position },
    AbilityUsed { ability: AbilityId },
    AbilityMenuOpened,
    PlayerDied { killer: String },
}

/// Result of an accepted intent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// False only for presentation intents (ability menu).
    pub consumed: bool,
    pub events: Vec<TurnEvent>,
}
