use serde::{Deserialize, Serialize};

use game_core::{Intent, IntentRejection, TurnEvent};

/// Notifications published by the simulation worker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An intent consumed a turn. `turn` is the counter after the turn closed.
    TurnCompleted { turn: u64, floor: u32, intent: Intent },
    IntentRejected {
        intent: Intent,
        reason: IntentRejection,
    },
    FloorEntered { floor: u32, boss_floor: bool },
    MonsterSlain { name: String, xp: u32 },
    LevelUp { level: u32, max_hp: u32 },
    BossDefeated { name: String, floor: u32 },
    GameOver {
        floor: u32,
        turn: u64,
        killer: Option<String>,
    },
}

impl GameEvent {
    /// Maps an engine event onto the public stream.
    ///
    /// Presentation-only engine events (ability use, the ability menu) and
    /// the death notice have no counterpart here; death is reported once as
    /// [`GameEvent::GameOver`] after the turn closes.
    pub fn from_turn_event(event: &TurnEvent, floor: u32) -> Option<Self> {
        match event {
            TurnEvent::FloorEntered { floor, boss_floor } => Some(Self::FloorEntered {
                floor: *floor,
                boss_floor: *boss_floor,
            }),
            TurnEvent::MonsterSlain { name, xp, .. } => Some(Self::MonsterSlain {
                name: name.clone(),
                xp: *xp,
            }),
            TurnEvent::LeveledUp(level) => Some(Self::LevelUp {
                level: level.level,
                max_hp: level.max_hp,
            }),
            TurnEvent::BossDefeated { name, .. } => Some(Self::BossDefeated {
                name: name.clone(),
                floor,
            }),
            TurnEvent::AbilityUsed { .. }
            | TurnEvent::AbilityMenuOpened
            | TurnEvent::PlayerDied { .. } => None,
        }
    }
}
