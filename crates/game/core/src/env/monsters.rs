//! Monster templates and the floor-tiered oracle that serves them.

use super::{OracleError, RngStream};

/// Fully resolved stats for one monster about to be spawned.
///
/// Floor scaling is already applied by the oracle; the engine copies these
/// numbers into a fresh [`Monster`](crate::state::Monster).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub name: String,
    pub glyph: char,
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub is_boss: bool,
}

impl MonsterTemplate {
    pub fn new(name: impl Into<String>, glyph: char, max_hp: u32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            glyph,
            max_hp,
            attack,
            defense,
            is_boss: false,
        }
    }

    pub fn boss(mut self) -> Self {
        self.is_boss = true;
        self
    }
}

/// Floor-tiered monster content.
///
/// Both rolls draw from the session's RNG stream so that spawns are part of
/// the deterministic sequence.
pub trait MonsterOracle: Send + Sync {
    /// Roll a regular monster for the given floor.
    fn roll_monster(
        &self,
        floor: u32,
        rng: &mut dyn RngStream,
    ) -> Result<MonsterTemplate, OracleError>;

    /// Roll the boss guarding a boss floor.
    fn roll_boss(&self, floor: u32, rng: &mut dyn RngStream)
    -> Result<MonsterTemplate, OracleError>;
}
