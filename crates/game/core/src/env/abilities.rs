//! Ability descriptors and the per-job catalog oracle.
//!
//! Abilities are data: an ordered list of effects interpreted by
//! [`GameEngine::use_ability`](crate::engine::GameEngine::use_ability). No
//! ability is special-cased in engine code.

use std::fmt;

use super::Job;

/// Stable identifier of an ability within the catalog (e.g. `"holy_strike"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityId(pub String);

impl AbilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad category shown by menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    Offensive,
    Defensive,
    Utility,
    Healing,
}

/// One step of an ability. Powers are integer percentages (150 = ×1.5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityEffect {
    /// Hit the nearest living monster within spell range for
    /// `(attack + INT) * power / 100`.
    Strike { power: u32 },
    /// Hit every living monster on the eight surrounding tiles for
    /// `attack * power / 100`.
    Sweep { power: u32 },
    /// Restore `max_hp / divisor` HP.
    RestoreHp { divisor: u32 },
    /// Restore `base + MND * mnd_scale` HP.
    HealFlat { base: u32, mnd_scale: u32 },
    /// Restore `max_mp / divisor` MP.
    RestoreMp { divisor: u32 },
    /// Permanently raise attack.
    RaiseAttack { amount: i32 },
}

impl AbilityEffect {
    /// True for effects that need at least one monster to land.
    pub fn requires_target(&self) -> bool {
        matches!(self, Self::Strike { .. } | Self::Sweep { .. })
    }
}

/// Static description of a single ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityDefinition {
    pub id: AbilityId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub mp_cost: u32,
    /// Turns before the ability can be used again (0 = no cooldown).
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
    pub hotkey: char,
    pub kind: AbilityKind,
    pub effects: Vec<AbilityEffect>,
}

/// Per-job ability lists, loaded once and never mutated.
pub trait AbilityOracle: Send + Sync {
    /// Abilities available to a job, in hotkey order. Empty if none.
    fn abilities(&self, job: Job) -> &[AbilityDefinition];

    fn ability_by_hotkey(&self, job: Job, hotkey: char) -> Option<&AbilityDefinition> {
        self.abilities(job).iter().find(|a| a.hotkey == hotkey)
    }
}
