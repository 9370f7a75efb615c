use crate::env::{CoreStats, Job, JobDefinition, MonsterTemplate};

use super::{EntityId, Position, ResourceMeter};

/// Fields shared by every combatant on the grid.
///
/// Combat and abilities operate on `Actor` so the same rules apply to the
/// player and to monsters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub position: Position,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub attack: i32,
    pub defense: i32,
}

impl Actor {
    pub fn new(id: EntityId, name: impl Into<String>, glyph: char) -> Self {
        Self {
            id,
            name: name.into(),
            glyph,
            position: Position::ORIGIN,
            hp: ResourceMeter::default(),
            mp: ResourceMeter::default(),
            attack: 0,
            defense: 0,
        }
    }

    pub fn with_hp(mut self, max_hp: u32) -> Self {
        self.hp = ResourceMeter::full(max_hp);
        self
    }

    pub fn with_mp(mut self, max_mp: u32) -> Self {
        self.mp = ResourceMeter::full(max_mp);
        self
    }

    pub fn with_combat(mut self, attack: i32, defense: i32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp.current > 0
    }
}

/// Result of one level gained while applying XP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    pub level: u32,
    pub max_hp: u32,
}

/// The player character. Survives floor transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub actor: Actor,
    pub job: Job,
    pub stats: CoreStats,
    pub level: u32,
    pub xp: u32,
}

impl Player {
    pub const GLYPH: char = '@';
    pub const DEFAULT_NAME: &'static str = "Hero";
    pub const XP_PER_LEVEL: u32 = 100;
    pub const HP_PER_LEVEL: u32 = 5;

    /// Creates a level-1 player from a job definition, HP and MP full.
    ///
    /// A blank name falls back to [`Self::DEFAULT_NAME`].
    pub fn from_job(name: &str, definition: &JobDefinition) -> Self {
        let name = match name.trim() {
            "" => Self::DEFAULT_NAME,
            trimmed => trimmed,
        };
        let actor = Actor::new(EntityId::PLAYER, name, Self::GLYPH)
            .with_hp(definition.max_hp())
            .with_mp(definition.max_mp())
            .with_combat(definition.attack(), definition.defense());

        Self {
            actor,
            job: definition.job,
            stats: definition.base_stats,
            level: 1,
            xp: 0,
        }
    }

    /// XP needed to leave the current level.
    pub fn xp_threshold(&self) -> u32 {
        self.level * Self::XP_PER_LEVEL
    }

    /// Adds XP and applies every level-up it pays for, in order.
    ///
    /// Each level: threshold subtracted, MaxHP +5 and healed to full,
    /// attack +1, defense +1.
    pub fn gain_xp(&mut self, amount: u32) -> Vec<LevelUp> {
        self.xp = self.xp.saturating_add(amount);
        let mut gained = Vec::new();
        while self.xp >= self.xp_threshold() {
            self.xp -= self.xp_threshold();
            self.level += 1;
            self.actor.hp.grow(Self::HP_PER_LEVEL);
            self.actor.hp.refill();
            self.actor.attack += 1;
            self.actor.defense += 1;
            gained.push(LevelUp {
                level: self.level,
                max_hp: self.actor.hp.maximum,
            });
        }
        gained
    }

    /// Periodic HP regeneration: `max(1, MaxHP / 10)`. No effect on a dead
    /// player. Returns the amount restored.
    pub fn recover_hp(&mut self) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let amount = (self.actor.hp.maximum / 10).max(1);
        self.actor.hp.restore(amount)
    }

    /// Periodic MP regeneration: `max(1, MaxMP / 10)`. No effect on a dead
    /// player or a job without MP.
    pub fn recover_mp(&mut self) -> u32 {
        if !self.is_alive() || self.actor.mp.maximum == 0 {
            return 0;
        }
        let amount = (self.actor.mp.maximum / 10).max(1);
        self.actor.mp.restore(amount)
    }

    pub fn is_alive(&self) -> bool {
        self.actor.is_alive()
    }

    pub fn position(&self) -> Position {
        self.actor.position
    }
}

/// A hostile creature on the current floor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub actor: Actor,
    /// Manhattan distance within which the monster pursues.
    pub sight_range: u32,
    pub is_boss: bool,
}

impl Monster {
    pub const DEFAULT_SIGHT_RANGE: u32 = 8;

    pub fn from_template(
        id: EntityId,
        template: &MonsterTemplate,
        position: Position,
        sight_range: u32,
    ) -> Self {
        let actor = Actor::new(id, template.name.clone(), template.glyph)
            .with_hp(template.max_hp)
            .with_combat(template.attack, template.defense)
            .at(position);
        Self {
            actor,
            sight_range,
            is_boss: template.is_boss,
        }
    }

    pub fn id(&self) -> EntityId {
        self.actor.id
    }

    pub fn is_alive(&self) -> bool {
        self.actor.is_alive()
    }

    pub fn position(&self) -> Position {
        self.actor.position
    }
}
