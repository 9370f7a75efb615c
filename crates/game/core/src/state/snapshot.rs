//! Read-only views handed to presentation layers.

use crate::env::Job;

use super::{EntityId, Monster, Player, Position, ResourceMeter};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub name: String,
    pub job: Job,
    pub position: Position,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub attack: i32,
    pub defense: i32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.actor.name.clone(),
            job: player.job,
            position: player.actor.position,
            hp: player.actor.hp,
            mp: player.actor.mp,
            attack: player.actor.attack,
            defense: player.actor.defense,
            level: player.level,
            xp: player.xp,
            xp_to_next: player.xp_threshold(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSnapshot {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub position: Position,
    pub hp: ResourceMeter,
    pub is_boss: bool,
}

impl From<&Monster> for MonsterSnapshot {
    fn from(monster: &Monster) -> Self {
        Self {
            id: monster.id(),
            name: monster.actor.name.clone(),
            glyph: monster.actor.glyph,
            position: monster.position(),
            hp: monster.actor.hp,
            is_boss: monster.is_boss,
        }
    }
}
