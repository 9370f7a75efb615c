//! Floor-tiered monster pools and the boss table.

use game_core::{MonsterOracle, MonsterTemplate, OracleError, RngStream};

/// Glyph shared by every boss.
pub const BOSS_GLYPH: char = 'B';

/// One monster kind: bonuses on top of the floor baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterKind {
    pub name: String,
    pub glyph: char,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: i32,
}

impl MonsterKind {
    /// Applies the floor baseline: HP `8 + 2f`, attack `3 + f/2`,
    /// defense `1 + f/3`.
    pub fn at_floor(&self, floor: u32) -> MonsterTemplate {
        let hp = 8 + 2 * floor + self.hp;
        let attack = 3 + (floor / 2) as i32 + self.attack;
        let defense = 1 + (floor / 3) as i32 + self.defense;
        MonsterTemplate::new(self.name.clone(), self.glyph, hp, attack, defense)
    }
}

/// Kinds that appear on floors up to and including `max_floor`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTier {
    pub max_floor: u32,
    pub kinds: Vec<MonsterKind>,
}

/// Monster content: tiers in ascending `max_floor` order plus boss names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTable {
    pub tiers: Vec<MonsterTier>,
    pub bosses: Vec<String>,
}

impl MonsterTable {
    /// Kinds eligible on `floor`: the first tier whose `max_floor` covers it,
    /// or every kind once the floor is past the deepest tier.
    pub fn pool(&self, floor: u32) -> Vec<&MonsterKind> {
        match self.tiers.iter().find(|tier| floor <= tier.max_floor) {
            Some(tier) => tier.kinds.iter().collect(),
            None => self.tiers.iter().flat_map(|tier| tier.kinds.iter()).collect(),
        }
    }

    /// Boss stats on `floor`: HP `30 + 12f`, attack `5 + 2f`, defense `3 + f`.
    pub fn boss_at_floor(name: &str, floor: u32) -> MonsterTemplate {
        MonsterTemplate::new(
            name,
            BOSS_GLYPH,
            30 + 12 * floor,
            5 + 2 * floor as i32,
            3 + floor as i32,
        )
        .boss()
    }

    /// True when tiers are listed in strictly ascending floor order.
    pub fn is_sorted(&self) -> bool {
        self.tiers
            .windows(2)
            .all(|pair| pair[0].max_floor < pair[1].max_floor)
    }
}

impl MonsterOracle for MonsterTable {
    fn roll_monster(
        &self,
        floor: u32,
        rng: &mut dyn RngStream,
    ) -> Result<MonsterTemplate, OracleError> {
        let pool = self.pool(floor);
        if pool.is_empty() {
            return Err(OracleError::EmptyMonsterPool(floor));
        }
        let index = rng.below(pool.len() as u32) as usize;
        Ok(pool[index].at_floor(floor))
    }

    fn roll_boss(
        &self,
        floor: u32,
        rng: &mut dyn RngStream,
    ) -> Result<MonsterTemplate, OracleError> {
        if self.bosses.is_empty() {
            return Err(OracleError::EmptyBossTable);
        }
        let index = rng.below(self.bosses.len() as u32) as usize;
        Ok(Self::boss_at_floor(&self.bosses[index], floor))
    }
}

#[cfg(test)]
mod tests {
    use game_core::PcgRng;

    use super::*;

    fn kind(name: &str, hp: u32) -> MonsterKind {
        MonsterKind {
            name: name.into(),
            glyph: 'x',
            hp,
            attack: 0,
            defense: 0,
        }
    }

    fn table() -> MonsterTable {
        MonsterTable {
            tiers: vec![
                MonsterTier {
                    max_floor: 5,
                    kinds: vec![kind("Imp", 0), kind("Goblin", 3)],
                },
                MonsterTier {
                    max_floor: 10,
                    kinds: vec![kind("Wolf", 2)],
                },
            ],
            bosses: vec!["Tococo".into()],
        }
    }

    #[test]
    fn pools_follow_tiers_then_union() {
        let table = table();
        assert_eq!(table.pool(1).len(), 2);
        assert_eq!(table.pool(5).len(), 2);
        assert_eq!(table.pool(6).len(), 1);
        assert_eq!(table.pool(11).len(), 3);
        assert!(table.is_sorted());
    }

    #[test]
    fn floor_scaling() {
        let goblin = kind("Goblin", 3).at_floor(4);
        assert_eq!(goblin.max_hp, 8 + 8 + 3);
        assert_eq!(goblin.attack, 5);
        assert_eq!(goblin.defense, 2);

        let boss = MonsterTable::boss_at_floor("Carnero", 10);
        assert_eq!((boss.max_hp, boss.attack, boss.defense), (150, 25, 13));
        assert!(boss.is_boss);
        assert_eq!(boss.glyph, BOSS_GLYPH);
    }

    #[test]
    fn empty_tables_fail() {
        let mut rng = PcgRng::seed_from_u64(1);
        let empty = MonsterTable::default();
        assert_eq!(
            empty.roll_monster(1, &mut rng),
            Err(OracleError::EmptyMonsterPool(1))
        );
        assert_eq!(empty.roll_boss(10, &mut rng), Err(OracleError::EmptyBossTable));
        assert_eq!(table().roll_boss(10, &mut rng).map(|b| b.name), Ok("Tococo".to_string()));
    }
}
