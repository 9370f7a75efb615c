//! Minimal in-memory content for engine tests.
#![allow(dead_code)]

use game_core::{
    AbilityDefinition, AbilityEffect, AbilityId, AbilityKind, AbilityOracle, CoreStats, Env,
    GameConfig, GameEnv, GameState, Job, JobDefinition, JobOracle, MonsterOracle,
    MonsterTemplate, OracleError, Position, RngStream, TileGrid, TileKind, new_game,
};
use game_core::env::{AttackStyle, Role};

pub struct TestJobs(Vec<JobDefinition>);

impl JobOracle for TestJobs {
    fn job(&self, job: Job) -> Option<&JobDefinition> {
        self.0.iter().find(|d| d.job == job)
    }

    fn jobs(&self) -> Vec<Job> {
        self.0.iter().map(|d| d.job).collect()
    }
}

pub struct TestMonsters;

impl MonsterOracle for TestMonsters {
    fn roll_monster(
        &self,
        _floor: u32,
        rng: &mut dyn RngStream,
    ) -> Result<MonsterTemplate, OracleError> {
        // Draw once so spawns stay part of the stream like real content.
        let _ = rng.below(2);
        Ok(MonsterTemplate::new("Rat", 'r', 5, 1, 0))
    }

    fn roll_boss(
        &self,
        _floor: u32,
        _rng: &mut dyn RngStream,
    ) -> Result<MonsterTemplate, OracleError> {
        Ok(MonsterTemplate::new("Warden", 'W', 60, 3, 1).boss())
    }
}

pub struct TestAbilities(Vec<AbilityDefinition>);

impl AbilityOracle for TestAbilities {
    fn abilities(&self, job: Job) -> &[AbilityDefinition] {
        if job == Job::Pld { &self.0 } else { &[] }
    }
}

pub struct Content {
    pub jobs: TestJobs,
    pub monsters: TestMonsters,
    pub abilities: TestAbilities,
}

impl Content {
    pub fn new() -> Self {
        let paladin = JobDefinition {
            job: Job::Pld,
            display_name: "Paladin".into(),
            role: Role::Tank,
            attack_style: AttackStyle::Physical,
            base_stats: CoreStats::new(12, 8, 6, 8, 14),
            base_hp: 40,
            base_mp: 20,
        };
        let cure = AbilityDefinition {
            id: AbilityId::new("cure"),
            name: "Cure".into(),
            description: String::new(),
            mp_cost: 5,
            cooldown: 0,
            hotkey: 'h',
            kind: AbilityKind::Healing,
            effects: vec![AbilityEffect::HealFlat {
                base: 10,
                mnd_scale: 1,
            }],
        };
        let holy = AbilityDefinition {
            id: AbilityId::new("holy_spirit"),
            name: "Holy Spirit".into(),
            description: String::new(),
            mp_cost: 5,
            cooldown: 2,
            hotkey: 's',
            kind: AbilityKind::Offensive,
            effects: vec![AbilityEffect::Strike { power: 150 }],
        };
        Self {
            jobs: TestJobs(vec![paladin]),
            monsters: TestMonsters,
            abilities: TestAbilities(vec![cure, holy]),
        }
    }

    pub fn env(&self) -> GameEnv<'_> {
        Env::new(&self.jobs, &self.monsters, &self.abilities).as_game_env()
    }
}

pub fn start(content: &Content, seed: u64, config: GameConfig) -> GameState {
    new_game(seed, config, "Tester", Job::Pld, content.env()).expect("session should start")
}

/// A walkable tile with no monster and no stairs.
pub fn quiet_tile(state: &GameState) -> Position {
    state
        .grid
        .positions()
        .find(|p| {
            state.grid.is_walkable(*p)
                && !state.grid.has_down_stairs(*p)
                && !state.grid.has_up_stairs(*p)
                && state.entities.monster_at(*p).is_none()
        })
        .expect("floor has open tiles")
}

/// Replaces the floor with one east-west corridor on row 1 (x in 0..=20) and
/// removes every monster. Pursuit along it never draws randomness.
pub fn corridor(state: &mut GameState) {
    let mut grid = TileGrid::new(state.width(), state.height());
    for x in 0..=20 {
        grid.set_tile(Position::new(x, 1), TileKind::Floor);
    }
    state.grid = grid;
    state.entities.clear_monsters();
}

pub fn rat() -> MonsterTemplate {
    MonsterTemplate::new("Rat", 'r', 5, 1, 0)
}

pub fn ogre() -> MonsterTemplate {
    MonsterTemplate::new("Ogre", 'O', 999, 200, 0)
}
