use game_content::load_builtin;
use game_core::{
    AbilityEffect, AbilityOracle, GameConfig, Job, JobOracle, MonsterOracle, PcgRng, new_game,
};
use strum::IntoEnumIterator;

#[test]
fn every_job_has_a_definition_and_abilities() {
    let content = load_builtin().expect("built-in data parses");

    for job in Job::iter() {
        let definition = content.jobs.job(job).unwrap_or_else(|| panic!("{job} missing"));
        assert!(definition.max_hp() > 0, "{job} has no HP");
        assert!(
            !content.abilities.abilities(job).is_empty(),
            "{job} has no abilities"
        );
    }
}

#[test]
fn builtin_config_matches_defaults() {
    let content = load_builtin().unwrap();
    assert_eq!(content.config, GameConfig::default());
}

#[test]
fn monster_rolls_scale_with_floor() {
    let content = load_builtin().unwrap();
    let mut rng = PcgRng::seed_from_u64(99);

    for _ in 0..50 {
        let early = content.monsters.roll_monster(1, &mut rng).unwrap();
        assert!(!early.is_boss);
        assert!(["Imp", "Spriggan", "Goblin", "Armadillo"].contains(&early.name.as_str()));
        assert!(early.max_hp >= 10);
    }

    // Past the deepest tier every kind is eligible.
    assert_eq!(content.monsters.pool(41).len(), 32);

    let boss = content.monsters.roll_boss(20, &mut rng).unwrap();
    assert!(boss.is_boss);
    assert_eq!(boss.max_hp, 30 + 12 * 20);
    assert!(content.monsters.bosses.contains(&boss.name));
}

#[test]
fn cure_is_a_flat_heal() {
    let content = load_builtin().unwrap();
    let cure = content
        .abilities
        .ability_by_hotkey(Job::Whm, '1')
        .expect("white mage cure");
    assert_eq!(cure.name, "Cure");
    assert_eq!(
        cure.effects,
        vec![AbilityEffect::HealFlat {
            base: 20,
            mnd_scale: 2
        }]
    );
}

#[test]
fn builtin_content_starts_a_session() {
    let content = load_builtin().unwrap();
    let env = content.env().as_game_env();

    for job in [Job::Pld, Job::Blm, Job::Vpr] {
        let state = new_game(5, content.config.clone(), "Tester", job, env).expect("session starts");
        assert_eq!(state.floor(), 1);
        assert_eq!(state.player().job, job);
        assert_eq!(state.monster_snapshots().len(), 6);
    }
}
