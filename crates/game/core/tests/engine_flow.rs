mod common;

use common::{Content, corridor, ogre, quiet_tile, rat, start};
use game_core::{
    GameConfig, GameEngine, GameError, GameState, Intent, IntentRejection, Position, TileKind,
    TurnError, TurnEvent, TurnPhase, TurnReport,
};

fn rejection(result: Result<game_core::TurnReport, TurnError>) -> IntentRejection {
    match result {
        Err(TurnError::Rejected(rejection)) => rejection,
        other => panic!("expected a rejection, got {other:?}"),
    }
}

#[test]
fn session_opens_on_floor_one() {
    let content = Content::new();
    let state = start(&content, 7, GameConfig::default());

    assert_eq!(state.floor(), 1);
    assert_eq!(state.turn_number(), 1);
    assert_eq!(state.phase(), TurnPhase::Exploring);
    assert_eq!(state.monster_snapshots().len(), 6);
    assert_eq!(state.messages(), vec!["Welcome to floor 1!".to_string()]);
    assert!(state.is_explored(state.player().position()));
    assert!(state.grid.down_stairs().is_some());
    assert!(state.grid.up_stairs().is_none());
}

#[test]
fn same_seed_and_intents_replay_identically() {
    let content = Content::new();
    let intents = [
        Intent::Wait,
        Intent::east(),
        Intent::east(),
        Intent::south(),
        Intent::Wait,
        Intent::west(),
    ];

    let run = |seed: u64| {
        let mut state = start(&content, seed, GameConfig::default());
        for intent in intents {
            let _ = GameEngine::new(&mut state).submit_intent(content.env(), intent);
        }
        state
    };

    let a = run(42);
    let b = run(42);
    assert_eq!(a, b);
    assert_eq!(hex::encode(a.digest()), hex::encode(b.digest()));
    assert_eq!(hex::encode(a.digest()).len(), 64);

    let c = run(43);
    assert_ne!(a.digest(), c.digest());
}

#[test]
fn rejected_intents_consume_nothing() {
    let content = Content::new();
    let mut state = start(&content, 11, GameConfig::default());
    let spot = quiet_tile(&state);
    state.entities.player_mut().actor.position = spot;
    let before = state.digest();

    let mut engine = GameEngine::new(&mut state);
    let err = rejection(engine.submit_intent(content.env(), Intent::Descend));
    assert_eq!(err, IntentRejection::NoStairs);

    let err = rejection(engine.submit_intent(content.env(), Intent::Move { dx: 2, dy: 0 }));
    assert_eq!(err, IntentRejection::InvalidStep { dx: 2, dy: 0 });
    assert_eq!(err.error_code(), "INTENT_INVALID_STEP");

    let err = rejection(engine.submit_intent(content.env(), Intent::Move { dx: 0, dy: 0 }));
    assert!(matches!(err, IntentRejection::InvalidStep { .. }));

    let err = rejection(engine.submit_intent(content.env(), Intent::Ascend));
    assert_eq!(err, IntentRejection::AscentDisabled);

    assert_eq!(state.turn_number(), 1);
    assert_eq!(state.phase(), TurnPhase::Exploring);
    assert_eq!(state.digest(), before);
}

#[test]
fn ability_menu_is_free() {
    let content = Content::new();
    let mut state = start(&content, 3, GameConfig::default());

    let report = GameEngine::new(&mut state)
        .submit_intent(content.env(), Intent::OpenAbilityMenu)
        .expect("menu never fails");

    assert!(!report.consumed);
    assert_eq!(report.events, vec![TurnEvent::AbilityMenuOpened]);
    assert_eq!(state.turn_number(), 1);
}

#[test]
fn wait_consumes_a_turn() {
    let content = Content::new();
    let mut state = start(&content, 5, GameConfig::default());
    state.entities.clear_monsters();

    let report = GameEngine::new(&mut state)
        .submit_intent(content.env(), Intent::Wait)
        .expect("waiting is always legal");

    assert!(report.consumed);
    assert_eq!(state.turn_number(), 2);
    assert_eq!(state.log.latest(), Some("Tester rests."));
}

#[test]
fn descending_generates_the_next_floor() {
    let content = Content::new();
    let mut state = start(&content, 21, GameConfig::default());
    let stairs = state.grid.down_stairs().expect("regular floors have stairs");
    state.entities.player_mut().actor.position = stairs;

    let report = GameEngine::new(&mut state)
        .submit_intent(content.env(), Intent::Descend)
        .expect("standing on stairs");

    assert!(report.consumed);
    assert!(report.events.contains(&TurnEvent::FloorEntered {
        floor: 2,
        boss_floor: false
    }));
    assert_eq!(state.floor(), 2);
    assert_eq!(state.turn_number(), 2);
    assert_eq!(state.monster_snapshots().len(), 7);
    assert!(state.grid.up_stairs().is_none());
}

#[test]
fn ascent_round_trip_when_enabled() {
    let content = Content::new();
    let config = GameConfig::default().with_ascent(true);
    let mut state = start(&content, 9, config);

    let err = rejection(GameEngine::new(&mut state).submit_intent(content.env(), Intent::Ascend));
    assert_eq!(err, IntentRejection::TopFloor);

    let stairs = state.grid.down_stairs().expect("stairs");
    state.entities.player_mut().actor.position = stairs;
    GameEngine::new(&mut state)
        .submit_intent(content.env(), Intent::Descend)
        .expect("descend");
    assert_eq!(state.floor(), 2);

    let up = state.grid.up_stairs().expect("floor 2 has up stairs");
    state.entities.player_mut().actor.position = up;
    GameEngine::new(&mut state)
        .submit_intent(content.env(), Intent::Ascend)
        .expect("ascend");
    assert_eq!(state.floor(), 1);
    assert!(state.grid.up_stairs().is_none());
}

#[test]
fn boss_floor_seals_stairs_until_the_boss_falls() {
    let content = Content::new();
    let config = GameConfig {
        boss_floor_interval: 2,
        ..GameConfig::default()
    };
    let mut state = start(&content, 13, config);
    let stairs = state.grid.down_stairs().expect("stairs");
    state.entities.player_mut().actor.position = stairs;
    GameEngine::new(&mut state)
        .submit_intent(content.env(), Intent::Descend)
        .expect("descend onto boss floor");

    assert!(state.is_boss_floor());
    assert_eq!(state.monster_snapshots().len(), 1);
    assert!(state.grid.down_stairs().is_none());

    let err = rejection(GameEngine::new(&mut state).submit_intent(content.env(), Intent::Descend));
    assert_eq!(
        err,
        IntentRejection::StairsSealed {
            boss: "Warden".into()
        }
    );
    assert_eq!(
        state.log.latest(),
        Some("The stairs are sealed while Warden lives!")
    );

    let boss = state
        .entities
        .living_monsters()
        .find(|m| m.is_boss)
        .map(|m| m.id())
        .expect("boss spawned");
    let killed = GameEngine::new(&mut state).apply_damage(boss, 10_000);
    assert!(killed);
    assert!(!state.entities.boss_alive());

    // 100 + 10 * floor 2
    assert_eq!(state.player().level, 2);
    assert_eq!(state.player().xp, 20);

    let stairs = state.grid.down_stairs().expect("boss death opens stairs");
    state.entities.player_mut().actor.position = stairs;
    GameEngine::new(&mut state)
        .submit_intent(content.env(), Intent::Descend)
        .expect("stairs are open");
    assert_eq!(state.floor(), 3);
    assert!(!state.is_boss_floor());
}

#[test]
fn dead_player_ends_the_session() {
    let content = Content::new();
    let mut state = start(&content, 17, GameConfig::default());
    state.entities.player_mut().actor.hp.current = 0;

    let err = rejection(GameEngine::new(&mut state).submit_intent(content.env(), Intent::Wait));
    assert_eq!(err, IntentRejection::GameOver);
    assert!(state.is_game_over());
    assert_eq!(state.turn_number(), 1);
}

fn submit(content: &Content, state: &mut GameState, intent: Intent) -> TurnReport {
    GameEngine::new(state)
        .submit_intent(content.env(), intent)
        .expect("intent should be accepted")
}

#[test]
fn walls_and_grid_edges_block_movement() {
    let content = Content::new();
    let mut state = start(&content, 19, GameConfig::default());
    corridor(&mut state);
    state.entities.player_mut().actor.position = Position::new(0, 1);

    let err = rejection(GameEngine::new(&mut state).submit_intent(content.env(), Intent::west()));
    assert_eq!(
        err,
        IntentRejection::OutOfBounds {
            target: Position::new(-1, 1)
        }
    );

    let err = rejection(GameEngine::new(&mut state).submit_intent(content.env(), Intent::north()));
    assert_eq!(
        err,
        IntentRejection::Blocked {
            target: Position::new(0, 0)
        }
    );

    assert_eq!(state.turn_number(), 1);
    assert_eq!(state.player().position(), Position::new(0, 1));
}

#[test]
fn melee_kill_pays_floor_scaled_xp() {
    let content = Content::new();
    let mut state = start(&content, 23, GameConfig::default());
    corridor(&mut state);
    state.entities.player_mut().actor.position = Position::new(2, 1);
    state.entities.spawn(&rat(), Position::new(3, 1), 8);

    let slain = (0..20)
        .map(|_| submit(&content, &mut state, Intent::east()))
        .find_map(|report| {
            report.events.into_iter().find_map(|event| match event {
                TurnEvent::MonsterSlain { name, xp, .. } => Some((name, xp)),
                _ => None,
            })
        })
        .expect("the rat falls within twenty swings");

    // 10 + 2 * floor 1
    assert_eq!(slain, ("Rat".to_string(), 12));
    assert_eq!(state.player().xp, 12);
    assert_eq!(state.player().level, 1);
    assert_eq!(state.entities.living_count(), 0);
}

#[test]
fn adjacent_monster_attacks_instead_of_moving() {
    let content = Content::new();
    let mut state = start(&content, 29, GameConfig::default());
    corridor(&mut state);
    state.entities.player_mut().actor.position = Position::new(2, 1);
    state.entities.spawn(&rat(), Position::new(3, 1), 8);

    submit(&content, &mut state, Intent::Wait);

    let line = state.log.latest().expect("the rat acted");
    assert!(
        line.starts_with("Rat hits Tester") || line.starts_with("Rat misses Tester"),
        "unexpected log line: {line}"
    );
    assert_eq!(state.entities.monsters()[0].position(), Position::new(3, 1));
}

#[test]
fn monsters_do_not_step_onto_each_other() {
    let content = Content::new();
    let mut state = start(&content, 31, GameConfig::default());
    corridor(&mut state);
    state.entities.player_mut().actor.position = Position::new(10, 1);
    // Spawn order is action order: the rear rat acts first and finds its
    // path taken.
    state.entities.spawn(&rat(), Position::new(5, 1), 8);
    state.entities.spawn(&rat(), Position::new(6, 1), 8);

    submit(&content, &mut state, Intent::Wait);

    let positions: Vec<Position> = state
        .entities
        .monsters()
        .iter()
        .map(|m| m.position())
        .collect();
    assert_eq!(positions, vec![Position::new(5, 1), Position::new(7, 1)]);
}

#[test]
fn monster_kill_ends_the_session() {
    let content = Content::new();
    let mut state = start(&content, 37, GameConfig::default());
    corridor(&mut state);
    state.entities.player_mut().actor.position = Position::new(2, 1);
    state.entities.spawn(&ogre(), Position::new(3, 1), 8);

    let mut death = None;
    for _ in 0..30 {
        let report = submit(&content, &mut state, Intent::Wait);
        if let Some(killer) = report.events.iter().find_map(|event| match event {
            TurnEvent::PlayerDied { killer } => Some(killer.clone()),
            _ => None,
        }) {
            death = Some(killer);
            break;
        }
    }

    assert_eq!(death.as_deref(), Some("Ogre"));
    assert_eq!(state.phase(), TurnPhase::GameOver);
    assert!(state.is_game_over());
    assert_eq!(state.player().actor.hp.current, 0);
    assert_eq!(state.log.latest(), Some("Tester has fallen on floor 1."));

    let turn = state.turn_number();
    let err = rejection(GameEngine::new(&mut state).submit_intent(content.env(), Intent::Wait));
    assert_eq!(err, IntentRejection::GameOver);
    assert_eq!(state.turn_number(), turn);
}

#[test]
fn regeneration_follows_the_turn_schedule() {
    let content = Content::new();
    let mut state = start(&content, 41, GameConfig::default());
    corridor(&mut state);
    state.entities.player_mut().actor.position = Position::new(2, 1);
    state.entities.player_mut().actor.hp.current = 1;
    state.entities.player_mut().actor.mp.current = 0;

    // Turn 1: neither interval is due.
    submit(&content, &mut state, Intent::Wait);
    assert_eq!(state.player().actor.hp.current, 1);

    // Turn 2: HP regenerates MaxHP / 10 = 5.
    submit(&content, &mut state, Intent::Wait);
    assert_eq!(state.player().actor.hp.current, 6);
    assert_eq!(state.player().actor.mp.current, 0);

    submit(&content, &mut state, Intent::Wait);
    submit(&content, &mut state, Intent::Wait);
    assert_eq!(state.player().actor.hp.current, 11);
    assert_eq!(state.player().actor.mp.current, 0);

    // Turn 5: MP regenerates MaxMP / 10 = 2.
    submit(&content, &mut state, Intent::Wait);
    assert_eq!(state.player().actor.mp.current, 2);
    assert_eq!(state.player().actor.hp.current, 11);
    assert_eq!(state.turn_number(), 6);
}

#[test]
fn boss_melee_kill_carves_one_walkable_staircase() {
    let content = Content::new();
    let config = GameConfig {
        boss_floor_interval: 2,
        ..GameConfig::default()
    };
    let mut state = start(&content, 43, config);
    let stairs = state.grid.down_stairs().expect("stairs");
    state.entities.player_mut().actor.position = stairs;
    submit(&content, &mut state, Intent::Descend);
    assert!(state.is_boss_floor());
    assert_eq!(state.grid.count(TileKind::DownStairs), 0);

    let boss_at = state
        .entities
        .living_monsters()
        .find(|m| m.is_boss)
        .map(|m| m.position())
        .expect("boss spawned");
    state.entities.player_mut().actor.position = boss_at.offset(0, 1);

    let mut defeated = None;
    for _ in 0..60 {
        let report = submit(&content, &mut state, Intent::north());
        if let Some(event) = report
            .events
            .into_iter()
            .find(|event| matches!(event, TurnEvent::BossDefeated { .. }))
        {
            defeated = Some(event);
            break;
        }
    }

    let Some(TurnEvent::BossDefeated { name, stairs }) = defeated else {
        panic!("the boss should fall to melee");
    };
    assert_eq!(name, "Warden");
    assert_eq!(state.grid.count(TileKind::DownStairs), 1);
    assert_eq!(state.grid.down_stairs(), Some(stairs));
    assert_eq!(state.grid.tile(stairs), Some(TileKind::DownStairs));
    assert!(state.grid.is_walkable(stairs));
    assert!(!state.entities.boss_alive());
    // 100 + 10 * floor 2
    assert_eq!(state.player().level, 2);
    assert_eq!(state.player().xp, 20);
}

#[test]
fn intents_outside_exploring_are_refused() {
    let content = Content::new();
    let mut state = start(&content, 47, GameConfig::default());
    state.turn.phase = TurnPhase::FloorTransition;

    let err = rejection(GameEngine::new(&mut state).submit_intent(content.env(), Intent::Wait));
    assert_eq!(
        err,
        IntentRejection::NotAccepting {
            phase: TurnPhase::FloorTransition
        }
    );
    assert_eq!(state.turn_number(), 1);
    assert_eq!(state.phase(), TurnPhase::FloorTransition);
}
