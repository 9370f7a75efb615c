//! Monster movement.
//!
//! Pursuit is greedy and purely local: a monster that can sense the player
//! takes the single step that closes the larger axis gap, or a diagonal when
//! the gaps are equal. There is no pathfinding; monsters can snag on walls.
//! Out of range, monsters wander with a uniformly random step.

use crate::env::RngStream;
use crate::map::TileGrid;
use crate::state::{EntityId, EntityRegistry, Monster, Position};

/// Step delta with both components in `{-1, 0, 1}`.
pub type Step = (i32, i32);

/// What a monster will do with its turn once the step is checked against the
/// floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonsterAction {
    /// The step lands on the player.
    Attack,
    MoveTo(Position),
    /// Blocked by a wall, another monster, or a zero step.
    Hold,
}

/// Proposes the next step for `monster` toward `target`.
///
/// Within sight range (Manhattan, inclusive) no randomness is drawn. Outside
/// it, two draws pick `dx` then `dy`.
pub fn next_step(monster: &Monster, target: Position, rng: &mut dyn RngStream) -> Step {
    let origin = monster.position();
    if origin.manhattan_distance(target) <= monster.sight_range {
        pursue(origin, target)
    } else {
        (rng.range_inclusive(-1, 1), rng.range_inclusive(-1, 1))
    }
}

/// Greedy single step from `origin` toward `target`.
pub fn pursue(origin: Position, target: Position) -> Step {
    let dx = target.x - origin.x;
    let dy = target.y - origin.y;
    let (gap_x, gap_y) = (dx.abs(), dy.abs());

    if gap_x > gap_y {
        (dx.signum(), 0)
    } else if gap_y > gap_x {
        (0, dy.signum())
    } else {
        (dx.signum(), dy.signum())
    }
}

/// Turns a proposed step into an action.
///
/// Landing on the player is an attack; otherwise the destination must be
/// walkable and free of other living monsters.
pub fn resolve_step(
    id: EntityId,
    origin: Position,
    step: Step,
    player: Position,
    grid: &TileGrid,
    registry: &EntityRegistry,
) -> MonsterAction {
    if step == (0, 0) {
        return MonsterAction::Hold;
    }
    let destination = origin.offset(step.0, step.1);
    if destination == player {
        MonsterAction::Attack
    } else if grid.is_walkable(destination) && !registry.is_blocked_by_monster(destination, id) {
        MonsterAction::MoveTo(destination)
    } else {
        MonsterAction::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MonsterTemplate, PcgRng};
    use crate::map::{Room, TileKind};

    fn monster_at(position: Position, sight_range: u32) -> Monster {
        let template = MonsterTemplate::new("Orc", 'o', 12, 4, 1);
        Monster::from_template(EntityId(1), &template, position, sight_range)
    }

    #[test]
    fn steps_along_the_larger_gap() {
        let mut rng = PcgRng::seed_from_u64(0);
        let monster = monster_at(Position::new(0, 0), 8);
        assert_eq!(next_step(&monster, Position::new(5, 1), &mut rng), (1, 0));
        assert_eq!(next_step(&monster, Position::new(-1, -4), &mut rng), (0, -1));
        assert_eq!(next_step(&monster, Position::new(-3, 3), &mut rng), (-1, 1));
    }

    #[test]
    fn pursuit_at_exact_sight_range() {
        let mut rng = PcgRng::seed_from_u64(0);
        let monster = monster_at(Position::new(0, 0), 8);
        assert_eq!(next_step(&monster, Position::new(4, 4), &mut rng), (1, 1));
    }

    #[test]
    fn out_of_range_wanders_uniformly() {
        let mut rng = PcgRng::seed_from_u64(31337);
        let monster = monster_at(Position::new(0, 0), 8);
        let target = Position::new(12, 8);
        let trials = 9_000;
        let mut counts = [[0u32; 3]; 3];

        for _ in 0..trials {
            let (dx, dy) = next_step(&monster, target, &mut rng);
            assert!((-1..=1).contains(&dx) && (-1..=1).contains(&dy));
            counts[(dx + 1) as usize][(dy + 1) as usize] += 1;
        }

        // Each of the nine outcomes expects 1000 hits.
        for row in counts {
            for count in row {
                assert!((850..=1150).contains(&count), "skewed wander counts {counts:?}");
            }
        }
    }

    #[test]
    fn resolve_step_respects_walls_monsters_and_player() {
        let mut grid = TileGrid::new(8, 8);
        grid.carve_room(&Room::new(1, 1, 5, 5));
        grid.set_tile(Position::new(3, 2), TileKind::Wall);

        let template = MonsterTemplate::new("Orc", 'o', 12, 4, 1);
        let def = crate::env::JobDefinition {
            job: crate::env::Job::Mnk,
            display_name: "Monk".into(),
            role: crate::env::Role::Dps,
            attack_style: crate::env::AttackStyle::Physical,
            base_stats: crate::env::CoreStats::new(14, 12, 6, 7, 12),
            base_hp: 32,
            base_mp: 16,
        };
        let mut registry = EntityRegistry::new(crate::state::Player::from_job("Tifa", &def));
        let me = registry.spawn(&template, Position::new(2, 2), 8);
        registry.spawn(&template, Position::new(2, 3), 8);

        let origin = Position::new(2, 2);
        let player = Position::new(1, 1);
        let resolve = |step| resolve_step(me, origin, step, player, &grid, &registry);

        assert_eq!(resolve((-1, -1)), MonsterAction::Attack);
        assert_eq!(resolve((1, 0)), MonsterAction::Hold);
        assert_eq!(resolve((0, 1)), MonsterAction::Hold);
        assert_eq!(resolve((0, 0)), MonsterAction::Hold);
        assert_eq!(resolve((1, 1)), MonsterAction::MoveTo(Position::new(3, 3)));
    }
}
