//! Floor generation, population, and transitions.

use crate::env::{GameEnv, MonsterTemplate, RngStream};
use crate::error::SetupError;
use crate::map::{Room, StairPolicy, TileGrid, TileKind};
use crate::state::{EntityRegistry, Position, TurnPhase};
use crate::vision::VisibilityTracker;

use super::{Arrival, GameEngine, TurnEvent};

/// Rerolls of the player's start before falling back to a tile scan.
const START_REROLLS: u32 = 32;

/// Everything a new floor needs, built before any state is replaced so a
/// content failure leaves the current floor intact.
struct FloorPlan {
    grid: TileGrid,
    rooms: Vec<Room>,
    spawns: Vec<(MonsterTemplate, Position)>,
    player_start: Position,
    boss_floor: bool,
}

impl<'a> GameEngine<'a> {
    /// Replaces the current floor with a freshly generated `floor`.
    ///
    /// Grid, rooms, exploration, monsters, and messages are swapped out as
    /// one unit; the player and cooldowns carry over.
    pub(crate) fn enter_floor(
        &mut self,
        env: GameEnv<'_>,
        floor: u32,
        arrival: Arrival,
    ) -> Result<(), SetupError> {
        let previous_phase = self.state.turn.phase;
        self.set_phase(TurnPhase::FloorTransition);

        let plan = match self.plan_floor(env, floor, arrival) {
            Ok(plan) => plan,
            Err(err) => {
                self.set_phase(previous_phase);
                return Err(err);
            }
        };

        let state = &mut *self.state;
        state.turn.floor = floor;
        state.grid = plan.grid;
        state.rooms = plan.rooms;
        state.visibility = VisibilityTracker::new(state.config.width, state.config.height);
        state.log.clear();

        state.entities.clear_monsters();
        let sight_range = state.config.monster_sight_range;
        for (template, position) in &plan.spawns {
            state.entities.spawn(template, *position, sight_range);
        }
        state.entities.player_mut().actor.position = plan.player_start;
        self.settle_player();

        self.state.log.push(format!("Welcome to floor {floor}!"));
        self.push_event(TurnEvent::FloorEntered {
            floor,
            boss_floor: plan.boss_floor,
        });
        self.refresh_visibility();
        self.set_phase(TurnPhase::Exploring);
        Ok(())
    }

    fn plan_floor(
        &mut self,
        env: GameEnv<'_>,
        floor: u32,
        arrival: Arrival,
    ) -> Result<FloorPlan, SetupError> {
        let generator = self.generator()?;
        let state = &mut *self.state;

        if state.config.is_boss_floor(floor) {
            let mut arena = generator.generate_boss_arena();
            arena.grid.remove_up_stairs();
            let boss = env.monsters().roll_boss(floor, &mut state.rng)?;
            return Ok(FloorPlan {
                grid: arena.grid,
                rooms: vec![arena.arena],
                spawns: vec![(boss, arena.boss_position)],
                player_start: arena.player_start,
                boss_floor: true,
            });
        }

        let policy = if state.config.allow_ascent && floor > 1 {
            StairPolicy::UpAndDown
        } else {
            StairPolicy::DownOnly
        };
        let layout = generator.generate(policy, &mut state.rng);

        let count = monster_count(floor);
        let mut spawns = Vec::with_capacity(count);
        for _ in 0..count {
            let template = env.monsters().roll_monster(floor, &mut state.rng)?;
            let position = layout.random_room_center(&mut state.rng);
            spawns.push((template, position));
        }

        let player_start = match arrival {
            Arrival::FromAbove => layout
                .up_stairs
                .unwrap_or_else(|| layout.first_room_center()),
            Arrival::FromBelow => layout.down_stairs,
        };

        Ok(FloorPlan {
            grid: layout.grid,
            rooms: layout.rooms,
            spawns,
            player_start,
            boss_floor: false,
        })
    }

    /// Moves the player off any monster it was placed on: first by rerolling
    /// random room centers, then by scanning for any free walkable tile.
    fn settle_player(&mut self) {
        let state = &mut *self.state;
        let mut start = state.entities.player().position();
        let occupied = |entities: &EntityRegistry, p: Position| entities.monster_at(p).is_some();

        let mut rerolls = 0;
        while occupied(&state.entities, start)
            && rerolls < START_REROLLS
            && !state.rooms.is_empty()
        {
            let index = state.rng.below(state.rooms.len() as u32) as usize;
            start = state.rooms[index].center();
            rerolls += 1;
        }

        if occupied(&state.entities, start)
            && let Some(free) = state
                .grid
                .positions()
                .find(|p| state.grid.is_walkable(*p) && !occupied(&state.entities, *p))
        {
            start = free;
        }

        state.entities.player_mut().actor.position = start;
    }

    pub(crate) fn refresh_visibility(&mut self) {
        let center = self.state.entities.player().position();
        let radius = self.state.config.visibility_radius;
        self.state.visibility.mark_visible(center, radius);
    }

    /// Carves the down staircase after the boss falls: directly south of the
    /// player when that tile is plain floor, otherwise the first floor tile
    /// found on rings of growing radius around the player.
    pub(crate) fn unlock_boss_stairs(&mut self) -> Position {
        let grid = &mut self.state.grid;
        let origin = self.state.entities.player().position();

        let south = origin.offset(0, 1);
        let target = if grid.tile(south) == Some(TileKind::Floor) {
            south
        } else {
            nearest_floor_ring(grid, origin).unwrap_or(origin)
        };

        grid.set_down_stairs(target);
        target
    }
}

/// Regular floors spawn `6 + floor / 2` monsters.
pub fn monster_count(floor: u32) -> usize {
    (6 + floor / 2) as usize
}

fn nearest_floor_ring(grid: &TileGrid, origin: Position) -> Option<Position> {
    let max_radius = grid.width().max(grid.height()) as i32;
    for radius in 1..=max_radius {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() != radius && dy.abs() != radius {
                    continue;
                }
                let candidate = origin.offset(dx, dy);
                if grid.tile(candidate) == Some(TileKind::Floor) {
                    return Some(candidate);
                }
            }
        }
    }
    None
}
