//! Procedural floor generation.
//!
//! Regular floors are a chain of non-overlapping rectangular rooms joined by
//! L-shaped corridors, each new room linked to the previous one. Because every
//! room is connected to its predecessor, every carved tile is reachable from
//! every other by construction.
//!
//! Boss floors are a single centered arena with no stairs; the engine carves
//! the down staircase once the boss falls.

use crate::config::GameConfig;
use crate::env::RngStream;
use crate::error::SetupError;
use crate::state::Position;

use super::{Room, TileGrid};

/// Which staircases a regular floor should receive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StairPolicy {
    /// Only a down staircase in the last room.
    #[default]
    DownOnly,
    /// Down staircase in the last room, up staircase in the first.
    UpAndDown,
}

/// Output of regular floor generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloorLayout {
    pub grid: TileGrid,
    /// Accepted rooms in placement order.
    pub rooms: Vec<Room>,
    pub down_stairs: Position,
    pub up_stairs: Option<Position>,
    /// True when placement failed and the single-room fallback was used.
    pub degenerate: bool,
}

impl FloorLayout {
    /// Center of the first room; the default player start.
    pub fn first_room_center(&self) -> Position {
        self.rooms.first().map_or(self.down_stairs, Room::center)
    }

    /// Center of a uniformly chosen room.
    pub fn random_room_center(&self, rng: &mut dyn RngStream) -> Position {
        let index = rng.below(self.rooms.len() as u32) as usize;
        self.rooms
            .get(index)
            .map_or_else(|| self.first_room_center(), Room::center)
    }
}

/// Output of boss arena generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaLayout {
    pub grid: TileGrid,
    pub arena: Room,
    pub player_start: Position,
    pub boss_position: Position,
}

/// Generates floors for a fixed grid size.
#[derive(Clone, Debug)]
pub struct DungeonGenerator {
    width: u32,
    height: u32,
    min_room_size: u32,
    max_room_size: u32,
    min_rooms: u32,
    max_rooms: u32,
    max_placement_attempts: u32,
}

impl DungeonGenerator {
    /// Preferred arena footprint; shrunk to fit smaller grids.
    pub const ARENA_WIDTH: u32 = 30;
    pub const ARENA_HEIGHT: u32 = 15;

    /// Validates the configuration and builds a generator.
    ///
    /// # Errors
    ///
    /// Fails when the grid cannot hold a minimum-size room plus margins, or
    /// when the room size/count ranges are empty.
    pub fn new(config: &GameConfig) -> Result<Self, SetupError> {
        if config.min_room_size == 0 || config.max_room_size <= config.min_room_size {
            return Err(SetupError::EmptyRoomSizeRange {
                min: config.min_room_size,
                max: config.max_room_size,
            });
        }
        if config.max_rooms <= config.min_rooms {
            return Err(SetupError::EmptyRoomCountRange {
                min: config.min_rooms,
                max: config.max_rooms,
            });
        }
        let minimum = config.minimum_grid_edge();
        if config.width < minimum || config.height < minimum {
            return Err(SetupError::GridTooSmall {
                width: config.width,
                height: config.height,
                minimum,
            });
        }

        Ok(Self {
            width: config.width,
            height: config.height,
            min_room_size: config.min_room_size,
            max_room_size: config.max_room_size,
            min_rooms: config.min_rooms,
            max_rooms: config.max_rooms,
            max_placement_attempts: config.max_placement_attempts.max(1),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Generates a regular multi-room floor.
    pub fn generate(&self, policy: StairPolicy, rng: &mut dyn RngStream) -> FloorLayout {
        let mut grid = TileGrid::new(self.width, self.height);
        let mut rooms: Vec<Room> = Vec::new();

        let target = rng.range(self.min_rooms as i32, self.max_rooms as i32) as usize;
        let mut attempts = 0;

        while rooms.len() < target && attempts < self.max_placement_attempts {
            attempts += 1;
            let Some(room) = self.sample_room(rng) else {
                continue;
            };
            if rooms.iter().any(|r| r.intersects(&room)) {
                continue;
            }

            grid.carve_room(&room);
            if let Some(previous) = rooms.last() {
                connect(&mut grid, previous.center(), room.center(), rng);
            }
            rooms.push(room);
        }

        let degenerate = rooms.is_empty();
        if degenerate {
            let room = self.fallback_room();
            grid.carve_room(&room);
            rooms.push(room);
        }

        let down_stairs = rooms.last().map_or(Position::ORIGIN, Room::center);
        grid.set_down_stairs(down_stairs);

        let up_stairs = match policy {
            StairPolicy::DownOnly => None,
            StairPolicy::UpAndDown => {
                let first = rooms[0];
                let candidate = if first.center() != down_stairs {
                    first.center()
                } else {
                    Position::new(first.x1, first.y1)
                };
                (candidate != down_stairs && grid.set_up_stairs(candidate)).then_some(candidate)
            }
        };

        FloorLayout {
            grid,
            rooms,
            down_stairs,
            up_stairs,
            degenerate,
        }
    }

    /// Generates a boss floor: one arena centered in a field of walls.
    pub fn generate_boss_arena(&self) -> ArenaLayout {
        let margin = GameConfig::ROOM_MARGIN;
        let arena_w = Self::ARENA_WIDTH.min(self.width - 2 * margin) as i32;
        let arena_h = Self::ARENA_HEIGHT.min(self.height - 2 * margin) as i32;
        let x1 = (self.width as i32 - arena_w) / 2;
        let y1 = (self.height as i32 - arena_h) / 2;
        let arena = Room::new(x1, y1, arena_w, arena_h);

        let mut grid = TileGrid::new(self.width, self.height);
        grid.carve_room(&arena);
        grid.clear_stairs();

        let boss_position = arena.center();
        // Entrance is the southern edge; leave one row below the player so
        // the stairs can appear directly south of the starting tile.
        let mut player_start = Position::new(boss_position.x, (arena.y2 - 2).max(arena.y1));
        if player_start == boss_position {
            player_start = Position::new(arena.x1, arena.y2 - 1);
        }

        ArenaLayout {
            grid,
            arena,
            player_start,
            boss_position,
        }
    }

    fn sample_room(&self, rng: &mut dyn RngStream) -> Option<Room> {
        let w = rng.range(self.min_room_size as i32, self.max_room_size as i32);
        let h = rng.range(self.min_room_size as i32, self.max_room_size as i32);
        let max_x = self.width as i32 - w - 1;
        let max_y = self.height as i32 - h - 1;
        if max_x <= 1 || max_y <= 1 {
            return None;
        }
        let x = rng.range(1, max_x);
        let y = rng.range(1, max_y);
        Some(Room::new(x, y, w, h))
    }

    fn fallback_room(&self) -> Room {
        let margin = if self.width >= 8 && self.height >= 8 { 2 } else { 1 };
        Room::new(
            margin,
            margin,
            self.width as i32 - 2 * margin,
            self.height as i32 - 2 * margin,
        )
    }
}

/// Carves an L-shaped corridor between two room centers, picking the bend
/// direction at random.
fn connect(grid: &mut TileGrid, from: Position, to: Position, rng: &mut dyn RngStream) {
    if rng.coin() {
        grid.carve_horizontal(from.x, to.x, from.y);
        grid.carve_vertical(from.y, to.y, to.x);
    } else {
        grid.carve_vertical(from.y, to.y, from.x);
        grid.carve_horizontal(from.x, to.x, to.y);
    }
}
