//! Tile grid, rooms, and procedural floor generation.
//!
//! [`TileGrid`] owns the static layout of one floor; [`DungeonGenerator`]
//! produces fresh grids from the session's RNG stream. Pathing lives with the
//! monster AI, which reads the grid through [`TileGrid::is_walkable`].
mod generator;
mod grid;
mod room;
mod tile;

pub use generator::{ArenaLayout, DungeonGenerator, FloorLayout, StairPolicy};
pub use grid::TileGrid;
pub use room::Room;
pub use tile::TileKind;
