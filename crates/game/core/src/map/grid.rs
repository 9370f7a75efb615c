use std::collections::VecDeque;

use crate::state::Position;

use super::{Room, TileKind};

/// Fixed-size tile layout for one floor, plus its stair locations.
///
/// # Invariants
///
/// - `down_stairs`/`up_stairs`, when set, point at a tile of the matching kind
/// - at most one tile of each stair kind exists
///
/// Connectivity of walkable tiles is a property of how the generator carves,
/// not something this type checks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<TileKind>,
    down_stairs: Option<Position>,
    up_stairs: Option<Position>,
}

impl TileGrid {
    /// Creates a grid filled with walls.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; width as usize * height as usize],
            down_stairs: None,
            up_stairs: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// Bounds-checked read. `None` outside the grid.
    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.index(position).map(|i| self.tiles[i])
    }

    /// Glyph at a cell; a blank for out-of-bounds reads.
    pub fn glyph_at(&self, position: Position) -> char {
        self.tile(position).map_or(' ', TileKind::glyph)
    }

    /// Bounds-checked write. Returns false (and does nothing) outside the grid.
    ///
    /// Writing over a recorded stair tile forgets that stair location.
    pub fn set_tile(&mut self, position: Position, kind: TileKind) -> bool {
        let Some(i) = self.index(position) else {
            return false;
        };
        if self.down_stairs == Some(position) && kind != TileKind::DownStairs {
            self.down_stairs = None;
        }
        if self.up_stairs == Some(position) && kind != TileKind::UpStairs {
            self.up_stairs = None;
        }
        self.tiles[i] = kind;
        true
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TileKind::is_walkable)
    }

    pub fn has_down_stairs(&self, position: Position) -> bool {
        self.down_stairs == Some(position)
    }

    pub fn has_up_stairs(&self, position: Position) -> bool {
        self.up_stairs == Some(position)
    }

    pub fn down_stairs(&self) -> Option<Position> {
        self.down_stairs
    }

    pub fn up_stairs(&self) -> Option<Position> {
        self.up_stairs
    }

    /// Places the single down staircase, demoting any previous one to floor.
    pub fn set_down_stairs(&mut self, position: Position) -> bool {
        if !self.in_bounds(position) {
            return false;
        }
        if let Some(old) = self.down_stairs.take() {
            self.set_tile(old, TileKind::Floor);
        }
        self.set_tile(position, TileKind::DownStairs);
        self.down_stairs = Some(position);
        true
    }

    /// Places the single up staircase, demoting any previous one to floor.
    pub fn set_up_stairs(&mut self, position: Position) -> bool {
        if !self.in_bounds(position) {
            return false;
        }
        if let Some(old) = self.up_stairs.take() {
            self.set_tile(old, TileKind::Floor);
        }
        self.set_tile(position, TileKind::UpStairs);
        self.up_stairs = Some(position);
        true
    }

    /// Removes both staircases; their tiles become plain floor.
    pub fn clear_stairs(&mut self) {
        self.remove_up_stairs();
        if let Some(old) = self.down_stairs.take() {
            self.set_tile(old, TileKind::Floor);
        }
    }

    /// Removes the up staircase; its tile becomes plain floor.
    pub fn remove_up_stairs(&mut self) {
        if let Some(old) = self.up_stairs.take() {
            self.set_tile(old, TileKind::Floor);
        }
    }

    // ===== carving helpers used by the generator =====

    pub(crate) fn carve_room(&mut self, room: &Room) {
        for cell in room.cells() {
            self.set_tile(cell, TileKind::Floor);
        }
    }

    pub(crate) fn carve_horizontal(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set_tile(Position::new(x, y), TileKind::Floor);
        }
    }

    pub(crate) fn carve_vertical(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set_tile(Position::new(x, y), TileKind::Floor);
        }
    }

    // ===== queries =====

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| **t == kind).count()
    }

    /// Walkable tiles reachable from `start` through 4-connected steps.
    pub fn reachable_from(&self, start: Position) -> Vec<Position> {
        if !self.is_walkable(start) {
            return Vec::new();
        }
        let mut seen = vec![false; self.tiles.len()];
        let mut queue = VecDeque::from([start]);
        let mut reached = Vec::new();
        if let Some(i) = self.index(start) {
            seen[i] = true;
        }
        while let Some(current) = queue.pop_front() {
            reached.push(current);
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let next = current.offset(dx, dy);
                if let Some(i) = self.index(next)
                    && !seen[i]
                    && self.tiles[i].is_walkable()
                {
                    seen[i] = true;
                    queue.push_back(next);
                }
            }
        }
        reached
    }

    /// Raw tile bytes in row-major order, for digests.
    pub(crate) fn tile_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.tiles.iter().map(|t| t.as_byte())
    }
}
