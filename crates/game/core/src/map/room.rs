use crate::state::Position;

/// Axis-aligned rectangle carved out of the grid.
///
/// `x2`/`y2` are exclusive: the interior covers `x1..x2` by `y1..y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub const fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    pub const fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Overlap test on the half-open rectangles; rooms that merely touch do
    /// not intersect.
    pub const fn intersects(&self, other: &Room) -> bool {
        !(self.x2 <= other.x1 || self.x1 >= other.x2 || self.y2 <= other.y1 || self.y1 >= other.y2)
    }

    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.x1 && position.x < self.x2 && position.y >= self.y1 && position.y < self.y2
    }

    /// Iterates every interior cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y1..self.y2).flat_map(move |y| (self.x1..self.x2).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_uses_integer_midpoint() {
        let room = Room::new(2, 3, 5, 4);
        assert_eq!(room.center(), Position::new(4, 5));
        assert_eq!(room.cells().count(), 20);
    }

    #[test]
    fn touching_rooms_do_not_intersect() {
        let a = Room::new(0, 0, 4, 4);
        let b = Room::new(4, 0, 4, 4);
        let c = Room::new(3, 3, 4, 4);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }
}
