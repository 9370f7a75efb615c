//! Fog of war.
//!
//! Tracks which tiles the player has ever seen on the current floor and
//! answers "is this tile in view right now". Both use the same squared
//! Euclidean radius test; glyph substitution for faded tiles is left to the
//! renderer.

use crate::state::Position;

/// Per-floor explored bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityTracker {
    width: u32,
    height: u32,
    explored: Vec<bool>,
}

impl VisibilityTracker {
    /// Creates a tracker with nothing explored.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            explored: vec![false; width as usize * height as usize],
        }
    }

    fn index(&self, cell: Position) -> Option<usize> {
        (cell.x >= 0 && cell.y >= 0 && cell.x < self.width as i32 && cell.y < self.height as i32)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Marks every in-bounds cell within `radius` of `center` as explored.
    ///
    /// Only the bounding box of the circle, clipped to the grid, is scanned.
    pub fn mark_visible(&mut self, center: Position, radius: u32) {
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let xs = (cx - r).max(0)..=(cx + r).min(i64::from(self.width) - 1);
        let ys = (cy - r).max(0)..=(cy + r).min(i64::from(self.height) - 1);
        for y in ys {
            for x in xs.clone() {
                let cell = Position::new(x as i32, y as i32);
                if !Self::is_currently_visible(cell, center, radius) {
                    continue;
                }
                if let Some(i) = self.index(cell) {
                    self.explored[i] = true;
                }
            }
        }
    }

    /// Pure radius test, re-evaluated on every call.
    pub fn is_currently_visible(cell: Position, center: Position, radius: u32) -> bool {
        let r = i64::from(radius);
        cell.distance_squared(center) <= r.saturating_mul(r)
    }

    /// True if the cell has ever been within view on this floor.
    pub fn is_explored(&self, cell: Position) -> bool {
        self.index(cell).is_some_and(|i| self.explored[i])
    }

    pub fn explored_count(&self) -> usize {
        self.explored.iter().filter(|e| **e).count()
    }

    pub(crate) fn explored_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.explored.iter().map(|e| u8::from(*e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unexplored() {
        let tracker = VisibilityTracker::new(10, 10);
        assert_eq!(tracker.explored_count(), 0);
        assert!(!tracker.is_explored(Position::new(3, 3)));
    }

    #[test]
    fn marks_exactly_the_disc() {
        let mut tracker = VisibilityTracker::new(40, 40);
        let center = Position::new(20, 20);
        tracker.mark_visible(center, 8);

        assert!(tracker.is_explored(Position::new(28, 20)));
        assert!(!tracker.is_explored(Position::new(29, 20)));
        // 6^2 + 6^2 = 72 <= 64 is false
        assert!(!tracker.is_explored(Position::new(26, 26)));
        // 5^2 + 6^2 = 61 <= 64
        assert!(tracker.is_explored(Position::new(25, 26)));

        let expected = (0..40)
            .flat_map(|y| (0..40).map(move |x| Position::new(x, y)))
            .filter(|p| p.distance_squared(center) <= 64)
            .count();
        assert_eq!(tracker.explored_count(), expected);
    }

    #[test]
    fn explored_persists_after_moving_away() {
        let mut tracker = VisibilityTracker::new(60, 25);
        tracker.mark_visible(Position::new(5, 5), 8);
        tracker.mark_visible(Position::new(50, 20), 8);
        assert!(tracker.is_explored(Position::new(5, 5)));
        assert!(!VisibilityTracker::is_currently_visible(
            Position::new(5, 5),
            Position::new(50, 20),
            8
        ));
    }

    #[test]
    fn clips_at_grid_edges() {
        let mut tracker = VisibilityTracker::new(5, 5);
        tracker.mark_visible(Position::new(0, 0), 8);
        assert_eq!(tracker.explored_count(), 25);
        assert!(!tracker.is_explored(Position::new(-1, 0)));
    }

    #[test]
    fn huge_radius_explores_the_whole_grid() {
        let mut tracker = VisibilityTracker::new(12, 7);
        tracker.mark_visible(Position::new(3, 4), u32::MAX);
        assert_eq!(tracker.explored_count(), 12 * 7);
        assert!(VisibilityTracker::is_currently_visible(
            Position::new(11, 0),
            Position::new(3, 4),
            u32::MAX
        ));
    }

    #[test]
    fn center_outside_the_grid_still_clips() {
        let mut tracker = VisibilityTracker::new(10, 10);
        tracker.mark_visible(Position::new(-3, 5), 4);
        assert!(tracker.is_explored(Position::new(0, 5)));
        assert!(tracker.is_explored(Position::new(1, 5)));
        assert!(!tracker.is_explored(Position::new(2, 5)));
        // x = 0 covers dy in -2..=2, x = 1 only dy = 0
        assert_eq!(tracker.explored_count(), 6);
    }
}
