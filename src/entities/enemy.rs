use super::Position;
use crate::consts::{ARENA_HEIGHT, ENEMY_HEIGHT, ENEMY_WIDTH};

/// A single invader. Enemies never move on their own; the owning
/// [`Formation`](super::Formation) steps them all together.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Position,
}

impl Enemy {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Position::new(x, y),
        }
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + ENEMY_WIDTH
    }

    pub fn bottom_edge(&self) -> f32 {
        self.pos.y + ENEMY_HEIGHT
    }

    /// Strict point-in-box test: a point lying exactly on an edge is outside
    pub fn contains(&self, point: Position) -> bool {
        point.x > self.pos.x
            && point.x < self.right_edge()
            && point.y > self.pos.y
            && point.y < self.bottom_edge()
    }

    pub fn has_reached_floor(&self) -> bool {
        self.bottom_edge() >= ARENA_HEIGHT
    }
}
