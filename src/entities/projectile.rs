use super::Position;
use crate::consts::PROJECTILE_STEP;

/// A shot travelling straight up from the cannon
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Position,
}

impl Projectile {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }

    pub fn update(&mut self) {
        self.pos.y -= PROJECTILE_STEP;
    }

    /// True once the shot has reached or passed the arena top
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y <= 0.0
    }
}
