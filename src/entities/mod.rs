mod enemy;
mod formation;
mod player;
mod projectile;

// Re-export all public types
pub use enemy::Enemy;
pub use formation::{Direction, Formation};
pub use player::{Player, Side};
pub use projectile::Projectile;

/// Top-left corner of an entity in arena units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
