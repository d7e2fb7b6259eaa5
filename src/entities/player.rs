use super::Position;
use super::projectile::Projectile;
use crate::consts::{
    ARENA_HEIGHT, ARENA_WIDTH, PLAYER_BOTTOM_MARGIN, PLAYER_HEIGHT, PLAYER_STEP, PLAYER_WIDTH,
    PROJECTILE_LAUNCH_Y, PROJECTILE_WIDTH,
};

/// Which way a move command pushes the cannon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The player's cannon. Only its horizontal position ever changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A cannon centered on the arena floor
    pub fn new() -> Self {
        Self {
            x: ARENA_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
        }
    }

    /// Rightmost x the cannon may occupy
    pub fn max_x() -> f32 {
        ARENA_WIDTH - PLAYER_WIDTH
    }

    /// Fixed top edge of the cannon
    pub fn y() -> f32 {
        ARENA_HEIGHT - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - PLAYER_STEP).max(0.0);
    }

    pub fn move_right(&mut self) {
        self.x = (self.x + PLAYER_STEP).min(Self::max_x());
    }

    pub fn step(&mut self, side: Side) {
        match side {
            Side::Left => self.move_left(),
            Side::Right => self.move_right(),
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + PLAYER_WIDTH / 2.0
    }

    /// Builds the projectile a fire command launches from the current position
    pub fn fire(&self) -> Projectile {
        Projectile::new(Position::new(
            self.center_x() - PROJECTILE_WIDTH / 2.0,
            PROJECTILE_LAUNCH_Y,
        ))
    }
}
