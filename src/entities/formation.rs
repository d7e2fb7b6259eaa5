use super::enemy::Enemy;
use super::projectile::Projectile;
use crate::consts::{
    ARENA_WIDTH, ENEMY_COLUMNS, ENEMY_DESCENT, ENEMY_HEIGHT, ENEMY_ROWS, ENEMY_STEP, ENEMY_WIDTH,
    FORMATION_MARGIN,
};

/// Shared horizontal heading of the whole formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The surviving enemies plus the one direction they all march in.
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    enemies: Vec<Enemy>,
    direction: Direction,
}

impl Default for Formation {
    fn default() -> Self {
        Self::new()
    }
}

impl Formation {
    /// The full starting grid, row-major, heading right
    pub fn new() -> Self {
        let mut enemies = Vec::with_capacity(ENEMY_ROWS * ENEMY_COLUMNS);
        for row in 0..ENEMY_ROWS {
            for col in 0..ENEMY_COLUMNS {
                enemies.push(Enemy::new(
                    col as f32 * ENEMY_WIDTH + FORMATION_MARGIN,
                    row as f32 * ENEMY_HEIGHT + FORMATION_MARGIN,
                ));
            }
        }

        Self {
            enemies,
            direction: Direction::default(),
        }
    }

    /// Builds a formation from arbitrary enemies, mostly for setting up scenarios
    pub fn from_enemies(enemies: Vec<Enemy>, direction: Direction) -> Self {
        Self { enemies, direction }
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Whether any enemy's leading edge touches or passes the wall it is heading for
    pub fn edge_reached(&self) -> bool {
        self.enemies.iter().any(|enemy| match self.direction {
            Direction::Right => enemy.right_edge() >= ARENA_WIDTH,
            Direction::Left => enemy.pos.x <= 0.0,
        })
    }

    /// Steps every enemy once. On a bounce the heading flips and the whole
    /// formation drops without moving sideways. Returns true on a bounce.
    pub fn update(&mut self) -> bool {
        let bounced = self.edge_reached();

        if bounced {
            self.direction = self.direction.reversed();
            for enemy in &mut self.enemies {
                enemy.pos.y += ENEMY_DESCENT;
            }
        } else {
            let dx = self.direction.sign() * ENEMY_STEP;
            for enemy in &mut self.enemies {
                enemy.pos.x += dx;
            }
        }

        bounced
    }

    /// Removes every enemy overlapped by at least one projectile and returns
    /// how many were removed. Projectiles are left untouched.
    pub fn remove_hit(&mut self, projectiles: &[Projectile]) -> usize {
        let before = self.enemies.len();
        self.enemies
            .retain(|enemy| !projectiles.iter().any(|p| enemy.contains(p.pos)));
        before - self.enemies.len()
    }

    pub fn has_reached_floor(&self) -> bool {
        self.enemies.iter().any(Enemy::has_reached_floor)
    }
}
