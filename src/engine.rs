//! Simulation engine
//!
//! [`Engine`] owns every piece of mutable round state. Commands and [`Engine::tick`]
//! are the only ways to change it; the shell only ever sees owned [`Snapshot`]s.

use crate::consts::ENEMY_POINTS;
use crate::entities::{Direction, Formation, Player, Position, Projectile, Side};

/// Discrete input the shell forwards to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    Restart,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Enemies destroyed this tick
    pub destroyed: usize,
    /// The formation hit a wall and dropped instead of marching
    pub bounced: bool,
    /// This tick latched the game-over flag
    pub game_over: bool,
}

/// Coarse state of the round, derived from a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Playing,
    /// Every enemy destroyed
    Cleared,
    /// An enemy reached the floor
    GameOver,
}

/// Owned, read-only copy of the round for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub player_x: f32,
    pub projectiles: Vec<Position>,
    pub enemies: Vec<Position>,
    pub score: u32,
    pub game_over: bool,
}

impl Snapshot {
    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn phase(&self) -> RoundPhase {
        if self.game_over {
            RoundPhase::GameOver
        } else if self.is_cleared() {
            RoundPhase::Cleared
        } else {
            RoundPhase::Playing
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    player: Player,
    projectiles: Vec<Projectile>,
    formation: Formation,
    score: u32,
    game_over: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// A fresh round: centered cannon, full grid heading right, no shots
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            projectiles: Vec::new(),
            formation: Formation::new(),
            score: 0,
            game_over: false,
        }
    }

    /// Starts a round from an arbitrary formation
    pub fn with_formation(formation: Formation) -> Self {
        Self {
            formation,
            ..Self::new()
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.move_player(Side::Left),
            Command::MoveRight => self.move_player(Side::Right),
            Command::Fire => self.fire(),
            Command::Restart => self.restart(),
        }
    }

    /// Shifts the cannon one step, clamped to the arena. Ignored after game over.
    pub fn move_player(&mut self, side: Side) {
        if self.game_over {
            return;
        }
        self.player.step(side);
    }

    /// Launches a shot from the cannon's center. No cooldown. Ignored after game over.
    pub fn fire(&mut self) {
        if self.game_over {
            return;
        }
        self.projectiles.push(self.player.fire());
    }

    /// Advances the round by one step. Does nothing once the game is over.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if self.game_over {
            return report;
        }

        for projectile in &mut self.projectiles {
            projectile.update();
        }
        self.projectiles.retain(|p| !p.is_out_of_bounds());

        report.bounced = self.formation.update();
        if report.bounced {
            log::debug!(
                "Formation bounced, now heading {:?}",
                self.formation.direction()
            );
        }

        // Shots are not consumed by hits
        report.destroyed = self.formation.remove_hit(&self.projectiles);
        if report.destroyed > 0 {
            self.score += ENEMY_POINTS * report.destroyed as u32;
            log::debug!(
                "{} enemies destroyed, score {}, {} remaining",
                report.destroyed,
                self.score,
                self.formation.len()
            );
            if self.formation.is_empty() {
                log::info!("Formation cleared with score {}", self.score);
            }
        }

        if self.formation.has_reached_floor() {
            self.game_over = true;
            report.game_over = true;
            log::info!("Enemy reached the floor, game over with score {}", self.score);
        }

        report
    }

    /// Throws away the current round and starts a fresh one
    pub fn restart(&mut self) {
        log::info!("Restarting round (previous score {})", self.score);
        *self = Self::new();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_x: self.player.x,
            projectiles: self.projectiles.iter().map(|p| p.pos).collect(),
            enemies: self.formation.enemies().iter().map(|e| e.pos).collect(),
            score: self.score,
            game_over: self.game_over,
        }
    }

    pub fn direction(&self) -> Direction {
        self.formation.direction()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
