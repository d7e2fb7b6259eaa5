//! Invaders - a single-round space invaders game for the terminal
//!
//! Core modules:
//! - `consts`: fixed arena geometry and tuning
//! - `entities`: player, projectiles, enemies and their formation
//! - `engine`: deterministic simulation (commands, tick, snapshots)
//! - `clock`: fixed-period tick scheduling
//! - `app`, `input`, `renderer`, `config`: the ratatui front end
//! - `terminal`: restoring the terminal on exit

// Library exports for testing
pub use engine::{Command, Engine, RoundPhase, Snapshot, TickReport};
pub use entities::{Direction, Enemy, Formation, Player, Position, Projectile, Side};

pub mod app;
pub mod clock;
pub mod config;
pub mod consts;
pub mod engine;
pub mod entities;
pub mod input;
pub mod renderer;
pub mod terminal;
