//! Fixed arena geometry and simulation tuning
//!
//! Every value here is fixed for a round; nothing is runtime-configurable
//! except the shell's tick period (see [`crate::config`]).

use std::time::Duration;

/// Arena dimensions in simulation units
pub const ARENA_WIDTH: f32 = 600.0;
pub const ARENA_HEIGHT: f32 = 400.0;

/// Player cannon
pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 10.0;
/// Gap between the cannon and the arena floor
pub const PLAYER_BOTTOM_MARGIN: f32 = 10.0;
/// Horizontal distance covered by one move command
pub const PLAYER_STEP: f32 = 20.0;

/// Player projectiles
pub const PROJECTILE_WIDTH: f32 = 5.0;
pub const PROJECTILE_HEIGHT: f32 = 10.0;
/// Upward distance covered per tick
pub const PROJECTILE_STEP: f32 = 10.0;
/// Top edge of a freshly fired shot; it expires on its 39th tick
pub const PROJECTILE_LAUNCH_Y: f32 = ARENA_HEIGHT - PROJECTILE_HEIGHT;

/// Enemies
pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 20.0;
pub const ENEMY_ROWS: usize = 4;
pub const ENEMY_COLUMNS: usize = 8;
/// Offset of the top-left enemy from the arena origin
pub const FORMATION_MARGIN: f32 = 20.0;
/// Horizontal distance the formation covers per tick
pub const ENEMY_STEP: f32 = 10.0;
/// Downward distance covered on a bounce tick
pub const ENEMY_DESCENT: f32 = 10.0;

/// Score awarded per destroyed enemy
pub const ENEMY_POINTS: u32 = 10;

/// Default period between simulation ticks
pub const TICK_PERIOD: Duration = Duration::from_millis(20);
/// Maximum ticks replayed after a stall, to avoid a spiral of death
pub const MAX_CATCH_UP_TICKS: u32 = 5;
