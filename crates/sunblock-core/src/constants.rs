//! Simulation constants and tuning parameters.
//!
//! Motion values are expressed in pixels per tick; timed events (fire
//! intervals, spawn intervals, the powerup window) are expressed in
//! elapsed seconds measured against `SimTime`.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Playfield ---

/// Playfield width in pixels.
pub const WINDOW_WIDTH: f64 = 600.0;

/// Playfield height in pixels.
pub const WINDOW_HEIGHT: f64 = 750.0;

// --- Ship ---

/// Ship bounding width in pixels.
pub const SHIP_WIDTH: f64 = 45.0;

/// Ship bounding height in pixels.
pub const SHIP_HEIGHT: f64 = 60.0;

/// Vertical position of the ship's baseline (fixed for the whole round).
pub const SHIP_BASELINE_Y: f64 = WINDOW_HEIGHT - 75.0;

/// Maximum horizontal speed (pixels/tick).
pub const SHIP_MAX_SPEED: f64 = 6.0;

/// Horizontal acceleration per tick while a direction key is held.
pub const SHIP_ACCELERATION: f64 = 0.375;

/// Velocity retained per tick when no direction key is held.
pub const SHIP_FRICTION: f64 = 0.92;

/// Speeds below this snap to zero to prevent perpetual creep.
pub const SHIP_MIN_SPEED: f64 = 0.075;

// --- Projectiles ---

/// Projectile bounding width in pixels.
pub const PROJECTILE_WIDTH: f64 = 3.0;

/// Projectile bounding height in pixels.
pub const PROJECTILE_HEIGHT: f64 = 9.0;

/// Projectile speed along its launch angle (pixels/tick).
pub const PROJECTILE_SPEED: f64 = 11.0;

// --- Ammunition and fire rate ---

/// Ammunition granted at round start and on crate pickup.
pub const INITIAL_AMMO: u32 = 500;

/// Fastest allowed interval between shots (seconds).
pub const FIRE_INTERVAL_FASTEST: f64 = 0.05;

/// Slowest allowed interval between shots (seconds).
pub const FIRE_INTERVAL_SLOWEST: f64 = 0.25;

/// Interval multiplier applied on each shot (cadence slows while firing).
pub const FIRE_DECAY: f64 = 1.1;

/// Interval multiplier applied each tick while fire is released.
pub const FIRE_RECOVERY: f64 = 0.95;

// --- Enemies ---

/// Standard enemy downward speed (pixels/tick).
pub const ENEMY_SPEED: f64 = 3.0;

/// Horizontal drift speed for all enemy kinds (pixels/tick).
pub const ENEMY_DRIFT_SPEED: f64 = 2.0;

/// Upper bound on the randomized delay between drift direction changes (seconds).
pub const ENEMY_DIRECTION_CHANGE_SECS: f64 = 1.5;

/// Probability that a due direction-change deadline actually reverses drift.
pub const ENEMY_DIRECTION_FLIP_CHANCE: f64 = 0.7;

/// Maximum simultaneous live enemies.
pub const MAX_ENEMIES: usize = 8;

/// Seconds between enemy spawn events.
pub const ENEMY_SPAWN_INTERVAL: f64 = 2.0;

/// Probability that a spawn event produces 2-3 enemies instead of 1.
pub const MULTI_SPAWN_CHANCE: f64 = 0.3;

/// Type roll below this value yields a Standard enemy, otherwise Large.
pub const ENEMY_TYPE_THRESHOLD: f64 = 0.7;

/// Ticks an explosion renders before the enemy is purged.
pub const EXPLOSION_MAX_FRAMES: u32 = 8;

/// Large enemy downward speed (pixels/tick).
pub const LARGE_ENEMY_SPEED: f64 = 1.2;

/// Hits required to destroy a Large enemy.
pub const LARGE_ENEMY_HEALTH: u32 = 3;

// --- Scoring ---

/// Score reward for a Standard enemy kill.
pub const SCORE_PER_KILL: u32 = 10;

/// Score reward for a Large enemy kill.
pub const LARGE_ENEMY_SCORE: u32 = 50;

/// Score penalty when an enemy escapes past the bottom edge.
pub const ESCAPE_PENALTY: u32 = 100;

/// Ticks the escape-penalty flash stays armed on the HUD.
pub const PENALTY_FLASH_TICKS: u32 = 60;

/// Lives at round start.
pub const PLAYER_LIVES: u32 = 3;

// --- Powerup ---

/// Powerup activates whenever the score crosses a multiple of this value.
pub const POWERUP_MILESTONE: u32 = 100;

/// Powerup window duration (seconds).
pub const POWERUP_DURATION: f64 = 5.0;

/// Projectiles per shot while the powerup is active.
pub const SPRAY_COUNT: u32 = 3;

/// Angular offset between spray projectiles (degrees from vertical).
pub const SPRAY_ANGLE_DEG: f64 = 15.0;

// --- Ammo crates ---

/// Crate bounding size in pixels (square).
pub const AMMO_CRATE_SIZE: f64 = 20.0;

/// Crate downward speed (pixels/tick).
pub const AMMO_CRATE_SPEED: f64 = 2.0;

/// Cosmetic crate rotation per tick (degrees).
pub const AMMO_CRATE_SPIN_DEG: f64 = 2.0;

/// Seconds between crate spawns (no population cap).
pub const AMMO_CRATE_SPAWN_INTERVAL: f64 = 15.0;
