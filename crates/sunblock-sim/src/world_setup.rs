//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the ship, enemies, ammo crates, and projectiles with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sunblock_core::components::*;
use sunblock_core::constants::*;
use sunblock_core::enums::{EnemyKind, EnemyPhase};
use sunblock_core::types::{Position, Velocity};

/// Spawn the player's ship at the center of its fixed baseline.
/// Position is the ship's bottom-center; the hull is centered above it.
pub fn spawn_ship(world: &mut World) -> hecs::Entity {
    world.spawn((
        Ship,
        Position::new(WINDOW_WIDTH / 2.0, SHIP_BASELINE_Y),
        Velocity::default(),
        Hull::new(SHIP_WIDTH, SHIP_HEIGHT),
    ))
}

/// Center of the ship's bounding box for a given baseline position.
pub fn ship_hull_center(pos: Position) -> Position {
    Position::new(pos.x, pos.y - SHIP_HEIGHT / 2.0)
}

/// Spawn an enemy of the given kind just above the top edge, at a random
/// x with a one-width margin from either side.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    now_secs: f64,
) -> hecs::Entity {
    let width = kind.width();
    let x = rng.gen_range(width..WINDOW_WIDTH - width);
    let drift_dir = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let first_roll: f64 = rng.gen_range(0.0..ENEMY_DIRECTION_CHANGE_SECS);

    let enemy = Enemy {
        kind,
        phase: EnemyPhase::Flying,
        hit_points: kind.hit_points(),
        drift_dir,
        next_drift_roll_secs: now_secs + first_roll,
        explosion_frame: 0,
    };

    world.spawn((
        enemy,
        Position::new(x, -kind.height()),
        Velocity::new(ENEMY_DRIFT_SPEED * drift_dir, kind.speed()),
        Hull::new(width, kind.height()),
    ))
}

/// Spawn an ammo crate just above the top edge at a random x.
pub fn spawn_crate(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let x = rng.gen_range(AMMO_CRATE_SIZE..WINDOW_WIDTH - AMMO_CRATE_SIZE);
    world.spawn((
        AmmoCrate { rotation_deg: 0.0 },
        Position::new(x, -AMMO_CRATE_SIZE),
        Velocity::new(0.0, AMMO_CRATE_SPEED),
        Hull::new(AMMO_CRATE_SIZE, AMMO_CRATE_SIZE),
    ))
}

/// Spawn a projectile from the ship's nose at the given launch angle
/// (degrees from vertical; positive leans right).
pub fn spawn_projectile(world: &mut World, nose: Position, angle_deg: f64) -> hecs::Entity {
    let angle = angle_deg.to_radians();
    world.spawn((
        Projectile { angle_deg },
        nose,
        Velocity::new(PROJECTILE_SPEED * angle.sin(), -PROJECTILE_SPEED * angle.cos()),
        Hull::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
    ))
}
