//! Cleanup system: removes entities whose removal predicate holds.
//!
//! Runs after collision resolution, so an enemy marked exploding this
//! tick still renders its explosion for several more ticks before the
//! frame counter purges it. Uses a pre-allocated buffer to avoid
//! per-tick allocation.

use hecs::{Entity, World};

use sunblock_core::components::{AmmoCrate, Enemy, Hull, Projectile};
use sunblock_core::constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use sunblock_core::types::Position;

/// Collect and despawn off-screen projectiles and crates, plus enemies
/// that finished exploding or drifted past the bottom edge.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_, pos, hull)) in world.query_mut::<(&Projectile, &Position, &Hull)>() {
        if pos.y < -hull.half_height * 2.0
            || pos.x < -hull.half_width * 2.0
            || pos.x > WINDOW_WIDTH
        {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_, pos)) in world.query_mut::<(&AmmoCrate, &Position)>() {
        if pos.y > WINDOW_HEIGHT {
            despawn_buffer.push(entity);
        }
    }

    // Escaped flying enemies are penalized and removed by the collision
    // resolver; this catches finished explosions and exploding enemies
    // that fell past the bottom (no penalty for those).
    for (entity, (enemy, pos)) in world.query_mut::<(&Enemy, &Position)>() {
        if enemy.finished_exploding() || pos.y > WINDOW_HEIGHT {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
