//! Enemy behavior: horizontal drift with randomized direction changes,
//! edge reversal, and explosion frame advance.
//!
//! Exploding enemies keep falling but take no further behavior decisions;
//! their frame counter runs until cleanup purges them.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sunblock_core::components::Enemy;
use sunblock_core::constants::*;
use sunblock_core::types::{Position, SimTime, Velocity};

/// Advance drift decisions and explosion counters for all enemies.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, time: &SimTime) {
    let now = time.elapsed_secs;

    for (_entity, (enemy, pos, vel)) in
        world.query_mut::<(&mut Enemy, &mut Position, &mut Velocity)>()
    {
        if enemy.is_exploding() {
            enemy.explosion_frame += 1;
            continue;
        }

        let half_width = enemy.kind.width() / 2.0;

        // Edge contact clamps x and turns the drift inward.
        if pos.x < half_width {
            pos.x = half_width;
            enemy.drift_dir = 1.0;
        } else if pos.x > WINDOW_WIDTH - half_width {
            pos.x = WINDOW_WIDTH - half_width;
            enemy.drift_dir = -1.0;
        }

        // Randomized direction-change deadline.
        if now >= enemy.next_drift_roll_secs {
            if rng.gen::<f64>() < ENEMY_DIRECTION_FLIP_CHANCE {
                enemy.drift_dir = -enemy.drift_dir;
            }
            enemy.next_drift_roll_secs =
                now + rng.gen_range(0.5..ENEMY_DIRECTION_CHANGE_SECS);
        }

        vel.x = ENEMY_DRIFT_SPEED * enemy.drift_dir;
    }
}
