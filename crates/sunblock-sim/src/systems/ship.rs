//! Ship controller: integrates held input into horizontal motion.
//!
//! Acceleration while a direction key is held, friction when neither is,
//! clamped top speed, a snap-to-zero threshold against perpetual creep,
//! and hard clamping at the playfield edges (overshoot is discarded,
//! never bounced). Pure state transform with no failure modes.

use hecs::World;

use sunblock_core::commands::InputState;
use sunblock_core::components::Ship;
use sunblock_core::constants::*;
use sunblock_core::types::{Position, Velocity};

/// Advance ship physics by one tick.
pub fn run(world: &mut World, input: InputState) {
    for (_entity, (_ship, pos, vel)) in world.query_mut::<(&Ship, &mut Position, &mut Velocity)>() {
        // Opposite keys held together sum to zero net acceleration.
        if input.left {
            vel.x -= SHIP_ACCELERATION;
        }
        if input.right {
            vel.x += SHIP_ACCELERATION;
        }
        if !input.left && !input.right {
            vel.x *= SHIP_FRICTION;
        }

        vel.x = vel.x.clamp(-SHIP_MAX_SPEED, SHIP_MAX_SPEED);
        if vel.x.abs() < SHIP_MIN_SPEED {
            vel.x = 0.0;
        }

        pos.x = (pos.x + vel.x).clamp(SHIP_WIDTH / 2.0, WINDOW_WIDTH - SHIP_WIDTH / 2.0);
    }
}
