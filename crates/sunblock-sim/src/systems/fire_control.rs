//! Fire-rate governor and shot spawning.
//!
//! Sustained fire is self-limiting: each shot multiplies the minimum
//! interval by a decay factor (capped at the slowest bound); every tick
//! without the fire key held multiplies it by a recovery factor (floored
//! at the fastest bound). A discrete fire press goes through the same
//! gate as held fire, so rapid taps are throttled once the interval has
//! grown.
//!
//! Empty ammunition silently disables firing; it is not an error.

use hecs::World;

use sunblock_core::components::Ship;
use sunblock_core::constants::*;
use sunblock_core::events::GameEvent;
use sunblock_core::types::{Position, SimTime};

use crate::run_state::RunState;
use crate::world_setup;

/// Evaluate the governor and fire if a shot is due.
pub fn run(
    world: &mut World,
    run_state: &mut RunState,
    events: &mut Vec<GameEvent>,
    time: &SimTime,
    fire_held: bool,
    fire_pressed: bool,
) {
    let now = time.elapsed_secs;
    let wants_fire = fire_held || fire_pressed;

    if wants_fire
        && run_state.ammo > 0
        && now - run_state.last_shot_secs >= run_state.fire_interval_secs
    {
        shoot(world, run_state, events);
        run_state.last_shot_secs = now;
        run_state.fire_interval_secs =
            (run_state.fire_interval_secs * FIRE_DECAY).min(FIRE_INTERVAL_SLOWEST);
    }

    if !fire_held {
        run_state.fire_interval_secs =
            (run_state.fire_interval_secs * FIRE_RECOVERY).max(FIRE_INTERVAL_FASTEST);
    }
}

/// Spawn the projectile(s) for one shot from the ship's nose.
/// With the powerup active, a fan of `SPRAY_COUNT` projectiles at fixed
/// angular offsets replaces the single shot at triple the ammo cost
/// (saturating; ammunition never goes negative).
fn shoot(world: &mut World, run_state: &mut RunState, events: &mut Vec<GameEvent>) {
    let nose = match world
        .query_mut::<(&Ship, &Position)>()
        .into_iter()
        .next()
        .map(|(_, (_, pos))| Position::new(pos.x, pos.y - SHIP_HEIGHT))
    {
        Some(nose) => nose,
        None => return,
    };

    if run_state.powerup_active {
        for i in 0..SPRAY_COUNT {
            let angle = (i as f64 - (SPRAY_COUNT - 1) as f64 / 2.0) * SPRAY_ANGLE_DEG;
            world_setup::spawn_projectile(world, nose, angle);
        }
        run_state.ammo = run_state.ammo.saturating_sub(SPRAY_COUNT);
        events.push(GameEvent::ShotFired { spray: true });
    } else {
        world_setup::spawn_projectile(world, nose, 0.0);
        run_state.ammo -= 1;
        events.push(GameEvent::ShotFired { spray: false });
    }
}
