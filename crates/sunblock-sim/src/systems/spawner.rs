//! Spawning system: timed, probabilistic creation of enemies and crates.
//!
//! Enemies spawn on a fixed interval gated by a live-population cap; a
//! qualifying spawn event may produce 2-3 simultaneous enemies, each
//! independently capped and independently rolling its kind. Ammo crates
//! spawn on a longer, independent interval with no cap. All randomness
//! comes from the engine-owned seeded RNG.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sunblock_core::components::Enemy;
use sunblock_core::constants::*;
use sunblock_core::enums::EnemyKind;
use sunblock_core::types::SimTime;

use crate::world_setup;

/// Elapsed-seconds timestamps of the previous spawn events.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnClock {
    pub last_enemy_spawn_secs: f64,
    pub last_crate_spawn_secs: f64,
}

/// Check both spawn intervals and create any due entities.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, clock: &mut SpawnClock, time: &SimTime) {
    let now = time.elapsed_secs;

    if now - clock.last_enemy_spawn_secs >= ENEMY_SPAWN_INTERVAL {
        let live = world.query_mut::<&Enemy>().into_iter().count();
        if live < MAX_ENEMIES {
            let spawn_count = if rng.gen::<f64>() < MULTI_SPAWN_CHANCE {
                rng.gen_range(2..=3)
            } else {
                1
            };

            let mut live = live;
            for _ in 0..spawn_count {
                // Each unit is independently capped at the population limit.
                if live >= MAX_ENEMIES {
                    break;
                }
                let kind = if rng.gen::<f64>() < ENEMY_TYPE_THRESHOLD {
                    EnemyKind::Standard
                } else {
                    EnemyKind::Large
                };
                world_setup::spawn_enemy(world, rng, kind, now);
                live += 1;
            }

            clock.last_enemy_spawn_secs = now;
        }
    }

    if now - clock.last_crate_spawn_secs >= AMMO_CRATE_SPAWN_INTERVAL {
        world_setup::spawn_crate(world, rng);
        clock.last_crate_spawn_secs = now;
    }
}
