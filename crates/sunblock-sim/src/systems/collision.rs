//! Collision resolver: pairwise AABB tests between projectiles, enemies,
//! crates, and the ship, mutating entity states and the run state.
//!
//! Per tick, for every non-exploding enemy, in order:
//! 1. projectiles (first match wins — at most one projectile resolves
//!    against a given enemy per tick),
//! 2. ship overlap (skipped if the enemy just started exploding, so a
//!    kill and a ram cannot both land in one tick: kill-before-damage),
//! 3. bottom-edge escape, which costs score and arms the penalty flash.
//! Crate pickups refill ammunition to the initial quantity.

use hecs::{Entity, World};

use sunblock_core::components::{AmmoCrate, Enemy, Hull, Projectile, Ship};
use sunblock_core::constants::*;
use sunblock_core::enums::EnemyPhase;
use sunblock_core::events::GameEvent;
use sunblock_core::types::{Position, SimTime};

use crate::run_state::RunState;
use crate::world_setup;

/// Resolve all collisions for this tick.
pub fn run(
    world: &mut World,
    run_state: &mut RunState,
    events: &mut Vec<GameEvent>,
    time: &SimTime,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let ship = world
        .query_mut::<(&Ship, &Position, &Hull)>()
        .into_iter()
        .next()
        .map(|(_, (_, pos, hull))| (world_setup::ship_hull_center(*pos), *hull));

    // Snapshot the live projectiles; consumed ones are tombstoned so a
    // single projectile cannot resolve two enemies in the same tick.
    let mut projectiles: Vec<(Entity, Position, Hull, bool)> = world
        .query_mut::<(&Projectile, &Position, &Hull)>()
        .into_iter()
        .map(|(entity, (_, pos, hull))| (entity, *pos, *hull, false))
        .collect();

    for (entity, (enemy, pos, hull)) in world.query_mut::<(&mut Enemy, &Position, &Hull)>() {
        if enemy.is_exploding() {
            continue;
        }

        // Escaped past the bottom edge undestroyed.
        if pos.y > WINDOW_HEIGHT {
            run_state.penalize(ESCAPE_PENALTY, events);
            despawn_buffer.push(entity);
            continue;
        }

        // Projectile hits: first overlapping live projectile wins.
        for (_, proj_pos, proj_hull, consumed) in projectiles.iter_mut() {
            if *consumed || !hull.overlaps(*pos, proj_hull, *proj_pos) {
                continue;
            }
            *consumed = true;
            enemy.hit_points = enemy.hit_points.saturating_sub(1);
            if enemy.hit_points == 0 {
                enemy.phase = EnemyPhase::Exploding;
                enemy.explosion_frame = 0;
                let reward = enemy.kind.reward();
                run_state.award(reward, time.elapsed_secs, events);
                events.push(GameEvent::EnemyDestroyed {
                    kind: enemy.kind,
                    reward,
                });
            }
            break;
        }

        // Ship contact; an enemy destroyed by a shot this tick is skipped.
        if enemy.is_exploding() {
            continue;
        }
        if let Some((ship_center, ship_hull)) = ship {
            if hull.overlaps(*pos, &ship_hull, ship_center) {
                enemy.phase = EnemyPhase::Exploding;
                enemy.explosion_frame = 0;
                run_state.lives = run_state.lives.saturating_sub(1);
                events.push(GameEvent::ShipHit {
                    lives_left: run_state.lives,
                });
            }
        }
    }

    // Consumed projectiles despawn with the escaped enemies.
    despawn_buffer.extend(
        projectiles
            .iter()
            .filter(|(_, _, _, consumed)| *consumed)
            .map(|(entity, _, _, _)| *entity),
    );

    // Crate pickups.
    if let Some((ship_center, ship_hull)) = ship {
        for (entity, (_, pos, hull)) in world.query_mut::<(&AmmoCrate, &Position, &Hull)>() {
            if hull.overlaps(*pos, &ship_hull, ship_center) {
                run_state.refill_ammo(events);
                despawn_buffer.push(entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
