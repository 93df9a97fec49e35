//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use sunblock_core::components::{AmmoCrate, Enemy, Projectile, Ship};
use sunblock_core::enums::{EnemyKind, GamePhase};
use sunblock_core::events::GameEvent;
use sunblock_core::state::*;
use sunblock_core::types::{Position, SimTime, Velocity};

use crate::run_state::RunState;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    run_state: &RunState,
    events: Vec<GameEvent>,
    final_score: Option<u32>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        ship: build_ship(world),
        projectiles: build_projectiles(world),
        enemies: build_enemies(world),
        crates: build_crates(world),
        hud: build_hud(run_state, time),
        events,
        final_score,
    }
}

fn build_ship(world: &World) -> ShipView {
    world
        .query::<(&Ship, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel))| ShipView {
            position: *pos,
            velocity_x: vel.x,
        })
        .unwrap_or_default()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            position: *pos,
            angle_deg: projectile.angle_deg,
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| EnemyView {
            position: *pos,
            kind: enemy.kind,
            explosion_frame: enemy.is_exploding().then_some(enemy.explosion_frame),
            // Only Large enemies render a health bar.
            hit_points: (enemy.kind == EnemyKind::Large && !enemy.is_exploding())
                .then_some(enemy.hit_points),
        })
        .collect()
}

fn build_crates(world: &World) -> Vec<CrateView> {
    world
        .query::<(&AmmoCrate, &Position)>()
        .iter()
        .map(|(_, (ammo_crate, pos))| CrateView {
            position: *pos,
            rotation_deg: ammo_crate.rotation_deg,
        })
        .collect()
}

fn build_hud(run_state: &RunState, time: &SimTime) -> HudView {
    HudView {
        score: run_state.score,
        lives: run_state.lives,
        ammo: run_state.ammo,
        powerup_active: run_state.powerup_active,
        powerup_remaining_secs: run_state.powerup_remaining(time.elapsed_secs),
        penalty_flash_ticks: run_state.penalty_flash_ticks,
        penalty_message: if run_state.penalty_flash_ticks > 0 {
            run_state.penalty_message.clone()
        } else {
            String::new()
        },
    }
}
