//! Per-tick systems, run by the engine in a fixed order:
//! ship physics, fire control, movement, spawning, enemy drift,
//! collision resolution, cleanup, snapshot.

pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod fire_control;
pub mod movement;
pub mod ship;
pub mod snapshot;
pub mod spawner;
