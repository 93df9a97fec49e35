//! Simulation engine for Sunblock.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces FrameSnapshots for the rendering layer.

pub mod engine;
pub mod run_state;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use sunblock_core as core;
