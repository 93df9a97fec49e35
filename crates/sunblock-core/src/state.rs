//! Frame snapshot — the complete drawable state handed to the renderer each tick.
//!
//! The renderer must treat a snapshot as read-only; nothing in it refers
//! back into the simulation world.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, GamePhase};
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete per-tick frame state for the rendering layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub ship: ShipView,
    pub projectiles: Vec<ProjectileView>,
    pub enemies: Vec<EnemyView>,
    pub crates: Vec<CrateView>,
    pub hud: HudView,
    pub events: Vec<GameEvent>,
    /// Set once the round ends; the only outward terminal signal.
    pub final_score: Option<u32>,
}

/// Ship position and motion for rendering (engine glow scales with speed).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub velocity_x: f64,
}

/// A projectile with its orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    /// Degrees from vertical.
    pub angle_deg: f64,
}

/// An enemy, either flying or mid-explosion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Position,
    pub kind: EnemyKind,
    /// Explosion animation frame, None while still flying.
    pub explosion_frame: Option<u32>,
    /// Remaining hit points; None for kinds without a health bar.
    pub hit_points: Option<u32>,
}

/// A falling ammo crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrateView {
    pub position: Position,
    pub rotation_deg: f64,
}

/// Scalar HUD values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub lives: u32,
    pub ammo: u32,
    pub powerup_active: bool,
    /// Seconds of powerup window left (0.0 when inactive).
    pub powerup_remaining_secs: f64,
    /// Penalty flash countdown in ticks (0 = not shown).
    pub penalty_flash_ticks: u32,
    /// Message shown while the flash countdown is nonzero.
    pub penalty_message: String,
}
