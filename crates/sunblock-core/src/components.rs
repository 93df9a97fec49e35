//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, EnemyPhase};

/// Marks the player's ship (exactly one per round).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// Axis-aligned bounding box half-extents, centered on the entity's Position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub half_width: f64,
    pub half_height: f64,
}

impl Hull {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    /// Axis-aligned overlap test between two hulls at the given centers.
    pub fn overlaps(
        &self,
        center: crate::types::Position,
        other: &Hull,
        other_center: crate::types::Position,
    ) -> bool {
        (center.x - other_center.x).abs() < self.half_width + other.half_width
            && (center.y - other_center.y).abs() < self.half_height + other.half_height
    }
}

/// A player projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Launch angle in degrees from vertical (0 = straight up).
    pub angle_deg: f64,
}

/// An enemy: tagged variant with a shared motion record.
/// Variant-specific values (size, speed, reward, hit points) come
/// from `EnemyKind`; only the remaining hit points are stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub phase: EnemyPhase,
    /// Remaining hits before destruction.
    pub hit_points: u32,
    /// Horizontal drift direction: -1.0 or 1.0.
    pub drift_dir: f64,
    /// Elapsed-seconds deadline for the next drift direction roll.
    pub next_drift_roll_secs: f64,
    /// Explosion animation frame; meaningful only while Exploding.
    pub explosion_frame: u32,
}

impl Enemy {
    pub fn is_exploding(&self) -> bool {
        self.phase == EnemyPhase::Exploding
    }

    pub fn finished_exploding(&self) -> bool {
        self.is_exploding() && self.explosion_frame >= crate::constants::EXPLOSION_MAX_FRAMES
    }
}

/// A falling ammunition crate. Rotation is cosmetic only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmmoCrate {
    /// Cosmetic rotation phase in degrees, [0, 360).
    pub rotation_deg: f64,
}
