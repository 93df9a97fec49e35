//! Events emitted by the simulation for audio and UI feedback.
//!
//! Drained into each `FrameSnapshot`; the frontend reacts (sounds,
//! screen shake, flashes) without ever mutating simulation state.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// One-shot feedback events, at most a handful per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A shot left the ship's nose (one event even for a spray volley).
    ShotFired { spray: bool },
    /// An enemy finished its hit points and started exploding.
    EnemyDestroyed { kind: EnemyKind, reward: u32 },
    /// An enemy rammed the ship.
    ShipHit { lives_left: u32 },
    /// An enemy crossed the bottom edge undestroyed.
    EnemyEscaped { penalty: u32 },
    /// Crate pickup restored ammunition to full.
    AmmoRefilled,
    /// Score crossed a milestone; spray-fire window armed.
    PowerupActivated { until_secs: f64 },
    /// The powerup window lapsed.
    PowerupExpired,
    /// Lives reached zero or quit was requested.
    RoundEnded { final_score: u32 },
}
