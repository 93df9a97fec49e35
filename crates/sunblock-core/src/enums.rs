//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Top-level round state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No round in progress; waiting for `StartRound`.
    #[default]
    Idle,
    /// Round running, systems advance each tick.
    Running,
    /// Lives reached zero or quit was requested. Terminal.
    Ended,
}

/// Enemy variant discriminant. Shared motion fields live in the
/// `Enemy` component; only size, speed, reward, and hit points differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// One-hit kill, small reward.
    Standard,
    /// Soaks several hits, larger reward.
    Large,
}

impl EnemyKind {
    /// Bounding width in pixels.
    pub fn width(self) -> f64 {
        match self {
            EnemyKind::Standard => 50.0,
            EnemyKind::Large => 90.0,
        }
    }

    /// Bounding height in pixels.
    pub fn height(self) -> f64 {
        match self {
            EnemyKind::Standard => 30.0,
            EnemyKind::Large => 60.0,
        }
    }

    /// Downward speed in pixels per tick.
    pub fn speed(self) -> f64 {
        match self {
            EnemyKind::Standard => ENEMY_SPEED,
            EnemyKind::Large => LARGE_ENEMY_SPEED,
        }
    }

    /// Hits required to destroy.
    pub fn hit_points(self) -> u32 {
        match self {
            EnemyKind::Standard => 1,
            EnemyKind::Large => LARGE_ENEMY_HEALTH,
        }
    }

    /// Score reward on destruction.
    pub fn reward(self) -> u32 {
        match self {
            EnemyKind::Standard => SCORE_PER_KILL,
            EnemyKind::Large => LARGE_ENEMY_SCORE,
        }
    }
}

/// Enemy lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    /// Descending and drifting; participates in collisions.
    #[default]
    Flying,
    /// Hit or rammed; renders its explosion but collides with nothing.
    /// Purged once the frame counter reaches `EXPLOSION_MAX_FRAMES`.
    Exploding,
}
