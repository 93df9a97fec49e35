//! Input state and player commands sent from the frontend to the simulation.
//!
//! Held keys arrive as a fresh `InputState` snapshot with every tick;
//! discrete key-press events arrive as `PlayerCommand`s, which are queued
//! and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// Per-tick snapshot of held keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// Discrete player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new round (from Idle or Ended).
    StartRound,
    /// A single fire key-press. Goes through the same fire-rate gate as
    /// held fire, so rapid taps are throttled once the interval has grown.
    FireOnce,
    /// End the round immediately (escape/window close from the UI layer).
    Quit,
}
