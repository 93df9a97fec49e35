//! Per-round run state: score, lives, ammunition, fire-rate interval,
//! powerup window, and the escape-penalty flash.
//!
//! Owned by the engine and mutated only by the fire-control and collision
//! systems, never by entities. All mutators uphold the clamping
//! invariants: score and ammo never go negative, the fire interval stays
//! inside its configured bounds.

use sunblock_core::constants::*;
use sunblock_core::events::GameEvent;

/// Persistent state of the current round outside the ECS world.
#[derive(Debug, Clone)]
pub struct RunState {
    pub score: u32,
    pub lives: u32,
    pub ammo: u32,
    /// Current minimum interval between shots (seconds).
    pub fire_interval_secs: f64,
    /// Elapsed-seconds timestamp of the last shot.
    pub last_shot_secs: f64,
    pub powerup_active: bool,
    /// Elapsed-seconds deadline for the powerup window.
    pub powerup_until_secs: f64,
    /// HUD flash countdown in ticks; 0 = not shown.
    pub penalty_flash_ticks: u32,
    pub penalty_message: String,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: PLAYER_LIVES,
            ammo: INITIAL_AMMO,
            fire_interval_secs: FIRE_INTERVAL_FASTEST,
            last_shot_secs: 0.0,
            powerup_active: false,
            powerup_until_secs: 0.0,
            penalty_flash_ticks: 0,
            penalty_message: String::new(),
        }
    }
}

impl RunState {
    /// Award points for a kill, then arm the powerup if the new score
    /// sits on a milestone. Re-crossing while active re-arms the window.
    pub fn award(&mut self, points: u32, now_secs: f64, events: &mut Vec<GameEvent>) {
        self.score += points;
        if self.score > 0 && self.score % POWERUP_MILESTONE == 0 {
            self.powerup_active = true;
            self.powerup_until_secs = now_secs + POWERUP_DURATION;
            events.push(GameEvent::PowerupActivated {
                until_secs: self.powerup_until_secs,
            });
        }
    }

    /// Apply the escape penalty, floored at zero, and arm the HUD flash.
    pub fn penalize(&mut self, penalty: u32, events: &mut Vec<GameEvent>) {
        self.score = self.score.saturating_sub(penalty);
        self.penalty_flash_ticks = PENALTY_FLASH_TICKS;
        self.penalty_message = format!("-{penalty} points!");
        events.push(GameEvent::EnemyEscaped { penalty });
    }

    /// Crate pickup: ammunition returns to exactly the initial quantity,
    /// regardless of the prior value.
    pub fn refill_ammo(&mut self, events: &mut Vec<GameEvent>) {
        self.ammo = INITIAL_AMMO;
        events.push(GameEvent::AmmoRefilled);
    }

    /// Time-based powerup expiry; checked once per tick.
    pub fn update_powerup(&mut self, now_secs: f64, events: &mut Vec<GameEvent>) {
        if self.powerup_active && now_secs > self.powerup_until_secs {
            self.powerup_active = false;
            events.push(GameEvent::PowerupExpired);
        }
    }

    /// Count the penalty flash down toward zero.
    pub fn update_penalty_flash(&mut self) {
        if self.penalty_flash_ticks > 0 {
            self.penalty_flash_ticks -= 1;
        }
    }

    /// Seconds of powerup window left at `now_secs`.
    pub fn powerup_remaining(&self, now_secs: f64) -> f64 {
        if self.powerup_active {
            (self.powerup_until_secs - now_secs).max(0.0)
        } else {
            0.0
        }
    }
}
