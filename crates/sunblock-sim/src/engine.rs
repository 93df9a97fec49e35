//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `FrameSnapshot`s. Completely headless
//! (no rendering dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sunblock_core::commands::{InputState, PlayerCommand};
use sunblock_core::enums::GamePhase;
use sunblock_core::events::GameEvent;
use sunblock_core::state::FrameSnapshot;
use sunblock_core::types::SimTime;

use crate::run_state::RunState;
use crate::systems;
use crate::systems::spawner::SpawnClock;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all round state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    run_state: RunState,
    spawn_clock: SpawnClock,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    /// Latched discrete fire press, consumed by the next tick's governor.
    fire_pressed: bool,
    final_score: Option<u32>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            run_state: RunState::default(),
            spawn_clock: SpawnClock::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            fire_pressed: false,
            final_score: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    /// `input` is the per-tick snapshot of held keys from the UI layer.
    pub fn tick(&mut self, input: InputState) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems(input);
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.run_state,
            events,
            self.final_score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Final score, set once the round has ended.
    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    /// Get a read-only reference to the run state.
    #[cfg(test)]
    pub fn run_state(&self) -> &RunState {
        &self.run_state
    }

    /// Get a mutable reference to the run state (for test setup).
    #[cfg(test)]
    pub fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run_state
    }

    /// Spawn an enemy at an exact position with a far-off drift deadline
    /// (for tests needing precise placement).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        kind: sunblock_core::enums::EnemyKind,
        x: f64,
        y: f64,
    ) -> hecs::Entity {
        use sunblock_core::components::{Enemy, Hull};
        use sunblock_core::enums::EnemyPhase;
        use sunblock_core::types::{Position, Velocity};

        self.world.spawn((
            Enemy {
                kind,
                phase: EnemyPhase::Flying,
                hit_points: kind.hit_points(),
                drift_dir: 1.0,
                next_drift_roll_secs: f64::MAX,
                explosion_frame: 0,
            },
            Position::new(x, y),
            Velocity::new(0.0, kind.speed()),
            Hull::new(kind.width(), kind.height()),
        ))
    }

    /// Spawn an ammo crate at an exact position (for pickup tests).
    #[cfg(test)]
    pub fn spawn_crate_at(&mut self, x: f64, y: f64) -> hecs::Entity {
        use sunblock_core::components::{AmmoCrate, Hull};
        use sunblock_core::constants::{AMMO_CRATE_SIZE, AMMO_CRATE_SPEED};
        use sunblock_core::types::{Position, Velocity};

        self.world.spawn((
            AmmoCrate { rotation_deg: 0.0 },
            Position::new(x, y),
            Velocity::new(0.0, AMMO_CRATE_SPEED),
            Hull::new(AMMO_CRATE_SIZE, AMMO_CRATE_SIZE),
        ))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRound => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::Ended) {
                    self.world.clear();
                    world_setup::spawn_ship(&mut self.world);
                    self.time = SimTime::default();
                    self.run_state = RunState::default();
                    self.spawn_clock = SpawnClock::default();
                    self.events.clear();
                    self.fire_pressed = false;
                    self.final_score = None;
                    self.phase = GamePhase::Running;
                }
            }
            PlayerCommand::FireOnce => {
                if self.phase == GamePhase::Running {
                    self.fire_pressed = true;
                }
            }
            PlayerCommand::Quit => {
                if self.phase == GamePhase::Running {
                    self.end_round();
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: InputState) {
        let fire_pressed = std::mem::take(&mut self.fire_pressed);

        // 1. Ship physics (acceleration, friction, clamping)
        systems::ship::run(&mut self.world, input);
        // 2. Fire-rate governor + shot spawning
        systems::fire_control::run(
            &mut self.world,
            &mut self.run_state,
            &mut self.events,
            &self.time,
            input.fire,
            fire_pressed,
        );
        // 3. Timed, probabilistic spawning of enemies and crates
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_clock,
            &self.time,
        );
        // 4. Enemy drift decisions and explosion counters
        systems::enemy_ai::run(&mut self.world, &mut self.rng, &self.time);
        // 5. Kinematic integration (projectiles, enemies, crates)
        systems::movement::run(&mut self.world);
        // 6. Collision resolution (hits, rams, escapes, pickups)
        systems::collision::run(
            &mut self.world,
            &mut self.run_state,
            &mut self.events,
            &self.time,
            &mut self.despawn_buffer,
        );
        // 7. Powerup expiry and penalty-flash countdown
        self.run_state
            .update_powerup(self.time.elapsed_secs, &mut self.events);
        self.run_state.update_penalty_flash();
        // 8. Terminal check: lives exhausted ends the round
        if self.run_state.lives == 0 {
            self.end_round();
        }
        // 9. Cleanup (off-screen, finished explosions)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Transition to Ended and emit the terminal signal with the final score.
    fn end_round(&mut self) {
        self.phase = GamePhase::Ended;
        self.final_score = Some(self.run_state.score);
        self.events.push(GameEvent::RoundEnded {
            final_score: self.run_state.score,
        });
    }
}
