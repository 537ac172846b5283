//! The per-tick transition function.
//!
//! [`advance`] runs one Active-phase tick against a [`WorldState`]:
//!
//! 1. agent move (clamped; rocks reject the move; Down may be disabled)
//! 2. vehicle advance under the configured [`EdgePolicy`](crossy_space::EdgePolicy)
//! 3. log advance under the same policy
//! 4. carry-by-log, then re-clamp the agent column
//! 5. outcome: collision, drowning, goal, each overriding the previous

use std::fmt;

use crossy_core::{Action, LOG_LENGTH};
use crossy_space::EdgeEvent;
use rand::Rng;

use crate::config::EnvConfig;
use crate::layout::random_livery;
use crate::world::WorldState;

/// Why an episode ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EpisodeEnd {
    /// The agent shares a cell with a vehicle.
    Collision,
    /// The agent is on a water row without footing.
    Drowned,
    /// The agent reached row 0.
    Goal,
}

impl fmt::Display for EpisodeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collision => write!(f, "collision"),
            Self::Drowned => write!(f, "drowned"),
            Self::Goal => write!(f, "goal"),
        }
    }
}

/// Reward and terminal cause of one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    /// Reward earned this tick.
    pub reward: f32,
    /// Terminal cause, or `None` if the episode continues.
    pub end: Option<EpisodeEnd>,
}

impl Outcome {
    /// Whether this tick ended the episode.
    pub fn is_terminal(&self) -> bool {
        self.end.is_some()
    }
}

/// Advance `world` by one tick under `action`.
///
/// The caller is responsible for phase handling: `world` must not be
/// terminal. Sets `world.terminal` when the outcome is terminal.
pub fn advance<R: Rng + ?Sized>(
    world: &mut WorldState,
    config: &EnvConfig,
    action: Action,
    rng: &mut R,
) -> Outcome {
    move_agent(world, config, action);
    advance_vehicles(world, config, rng);
    advance_logs(world, config);
    if config.log_carry {
        carry_agent(world);
    }
    let outcome = resolve(world, config);
    world.terminal = outcome.is_terminal();
    outcome
}

fn move_agent(world: &mut WorldState, config: &EnvConfig, action: Action) {
    if action == Action::Down && !config.down_enabled {
        return;
    }
    let (dx, dy) = action.offset();
    let target = world.grid.clamped_step(world.agent, dx, dy);
    if !world.is_rock(target) {
        world.agent = target;
    }
}

fn advance_vehicles<R: Rng + ?Sized>(world: &mut WorldState, config: &EnvConfig, rng: &mut R) {
    let width = world.grid.width();
    for vehicle in &mut world.vehicles {
        let step = config
            .edge_policy
            .advance(vehicle.pos.x, vehicle.heading, 1, width);
        vehicle.pos.x = step.x;
        vehicle.heading = step.heading;
        if step.event == EdgeEvent::Respawned {
            vehicle.livery = random_livery(rng, config.palette_size);
            tracing::trace!(row = vehicle.pos.y, x = step.x, "vehicle respawned");
        }
    }
}

fn advance_logs(world: &mut WorldState, config: &EnvConfig) {
    let width = world.grid.width();
    for log in &mut world.logs {
        let step = config
            .edge_policy
            .advance(log.pos.x, log.heading, LOG_LENGTH, width);
        log.pos.x = step.x;
        log.heading = step.heading;
        if step.event == EdgeEvent::Respawned {
            tracing::trace!(row = log.pos.y, x = step.x, "log respawned");
        }
    }
}

fn carry_agent(world: &mut WorldState) {
    if !world.water_rows.contains(&world.agent.y) {
        return;
    }
    if let Some(delta) = world.carrier(world.agent).map(|log| log.heading.delta()) {
        world.agent.x = world.grid.clamp_x(world.agent.x + delta);
    }
}

fn resolve(world: &WorldState, config: &EnvConfig) -> Outcome {
    let rewards = &config.rewards;
    let agent = world.agent;
    let mut outcome = Outcome {
        reward: rewards.step,
        end: None,
    };
    if world.is_vehicle(agent) {
        outcome = Outcome {
            reward: rewards.death,
            end: Some(EpisodeEnd::Collision),
        };
    }
    if !world.has_footing(agent, config.log_footing) {
        outcome = Outcome {
            reward: rewards.death,
            end: Some(EpisodeEnd::Drowned),
        };
    }
    if world.grid.is_goal_row(agent) {
        outcome = Outcome {
            reward: rewards.goal,
            end: Some(EpisodeEnd::Goal),
        };
    }
    outcome
}
