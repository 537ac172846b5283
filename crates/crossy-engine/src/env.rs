//! The user-facing environment.
//!
//! [`CrossyEnv`] owns the config, the seeded generator, the world and the
//! cached observation. Each [`step()`](CrossyEnv::step) decodes an action,
//! runs one tick of the transition engine and re-encodes the observation.
//!
//! # Phases
//!
//! An episode is `Active` until a step ends it, then `Terminal` until the
//! next [`reset()`](CrossyEnv::reset). Stepping a terminal episode is a
//! no-op: the world is not touched, the reward is 0 and `terminated`
//! stays true.

use std::io;

use crossy_core::{Action, ActionSpace, EpisodeId, Info, StepError, WorldView};
use crossy_obs::{encode_into, EncodeSpec, Observation, ObservationSpace};
use crossy_space::RowBand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, EnvConfig};
use crate::layout;
use crate::metrics::EpisodeStats;
use crate::render::Renderer;
use crate::transition::{self, EpisodeEnd};
use crate::world::WorldState;

// ── Phase ──────────────────────────────────────────────────────────

/// Lifecycle phase of the current episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Steps advance the world.
    Active,
    /// The episode has ended; steps are no-ops until reset.
    Terminal,
}

// ── Transition ─────────────────────────────────────────────────────

/// Result of one [`CrossyEnv::step()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Observation after the step.
    pub observation: Observation,
    /// Reward earned by the step.
    pub reward: f32,
    /// Whether the episode is over.
    pub terminated: bool,
    /// Always false: episodes have no time limit.
    pub truncated: bool,
    /// Auxiliary info. Currently always empty.
    pub info: Info,
    /// Terminal cause, if the episode is over.
    pub end: Option<EpisodeEnd>,
}

// ── CrossyEnv ──────────────────────────────────────────────────────

/// Single-agent road-and-river crossing environment.
///
/// # Example
///
/// ```
/// use crossy_engine::{CrossyEnv, EnvConfig};
///
/// let mut env = CrossyEnv::new(EnvConfig::compact().with_seed(7)).unwrap();
/// let (obs, _info) = env.reset(Some(7));
/// assert_eq!(obs.shape(), (20, 35));
///
/// let t = env.step(0).unwrap();
/// assert!(!t.truncated);
/// assert!(env.step(9).is_err());
/// ```
pub struct CrossyEnv {
    config: EnvConfig,
    band: RowBand,
    encode_spec: EncodeSpec,
    action_space: ActionSpace,
    rng: ChaCha8Rng,
    world: WorldState,
    phase: Phase,
    stats: EpisodeStats,
    next_episode: u64,
    obs: Observation,
}

impl CrossyEnv {
    /// Validate `config` and start the first episode with `config.seed`.
    pub fn new(config: EnvConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = WorldState::new(config.grid()?);
        let mut env = Self::assemble(config, world)?;
        let seed = env.config.seed;
        env.reset(Some(seed));
        Ok(env)
    }

    /// Start from a hand-placed world instead of a sampled layout.
    ///
    /// The generator is seeded with `config.seed` for later respawns and
    /// resets. The world's dimensions must match the config's.
    pub fn with_world(config: EnvConfig, world: WorldState) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        if world.grid() != grid {
            return Err(ConfigError::WorldMismatch {
                expected: (config.width, config.height),
                found: (world.width(), world.height()),
            });
        }
        let mut env = Self::assemble(config, world)?;
        env.phase = if env.world.is_terminal() {
            Phase::Terminal
        } else {
            Phase::Active
        };
        env.stats = EpisodeStats {
            episode: EpisodeId(0),
            seed: Some(env.config.seed),
            rocks_requested: env.world.rocks().len(),
            rocks_placed: env.world.rocks().len(),
            ..EpisodeStats::default()
        };
        env.next_episode = 1;
        encode_into(&env.world, &env.encode_spec, &mut env.obs);
        Ok(env)
    }

    fn assemble(config: EnvConfig, world: WorldState) -> Result<Self, ConfigError> {
        Ok(Self {
            band: config.band()?,
            encode_spec: config.encode_spec(),
            action_space: config.action_space(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            world,
            phase: Phase::Active,
            stats: EpisodeStats::default(),
            next_episode: 0,
            obs: Observation::new(config.width, config.height),
            config,
        })
    }

    /// Start a new episode.
    ///
    /// With `Some(seed)` the generator is re-seeded first; with `None` the
    /// current stream continues, so consecutive unseeded resets produce
    /// different layouts.
    pub fn reset(&mut self, seed: Option<u64>) -> (Observation, Info) {
        if let Some(seed) = seed {
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }
        let rocks = layout::generate(&mut self.world, &self.config, &self.band, &mut self.rng);
        self.phase = Phase::Active;
        self.stats = EpisodeStats {
            episode: EpisodeId(self.next_episode),
            seed,
            rocks_requested: rocks.requested,
            rocks_placed: rocks.placed,
            ..EpisodeStats::default()
        };
        self.next_episode += 1;
        encode_into(&self.world, &self.encode_spec, &mut self.obs);
        tracing::debug!(
            episode = self.stats.episode.0,
            ?seed,
            water_rows = ?self.world.water_rows(),
            vehicle_rows = ?self.world.vehicle_rows(),
            rocks = rocks.placed,
            "episode reset"
        );
        (self.obs.clone(), Info::new())
    }

    /// Step with an integer action code.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::InvalidAction`] if `code` is outside the
    /// action space. The world is not touched.
    pub fn step(&mut self, code: u32) -> Result<Transition, StepError> {
        let action = self.action_space.decode(code)?;
        self.step_action(action)
    }

    /// Step with a typed action.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::ActionNotAvailable`] if `action` is Stay and
    /// the config disables it.
    pub fn step_action(&mut self, action: Action) -> Result<Transition, StepError> {
        if !self.action_space.contains(action) {
            return Err(StepError::ActionNotAvailable { action });
        }
        if self.phase == Phase::Terminal {
            return Ok(Transition {
                observation: self.obs.clone(),
                reward: 0.0,
                terminated: true,
                truncated: false,
                info: Info::new(),
                end: self.stats.end,
            });
        }

        let outcome = transition::advance(&mut self.world, &self.config, action, &mut self.rng);
        self.stats.steps += 1;
        self.stats.score += outcome.reward;
        if let Some(end) = outcome.end {
            self.phase = Phase::Terminal;
            self.stats.end = Some(end);
            tracing::debug!(
                episode = self.stats.episode.0,
                steps = self.stats.steps,
                score = self.stats.score,
                cause = %end,
                "episode ended"
            );
        }
        encode_into(&self.world, &self.encode_spec, &mut self.obs);

        Ok(Transition {
            observation: self.obs.clone(),
            reward: outcome.reward,
            terminated: outcome.is_terminal(),
            truncated: false,
            info: Info::new(),
            end: outcome.end,
        })
    }

    /// The most recent observation.
    pub fn observation(&self) -> &Observation {
        &self.obs
    }

    /// Read access to the world.
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// The configuration this environment was built from.
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// The discrete action space.
    pub fn action_space(&self) -> ActionSpace {
        self.action_space
    }

    /// Shape and bounds of observations.
    pub fn observation_space(&self) -> ObservationSpace {
        self.config.observation_space()
    }

    /// Statistics for the current episode.
    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the current episode has ended.
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Hand the current world to a renderer.
    pub fn render(&self, renderer: &mut dyn Renderer) -> io::Result<()> {
        renderer.render(&self.world)
    }
}

impl std::fmt::Debug for CrossyEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrossyEnv")
            .field("episode", &self.stats.episode)
            .field("steps", &self.stats.steps)
            .field("phase", &self.phase)
            .field("agent", &self.world.agent())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossy_core::Position;
    use crossy_test_utils::fixtures::{open_field, COMPACT_HEIGHT, COMPACT_WIDTH};

    fn compact_field() -> CrossyEnv {
        let world =
            WorldState::from_view(&open_field(COMPACT_WIDTH, COMPACT_HEIGHT)).unwrap();
        CrossyEnv::with_world(EnvConfig::compact(), world).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = EnvConfig {
            palette_size: 0,
            ..EnvConfig::compact()
        };
        match CrossyEnv::new(cfg) {
            Err(ConfigError::EmptyPalette) => {}
            other => panic!("expected EmptyPalette, got {other:?}"),
        }
    }

    #[test]
    fn with_world_rejects_size_mismatch() {
        let world = WorldState::from_view(&open_field(10, 10)).unwrap();
        match CrossyEnv::with_world(EnvConfig::compact(), world) {
            Err(ConfigError::WorldMismatch {
                expected: (35, 20),
                found: (10, 10),
            }) => {}
            other => panic!("expected WorldMismatch, got {other:?}"),
        }
    }

    #[test]
    fn invalid_code_leaves_world_untouched() {
        let mut env = compact_field();
        let before = env.world().clone();
        match env.step(4) {
            Err(StepError::InvalidAction {
                code: 4,
                action_count: 4,
            }) => {}
            other => panic!("expected InvalidAction, got {other:?}"),
        }
        assert_eq!(env.world(), &before);
        assert_eq!(env.stats().steps, 0);
    }

    #[test]
    fn stay_unavailable_in_compact_space() {
        let mut env = compact_field();
        match env.step_action(Action::Stay) {
            Err(StepError::ActionNotAvailable {
                action: Action::Stay,
            }) => {}
            other => panic!("expected ActionNotAvailable, got {other:?}"),
        }
    }

    #[test]
    fn stats_track_steps_and_score() {
        let mut env = compact_field();
        env.step_action(Action::Left).unwrap();
        env.step_action(Action::Right).unwrap();
        assert_eq!(env.stats().steps, 2);
        assert!((env.stats().score - (-0.2)).abs() < 1e-6);
        assert_eq!(env.world().agent(), Position::new(17, 19));
    }

    #[test]
    fn reset_starts_new_episode() {
        let mut env = CrossyEnv::new(EnvConfig::standard().with_seed(5)).unwrap();
        assert_eq!(env.stats().episode, EpisodeId(0));
        assert_eq!(env.stats().seed, Some(5));
        let (obs, info) = env.reset(None);
        assert_eq!(env.stats().episode, EpisodeId(1));
        assert_eq!(env.stats().seed, None);
        assert!(info.is_empty());
        assert_eq!(&obs, env.observation());
        assert_eq!(env.phase(), Phase::Active);
    }

    #[test]
    fn observation_matches_space() {
        let env = CrossyEnv::new(EnvConfig::standard()).unwrap();
        assert!(env.observation_space().contains(env.observation()));
        assert_eq!(env.observation().shape(), (22, 40));
    }
}
