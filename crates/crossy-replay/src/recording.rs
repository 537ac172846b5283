//! In-memory action recordings and their verification.

use crossy_core::StepId;
use crossy_engine::CrossyEnv;

use crate::error::ReplayError;
use crate::hash::{config_hash, world_hash};

/// One recorded step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Step index within the recording, starting at 1.
    pub step: StepId,
    /// Integer action code passed to [`CrossyEnv::step`].
    pub action: u32,
    /// Reward as raw `f32` bits.
    pub reward_bits: u32,
    /// Whether the step reported termination.
    pub terminated: bool,
    /// World hash after the step.
    pub world_hash: u64,
}

impl Frame {
    /// The recorded reward.
    pub fn reward(&self) -> f32 {
        f32::from_bits(self.reward_bits)
    }
}

/// An action sequence together with the hashes it produced.
///
/// Episodes that terminate mid-recording are reset with the continuing
/// generator stream, so a recording may span several episodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recording {
    /// Seed of the initial reset.
    pub seed: u64,
    /// [`config_hash`] of the recording environment.
    pub config_hash: u64,
    /// World hash right after the initial reset.
    pub initial_hash: u64,
    /// One frame per recorded action.
    pub frames: Vec<Frame>,
}

impl Recording {
    /// Reset `env` with `seed` and record the result of stepping `actions`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::Step`] if an action code is outside the
    /// environment's action space.
    pub fn capture(env: &mut CrossyEnv, seed: u64, actions: &[u32]) -> Result<Self, ReplayError> {
        env.reset(Some(seed));
        let mut recording = Self {
            seed,
            config_hash: config_hash(env.config()),
            initial_hash: world_hash(env.world()),
            frames: Vec::with_capacity(actions.len()),
        };
        for (i, &action) in actions.iter().enumerate() {
            let t = env.step(action)?;
            recording.frames.push(Frame {
                step: StepId(i as u64 + 1),
                action,
                reward_bits: t.reward.to_bits(),
                terminated: t.terminated,
                world_hash: world_hash(env.world()),
            });
            if t.terminated {
                env.reset(None);
            }
        }
        tracing::debug!(
            seed,
            frames = recording.frames.len(),
            "recording captured"
        );
        Ok(recording)
    }

    /// Replay the recording on `env` and check every frame.
    ///
    /// # Errors
    ///
    /// Returns the first divergence found: [`ReplayError::ConfigMismatch`]
    /// before stepping, then [`ReplayError::HashMismatch`] or
    /// [`ReplayError::RewardMismatch`] at the first differing step.
    pub fn verify(&self, env: &mut CrossyEnv) -> Result<(), ReplayError> {
        let current = config_hash(env.config());
        if current != self.config_hash {
            return Err(ReplayError::ConfigMismatch {
                recorded: self.config_hash,
                current,
            });
        }

        env.reset(Some(self.seed));
        let initial = world_hash(env.world());
        if initial != self.initial_hash {
            return Err(ReplayError::HashMismatch {
                step: 0,
                recorded: self.initial_hash,
                replayed: initial,
            });
        }

        for frame in &self.frames {
            let t = env.step(frame.action)?;
            if t.reward.to_bits() != frame.reward_bits {
                return Err(ReplayError::RewardMismatch {
                    step: frame.step.0,
                    recorded: frame.reward(),
                    replayed: t.reward,
                });
            }
            let replayed = world_hash(env.world());
            if replayed != frame.world_hash {
                return Err(ReplayError::HashMismatch {
                    step: frame.step.0,
                    recorded: frame.world_hash,
                    replayed,
                });
            }
            if t.terminated {
                env.reset(None);
            }
        }
        Ok(())
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames that ended an episode.
    pub fn episodes_ended(&self) -> usize {
        self.frames.iter().filter(|f| f.terminated).count()
    }
}
