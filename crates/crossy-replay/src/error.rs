//! Error types for replay capture and verification.

use std::fmt;

use crossy_core::StepError;
use crossy_engine::ConfigError;

/// Errors that can occur while capturing or verifying a recording.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplayError {
    /// A recorded action was rejected by the environment.
    Step(StepError),
    /// The replay environment could not be built.
    Config(ConfigError),
    /// The recording was captured under a different configuration.
    ConfigMismatch {
        /// Hash stored in the recording.
        recorded: u64,
        /// Hash of the replaying environment's config.
        current: u64,
    },
    /// A world hash differs between recorded and replayed state.
    HashMismatch {
        /// Step index (0 is the state right after reset).
        step: u64,
        /// Hash from the recording.
        recorded: u64,
        /// Hash computed from the replayed world.
        replayed: u64,
    },
    /// A reward differs between recorded and replayed state.
    RewardMismatch {
        /// Step index.
        step: u64,
        /// Recorded reward.
        recorded: f32,
        /// Replayed reward.
        replayed: f32,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(e) => write!(f, "step rejected: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::ConfigMismatch { recorded, current } => {
                write!(
                    f,
                    "config hash mismatch: recorded={recorded:#018x}, current={current:#018x}"
                )
            }
            Self::HashMismatch {
                step,
                recorded,
                replayed,
            } => {
                write!(
                    f,
                    "world mismatch at step {step}: \
                     recorded={recorded:#018x}, replayed={replayed:#018x}"
                )
            }
            Self::RewardMismatch {
                step,
                recorded,
                replayed,
            } => write!(
                f,
                "reward mismatch at step {step}: recorded={recorded}, replayed={replayed}"
            ),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Step(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StepError> for ReplayError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

impl From<ConfigError> for ReplayError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn hash_mismatch_display_is_hex() {
        let e = ReplayError::HashMismatch {
            step: 3,
            recorded: 0xff,
            replayed: 0x1,
        };
        let s = e.to_string();
        assert!(s.contains("step 3"));
        assert!(s.contains("0x00000000000000ff"));
    }

    #[test]
    fn wrapped_errors_expose_source() {
        let e = ReplayError::from(StepError::InvalidAction {
            code: 7,
            action_count: 5,
        });
        assert!(e.source().is_some());
        assert!(ReplayError::from(ConfigError::EmptyPalette).source().is_some());
    }
}
