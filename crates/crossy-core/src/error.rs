//! Error types for stepping an environment.

use crate::action::Action;
use std::error::Error;
use std::fmt;

/// Errors returned by `step()`.
///
/// Only the action argument can be wrong: a step in the terminal phase is
/// a neutral no-op, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The integer action code is outside the action space.
    InvalidAction {
        /// The rejected code.
        code: u32,
        /// Number of actions in the space (valid codes are `0..action_count`).
        action_count: usize,
    },
    /// The typed action exists but is not part of this environment's space.
    ActionNotAvailable {
        /// The rejected action.
        action: Action,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction { code, action_count } => {
                write!(f, "action code {code} outside 0..{action_count}")
            }
            Self::ActionNotAvailable { action } => {
                write!(f, "action '{action}' not available in this action space")
            }
        }
    }
}

impl Error for StepError {}
