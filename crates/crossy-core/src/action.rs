//! The discrete action set and the configurable action space.

use crate::error::StepError;
use std::fmt;

/// One agent move per tick.
///
/// The integer codes match the environment's discrete action space:
/// `0` Up, `1` Down, `2` Left, `3` Right, `4` Stay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Move one row towards the goal (row - 1).
    Up = 0,
    /// Move one row away from the goal (row + 1).
    Down = 1,
    /// Move one column left (col - 1).
    Left = 2,
    /// Move one column right (col + 1).
    Right = 3,
    /// Do not move.
    Stay = 4,
}

impl Action {
    /// All actions in code order.
    pub const ALL: [Action; 5] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Stay,
    ];

    /// Returns the `(dx, dy)` offset for this action.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
            Action::Stay => (0, 0),
        }
    }

    /// The integer code of this action.
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Stay => "stay",
        };
        f.write_str(name)
    }
}

/// The discrete action space of an environment.
///
/// Four actions (Up, Down, Left, Right) are always present; Stay is
/// optional and takes code `4` when enabled.
///
/// # Examples
///
/// ```
/// use crossy_core::{Action, ActionSpace};
///
/// let space = ActionSpace::new(true);
/// assert_eq!(space.n(), 5);
/// assert_eq!(space.decode(4).unwrap(), Action::Stay);
///
/// let compact = ActionSpace::new(false);
/// assert_eq!(compact.n(), 4);
/// assert!(compact.decode(4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ActionSpace {
    with_stay: bool,
}

impl ActionSpace {
    /// Create an action space, with or without the Stay action.
    pub const fn new(with_stay: bool) -> Self {
        Self { with_stay }
    }

    /// Number of discrete actions.
    pub const fn n(&self) -> usize {
        if self.with_stay {
            5
        } else {
            4
        }
    }

    /// Whether the Stay action is part of this space.
    pub const fn has_stay(&self) -> bool {
        self.with_stay
    }

    /// Whether `action` belongs to this space.
    pub fn contains(&self, action: Action) -> bool {
        (action.code() as usize) < self.n()
    }

    /// Decode an integer action code.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::InvalidAction`] if `code` is outside `0..n`.
    pub fn decode(&self, code: u32) -> Result<Action, StepError> {
        Action::ALL
            .get(code as usize)
            .copied()
            .filter(|a| self.contains(*a))
            .ok_or(StepError::InvalidAction {
                code,
                action_count: self.n(),
            })
    }

    /// Iterate over the actions of this space in code order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(|a| self.contains(*a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_positions() {
        for (i, a) in Action::ALL.iter().enumerate() {
            assert_eq!(a.code() as usize, i);
        }
    }

    #[test]
    fn up_moves_towards_goal_row() {
        assert_eq!(Action::Up.offset(), (0, -1));
        assert_eq!(Action::Stay.offset(), (0, 0));
    }

    #[test]
    fn decode_out_of_range_fails() {
        let space = ActionSpace::new(true);
        match space.decode(5) {
            Err(StepError::InvalidAction {
                code: 5,
                action_count: 5,
            }) => {}
            other => panic!("expected InvalidAction, got {other:?}"),
        }
    }

    #[test]
    fn compact_space_excludes_stay() {
        let space = ActionSpace::new(false);
        assert!(!space.contains(Action::Stay));
        assert_eq!(space.iter().count(), 4);
        assert_eq!(space.decode(1).unwrap(), Action::Down);
    }
}
