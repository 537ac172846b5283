//! Strongly-typed identifiers, grid positions and headings.

use std::fmt;

/// Counts episodes started by an environment.
///
/// Incremented on every `reset()`, including the initial one performed at
/// construction, so the first playable episode is `EpisodeId(1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeId(pub u64);

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EpisodeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Monotonically increasing step counter within one episode.
///
/// Reset to zero by `reset()`; only steps taken in the active phase count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A cell position on the grid.
///
/// `x` is the column and `y` the row; the origin is the top-left corner,
/// so row 0 is the goal row. Coordinates are signed because vehicles and
/// logs may sit just outside the grid while they wrap around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Position {
    /// Construct a position from a column and a row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`, without any bounds handling.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Horizontal travel direction of a vehicle or log.
///
/// # Examples
///
/// ```
/// use crossy_core::Heading;
///
/// assert_eq!(Heading::Right.delta(), 1);
/// assert_eq!(Heading::Right.reversed(), Heading::Left);
/// assert_eq!(Heading::from_delta(-1), Some(Heading::Left));
/// assert_eq!(Heading::from_delta(0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Moving towards column 0.
    Left,
    /// Moving towards column `width - 1`.
    Right,
}

impl Heading {
    /// Signed column offset applied each tick: `-1` or `+1`.
    pub const fn delta(self) -> i32 {
        match self {
            Heading::Left => -1,
            Heading::Right => 1,
        }
    }

    /// The opposite heading.
    pub const fn reversed(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    /// Parse a unit delta back into a heading.
    pub const fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            -1 => Some(Heading::Left),
            1 => Some(Heading::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heading::Left => write!(f, "left"),
            Heading::Right => write!(f, "right"),
        }
    }
}
