//! Moving entities: vehicles on roads and logs on water.

use crate::id::{Heading, Position};

/// Number of contiguous columns a log occupies.
pub const LOG_LENGTH: i32 = 3;

/// A vehicle travelling along a vehicle row.
///
/// `pos.x` may lie just outside `[0, width)` while the vehicle leaves
/// one edge and before it re-enters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vehicle {
    /// Current cell (the row never changes).
    pub pos: Position,
    /// Travel direction.
    pub heading: Heading,
    /// Colour index into the configured palette. Cosmetic only.
    pub livery: u8,
}

impl Vehicle {
    /// Create a vehicle at `pos` heading `heading` with livery 0.
    pub const fn new(pos: Position, heading: Heading) -> Self {
        Self {
            pos,
            heading,
            livery: 0,
        }
    }

    /// Whether the vehicle occupies `cell`.
    pub fn occupies(&self, cell: Position) -> bool {
        self.pos == cell
    }
}

/// A floating log covering [`LOG_LENGTH`] columns `[x, x + LOG_LENGTH)`.
///
/// # Examples
///
/// ```
/// use crossy_core::{Heading, Log, Position};
///
/// let log = Log::new(Position::new(4, 7), Heading::Right);
/// assert!(log.covers(Position::new(6, 7)));
/// assert!(!log.covers(Position::new(7, 7)));
/// assert!(log.anchored_at(Position::new(4, 7)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Log {
    /// Leading (leftmost) cell of the log.
    pub pos: Position,
    /// Travel direction.
    pub heading: Heading,
}

impl Log {
    /// Create a log whose leftmost cell is `pos`.
    pub const fn new(pos: Position, heading: Heading) -> Self {
        Self { pos, heading }
    }

    /// Columns covered by this log, in order. May extend outside the grid.
    pub fn columns(&self) -> std::ops::Range<i32> {
        self.pos.x..self.pos.x + LOG_LENGTH
    }

    /// Whether the log's span covers `cell`.
    pub fn covers(&self, cell: Position) -> bool {
        self.pos.y == cell.y && self.columns().contains(&cell.x)
    }

    /// Whether `cell` is exactly the log's leading cell.
    pub fn anchored_at(&self, cell: Position) -> bool {
        self.pos == cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_span_is_three_columns() {
        let log = Log::new(Position::new(-1, 2), Heading::Left);
        assert_eq!(log.columns().len(), LOG_LENGTH as usize);
        assert!(log.covers(Position::new(1, 2)));
        assert!(!log.covers(Position::new(1, 3)), "other row never covered");
    }

    #[test]
    fn vehicle_occupies_single_cell() {
        let v = Vehicle::new(Position::new(3, 4), Heading::Right);
        assert!(v.occupies(Position::new(3, 4)));
        assert!(!v.occupies(Position::new(4, 4)));
    }
}
