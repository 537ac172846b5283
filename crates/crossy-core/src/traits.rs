//! Read-only access to world state.

use crate::entity::{Log, Vehicle};
use crate::id::Position;
use std::collections::BTreeSet;

/// Read-only view of a world.
///
/// Decouples consumers (observation encoding, renderers, replay hashing)
/// from the engine's world representation: they read through
/// `&dyn WorldView` and never mutate.
pub trait WorldView {
    /// Grid width in columns.
    fn width(&self) -> i32;

    /// Grid height in rows.
    fn height(&self) -> i32;

    /// Current agent cell. Always inside the grid.
    fn agent(&self) -> Position;

    /// All vehicles, in spawn order.
    fn vehicles(&self) -> &[Vehicle];

    /// All logs, in spawn order.
    fn logs(&self) -> &[Log];

    /// Rows in which standing without a log drowns the agent.
    fn water_rows(&self) -> &BTreeSet<i32>;

    /// Rows along which vehicles travel.
    fn vehicle_rows(&self) -> &BTreeSet<i32>;

    /// Static impassable cells.
    fn rocks(&self) -> &[Position];

    /// Whether the current episode has ended.
    fn is_terminal(&self) -> bool;
}
