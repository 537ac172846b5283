//! Reusable hand-placed layouts.
//!
//! Each fixture returns a [`MockWorld`] sized like one of the presets with
//! the agent at its start cell:
//!
//! - [`open_field`]: no vehicles, logs, water or rocks.
//! - [`vehicle_ahead`]: a vehicle parked on the cell above the agent.
//! - [`open_water_ahead`]: a water row above the agent with no logs.
//! - [`log_ahead`]: a water row above the agent with a log under its column.

use crate::MockWorld;
use crossy_core::Heading;

/// Compact preset grid size.
pub const COMPACT_WIDTH: i32 = 35;
/// Compact preset grid size.
pub const COMPACT_HEIGHT: i32 = 20;

/// An empty `width × height` world.
pub fn open_field(width: i32, height: i32) -> MockWorld {
    MockWorld::new(width, height)
}

/// A vehicle on the row above the agent, `offset` columns from the
/// agent's column.
///
/// Vehicles advance before collisions are checked, so
/// `offset = -heading.delta()` puts it on the agent's landing cell after
/// one Up step.
pub fn vehicle_ahead(width: i32, height: i32, heading: Heading, offset: i32) -> MockWorld {
    let world = MockWorld::new(width, height);
    let (x, y) = (world.agent.x, world.agent.y - 1);
    world.with_vehicle(x + offset, y, heading)
}

/// A log-free water row directly above the agent's start cell.
pub fn open_water_ahead(width: i32, height: i32) -> MockWorld {
    let world = MockWorld::new(width, height);
    let y = world.agent.y - 1;
    world.with_water_row(y)
}

/// A water row above the agent with one log whose middle cell is above the
/// agent.
pub fn log_ahead(width: i32, height: i32, heading: Heading) -> MockWorld {
    let world = MockWorld::new(width, height);
    let (x, y) = (world.agent.x, world.agent.y - 1);
    world.with_log(x - 1, y, heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossy_core::{Position, WorldView};

    #[test]
    fn open_field_has_agent_at_start() {
        let w = open_field(COMPACT_WIDTH, COMPACT_HEIGHT);
        assert_eq!(w.agent(), Position::new(17, 19));
        assert!(w.vehicles().is_empty());
        assert!(w.water_rows().is_empty());
    }

    #[test]
    fn log_ahead_covers_agent_column() {
        let w = log_ahead(10, 6, Heading::Right);
        let above = Position::new(w.agent.x, w.agent.y - 1);
        assert!(w.logs[0].covers(above));
        assert!(w.water_rows.contains(&above.y));
    }

    #[test]
    fn vehicle_ahead_marks_row() {
        let w = vehicle_ahead(10, 6, Heading::Left, 1);
        assert_eq!(w.vehicles[0].pos, Position::new(6, 4));
        assert!(w.vehicle_rows.contains(&4));
    }
}
