//! Mutable world state owned by an environment.

use std::collections::BTreeSet;

use crossy_core::{Log, Position, Vehicle, WorldView};
use crossy_space::{Grid, SpaceError};

use crate::config::LogFooting;

/// Everything the transition engine mutates during an episode.
///
/// Entity collections are rebuilt by every reset and mutated in place by
/// every step. Read access for encoders, renderers and hashing goes through
/// the [`WorldView`] impl.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldState {
    pub(crate) grid: Grid,
    pub(crate) agent: Position,
    pub(crate) vehicles: Vec<Vehicle>,
    pub(crate) logs: Vec<Log>,
    pub(crate) water_rows: BTreeSet<i32>,
    pub(crate) vehicle_rows: BTreeSet<i32>,
    pub(crate) rocks: Vec<Position>,
    pub(crate) terminal: bool,
}

impl WorldState {
    /// An empty world with the agent on its start cell.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            agent: grid.agent_start(),
            vehicles: Vec::new(),
            logs: Vec::new(),
            water_rows: BTreeSet::new(),
            vehicle_rows: BTreeSet::new(),
            rocks: Vec::new(),
            terminal: false,
        }
    }

    /// Copy an arbitrary view into an owned world.
    ///
    /// Used to start an environment from a hand-placed layout. The agent
    /// must lie inside the grid; entities may sit outside it.
    pub fn from_view(view: &dyn WorldView) -> Result<Self, SpaceError> {
        let grid = Grid::new(view.width().max(0) as usize, view.height().max(0) as usize)?;
        let agent = grid.check(view.agent())?;
        Ok(Self {
            grid,
            agent,
            vehicles: view.vehicles().to_vec(),
            logs: view.logs().to_vec(),
            water_rows: view.water_rows().clone(),
            vehicle_rows: view.vehicle_rows().clone(),
            rocks: view.rocks().to_vec(),
            terminal: view.is_terminal(),
        })
    }

    /// The grid this world lives on.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Whether standing on `pos` keeps the agent out of the water.
    ///
    /// Cells outside water rows always give footing.
    pub fn has_footing(&self, pos: Position, footing: LogFooting) -> bool {
        if !self.water_rows.contains(&pos.y) {
            return true;
        }
        self.logs.iter().any(|log| match footing {
            LogFooting::Span => log.covers(pos),
            LogFooting::Anchor => log.anchored_at(pos),
        })
    }

    /// The first log, in list order, whose span covers `pos`.
    pub fn carrier(&self, pos: Position) -> Option<&Log> {
        self.logs.iter().find(|log| log.covers(pos))
    }

    /// Whether a rock sits on `pos`.
    pub fn is_rock(&self, pos: Position) -> bool {
        self.rocks.contains(&pos)
    }

    /// Whether any vehicle occupies `pos`.
    pub fn is_vehicle(&self, pos: Position) -> bool {
        self.vehicles.iter().any(|v| v.occupies(pos))
    }
}

impl WorldView for WorldState {
    fn width(&self) -> i32 {
        self.grid.width()
    }

    fn height(&self) -> i32 {
        self.grid.height()
    }

    fn agent(&self) -> Position {
        self.agent
    }

    fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    fn logs(&self) -> &[Log] {
        &self.logs
    }

    fn water_rows(&self) -> &BTreeSet<i32> {
        &self.water_rows
    }

    fn vehicle_rows(&self) -> &BTreeSet<i32> {
        &self.vehicle_rows
    }

    fn rocks(&self) -> &[Position] {
        &self.rocks
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
