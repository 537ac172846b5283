//! Test utilities and mock types for Crossy development.
//!
//! Provides [`MockWorld`], a plain-data implementation of
//! [`WorldView`] that tests populate by hand, plus scenario
//! fixtures in [`fixtures`] for the standard hand-placed layouts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeSet;

use crossy_core::{Heading, Log, Position, Vehicle, WorldView};

/// Hand-populated world implementing [`WorldView`].
///
/// All fields are public so tests can set up exact layouts. The agent
/// starts at the bottom-centre cell, matching the engine's reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockWorld {
    pub width: i32,
    pub height: i32,
    pub agent: Position,
    pub vehicles: Vec<Vehicle>,
    pub logs: Vec<Log>,
    pub water_rows: BTreeSet<i32>,
    pub vehicle_rows: BTreeSet<i32>,
    pub rocks: Vec<Position>,
    pub terminal: bool,
}

impl MockWorld {
    /// An empty `width × height` world with the agent at `(width / 2, height - 1)`.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            agent: Position::new(width / 2, height - 1),
            vehicles: Vec::new(),
            logs: Vec::new(),
            water_rows: BTreeSet::new(),
            vehicle_rows: BTreeSet::new(),
            rocks: Vec::new(),
            terminal: false,
        }
    }

    pub fn with_agent(mut self, x: i32, y: i32) -> Self {
        self.agent = Position::new(x, y);
        self
    }

    /// Add a vehicle and mark its row as a vehicle row.
    pub fn with_vehicle(mut self, x: i32, y: i32, heading: Heading) -> Self {
        self.vehicles.push(Vehicle::new(Position::new(x, y), heading));
        self.vehicle_rows.insert(y);
        self
    }

    /// Add a log and mark its row as a water row.
    pub fn with_log(mut self, x: i32, y: i32, heading: Heading) -> Self {
        self.logs.push(Log::new(Position::new(x, y), heading));
        self.water_rows.insert(y);
        self
    }

    pub fn with_water_row(mut self, y: i32) -> Self {
        self.water_rows.insert(y);
        self
    }

    pub fn with_vehicle_row(mut self, y: i32) -> Self {
        self.vehicle_rows.insert(y);
        self
    }

    pub fn with_rock(mut self, x: i32, y: i32) -> Self {
        self.rocks.push(Position::new(x, y));
        self
    }
}

impl WorldView for MockWorld {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
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
