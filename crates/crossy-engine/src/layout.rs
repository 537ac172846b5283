//! Per-episode layout sampling.
//!
//! All draws come from the environment's generator in a fixed order
//! (water rows, vehicle rows, vehicles, logs, rocks), so one seed always
//! produces the same layout.

use std::collections::BTreeSet;

use crossy_core::{Heading, Log, Position, Vehicle, LOG_LENGTH};
use crossy_space::RowBand;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::config::{EnvConfig, LogHeading};
use crate::world::WorldState;

/// Rock placement outcome for one episode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RockReport {
    /// Rocks the config asked for.
    pub requested: usize,
    /// Rocks actually placed.
    pub placed: usize,
}

/// Draw a uniform heading.
pub(crate) fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Heading {
    if rng.random_bool(0.5) {
        Heading::Right
    } else {
        Heading::Left
    }
}

/// Draw a livery index in `[0, palette_size)`.
pub(crate) fn random_livery<R: Rng + ?Sized>(rng: &mut R, palette_size: u8) -> u8 {
    rng.random_range(0..palette_size.max(1))
}

/// Replace `world`'s contents with a freshly sampled layout.
///
/// `config` must have passed [`EnvConfig::validate`]; `band` is its
/// candidate row band.
pub fn generate<R: Rng + ?Sized>(
    world: &mut WorldState,
    config: &EnvConfig,
    band: &RowBand,
    rng: &mut R,
) -> RockReport {
    let grid = world.grid;
    world.agent = grid.agent_start();
    world.terminal = false;

    // Rows: water first, vehicles from what remains.
    let candidates: Vec<i32> = band.rows().collect();
    let water: BTreeSet<i32> = candidates
        .choose_multiple(rng, config.water_row_count)
        .copied()
        .collect();
    let remaining: Vec<i32> = candidates
        .into_iter()
        .filter(|y| !water.contains(y))
        .collect();
    let roads: BTreeSet<i32> = remaining
        .choose_multiple(rng, config.vehicle_row_count)
        .copied()
        .collect();
    world.water_rows = water;
    world.vehicle_rows = roads;

    world.vehicles.clear();
    for &y in &world.vehicle_rows {
        for _ in 0..config.vehicles_per_row {
            let x = rng.random_range(0..grid.width());
            let heading = random_heading(rng);
            let livery = random_livery(rng, config.palette_size);
            world.vehicles.push(Vehicle {
                pos: Position::new(x, y),
                heading,
                livery,
            });
        }
    }

    world.logs.clear();
    for &y in &world.water_rows {
        let row_heading = random_heading(rng);
        let count = rng.random_range(config.min_logs_per_row..=config.max_logs_per_row);
        for _ in 0..count {
            let x = rng.random_range(0..=grid.width() - LOG_LENGTH);
            let heading = match config.log_heading {
                LogHeading::PerRow => row_heading,
                LogHeading::PerLog => random_heading(rng),
            };
            world.logs.push(Log::new(Position::new(x, y), heading));
        }
    }

    world.rocks.clear();
    let placed = place_rocks(world, config, rng);
    if placed < config.rock_count {
        tracing::debug!(
            requested = config.rock_count,
            placed,
            "rock placement exhausted its attempts"
        );
    }
    RockReport {
        requested: config.rock_count,
        placed,
    }
}

fn place_rocks<R: Rng + ?Sized>(world: &mut WorldState, config: &EnvConfig, rng: &mut R) -> usize {
    let grid = world.grid;
    let clear_from = grid.height() - config.rock_clearance as i32;
    for _ in 0..config.rock_count {
        for _ in 0..config.rock_attempts {
            let cell = Position::new(
                rng.random_range(0..grid.width()),
                rng.random_range(0..grid.height()),
            );
            let blocked = world.water_rows.contains(&cell.y)
                || world.vehicle_rows.contains(&cell.y)
                || cell.y >= clear_from
                || cell == world.agent
                || world.rocks.contains(&cell);
            if !blocked {
                world.rocks.push(cell);
                break;
            }
        }
    }
    world.rocks.len()
}
