//! Hashing utilities for world and configuration comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of environment state.
//! These hashes are not cryptographically secure; they are used for
//! fast equality checks during replay verification.

use crossy_core::{Heading, WorldView};
use crossy_engine::{EnvConfig, LogFooting, LogHeading};
use crossy_obs::Observation;
use crossy_space::EdgePolicy;

/// FNV-1a offset basis for 64-bit.
pub(crate) const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_i32(hash: u64, v: i32) -> u64 {
    fnv1a_u32(hash, v as u32)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

fn heading_tag(h: Heading) -> u8 {
    match h {
        Heading::Left => 0,
        Heading::Right => 1,
    }
}

/// Compute a hash over everything a [`WorldView`] exposes.
///
/// Dimensions, agent, terminal flag, vehicles (including livery), logs,
/// water rows, vehicle rows and rocks are folded in that order. Each
/// collection is prefixed by its length so element boundaries cannot
/// shift between sections.
pub fn world_hash(world: &dyn WorldView) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_i32(hash, world.width());
    hash = fnv1a_i32(hash, world.height());

    let agent = world.agent();
    hash = fnv1a_i32(hash, agent.x);
    hash = fnv1a_i32(hash, agent.y);
    hash = fnv1a_byte(hash, world.is_terminal() as u8);

    hash = fnv1a_u64(hash, world.vehicles().len() as u64);
    for v in world.vehicles() {
        hash = fnv1a_i32(hash, v.pos.x);
        hash = fnv1a_i32(hash, v.pos.y);
        hash = fnv1a_byte(hash, heading_tag(v.heading));
        hash = fnv1a_byte(hash, v.livery);
    }

    hash = fnv1a_u64(hash, world.logs().len() as u64);
    for log in world.logs() {
        hash = fnv1a_i32(hash, log.pos.x);
        hash = fnv1a_i32(hash, log.pos.y);
        hash = fnv1a_byte(hash, heading_tag(log.heading));
    }

    for rows in [world.water_rows(), world.vehicle_rows()] {
        hash = fnv1a_u64(hash, rows.len() as u64);
        for &y in rows {
            hash = fnv1a_i32(hash, y);
        }
    }

    hash = fnv1a_u64(hash, world.rocks().len() as u64);
    for rock in world.rocks() {
        hash = fnv1a_i32(hash, rock.x);
        hash = fnv1a_i32(hash, rock.y);
    }
    hash
}

/// Compute a hash over an observation's shape and cell kinds.
pub fn observation_hash(obs: &Observation) -> u64 {
    let (h, w) = obs.shape();
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u64(hash, h as u64);
    hash = fnv1a_u64(hash, w as u64);
    for cell in obs.cells() {
        // Hash the glyph rather than the legacy code: Road and Obstacle
        // share a code but not a kind.
        hash = fnv1a_u32(hash, cell.glyph() as u32);
    }
    hash
}

/// Compute a hash over every rule-affecting field of a config.
///
/// The seed is excluded; recordings store it separately.
pub fn config_hash(config: &EnvConfig) -> u64 {
    let mut hash = FNV_OFFSET;
    for v in [
        config.width,
        config.height,
        config.reserved_top,
        config.reserved_bottom,
        config.water_row_count,
        config.vehicle_row_count,
        config.vehicles_per_row,
        config.min_logs_per_row,
        config.max_logs_per_row,
        config.rock_count,
        config.rock_attempts,
        config.rock_clearance,
    ] {
        hash = fnv1a_u64(hash, v as u64);
    }
    let flags = [
        matches!(config.log_heading, LogHeading::PerLog),
        matches!(config.edge_policy, EdgePolicy::Bounce),
        config.allow_stay,
        config.down_enabled,
        config.log_carry,
        matches!(config.log_footing, LogFooting::Anchor),
        config.paint_roads,
    ];
    for flag in flags {
        hash = fnv1a_byte(hash, flag as u8);
    }
    hash = fnv1a_byte(hash, config.palette_size);
    for r in [config.rewards.goal, config.rewards.death, config.rewards.step] {
        hash = fnv1a_u32(hash, r.to_bits());
    }
    hash
}
