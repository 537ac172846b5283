//! Environment configuration, presets, validation, and error types.
//!
//! [`EnvConfig`] is the builder-input for constructing a
//! [`CrossyEnv`](crate::env::CrossyEnv). Two presets cover the shipped
//! rule sets:
//!
//! - [`EnvConfig::standard`]: 40×22 grid, rocks, Stay action, respawning
//!   traffic, logs carry the agent.
//! - [`EnvConfig::compact`]: 35×20 grid, no rocks, no Stay, Down disabled,
//!   bouncing traffic, no carry, footing only on a log's leading cell.
//!
//! [`validate()`](EnvConfig::validate) checks structural invariants at
//! construction time.

use std::error::Error;
use std::fmt;

use crossy_core::{ActionSpace, LOG_LENGTH};
use crossy_obs::{EncodeSpec, ObservationSpace};
use crossy_space::{EdgePolicy, Grid, RowBand, SpaceError};

// ── Rule enums ─────────────────────────────────────────────────────

/// How log headings are drawn at reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogHeading {
    /// One heading per water row, shared by all its logs.
    PerRow,
    /// An independent heading for every log.
    PerLog,
}

/// Which cells of a log keep the agent from drowning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogFooting {
    /// Any of the log's [`LOG_LENGTH`] cells.
    Span,
    /// Only the log's leading (leftmost) cell.
    Anchor,
}

// ── RewardConfig ───────────────────────────────────────────────────

/// Reward magnitudes for each step outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardConfig {
    /// Reward for reaching the goal row. Default: 10.0.
    pub goal: f32,
    /// Reward for a vehicle collision or drowning. Default: -10.0.
    pub death: f32,
    /// Reward for any other step. Default: -0.1.
    pub step: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            goal: 10.0,
            death: -10.0,
            step: -0.1,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EnvConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid or row band construction failed.
    Space(SpaceError),
    /// The grid is narrower than a log.
    GridTooNarrow {
        /// The configured width.
        width: usize,
    },
    /// The candidate band cannot hold the requested water and vehicle rows.
    NotEnoughRows {
        /// Water rows plus vehicle rows requested.
        requested: usize,
        /// Rows available in the candidate band.
        available: usize,
    },
    /// Log count range is empty or allows zero logs.
    InvalidLogCount {
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },
    /// `palette_size` is zero.
    EmptyPalette,
    /// A reward magnitude is NaN or infinite.
    InvalidReward {
        /// Which reward.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// `rock_clearance` exceeds the grid height.
    InvalidRockClearance {
        /// The configured clearance.
        clearance: usize,
        /// The grid height.
        height: usize,
    },
    /// A supplied world does not match the configured grid.
    WorldMismatch {
        /// Configured `(width, height)`.
        expected: (usize, usize),
        /// The world's `(width, height)`.
        found: (i32, i32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::GridTooNarrow { width } => {
                write!(f, "width {width} is narrower than a log ({LOG_LENGTH} columns)")
            }
            Self::NotEnoughRows {
                requested,
                available,
            } => write!(
                f,
                "{requested} obstacle rows requested but only {available} candidate rows"
            ),
            Self::InvalidLogCount { min, max } => {
                write!(f, "logs per row must satisfy 1 <= min <= max, got {min}..={max}")
            }
            Self::EmptyPalette => write!(f, "palette_size must be at least 1"),
            Self::InvalidReward { name, value } => {
                write!(f, "reward '{name}' must be finite, got {value}")
            }
            Self::InvalidRockClearance { clearance, height } => {
                write!(f, "rock_clearance {clearance} exceeds grid height {height}")
            }
            Self::WorldMismatch { expected, found } => write!(
                f,
                "world is {}x{} but config expects {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── EnvConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing an environment.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvConfig {
    /// Grid width in columns.
    pub width: usize,
    /// Grid height in rows.
    pub height: usize,
    /// Seed used by the initial reset at construction.
    pub seed: u64,
    /// Rows at the goal side excluded from water/vehicle rows.
    pub reserved_top: usize,
    /// Rows at the start side excluded from water/vehicle rows.
    pub reserved_bottom: usize,
    /// Number of water rows sampled per episode.
    pub water_row_count: usize,
    /// Number of vehicle rows sampled per episode.
    pub vehicle_row_count: usize,
    /// Vehicles spawned on each vehicle row.
    pub vehicles_per_row: usize,
    /// Minimum logs per water row (inclusive).
    pub min_logs_per_row: usize,
    /// Maximum logs per water row (inclusive).
    pub max_logs_per_row: usize,
    /// How log headings are drawn.
    pub log_heading: LogHeading,
    /// Number of vehicle liveries to draw from. Minimum: 1.
    pub palette_size: u8,
    /// Rocks requested per episode. Zero disables rocks.
    pub rock_count: usize,
    /// Rejection-sampling attempts per rock before it is skipped.
    pub rock_attempts: usize,
    /// Rows at the start side kept free of rocks.
    pub rock_clearance: usize,
    /// Edge behaviour of vehicles and logs.
    pub edge_policy: EdgePolicy,
    /// Whether the Stay action (code 4) is part of the action space.
    pub allow_stay: bool,
    /// Whether the Down action moves the agent. When false it is a no-op.
    pub down_enabled: bool,
    /// Whether a log under the agent carries it each tick.
    pub log_carry: bool,
    /// Which log cells count as footing on a water row.
    pub log_footing: LogFooting,
    /// Whether observations paint vehicle rows as road.
    pub paint_roads: bool,
    /// Reward magnitudes.
    pub rewards: RewardConfig,
}

impl EnvConfig {
    /// The standard rule set: 40×22 grid with rocks and respawning traffic.
    pub fn standard() -> Self {
        Self {
            width: 40,
            height: 22,
            seed: 0,
            reserved_top: 0,
            reserved_bottom: 3,
            water_row_count: 3,
            vehicle_row_count: 5,
            vehicles_per_row: 1,
            min_logs_per_row: 1,
            max_logs_per_row: 2,
            log_heading: LogHeading::PerRow,
            palette_size: 1,
            rock_count: 10,
            rock_attempts: 100,
            rock_clearance: 4,
            edge_policy: EdgePolicy::Respawn,
            allow_stay: true,
            down_enabled: true,
            log_carry: true,
            log_footing: LogFooting::Span,
            paint_roads: true,
            rewards: RewardConfig::default(),
        }
    }

    /// The compact rule set: 35×20 grid, bouncing traffic, no rocks.
    pub fn compact() -> Self {
        Self {
            width: 35,
            height: 20,
            reserved_top: 4,
            reserved_bottom: 1,
            rock_count: 0,
            rock_clearance: 0,
            edge_policy: EdgePolicy::Bounce,
            allow_stay: false,
            down_enabled: false,
            log_carry: false,
            log_footing: LogFooting::Anchor,
            paint_roads: false,
            ..Self::standard()
        }
    }

    /// Same config with a different construction seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must be non-empty and wide enough for a log.
        let grid = self.grid()?;
        if grid.width() < LOG_LENGTH {
            return Err(ConfigError::GridTooNarrow { width: self.width });
        }
        // 2. Candidate band must hold every water and vehicle row.
        let band = self.band()?;
        let requested = self.water_row_count + self.vehicle_row_count;
        if requested > band.len() {
            return Err(ConfigError::NotEnoughRows {
                requested,
                available: band.len(),
            });
        }
        // 3. Logs per row.
        if self.min_logs_per_row == 0 || self.min_logs_per_row > self.max_logs_per_row {
            return Err(ConfigError::InvalidLogCount {
                min: self.min_logs_per_row,
                max: self.max_logs_per_row,
            });
        }
        // 4. Palette.
        if self.palette_size == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        // 5. Rewards.
        for (name, value) in [
            ("goal", self.rewards.goal),
            ("death", self.rewards.death),
            ("step", self.rewards.step),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidReward { name, value });
            }
        }
        // 6. Rock clearance.
        if self.rock_clearance > self.height {
            return Err(ConfigError::InvalidRockClearance {
                clearance: self.rock_clearance,
                height: self.height,
            });
        }
        Ok(())
    }

    /// The configured grid.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Ok(Grid::new(self.width, self.height)?)
    }

    /// The band of rows eligible for water and vehicle rows.
    pub fn band(&self) -> Result<RowBand, ConfigError> {
        let grid = self.grid()?;
        Ok(RowBand::reserve(&grid, self.reserved_top, self.reserved_bottom)?)
    }

    /// The discrete action space.
    pub fn action_space(&self) -> ActionSpace {
        ActionSpace::new(self.allow_stay)
    }

    /// Which optional observation layers are painted.
    pub fn encode_spec(&self) -> EncodeSpec {
        EncodeSpec {
            paint_roads: self.paint_roads,
            paint_rocks: self.rock_count > 0,
        }
    }

    /// Shape and bounds of produced observations.
    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace::new(self.height, self.width, &self.encode_spec())
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::standard()
    }
}
