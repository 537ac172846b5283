//! Simulation engine for the Crossy road-and-river environment.
//!
//! Provides [`CrossyEnv`], a single-agent environment in which an agent
//! crosses vehicle rows and water rows (riding logs) to reach row 0.
//! Everything random is drawn from a seeded `ChaCha8Rng` owned by the
//! environment, so a seed fully determines an episode.
//!
//! Two rule sets ship as presets: [`EnvConfig::standard`] and
//! [`EnvConfig::compact`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod env;
pub mod layout;
pub mod metrics;
pub mod render;
pub mod transition;
pub mod world;

pub use config::{ConfigError, EnvConfig, LogFooting, LogHeading, RewardConfig};
pub use env::{CrossyEnv, Phase, Transition};
pub use layout::RockReport;
pub use metrics::EpisodeStats;
pub use render::{Renderer, TextRenderer};
pub use transition::{EpisodeEnd, Outcome};
pub use world::WorldState;
