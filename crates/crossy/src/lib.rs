//! Crossy: a grid road-and-river crossing environment for reinforcement
//! learning.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Crossy sub-crates. For most users, adding `crossy` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use crossy::prelude::*;
//!
//! let mut env = CrossyEnv::new(EnvConfig::compact().with_seed(42)).unwrap();
//! let (obs, _info) = env.reset(Some(42));
//! assert_eq!(obs.shape(), (20, 35));
//!
//! let mut steps = 0;
//! loop {
//!     let t = env.step_action(Action::Up).unwrap();
//!     steps += 1;
//!     if t.terminated {
//!         assert!(matches!(
//!             t.end,
//!             Some(EpisodeEnd::Goal | EpisodeEnd::Collision | EpisodeEnd::Drowned)
//!         ));
//!         break;
//!     }
//!     assert!(steps < 20);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `crossy-core` | Positions, actions, cell kinds, entities, `WorldView` |
//! | [`space`] | `crossy-space` | Grid bounds, row bands, edge policies |
//! | [`obs`] | `crossy-obs` | Observation grids and the encoder |
//! | [`engine`] | `crossy-engine` | Config, transition engine, `CrossyEnv`, renderers |
//! | [`replay`] | `crossy-replay` | World hashing and replay verification |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`crossy-core`).
///
/// Contains [`types::Action`], [`types::CellKind`], the moving entities and
/// the read-only [`types::WorldView`] trait.
pub use crossy_core as types;

/// Grid geometry (`crossy-space`).
///
/// Provides [`space::Grid`], [`space::RowBand`] and [`space::EdgePolicy`].
pub use crossy_space as space;

/// Observation grids and encoding (`crossy-obs`).
pub use crossy_obs as obs;

/// The environment and its transition engine (`crossy-engine`).
///
/// [`engine::CrossyEnv`] is the entry point; [`engine::EnvConfig`] holds
/// the presets.
pub use crossy_engine as engine;

/// Deterministic replay verification (`crossy-replay`).
///
/// Record runs with [`replay::Recording::capture`] and check them with
/// [`replay::Recording::verify`].
pub use crossy_replay as replay;

/// Common imports for typical Crossy usage.
///
/// ```rust
/// use crossy::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use crossy_core::{
        Action, ActionSpace, CellKind, Heading, Info, InfoValue, Log, Position, Vehicle,
        WorldView,
    };

    // Errors
    pub use crossy_core::StepError;
    pub use crossy_engine::ConfigError;
    pub use crossy_replay::ReplayError;

    // Space
    pub use crossy_space::{EdgePolicy, Grid};

    // Observation
    pub use crossy_obs::{Observation, ObservationSpace};

    // Engine
    pub use crossy_engine::{
        CrossyEnv, EnvConfig, EpisodeEnd, EpisodeStats, Renderer, TextRenderer, Transition,
    };

    // Replay
    pub use crossy_replay::Recording;
}
