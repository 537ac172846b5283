//! Core types and traits for the Crossy environment.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: grid positions and
//! headings, the discrete action set, cell kinds used by observations,
//! the moving entities, error types, and the read-only [`WorldView`] trait
//! through which encoders, renderers and replay hashing see a world.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod cell;
pub mod entity;
pub mod error;
pub mod id;
pub mod info;
pub mod traits;

pub use action::{Action, ActionSpace};
pub use cell::CellKind;
pub use entity::{Log, Vehicle, LOG_LENGTH};
pub use error::StepError;
pub use id::{EpisodeId, Heading, Position, StepId};
pub use info::{Info, InfoValue};
pub use traits::WorldView;
