//! Grid geometry for the Crossy environment.
//!
//! Defines the bounded [`Grid`] the agent lives on, the [`RowBand`] of rows
//! eligible for obstacles, and the [`EdgePolicy`] that decides what happens
//! to vehicles and logs when they reach a grid edge.
//!
//! # Edge policies
//!
//! - [`EdgePolicy::Respawn`]: an entity that fully leaves one edge re-enters
//!   just outside the opposite edge, same row and heading.
//! - [`EdgePolicy::Bounce`]: an entity whose leading column leaves the grid
//!   reverses its heading.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod band;
pub mod edge;
pub mod error;
pub mod grid;

pub use band::RowBand;
pub use edge::{Advance, EdgeEvent, EdgePolicy};
pub use error::SpaceError;
pub use grid::Grid;
