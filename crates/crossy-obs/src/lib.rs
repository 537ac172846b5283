//! Observation encoding for the Crossy environment.
//!
//! Projects a [`WorldView`](crossy_core::WorldView) into a fixed-size
//! `height × width` [`Observation`] grid of [`CellKind`](crossy_core::CellKind)
//! values for consumption by a policy.
//!
//! # Painting order
//!
//! Later layers overwrite earlier ones:
//!
//! 1. road background on vehicle rows (if [`EncodeSpec::paint_roads`])
//! 2. agent
//! 3. in-bounds vehicles
//! 4. log cells, clipped to the grid
//! 5. water on every still-empty cell of a water row
//! 6. rocks (if [`EncodeSpec::paint_rocks`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod encode;
pub mod observation;
pub mod spec;

pub use encode::{encode, encode_into};
pub use observation::Observation;
pub use spec::{EncodeSpec, ObservationSpace};
