//! Deterministic replay verification for Crossy environments.
//!
//! Records action sequences together with per-step world hashes, then
//! replays them on a fresh environment to prove the run is reproducible
//! from its seed.
//!
//! # Architecture
//!
//! - [`world_hash`], [`observation_hash`] and [`config_hash`] fold state
//!   into FNV-1a digests
//! - [`Recording::capture`] steps an environment and stores one
//!   [`Frame`] per action
//! - [`Recording::verify`] replays and reports the first divergence

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod recording;

pub use error::ReplayError;
pub use hash::{config_hash, observation_hash, world_hash};
pub use recording::{Frame, Recording};
