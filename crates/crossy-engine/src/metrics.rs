//! Per-episode statistics.
//!
//! [`EpisodeStats`] is reset at every episode start and updated after
//! every Active-phase step.

use crossy_core::EpisodeId;

use crate::transition::EpisodeEnd;

/// Counters for the current episode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpisodeStats {
    /// Episode number, starting at 0 for the construction reset.
    pub episode: EpisodeId,
    /// Active-phase steps taken this episode.
    pub steps: u64,
    /// Cumulative reward this episode.
    pub score: f32,
    /// Seed passed to the reset that started this episode, if any.
    pub seed: Option<u64>,
    /// Rocks the config asked for.
    pub rocks_requested: usize,
    /// Rocks placed by rejection sampling.
    pub rocks_placed: usize,
    /// How the episode ended, once it has.
    pub end: Option<EpisodeEnd>,
}

impl EpisodeStats {
    /// Rocks requested but not placed.
    pub fn rocks_skipped(&self) -> usize {
        self.rocks_requested.saturating_sub(self.rocks_placed)
    }
}
