//! Cell kinds painted into observations.

/// What occupies a single observation cell.
///
/// Observations are grids of `CellKind`. Policies that consume plain
/// integers use [`CellKind::code`], which reproduces the legacy encoding:
/// roads and rocks share code `5`, while the enum keeps them apart.
///
/// # Examples
///
/// ```
/// use crossy_core::CellKind;
///
/// assert_eq!(CellKind::Empty.code(), 0);
/// assert_eq!(CellKind::Water.code(), 4);
/// assert_eq!(CellKind::Road.code(), CellKind::Obstacle.code());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Plain traversable ground.
    #[default]
    Empty,
    /// The agent.
    Agent,
    /// A vehicle.
    Vehicle,
    /// One of the cells covered by a log.
    Log,
    /// Water with no log covering it.
    Water,
    /// Background of a vehicle row.
    Road,
    /// A rock (static impassable cell).
    Obstacle,
}

impl CellKind {
    /// Largest legacy integer code.
    pub const MAX_CODE: i32 = 5;

    /// Legacy integer code of this kind.
    pub const fn code(self) -> i32 {
        match self {
            CellKind::Empty => 0,
            CellKind::Agent => 1,
            CellKind::Vehicle => 2,
            CellKind::Log => 3,
            CellKind::Water => 4,
            CellKind::Road | CellKind::Obstacle => 5,
        }
    }

    /// Single-character glyph used by text rendering.
    pub const fn glyph(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Agent => '@',
            CellKind::Vehicle => 'V',
            CellKind::Log => '=',
            CellKind::Water => '~',
            CellKind::Road => '_',
            CellKind::Obstacle => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_stay_within_legacy_range() {
        let all = [
            CellKind::Empty,
            CellKind::Agent,
            CellKind::Vehicle,
            CellKind::Log,
            CellKind::Water,
            CellKind::Road,
            CellKind::Obstacle,
        ];
        for kind in all {
            assert!((0..=CellKind::MAX_CODE).contains(&kind.code()));
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<char> = [
            CellKind::Empty,
            CellKind::Agent,
            CellKind::Vehicle,
            CellKind::Log,
            CellKind::Water,
            CellKind::Road,
            CellKind::Obstacle,
        ]
        .iter()
        .map(|k| k.glyph())
        .collect();
        assert_eq!(glyphs.len(), 7);
    }
}
