//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid or row-band construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero columns or rows.
    EmptyGrid,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
    /// A position that must lie inside the grid does not.
    PositionOutOfBounds {
        /// Column of the offending position.
        x: i32,
        /// Row of the offending position.
        y: i32,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A row band does not fit inside the grid or is empty.
    InvalidBand {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::PositionOutOfBounds { x, y, bounds } => {
                write!(f, "position ({x}, {y}) out of bounds: {bounds}")
            }
            Self::InvalidBand { reason } => write!(f, "invalid row band: {reason}"),
        }
    }
}

impl std::error::Error for SpaceError {}
