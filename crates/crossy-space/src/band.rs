//! The band of rows eligible for water and vehicle rows.

use crate::error::SpaceError;
use crate::grid::Grid;

/// A half-open range of rows `[start, end)` inside a grid.
///
/// Obstacle rows are sampled from this band; the rows outside it form the
/// reserved band (near the start row, near the goal row, or both).
///
/// # Examples
///
/// ```
/// use crossy_space::{Grid, RowBand};
///
/// let grid = Grid::new(35, 20).unwrap();
/// // Skip the top 4 rows and the start row.
/// let band = RowBand::reserve(&grid, 4, 1).unwrap();
/// assert_eq!(band.rows().collect::<Vec<_>>(), (4..19).collect::<Vec<_>>());
/// assert!(!band.contains(19));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowBand {
    start: i32,
    end: i32,
}

impl RowBand {
    /// Band left over after reserving `top` rows at the goal side and
    /// `bottom` rows at the start side of `grid`.
    ///
    /// Returns `Err(SpaceError::InvalidBand)` if nothing is left.
    pub fn reserve(grid: &Grid, top: usize, bottom: usize) -> Result<Self, SpaceError> {
        let height = grid.height() as usize;
        if top + bottom >= height {
            return Err(SpaceError::InvalidBand {
                reason: format!(
                    "reserving {top} top and {bottom} bottom rows leaves no rows of {height}"
                ),
            });
        }
        Ok(Self {
            start: top as i32,
            end: (height - bottom) as i32,
        })
    }

    /// First row of the band.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// One past the last row of the band.
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of rows in the band.
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Always false for a constructed band; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `row` belongs to the band.
    pub fn contains(&self, row: i32) -> bool {
        (self.start..self.end).contains(&row)
    }

    /// Rows of the band in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = i32> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_reserved_band() {
        let grid = Grid::new(40, 22).unwrap();
        let band = RowBand::reserve(&grid, 0, 3).unwrap();
        assert_eq!(band.start(), 0);
        assert_eq!(band.end(), 19);
        assert_eq!(band.len(), 19);
    }

    #[test]
    fn band_that_swallows_grid_fails() {
        let grid = Grid::new(5, 4).unwrap();
        match RowBand::reserve(&grid, 2, 2) {
            Err(SpaceError::InvalidBand { .. }) => {}
            other => panic!("expected InvalidBand, got {other:?}"),
        }
    }
}
