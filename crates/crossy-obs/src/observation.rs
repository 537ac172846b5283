//! The dense observation grid.

use crossy_core::{CellKind, Position};
use std::fmt;

/// A `height × width` grid of cell kinds, stored row-major.
///
/// # Examples
///
/// ```
/// use crossy_core::CellKind;
/// use crossy_obs::Observation;
///
/// let obs = Observation::new(3, 2);
/// assert_eq!(obs.shape(), (2, 3));
/// assert_eq!(obs.get(2, 1), Some(CellKind::Empty));
/// assert_eq!(obs.get(3, 0), None);
/// assert_eq!(obs.codes(), vec![0; 6]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Observation {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Observation {
    /// An all-empty observation of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellKind::Empty; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, matching the observation space shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Cell at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<CellKind> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Cell at `pos`, or `None` outside the grid.
    pub fn at(&self, pos: Position) -> Option<CellKind> {
        self.get(pos.x, pos.y)
    }

    /// Overwrite a cell. Out-of-bounds writes are clipped (ignored).
    pub(crate) fn set(&mut self, x: i32, y: i32, kind: CellKind) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = kind;
        }
    }

    /// Reset every cell to [`CellKind::Empty`], resizing if needed.
    pub(crate) fn clear(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, CellKind::Empty);
    }

    /// One row of cells, or `None` if `y` is out of range.
    pub fn row(&self, y: usize) -> Option<&[CellKind]> {
        (y < self.height).then(|| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Legacy integer codes in row-major order.
    pub fn codes(&self) -> Vec<i32> {
        self.cells.iter().map(|c| c.code()).collect()
    }

    /// Legacy integer codes as a nested `height × width` matrix.
    pub fn code_rows(&self) -> Vec<Vec<i32>> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clips_out_of_bounds() {
        let mut obs = Observation::new(2, 2);
        obs.set(-1, 0, CellKind::Log);
        obs.set(2, 1, CellKind::Log);
        assert_eq!(obs.count(CellKind::Log), 0);
        obs.set(1, 1, CellKind::Log);
        assert_eq!(obs.get(1, 1), Some(CellKind::Log));
    }

    #[test]
    fn code_rows_match_shape() {
        let mut obs = Observation::new(3, 2);
        obs.set(0, 1, CellKind::Water);
        assert_eq!(obs.code_rows(), vec![vec![0, 0, 0], vec![4, 0, 0]]);
    }

    #[test]
    fn display_draws_one_line_per_row() {
        let mut obs = Observation::new(3, 2);
        obs.set(1, 0, CellKind::Agent);
        assert_eq!(obs.to_string(), ".@.\n...");
    }

    #[test]
    fn clear_resizes() {
        let mut obs = Observation::new(2, 2);
        obs.set(0, 0, CellKind::Agent);
        obs.clear(3, 1);
        assert_eq!(obs.shape(), (1, 3));
        assert_eq!(obs.count(CellKind::Empty), 3);
    }
}
