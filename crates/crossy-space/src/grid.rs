//! Bounded 2D grid with clamped agent movement.

use crate::error::SpaceError;
use crossy_core::Position;

/// A `width × height` grid with the origin at the top-left corner.
///
/// Row 0 is the goal row and row `height - 1` is the start row. Agent
/// movement is clamped per axis: stepping into a boundary is a no-op on
/// that axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Maximum dimension size: positions use `i32`, and entities may sit a
    /// few columns outside the grid.
    pub const MAX_DIM: usize = (i32::MAX / 2) as usize;

    /// Create a new grid.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use crossy_space::Grid;
    /// use crossy_core::Position;
    ///
    /// let grid = Grid::new(35, 20).unwrap();
    /// assert_eq!(grid.cell_count(), 700);
    /// assert_eq!(grid.agent_start(), Position::new(17, 19));
    /// assert!(Grid::new(0, 5).is_err());
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Check that `pos` is in bounds, returning it unchanged.
    pub fn check(&self, pos: Position) -> Result<Position, SpaceError> {
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(SpaceError::PositionOutOfBounds {
                x: pos.x,
                y: pos.y,
                bounds: format!("[0, {}) x [0, {})", self.width, self.height),
            })
        }
    }

    /// Row-major flat index of an in-bounds position.
    pub fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| (pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    /// Where the agent starts each episode: bottom row, middle column.
    pub fn agent_start(&self) -> Position {
        Position::new(self.width / 2, self.height - 1)
    }

    /// Clamp a column into `[0, width)`.
    pub fn clamp_x(&self, x: i32) -> i32 {
        x.clamp(0, self.width - 1)
    }

    /// Clamp a row into `[0, height)`.
    pub fn clamp_y(&self, y: i32) -> i32 {
        y.clamp(0, self.height - 1)
    }

    /// Move `pos` by `(dx, dy)`, clamping each axis at the grid edges.
    pub fn clamped_step(&self, pos: Position, dx: i32, dy: i32) -> Position {
        Position::new(self.clamp_x(pos.x + dx), self.clamp_y(pos.y + dy))
    }

    /// Whether `pos` is on the goal row.
    pub fn is_goal_row(&self, pos: Position) -> bool {
        pos.y == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_grid_rejected() {
        assert_eq!(Grid::new(0, 0), Err(SpaceError::EmptyGrid));
        assert_eq!(Grid::new(3, 0), Err(SpaceError::EmptyGrid));
    }

    #[test]
    fn oversized_grid_rejected() {
        match Grid::new(Grid::MAX_DIM + 1, 4) {
            Err(SpaceError::DimensionTooLarge { name: "width", .. }) => {}
            other => panic!("expected DimensionTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn step_into_boundary_is_noop_on_that_axis() {
        let g = Grid::new(5, 5).unwrap();
        assert_eq!(
            g.clamped_step(Position::new(0, 0), -1, -1),
            Position::new(0, 0)
        );
        assert_eq!(
            g.clamped_step(Position::new(4, 2), 1, 0),
            Position::new(4, 2)
        );
        assert_eq!(
            g.clamped_step(Position::new(2, 2), 0, -1),
            Position::new(2, 1)
        );
    }

    #[test]
    fn index_is_row_major() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.index(Position::new(0, 0)), Some(0));
        assert_eq!(g.index(Position::new(3, 2)), Some(11));
        assert_eq!(g.index(Position::new(4, 0)), None);
        assert_eq!(g.index(Position::new(-1, 0)), None);
    }

    #[test]
    fn check_rejects_outside_cells() {
        let g = Grid::new(4, 3).unwrap();
        assert!(g.check(Position::new(3, 2)).is_ok());
        match g.check(Position::new(4, 0)) {
            Err(SpaceError::PositionOutOfBounds { x: 4, y: 0, .. }) => {}
            other => panic!("expected PositionOutOfBounds, got {other:?}"),
        }
    }

    #[test]
    fn agent_start_is_bottom_centre() {
        let g = Grid::new(40, 22).unwrap();
        assert_eq!(g.agent_start(), Position::new(20, 21));
    }

    proptest! {
        #[test]
        fn clamped_step_stays_in_bounds(
            w in 1usize..50,
            h in 1usize..50,
            x in 0i32..50,
            y in 0i32..50,
            dx in -1i32..=1,
            dy in -1i32..=1,
        ) {
            let g = Grid::new(w, h).unwrap();
            let start = Position::new(x % g.width(), y % g.height());
            let next = g.clamped_step(start, dx, dy);
            prop_assert!(g.contains(next));
            prop_assert!((next.x - start.x).abs() <= 1);
            prop_assert!((next.y - start.y).abs() <= 1);
        }
    }
}
