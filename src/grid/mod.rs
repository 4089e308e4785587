//! Grid storage for Game of Life boards
//!
//! Two interchangeable stores live behind the [`GridStore`] trait: a dense
//! flat array for small fixed boards and a sparse live-set for large,
//! mostly-empty ones. Both obey identical contracts.

pub mod dense;
pub mod sparse;

pub use dense::DenseGrid;
pub use sparse::SparseGrid;

use crate::config::BoundaryPolicy;
use crate::error::GridError;
use crate::pattern::PatternRecord;
use std::fmt;

/// A cell coordinate as `(row, col)`, row-major, origin at the top-left.
pub type Coord = (usize, usize);

/// Common contract for grid representations.
///
/// Coordinates handed to the checked accessors must lie in
/// `[0, height) x [0, width)`; anything outside is an [`GridError::OutOfRange`].
/// The boundary policy is fixed for the lifetime of a store.
pub trait GridStore: Clone + Send + Sync {
    /// Create an empty grid. Fails with `InvalidDimension` on a zero axis.
    fn with_dimensions(
        width: usize,
        height: usize,
        cell_size: u32,
        boundary: BoundaryPolicy,
    ) -> Result<Self, GridError>
    where
        Self: Sized;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn cell_size(&self) -> u32;
    fn boundary(&self) -> BoundaryPolicy;

    /// Unchecked liveness lookup; out-of-range coordinates read as dead.
    fn is_live(&self, row: usize, col: usize) -> bool;

    /// Unchecked write. Callers must guarantee the coordinate is in range.
    fn set_raw(&mut self, row: usize, col: usize, alive: bool);

    /// Kill every cell.
    fn clear(&mut self);

    /// Live coordinates in row-major order.
    fn live_cells(&self) -> Vec<Coord>;

    /// Number of live cells.
    fn live_count(&self) -> usize;

    /// Resize in place, preserving the overlapping region. Cells that fall
    /// outside the new bounds are discarded, not errored. A no-op when the
    /// dimensions are unchanged.
    fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), GridError>;

    /// Every coordinate the step engine must evaluate for the next
    /// generation: all cells for a dense grid, live cells plus their
    /// neighbors for a sparse one. Always in-range, free of duplicates.
    fn step_candidates(&self) -> Vec<Coord>;

    /// An empty grid with the same dimensions, cell size and boundary.
    fn blank_like(&self) -> Self;

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.height() || col >= self.width() {
            return Err(GridError::OutOfRange {
                row,
                col,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// Get cell state at coordinates.
    fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.is_live(row, col))
    }

    /// Idempotent set.
    fn set_live(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.set_raw(row, col, alive);
        Ok(())
    }

    /// Flip a cell and return its new state.
    fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_bounds(row, col)?;
        let next = !self.is_live(row, col);
        self.set_raw(row, col, next);
        Ok(next)
    }

    /// Check if the grid has no living cells.
    fn is_empty(&self) -> bool {
        self.live_count() == 0
    }

    /// Count living Moore neighbors, honoring the boundary policy.
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue; // Skip the cell itself
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if self.neighbor_alive(r, c) {
                    count += 1;
                }
            }
        }

        count
    }

    /// Check if a neighbor at signed coordinates is alive under the
    /// configured boundary policy.
    fn neighbor_alive(&self, row: isize, col: isize) -> bool {
        let height = self.height() as isize;
        let width = self.width() as isize;

        match self.boundary() {
            BoundaryPolicy::Bounded => {
                if row >= 0 && row < height && col >= 0 && col < width {
                    self.is_live(row as usize, col as usize)
                } else {
                    false // Out of bounds cells are dead
                }
            }
            BoundaryPolicy::Toroidal => {
                let wrapped_row = ((row % height + height) % height) as usize;
                let wrapped_col = ((col % width + width) % width) as usize;
                self.is_live(wrapped_row, wrapped_col)
            }
        }
    }

    /// Atomically replace dimensions, cell size, and live set from a pattern
    /// record. A malformed record leaves the prior state untouched.
    fn replace_from(&mut self, record: &PatternRecord) -> Result<(), GridError>
    where
        Self: Sized,
    {
        let next = record.decode::<Self>(self.boundary())?;
        *self = next;
        Ok(())
    }
}

/// Shared `Display` body for both grid representations.
pub(crate) fn fmt_cells<G: GridStore>(grid: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let symbol = if grid.is_live(row, col) { "⬛" } else { "⬜" };
            write!(f, "{}", symbol)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toroidal_wraparound_neighbor() {
        let mut grid =
            DenseGrid::with_dimensions(3, 3, 20, BoundaryPolicy::Toroidal).unwrap();
        grid.set_live(0, 0, true).unwrap();

        // (2,2) sees (0,0) across the corner wrap.
        assert_eq!(grid.count_live_neighbors(2, 2), 1);
    }

    #[test]
    fn test_bounded_corner_sees_nothing_outside() {
        let mut grid = DenseGrid::with_dimensions(3, 3, 20, BoundaryPolicy::Bounded).unwrap();
        grid.set_live(0, 0, true).unwrap();

        assert_eq!(grid.count_live_neighbors(2, 2), 0);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = DenseGrid::with_dimensions(4, 3, 20, BoundaryPolicy::Bounded).unwrap();

        assert!(matches!(
            grid.get(3, 0),
            Err(GridError::OutOfRange { row: 3, col: 0, .. })
        ));
        assert!(grid.get(0, 4).is_err());
        assert!(grid.toggle(5, 5).is_err());
        assert!(grid.set_live(3, 1, true).is_err());
        assert!(grid.get(2, 3).is_ok());
    }

    #[test]
    fn test_toggle_returns_new_state() {
        let mut grid = DenseGrid::with_dimensions(2, 2, 20, BoundaryPolicy::Bounded).unwrap();

        assert!(grid.toggle(0, 1).unwrap());
        assert!(grid.get(0, 1).unwrap());
        assert!(!grid.toggle(0, 1).unwrap());
        assert!(!grid.get(0, 1).unwrap());
    }
}
