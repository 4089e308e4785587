//! Sparse grid representation backed by an ordered live-cell set

use super::{Coord, GridStore};
use crate::config::BoundaryPolicy;
use crate::error::GridError;
use std::collections::BTreeSet;
use std::fmt;

/// A grid that stores only the coordinates of live cells.
///
/// Suited to large, mostly-empty boards: memory and step cost scale with the
/// live population rather than the board area. The set never contains an
/// out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid {
    width: usize,
    height: usize,
    cell_size: u32,
    boundary: BoundaryPolicy,
    live: BTreeSet<Coord>,
}

impl GridStore for SparseGrid {
    fn with_dimensions(
        width: usize,
        height: usize,
        cell_size: u32,
        boundary: BoundaryPolicy,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cell_size,
            boundary,
            live: BTreeSet::new(),
        })
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell_size(&self) -> u32 {
        self.cell_size
    }

    fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    fn is_live(&self, row: usize, col: usize) -> bool {
        self.live.contains(&(row, col))
    }

    fn set_raw(&mut self, row: usize, col: usize, alive: bool) {
        if alive {
            self.live.insert((row, col));
        } else {
            self.live.remove(&(row, col));
        }
    }

    fn clear(&mut self) {
        self.live.clear();
    }

    fn live_cells(&self) -> Vec<Coord> {
        // BTreeSet iterates in lexicographic (row, col) order already.
        self.live.iter().copied().collect()
    }

    fn live_count(&self) -> usize {
        self.live.len()
    }

    fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), GridError> {
        if new_width == 0 || new_height == 0 {
            return Err(GridError::InvalidDimension {
                width: new_width,
                height: new_height,
            });
        }
        if new_width == self.width && new_height == self.height {
            return Ok(());
        }

        self.live
            .retain(|&(row, col)| row < new_height && col < new_width);
        self.width = new_width;
        self.height = new_height;
        Ok(())
    }

    fn step_candidates(&self) -> Vec<Coord> {
        let height = self.height as isize;
        let width = self.width as isize;
        let mut candidates = BTreeSet::new();

        for &(row, col) in &self.live {
            candidates.insert((row, col));
            for dr in [-1isize, 0, 1] {
                for dc in [-1isize, 0, 1] {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let r = row as isize + dr;
                    let c = col as isize + dc;
                    match self.boundary {
                        BoundaryPolicy::Bounded => {
                            if r >= 0 && r < height && c >= 0 && c < width {
                                candidates.insert((r as usize, c as usize));
                            }
                        }
                        BoundaryPolicy::Toroidal => {
                            let wrapped_row = ((r % height + height) % height) as usize;
                            let wrapped_col = ((c % width + width) % width) as usize;
                            candidates.insert((wrapped_row, wrapped_col));
                        }
                    }
                }
            }
        }

        candidates.into_iter().collect()
    }

    fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            boundary: self.boundary,
            live: BTreeSet::new(),
        }
    }
}

impl fmt::Display for SparseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_cells(self, f)
    }
}
