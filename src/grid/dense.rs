//! Dense grid representation backed by a flat boolean array

use super::{Coord, GridStore};
use crate::config::BoundaryPolicy;
use crate::error::GridError;
use itertools::Itertools;
use std::fmt;

/// A grid that materializes every cell in a `height x width` array.
///
/// The natural choice for small boards and for boards where live-cell
/// density is high enough that a coordinate set would not pay off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid {
    width: usize,
    height: usize,
    cell_size: u32,
    boundary: BoundaryPolicy,
    cells: Vec<bool>,
}

impl DenseGrid {
    /// Convert 2D coordinates to the flat index.
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }
}

impl GridStore for DenseGrid {
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
            cells: vec![false; width * height],
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
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    fn set_raw(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn live_cells(&self) -> Vec<Coord> {
        let mut living = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[self.index(row, col)] {
                    living.push((row, col));
                }
            }
        }
        living
    }

    fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
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

        let mut next = vec![false; new_width * new_height];
        for row in 0..self.height.min(new_height) {
            for col in 0..self.width.min(new_width) {
                next[row * new_width + col] = self.cells[self.index(row, col)];
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = next;
        Ok(())
    }

    fn step_candidates(&self) -> Vec<Coord> {
        (0..self.height).cartesian_product(0..self.width).collect()
    }

    fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            boundary: self.boundary,
            cells: vec![false; self.width * self.height],
        }
    }
}

impl fmt::Display for DenseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_cells(self, f)
    }
}
