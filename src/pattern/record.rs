//! The persisted grid snapshot format

use crate::config::BoundaryPolicy;
use crate::error::GridError;
use crate::grid::GridStore;
use serde::{Deserialize, Serialize};

/// A complete, self-contained grid snapshot.
///
/// Serializes to the save-file layout:
/// `{ "cell_size": n, "grid": [[row, col], ...], "width": w, "height": h }`.
/// Records are consumed whole — a store replaces all of its state from one —
/// and are the only wire format the engine knows about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub cell_size: u32,
    pub grid: Vec<[usize; 2]>,
    pub width: usize,
    pub height: usize,
}

impl PatternRecord {
    /// Capture a grid's dimensions, cell size, and live set.
    pub fn encode<G: GridStore>(grid: &G) -> Self {
        Self {
            cell_size: grid.cell_size(),
            grid: grid
                .live_cells()
                .into_iter()
                .map(|(row, col)| [row, col])
                .collect(),
            width: grid.width(),
            height: grid.height(),
        }
    }

    /// Materialize the record into a grid store.
    ///
    /// Rejects rather than clamps: a record with zero dimensions or any
    /// out-of-range coordinate fails with `MalformedPattern` and produces
    /// nothing, preserving round-trip fidelity.
    pub fn decode<G: GridStore>(&self, boundary: BoundaryPolicy) -> Result<G, GridError> {
        self.validate()?;

        let mut grid = G::with_dimensions(self.width, self.height, self.cell_size, boundary)?;
        for &[row, col] in &self.grid {
            grid.set_raw(row, col, true);
        }
        Ok(grid)
    }

    /// Check dimensions and coordinates without building a grid.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::MalformedPattern(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.cell_size == 0 {
            return Err(GridError::MalformedPattern(
                "cell_size must be positive".to_string(),
            ));
        }
        for &[row, col] in &self.grid {
            if row >= self.height || col >= self.width {
                return Err(GridError::MalformedPattern(format!(
                    "cell ({}, {}) outside {}x{} grid",
                    row, col, self.height, self.width
                )));
            }
        }
        Ok(())
    }

    /// Number of live cells in the record.
    pub fn live_count(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{DenseGrid, SparseGrid};

    #[test]
    fn test_round_trip_preserves_everything() {
        let mut grid =
            DenseGrid::with_dimensions(7, 4, 15, BoundaryPolicy::Toroidal).unwrap();
        grid.set_live(0, 6, true).unwrap();
        grid.set_live(3, 0, true).unwrap();
        grid.set_live(2, 2, true).unwrap();

        let record = PatternRecord::encode(&grid);
        let restored: DenseGrid = record.decode(BoundaryPolicy::Toroidal).unwrap();

        assert_eq!(restored.width(), 7);
        assert_eq!(restored.height(), 4);
        assert_eq!(restored.cell_size(), 15);
        assert_eq!(restored.live_cells(), grid.live_cells());
    }

    #[test]
    fn test_round_trip_across_representations() {
        let mut sparse =
            SparseGrid::with_dimensions(10, 10, 20, BoundaryPolicy::Bounded).unwrap();
        sparse.set_live(9, 9, true).unwrap();
        sparse.set_live(0, 5, true).unwrap();

        let record = PatternRecord::encode(&sparse);
        let dense: DenseGrid = record.decode(BoundaryPolicy::Bounded).unwrap();
        assert_eq!(dense.live_cells(), sparse.live_cells());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let record = PatternRecord {
            cell_size: 20,
            grid: vec![],
            width: 0,
            height: 5,
        };
        assert!(matches!(
            record.decode::<DenseGrid>(BoundaryPolicy::Bounded),
            Err(GridError::MalformedPattern(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_cell() {
        let record = PatternRecord {
            cell_size: 20,
            grid: vec![[1, 1], [2, 3]],
            width: 3,
            height: 3,
        };
        let result = record.decode::<DenseGrid>(BoundaryPolicy::Bounded);
        assert!(matches!(result, Err(GridError::MalformedPattern(_))));
    }

    #[test]
    fn test_replace_from_rejects_without_touching_state() {
        let mut grid = DenseGrid::with_dimensions(3, 3, 20, BoundaryPolicy::Bounded).unwrap();
        grid.set_live(1, 1, true).unwrap();

        let bad = PatternRecord {
            cell_size: 20,
            grid: vec![[8, 8]],
            width: 4,
            height: 4,
        };
        assert!(grid.replace_from(&bad).is_err());
        assert_eq!(grid.width(), 3);
        assert!(grid.get(1, 1).unwrap());
    }

    #[test]
    fn test_replace_from_substitutes_atomically() {
        let mut grid = DenseGrid::with_dimensions(3, 3, 20, BoundaryPolicy::Bounded).unwrap();
        grid.set_live(0, 0, true).unwrap();

        let record = PatternRecord {
            cell_size: 10,
            grid: vec![[4, 5]],
            width: 6,
            height: 6,
        };
        grid.replace_from(&record).unwrap();

        assert_eq!(grid.width(), 6);
        assert_eq!(grid.cell_size(), 10);
        assert_eq!(grid.live_cells(), vec![(4, 5)]);
    }

    #[test]
    fn test_json_layout() {
        let record = PatternRecord {
            cell_size: 20,
            grid: vec![[0, 1], [2, 0]],
            width: 3,
            height: 3,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"cell_size":20,"grid":[[0,1],[2,0]],"width":3,"height":3}"#
        );

        let parsed: PatternRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
