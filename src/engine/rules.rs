//! Game of Life transition rules (B3/S23)

use crate::grid::{Coord, GridStore};
use rayon::prelude::*;

/// Conway's canonical rule: birth on 3 neighbors, survival on 2 or 3.
pub struct LifeRules;

impl LifeRules {
    /// Next state of a cell given its current state and live neighbor count.
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
    }

    /// Neighbor counts under which a dead cell is born.
    pub fn birth_neighbor_counts() -> Vec<u8> {
        vec![3]
    }

    /// Neighbor counts under which a live cell survives.
    pub fn survival_neighbor_counts() -> Vec<u8> {
        vec![2, 3]
    }
}

/// Pure generation stepper. Holds no state of its own.
pub struct StepEngine;

impl StepEngine {
    /// Compute the next generation as a fresh snapshot.
    ///
    /// The input is never mutated, so neighbor counting always reads a
    /// consistent generation. Candidates are evaluated in parallel; the
    /// result is deterministic for a fixed grid and boundary policy.
    pub fn advance<G: GridStore>(current: &G) -> G {
        let survivors: Vec<Coord> = current
            .step_candidates()
            .into_par_iter()
            .filter(|&(row, col)| {
                let neighbors = current.count_live_neighbors(row, col);
                LifeRules::next_state(current.is_live(row, col), neighbors)
            })
            .collect();

        let mut next = current.blank_like();
        for (row, col) in survivors {
            next.set_raw(row, col, true);
        }
        next
    }

    /// Advance the grid a fixed number of generations.
    pub fn advance_generations<G: GridStore>(mut grid: G, generations: usize) -> G {
        for _ in 0..generations {
            grid = Self::advance(&grid);
        }
        grid
    }
}
