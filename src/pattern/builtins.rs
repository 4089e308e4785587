//! Built-in seed patterns
//!
//! Each seed is an ordinary [`PatternRecord`] placed on a board large enough
//! for it to behave; nothing downstream treats them specially.

use super::PatternRecord;

/// Gosper glider gun, 36 cells in a 9x36 bounding box.
const GLIDER_GUN: &[[usize; 2]] = &[
    [0, 24],
    [1, 22],
    [1, 24],
    [2, 12],
    [2, 13],
    [2, 20],
    [2, 21],
    [2, 34],
    [2, 35],
    [3, 11],
    [3, 15],
    [3, 20],
    [3, 21],
    [3, 34],
    [3, 35],
    [4, 0],
    [4, 1],
    [4, 10],
    [4, 16],
    [4, 20],
    [4, 21],
    [5, 0],
    [5, 1],
    [5, 10],
    [5, 14],
    [5, 16],
    [5, 17],
    [5, 22],
    [5, 24],
    [6, 10],
    [6, 16],
    [6, 24],
    [7, 11],
    [7, 15],
    [8, 12],
    [8, 13],
];

/// Pulsar, a period-3 oscillator of 48 cells in a 13x13 box.
const PULSAR: &[[usize; 2]] = &[
    [0, 2], [0, 3], [0, 4], [0, 8], [0, 9], [0, 10],
    [2, 0], [2, 5], [2, 7], [2, 12],
    [3, 0], [3, 5], [3, 7], [3, 12],
    [4, 0], [4, 5], [4, 7], [4, 12],
    [5, 2], [5, 3], [5, 4], [5, 8], [5, 9], [5, 10],
    [7, 2], [7, 3], [7, 4], [7, 8], [7, 9], [7, 10],
    [8, 0], [8, 5], [8, 7], [8, 12],
    [9, 0], [9, 5], [9, 7], [9, 12],
    [10, 0], [10, 5], [10, 7], [10, 12],
    [12, 2], [12, 3], [12, 4], [12, 8], [12, 9], [12, 10],
];

/// Copperhead, a c/10 orthogonal spaceship of 28 cells in a 12x8 box.
const COPPERHEAD: &[[usize; 2]] = &[
    [0, 1], [0, 2], [0, 5], [0, 6],
    [1, 3], [1, 4],
    [2, 3], [2, 4],
    [3, 0], [3, 2], [3, 5], [3, 7],
    [4, 0], [4, 7],
    [6, 0], [6, 7],
    [7, 1], [7, 2], [7, 5], [7, 6],
    [8, 2], [8, 3], [8, 4], [8, 5],
    [10, 3], [10, 4],
    [11, 3], [11, 4],
];

/// A 5x5 seed whose population grows without bound.
const INFINITE_GROWTH: &[[usize; 2]] = &[
    [0, 0], [0, 1], [0, 2], [0, 4],
    [1, 0],
    [2, 3], [2, 4],
    [3, 1], [3, 2], [3, 4],
    [4, 0], [4, 2], [4, 4],
];

/// The seeds shipped with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinPattern {
    GliderGun,
    Pulsar,
    Copperhead,
    InfiniteGrowth,
}

impl BuiltinPattern {
    pub fn all() -> [BuiltinPattern; 4] {
        [
            Self::GliderGun,
            Self::Pulsar,
            Self::Copperhead,
            Self::InfiniteGrowth,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GliderGun => "glider_gun",
            Self::Pulsar => "pulsar",
            Self::Copperhead => "copperhead",
            Self::InfiniteGrowth => "infinite_growth",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.name() == name)
    }

    /// Build the seed's pattern record: the cell list offset into a board
    /// sized so the pattern has room to run.
    pub fn record(&self) -> PatternRecord {
        match self {
            Self::GliderGun => place(GLIDER_GUN, (1, 1), 50, 30),
            Self::Pulsar => place(PULSAR, (2, 2), 17, 17),
            Self::Copperhead => place(COPPERHEAD, (26, 6), 20, 40),
            Self::InfiniteGrowth => place(INFINITE_GROWTH, (21, 21), 48, 48),
        }
    }
}

fn place(cells: &[[usize; 2]], offset: (usize, usize), width: usize, height: usize) -> PatternRecord {
    PatternRecord {
        cell_size: 20,
        grid: cells
            .iter()
            .map(|&[row, col]| [row + offset.0, col + offset.1])
            .collect(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryPolicy;
    use crate::engine::StepEngine;
    use crate::grid::{DenseGrid, GridStore, SparseGrid};

    #[test]
    fn test_every_builtin_decodes() {
        for pattern in BuiltinPattern::all() {
            let record = pattern.record();
            record.validate().unwrap();
            let grid: SparseGrid = record.decode(BoundaryPolicy::Bounded).unwrap();
            assert_eq!(grid.live_count(), record.live_count(), "{}", pattern.name());
        }
    }

    #[test]
    fn test_population_counts() {
        assert_eq!(BuiltinPattern::GliderGun.record().live_count(), 36);
        assert_eq!(BuiltinPattern::Pulsar.record().live_count(), 48);
        assert_eq!(BuiltinPattern::Copperhead.record().live_count(), 28);
    }

    #[test]
    fn test_name_round_trip() {
        for pattern in BuiltinPattern::all() {
            assert_eq!(BuiltinPattern::from_name(pattern.name()), Some(pattern));
        }
        assert_eq!(BuiltinPattern::from_name("nope"), None);
    }

    #[test]
    fn test_pulsar_oscillates_with_period_three() {
        let grid: DenseGrid = BuiltinPattern::Pulsar
            .record()
            .decode(BoundaryPolicy::Bounded)
            .unwrap();

        let after_one = StepEngine::advance(&grid);
        assert_ne!(after_one.live_cells(), grid.live_cells());

        let after_three = StepEngine::advance_generations(grid.clone(), 3);
        assert_eq!(after_three.live_cells(), grid.live_cells());
    }

    #[test]
    fn test_glider_gun_keeps_firing() {
        let grid: SparseGrid = BuiltinPattern::GliderGun
            .record()
            .decode(BoundaryPolicy::Bounded)
            .unwrap();

        // After 30 generations the first glider is in flight, so the
        // population exceeds the gun's own 36 cells.
        let evolved = StepEngine::advance_generations(grid, 30);
        assert!(evolved.live_count() > 36);
    }
}
