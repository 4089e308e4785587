//! Conway's Game of Life simulation engine
//!
//! This library provides the deterministic core behind an interactive Game
//! of Life board: grid storage (dense and sparse), the B3/S23 step engine,
//! drag-paint line filling, and a JSON pattern format for saving, restoring,
//! and seeding boards. Rendering and input handling stay with the caller;
//! the engine only exposes cell state and editing operations.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod paint;
pub mod pattern;
pub mod utils;

pub use config::{BoundaryPolicy, Settings};
pub use engine::{Simulation, StepEngine};
pub use error::GridError;
pub use grid::{DenseGrid, GridStore, SparseGrid};
pub use pattern::{BuiltinPattern, PatternRecord};
