//! Configuration management for the simulation engine

pub mod settings;

pub use settings::{
    BoundaryPolicy, CliOverrides, GridConfig, GridRepresentation, OutputConfig, Settings,
    SimulationConfig,
};
