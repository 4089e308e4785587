//! Configuration settings for the simulation engine

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    /// Pixels per cell side; together with the surface size this fixes how
    /// many logical cells exist.
    pub cell_size: u32,
    pub surface_width: u32,
    pub surface_height: u32,
    pub boundary_policy: BoundaryPolicy,
    pub representation: GridRepresentation,
}

/// How neighbor lookups behave at the grid edge. Fixed for the lifetime of
/// a grid store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Out-of-range neighbors are permanently dead.
    Bounded,
    /// Opposite edges are adjacent; coordinates wrap with modulo arithmetic.
    Toroidal,
}

/// Which grid store backs the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridRepresentation {
    Dense,
    Sparse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Tick rate band, 1 through 10; the tick period is `1000 / speed`
    /// milliseconds.
    pub speed: u64,
    /// How many generations the `run` command drives before stopping.
    pub generations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub pattern_directory: PathBuf,
}

impl GridConfig {
    /// Logical grid width derived from the surface, like a canvas divided
    /// into `cell_size` squares.
    pub fn grid_width(&self) -> usize {
        (self.surface_width / self.cell_size) as usize
    }

    pub fn grid_height(&self) -> usize {
        (self.surface_height / self.cell_size) as usize
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                cell_size: 20,
                surface_width: 800,
                surface_height: 600,
                boundary_policy: BoundaryPolicy::Toroidal,
                representation: GridRepresentation::Dense,
            },
            simulation: SimulationConfig {
                speed: 5,
                generations: 100,
            },
            output: OutputConfig {
                pattern_directory: PathBuf::from("patterns"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        if self.grid.grid_width() == 0 || self.grid.grid_height() == 0 {
            anyhow::bail!(
                "Surface {}x{} is smaller than one {}px cell",
                self.grid.surface_width,
                self.grid.surface_height,
                self.grid.cell_size
            );
        }

        if !(1..=10).contains(&self.simulation.speed) {
            anyhow::bail!(
                "Speed must be between 1 and 10, got {}",
                self.simulation.speed
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(speed) = cli_overrides.speed {
            self.simulation.speed = speed;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(cell_size) = cli_overrides.cell_size {
            self.grid.cell_size = cell_size;
        }
        if let Some(ref pattern_dir) = cli_overrides.pattern_dir {
            self.output.pattern_directory = pattern_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub speed: Option<u64>,
    pub generations: Option<usize>,
    pub cell_size: Option<u32>,
    pub pattern_dir: Option<PathBuf>,
}
