//! Main CLI application for the Game of Life simulation engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_engine::{
    config::{CliOverrides, GridRepresentation, Settings},
    engine::Simulation,
    grid::{DenseGrid, GridStore, SparseGrid},
    pattern::{
        create_builtin_pattern_files, load_pattern_from_file, save_pattern_to_file,
        BuiltinPattern, PatternRecord,
    },
    utils::{ColorOutput, GridRenderer},
    StepEngine,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_engine")]
#[command(about = "Conway's Game of Life simulation engine")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file to seed the board with
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Built-in seed name (glider_gun, pulsar, copperhead, infinite_growth)
        #[arg(short, long, conflicts_with = "pattern")]
        seed: Option<String>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Tick speed 1-10 (overrides config)
        #[arg(long)]
        speed: Option<u64>,

        /// Print only the final generation
        #[arg(short, long)]
        quiet: bool,
    },

    /// Advance a pattern file a number of generations without rendering
    Step {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file to advance
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Where to write the resulting pattern (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a default configuration and the built-in seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show dimensions and population of a pattern file
    Info {
        /// Pattern file to inspect
        #[arg(short, long)]
        pattern: PathBuf,

        /// Also print the board with row/column numbers
        #[arg(short, long)]
        board: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            seed,
            generations,
            speed,
            quiet,
        } => run_command(config, pattern, seed, generations, speed, quiet),
        Commands::Step {
            config,
            pattern,
            generations,
            output,
        } => step_command(config, pattern, generations, output),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Info { pattern, board } => info_command(pattern, board),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

/// Resolve the initial board: an explicit pattern file, a built-in seed, or
/// an empty board sized from the configured surface.
fn initial_record(
    settings: &Settings,
    pattern: Option<PathBuf>,
    seed: Option<String>,
) -> Result<PatternRecord> {
    if let Some(path) = pattern {
        return load_pattern_from_file(&path);
    }
    if let Some(name) = seed {
        let builtin = BuiltinPattern::from_name(&name).with_context(|| {
            let names: Vec<&str> = BuiltinPattern::all().iter().map(|p| p.name()).collect();
            format!(
                "Unknown seed '{}', expected one of: {}",
                name,
                names.join(", ")
            )
        })?;
        return Ok(builtin.record());
    }
    Ok(PatternRecord {
        cell_size: settings.grid.cell_size,
        grid: vec![],
        width: settings.grid.grid_width(),
        height: settings.grid.grid_height(),
    })
}

fn run_command(
    config_path: PathBuf,
    pattern: Option<PathBuf>,
    seed: Option<String>,
    generations: Option<usize>,
    speed: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&CliOverrides {
        speed,
        generations,
        ..CliOverrides::default()
    });
    settings
        .validate()
        .context("Configuration validation failed")?;

    let record = initial_record(&settings, pattern, seed)?;

    match settings.grid.representation {
        GridRepresentation::Dense => run_loop::<DenseGrid>(&settings, &record, quiet),
        GridRepresentation::Sparse => run_loop::<SparseGrid>(&settings, &record, quiet),
    }
}

fn run_loop<G: GridStore>(settings: &Settings, record: &PatternRecord, quiet: bool) -> Result<()> {
    let grid: G = record
        .decode(settings.grid.boundary_policy)
        .context("Failed to build initial grid")?;

    let mut sim = Simulation::new(grid, settings.simulation.speed);
    sim.play();

    for _ in 0..settings.simulation.generations {
        if !quiet {
            println!("{}", GridRenderer::format_frame(&sim));
            std::thread::sleep(sim.tick_interval());
        }
        sim.tick();
    }

    println!("{}", GridRenderer::format_frame(&sim));
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Finished after {} generation(s)",
            sim.generation()
        ))
    );
    Ok(())
}

fn step_command(
    config_path: PathBuf,
    pattern: PathBuf,
    generations: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    let settings = load_settings(&config_path)?;
    let record = load_pattern_from_file(&pattern)?;

    let grid: DenseGrid = record
        .decode(settings.grid.boundary_policy)
        .context("Failed to build grid from pattern")?;
    let evolved = StepEngine::advance_generations(grid, generations);
    let result = PatternRecord::encode(&evolved);

    match output {
        Some(path) => {
            save_pattern_to_file(&result, &path)?;
            println!(
                "{}",
                ColorOutput::success(&format!("Wrote {}", path.display()))
            );
        }
        None => {
            print!("{}", GridRenderer::format_grid_compact(&evolved));
            println!("{} live cell(s)", result.live_count());
        }
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let settings = Settings::default();
    let pattern_dir = directory.join(&settings.output.pattern_directory);

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_builtin_pattern_files(&pattern_dir)
        .context("Failed to create built-in pattern files")?;
    println!("Created built-in seeds in: {}", pattern_dir.display());

    println!("{}", ColorOutput::success("Setup complete"));
    println!("\nTry: game_of_life_engine run --seed glider_gun");
    Ok(())
}

fn info_command(pattern: PathBuf, board: bool) -> Result<()> {
    let record = load_pattern_from_file(&pattern)?;
    let name = pattern
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("pattern");

    print!("{}", GridRenderer::format_pattern_summary(name, &record));

    if board {
        let grid: DenseGrid = record
            .decode(Settings::default().grid.boundary_policy)
            .context("Failed to build grid from pattern")?;
        print!("{}", GridRenderer::format_grid_with_coords(&grid));
    }
    Ok(())
}
