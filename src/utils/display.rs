//! Display and output formatting utilities

use crate::engine::Simulation;
use crate::grid::GridStore;
use crate::pattern::PatternRecord;

/// Terminal rendering for grid snapshots
pub struct GridRenderer;

impl GridRenderer {
    /// Format a grid in compact form
    pub fn format_grid_compact<G: GridStore>(grid: &G) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                output.push(if grid.is_live(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column numbers
    pub fn format_grid_with_coords<G: GridStore>(grid: &G) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.width() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.height() {
            output.push_str(&format!("{:2} ", row));
            for col in 0..grid.width() {
                output.push_str(if grid.is_live(row, col) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One simulation frame: header plus board.
    pub fn format_frame<G: GridStore>(sim: &Simulation<G>) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Generation {} | {} live | {}x{} | speed {}\n",
            sim.generation(),
            sim.grid().live_count(),
            sim.grid().width(),
            sim.grid().height(),
            sim.speed(),
        ));
        output.push_str(&Self::format_grid_compact(sim.grid()));
        output
    }

    /// Summarize a pattern record without materializing a grid.
    pub fn format_pattern_summary(name: &str, record: &PatternRecord) -> String {
        format!(
            "{}: {}x{} cells at {}px, {} live\n",
            name,
            record.width,
            record.height,
            record.cell_size,
            record.live_count(),
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with an ANSI color (if the terminal supports it)
    pub fn colored(text: &str, code: u8) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, 32)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, 31)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, 33)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, 34)
    }
}
