//! Line-fill interpolation for drag painting
//!
//! Pointer motion is reported at discrete positions, so a fast drag skips
//! cells. Bresenham's line algorithm fills the gap between the previous and
//! current grid coordinate with integer arithmetic only.

use crate::grid::Coord;

/// Every integer grid coordinate on the straight line from `start` to `end`,
/// inclusive of both endpoints.
///
/// The sequence is monotonic along the dominant axis and contains no
/// repeated adjacent coordinate. Coordinates are not bounds-checked; callers
/// painting into a grid skip out-of-range cells themselves.
pub fn cells_between(start: Coord, end: Coord) -> Vec<Coord> {
    let (mut row, mut col) = (start.0 as isize, start.1 as isize);
    let (end_row, end_col) = (end.0 as isize, end.1 as isize);

    let d_row = (end_row - row).abs();
    let d_col = (end_col - col).abs();
    let step_row = if row < end_row { 1 } else { -1 };
    let step_col = if col < end_col { 1 } else { -1 };
    let mut error = d_row - d_col;

    let mut cells = Vec::with_capacity((d_row.max(d_col) + 1) as usize);
    loop {
        cells.push((row as usize, col as usize));
        if row == end_row && col == end_col {
            break;
        }
        let doubled = 2 * error;
        if doubled > -d_col {
            error -= d_col;
            row += step_row;
        }
        if doubled < d_row {
            error += d_row;
            col += step_col;
        }
    }
    cells
}
