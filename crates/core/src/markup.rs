//! Markup module - serializing the grid to a color-tagged string
//!
//! The wire format transposes the grid on purpose: columns are walked in
//! the outer loop, so each line of output is one grid *column*. Every line
//! starts with a single space separator and ends with a newline. Cells with
//! a non-transparent color are wrapped in an inline tag,
//! `<color=green>X</color>`, consumable by rich-text display surfaces.

use std::fmt::Write as _;

use crate::grid::CellGrid;

/// Serialize the whole grid, one output line per grid column.
pub fn grid_to_markup(grid: &CellGrid) -> String {
    // Rough guess; tagged cells grow the string past it.
    let mut out = String::with_capacity(grid.columns() * (grid.rows() + 2));
    for column in 0..grid.columns() {
        out.push(' ');
        for (ch, color) in grid.column_cells(column) {
            if color.is_transparent() {
                out.push(ch);
            } else {
                // Writing to a String cannot fail.
                let _ = write!(out, "<color={color}>{ch}</color>");
            }
        }
        out.push('\n');
    }
    out
}
