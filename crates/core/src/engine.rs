//! Engine module - the compositor that owns everything
//!
//! [`RainEngine`] owns the cell grid, the rain lines, the texts, the
//! buttons, and the RNG. One [`RainEngine::tick`] advances the whole
//! animation in a fixed pass order; the draw order matters because later
//! passes overwrite earlier ones at overlapping cells:
//!
//! 1. clear the character buffer (colors persist),
//! 2. advance and draw lines (characters only, no color writes),
//! 3. refresh and draw button borders (color written only for non-blank
//!    cells),
//! 4. refresh and draw texts, standalone first and then button labels
//!    (character and color both written).
//!
//! Everything is synchronous and single-threaded: a tick fully mutates the
//! engine before returning, and callers driving ticks from a timer must
//! not overlap calls.

use tui_rain_types::{
    ButtonHandle, CapacityError, Color, FractionError, TextHandle, EMPTY_CELL, MIN_LENGTH_FACTOR,
};

use crate::button::Button;
use crate::grid::CellGrid;
use crate::line::Line;
use crate::markup::grid_to_markup;
use crate::rng::SimpleRng;
use crate::text::Text;

/// The digital rain compositor.
#[derive(Debug, Clone)]
pub struct RainEngine {
    grid: CellGrid,
    lines: Vec<Line>,
    texts: Vec<Text>,
    buttons: Vec<Button>,
    /// Upper bound for rolled line lengths, from `configure_lines`.
    max_line_length: usize,
    rng: SimpleRng,
}

impl RainEngine {
    /// Create an engine over a blank `rows x columns` grid.
    pub fn new(rows: usize, columns: usize, seed: u32) -> Self {
        Self::with_grid(CellGrid::new(rows, columns), seed)
    }

    /// Create an engine over a grid pre-filled with `fill`.
    pub fn with_fill(rows: usize, columns: usize, fill: char, seed: u32) -> Self {
        Self::with_grid(CellGrid::filled(rows, columns, fill), seed)
    }

    fn with_grid(grid: CellGrid, seed: u32) -> Self {
        Self {
            grid,
            lines: Vec::new(),
            texts: Vec::new(),
            buttons: Vec::new(),
            max_line_length: 0,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// The composed cell buffer as of the last tick.
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Replace the line set with `line_count` freshly rolled streaks and
    /// remember `max_length` for every later respawn.
    pub fn configure_lines(&mut self, line_count: usize, max_length: usize) {
        self.max_line_length = max_length;
        let (rows, columns) = (self.grid.rows(), self.grid.columns());
        self.lines = (0..line_count)
            .map(|_| spawn_line(&mut self.rng, rows, columns, max_length))
            .collect();
    }

    /// Add a fixed-character streak. Unlike rolled lines it starts where
    /// the caller says; once it dies it is replaced by a rolled one.
    pub fn add_uniform_line(&mut self, row: usize, column: usize, max_length: usize, value: char) {
        self.lines.push(Line::uniform(row, column, max_length, value));
    }

    /// Add a standalone label.
    pub fn add_text(&mut self, row: usize, column: usize, text: &str, color: Color) -> TextHandle {
        self.texts.push(Text::new(row, column, text, color));
        TextHandle(self.texts.len() - 1)
    }

    pub fn text(&self, handle: TextHandle) -> Option<&Text> {
        self.texts.get(handle.0)
    }

    /// Add a button. Fails when the label cannot fit the box interior; no
    /// button is registered on failure.
    #[allow(clippy::too_many_arguments)]
    pub fn add_button(
        &mut self,
        label: &str,
        inset: usize,
        width: usize,
        height: usize,
        top_left_row: usize,
        top_left_column: usize,
        color: Color,
    ) -> Result<ButtonHandle, CapacityError> {
        let button = Button::new(
            label,
            inset,
            width,
            height,
            top_left_row,
            top_left_column,
            color,
        )?;
        self.buttons.push(button);
        Ok(ButtonHandle(self.buttons.len() - 1))
    }

    pub fn button(&self, handle: ButtonHandle) -> Option<&Button> {
        self.buttons.get(handle.0)
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Advance the animation one step and recompose the grid.
    ///
    /// Fails fast on an out-of-range glitch fraction, in which case the
    /// engine is left exactly as it was.
    pub fn tick(&mut self, glitch_fraction: f32) -> Result<(), FractionError> {
        if !(0.0..=1.0).contains(&glitch_fraction) {
            return Err(FractionError(glitch_fraction));
        }

        let Self {
            grid,
            lines,
            texts,
            buttons,
            max_line_length,
            rng,
        } = self;

        grid.clear();

        // Lines. Dead ones are replaced in their slot, keeping the active
        // count invariant; a fresh line draws nothing until its next tick.
        for line in lines.iter_mut() {
            if !line.advance(rng) {
                *line = spawn_line(rng, grid.rows(), grid.columns(), *max_line_length);
            }
        }
        for line in lines.iter() {
            for offset in 0..line.length() {
                if let Some(value) = line.value_at(offset) {
                    grid.set_char(line.row(), line.column() + offset, value);
                }
            }
        }

        // Buttons. Blank interior cells get their character written but no
        // color, leaving whatever color was there before.
        for button in buttons.iter_mut() {
            button.refresh_border(rng);
        }
        for button in buttons.iter() {
            for x in 0..button.width() {
                for y in 0..button.height() {
                    let row = button.top_left_row() + x;
                    let column = button.top_left_column() + y;
                    if let Some(value) = button.cell_at(x, y) {
                        if value != EMPTY_CELL {
                            grid.set_color(row, column, button.color());
                        }
                        grid.set_char(row, column, value);
                    }
                }
            }
        }

        // Texts, then button labels, through the same draw path.
        for text in texts.iter_mut() {
            text.refresh(glitch_fraction, rng)?;
            draw_text(grid, text);
        }
        for button in buttons.iter_mut() {
            let label = button.label_mut();
            label.refresh(glitch_fraction, rng)?;
            draw_text(grid, label);
        }

        Ok(())
    }

    /// Serialize the composed grid (see the markup module for the format).
    pub fn render(&self) -> String {
        grid_to_markup(&self.grid)
    }
}

/// Roll a fresh randomized line: random anchor anywhere on the grid and a
/// max length in `[MIN_LENGTH_FACTOR * max, max)`.
fn spawn_line(rng: &mut SimpleRng, rows: usize, columns: usize, max_length: usize) -> Line {
    let min_length = (MIN_LENGTH_FACTOR * max_length as f32) as u32;
    let row = rng.next_range(rows as u32) as usize;
    let column = rng.next_range(columns as u32) as usize;
    let length = rng.next_between(min_length, max_length as u32) as usize;
    Line::randomized(row, column, length)
}

fn draw_text(grid: &mut CellGrid, text: &Text) {
    for (i, &ch) in text.rendered().iter().enumerate() {
        grid.set_char(text.row() + i, text.column(), ch);
        grid.set_color(text.row() + i, text.column(), text.color());
    }
}
