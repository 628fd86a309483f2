//! Button module - bordered boxes with a centered label
//!
//! A button is a `width x height` box whose outer border re-rolls to random
//! digits every tick, giving a flickering outline. Width runs along the row
//! axis and height along the column axis, so in the serialized output the
//! box is `width` characters wide and `height` output lines tall. The label
//! is a plain [`Text`] centered in the box; it glitches through the
//! compositor's normal text pass, not here.

use tui_rain_types::{CapacityError, Color, BORDER_THICKNESS, EMPTY_CELL};

use crate::rng::SimpleRng;
use crate::text::Text;

/// A rectangular widget with a digit border and an embedded label.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    width: usize,
    height: usize,
    top_left_row: usize,
    top_left_column: usize,
    color: Color,
    /// Border/interior cells, indexed `y * width + x`.
    cells: Vec<char>,
    label: Text,
}

impl Button {
    /// Build a button with `label` centered inside the box.
    ///
    /// `inset` is extra horizontal padding the label must respect on both
    /// sides, on top of the border itself. Fails when the label cannot fit
    /// the remaining interior width; a failed construction leaves nothing
    /// behind.
    pub fn new(
        label: &str,
        inset: usize,
        width: usize,
        height: usize,
        top_left_row: usize,
        top_left_column: usize,
        color: Color,
    ) -> Result<Self, CapacityError> {
        let len = label.chars().count();
        let max = width.saturating_sub(2 * (inset + BORDER_THICKNESS));
        if len > max {
            return Err(CapacityError { len, max });
        }

        let label_row = top_left_row + (width - len) / 2;
        let label_column = top_left_column + height / 2;

        Ok(Self {
            width,
            height,
            top_left_row,
            top_left_column,
            color,
            cells: vec![EMPTY_CELL; width * height],
            label: Text::new(label_row, label_column, label, color),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn top_left_row(&self) -> usize {
        self.top_left_row
    }

    pub fn top_left_column(&self) -> usize {
        self.top_left_column
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn label(&self) -> &Text {
        &self.label
    }

    pub(crate) fn label_mut(&mut self) -> &mut Text {
        &mut self.label
    }

    /// Whether `(row, column)` falls inside the button's box. Hosts use
    /// this for hit-testing clicks; the engine itself never needs it.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        (self.top_left_row..self.top_left_row + self.width).contains(&row)
            && (self.top_left_column..self.top_left_column + self.height).contains(&column)
    }

    /// Cell at box-local `(x, y)`, `x` in `0..width`, `y` in `0..height`.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Re-roll the border to fresh random digits and blank the interior.
    pub fn refresh_border(&mut self, rng: &mut SimpleRng) {
        for y in 0..self.height {
            for x in 0..self.width {
                let on_border =
                    x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1;
                self.cells[y * self.width + x] = if on_border { rng.digit() } else { EMPTY_CELL };
            }
        }
    }
}
