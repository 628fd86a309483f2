//! Text module - glitching labels
//!
//! A text keeps two buffers: the canonical characters fixed at construction
//! and the rendered characters recomputed on every tick. Glitching always
//! starts over from the canonical text, so corruption never accumulates
//! across ticks.

use tui_rain_types::{Color, FractionError, EMPTY_CELL};

use crate::rng::SimpleRng;

/// A positioned label. Spans the row axis: character `i` draws at
/// `(row + i, column)`, which reads horizontally in the serialized output.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    row: usize,
    column: usize,
    color: Color,
    canonical: Vec<char>,
    rendered: Vec<char>,
}

impl Text {
    /// Create a label. The canonical text is upper-cased once here.
    pub fn new(row: usize, column: usize, text: &str, color: Color) -> Self {
        let canonical: Vec<char> = text.to_uppercase().chars().collect();
        let rendered = canonical.clone();
        Self {
            row,
            column,
            color,
            canonical,
            rendered,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    /// The immutable text as fixed at construction.
    pub fn canonical(&self) -> &[char] {
        &self.canonical
    }

    /// The characters to draw this tick.
    pub fn rendered(&self) -> &[char] {
        &self.rendered
    }

    /// Recompute the rendered buffer, corrupting `floor(len * fraction)`
    /// randomly chosen positions to random digits.
    ///
    /// Index draws may repeat, so fewer distinct positions can change.
    /// Space sentinels are never corrupted: blank padding in a label stays
    /// blank. A fraction outside `0.0..=1.0` fails without touching the
    /// rendered buffer.
    pub fn refresh(&mut self, glitch_fraction: f32, rng: &mut SimpleRng) -> Result<(), FractionError> {
        if !(0.0..=1.0).contains(&glitch_fraction) {
            return Err(FractionError(glitch_fraction));
        }

        self.rendered.copy_from_slice(&self.canonical);

        let glitch_count = (self.canonical.len() as f32 * glitch_fraction) as usize;
        for _ in 0..glitch_count {
            let index = rng.next_range(self.canonical.len() as u32) as usize;
            if self.rendered[index] == EMPTY_CELL {
                continue;
            }
            self.rendered[index] = rng.digit();
        }
        Ok(())
    }
}
