//! Line module - the falling rain streaks
//!
//! A line is anchored at `(row, column)` and extends along the column axis,
//! so in the serialized output (one line per grid column) it reads as a
//! vertical streak. Each line grows by one cell per tick until it reaches
//! its rolled maximum, then shrinks back while its anchor column advances,
//! which makes the tail fall away in the same direction it grew.

use crate::rng::SimpleRng;

/// Where a line is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePhase {
    /// Gaining one cell per tick until `max_length` is reached.
    Growing,
    /// Losing one cell per tick while the anchor advances; dies at 0.
    Shrinking,
}

/// Cell values of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineFill {
    /// Every visible cell shows the same fixed character.
    Uniform(char),
    /// One slot per possible cell, re-rolled to random digits every tick.
    Randomized(Vec<char>),
}

/// One rain streak.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    row: usize,
    column: usize,
    length: usize,
    max_length: usize,
    phase: LinePhase,
    fill: LineFill,
}

impl Line {
    /// A streak that repeats one fixed character.
    pub fn uniform(row: usize, column: usize, max_length: usize, value: char) -> Self {
        Self {
            row,
            column,
            length: 0,
            max_length,
            phase: LinePhase::Growing,
            fill: LineFill::Uniform(value),
        }
    }

    /// A streak whose cells re-roll to random digits on every advance.
    pub fn randomized(row: usize, column: usize, max_length: usize) -> Self {
        Self {
            row,
            column,
            length: 0,
            max_length,
            phase: LinePhase::Growing,
            fill: LineFill::Randomized(vec!['0'; max_length]),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// Current anchor column. Advances while shrinking.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_shrinking(&self) -> bool {
        self.phase == LinePhase::Shrinking
    }

    pub fn is_randomized(&self) -> bool {
        matches!(self.fill, LineFill::Randomized(_))
    }

    /// Character for the cell at `(row, column + offset)`.
    pub fn value_at(&self, offset: usize) -> Option<char> {
        if offset >= self.max_length {
            return None;
        }
        match &self.fill {
            LineFill::Uniform(value) => Some(*value),
            LineFill::Randomized(values) => values.get(offset).copied(),
        }
    }

    /// Advance one tick. Returns whether the line is still alive; a dead
    /// line is done for good and should be replaced by its owner.
    pub fn advance(&mut self, rng: &mut SimpleRng) -> bool {
        if !self.step() {
            return false;
        }
        if let LineFill::Randomized(values) = &mut self.fill {
            for value in values.iter_mut() {
                *value = rng.digit();
            }
        }
        true
    }

    /// Run the grow/shrink state machine, returning survival.
    fn step(&mut self) -> bool {
        match self.phase {
            LinePhase::Growing => {
                self.length += 1;
            }
            LinePhase::Shrinking => {
                self.length = self.length.saturating_sub(1);
                self.column += 1;
            }
        }
        if self.length >= self.max_length {
            self.phase = LinePhase::Shrinking;
        }
        self.length > 0 || self.phase == LinePhase::Growing
    }
}
