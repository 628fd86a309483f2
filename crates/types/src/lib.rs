//! Shared types module - colors, errors, handles, and constants
//!
//! This crate defines the leaf types used by every other crate in the
//! workspace. All types are pure data with no I/O, so they are usable from
//! the core engine, the terminal surface, and tests alike.
//!
//! # Grid conventions
//!
//! The engine addresses cells as `(row, column)` with the top-left at
//! `(0, 0)`. Storage and the serialized wire format are column-major: each
//! line of serialized output is one grid *column*, not one grid row.
//!
//! # Colors
//!
//! [`Color`] is a small named palette plus a 24-bit escape hatch. The
//! variant names double as the canonical lowercase markup names used by the
//! serializer (`<color=green>X</color>`); [`Color::Transparent`] is the
//! default sentinel meaning "no markup emitted for this cell".

use std::fmt;

use thiserror::Error;

/// The blank cell sentinel. `clear()` resets every cell to this character,
/// and glitching never corrupts it.
pub const EMPTY_CELL: char = ' ';

/// Border thickness of a button box, in cells.
pub const BORDER_THICKNESS: usize = 1;

/// Fraction of the configured maximum used as the lower bound when rolling
/// a fresh line's max length.
pub const MIN_LENGTH_FACTOR: f32 = 0.1;

/// Animation step interval for the demo binary, in milliseconds.
pub const TICK_MS: u64 = 100;

/// Per-cell color. `Transparent` is the default and produces no markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Transparent,
    Black,
    White,
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    /// 24-bit color, serialized as `#rrggbb`.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Whether this is the default sentinel (no markup, no terminal color).
    pub fn is_transparent(self) -> bool {
        self == Color::Transparent
    }
}

/// Canonical markup spelling: lowercase name for the palette, `#rrggbb`
/// for RGB. `Transparent` has no markup spelling; the serializer must skip
/// it, but formatting it is not an error (it prints `transparent`).
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => f.write_str("transparent"),
            Color::Black => f.write_str("black"),
            Color::White => f.write_str("white"),
            Color::Gray => f.write_str("gray"),
            Color::Red => f.write_str("red"),
            Color::Green => f.write_str("green"),
            Color::Blue => f.write_str("blue"),
            Color::Yellow => f.write_str("yellow"),
            Color::Cyan => f.write_str("cyan"),
            Color::Magenta => f.write_str("magenta"),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Outcome of a grid write.
///
/// Out-of-range writes are skipped rather than failed: the engine keeps
/// ticking when a caller's geometry disagrees with the grid, and a skipped
/// write must never corrupt neighboring cells. Callers that care can still
/// observe the skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    Skipped,
}

/// Failure of a grid read. Reads have no safe default, so unlike writes
/// they surface the violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// A glitch fraction outside `0.0..=1.0`. Never clamped: silent clamping
/// would mask caller misconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("glitch fraction {0} is outside 0.0..=1.0")]
pub struct FractionError(pub f32);

/// A button label wider than the box interior allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("label of {len} chars exceeds the button capacity of {max}")]
pub struct CapacityError {
    pub len: usize,
    pub max: usize,
}

/// Identifies a text added to the engine. Indices are stable: texts are
/// never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextHandle(pub usize);

/// Identifies a button added to the engine. Indices are stable: buttons are
/// never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonHandle(pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_names_are_lowercase() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(Color::Magenta.to_string(), "magenta");
        assert_eq!(Color::Rgb(0, 255, 65).to_string(), "#00ff41");
    }

    #[test]
    fn transparent_is_the_default() {
        assert_eq!(Color::default(), Color::Transparent);
        assert!(Color::Transparent.is_transparent());
        assert!(!Color::Green.is_transparent());
    }
}
