//! TerminalRenderer: flushes the engine's cell grid to a real terminal.
//!
//! The drawing API is intentionally small: full redraws of a grid that the
//! engine recomposes every tick anyway. Output honors the wire format's
//! transposition — grid column `c` lands on terminal row `c`, with one
//! leading separator column, so a terminal frame matches the serialized
//! markup line for line.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_rain_core::CellGrid;
use tui_rain_types::Color;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame. Color changes are coalesced into runs so a mostly
    /// transparent grid costs few escape sequences.
    pub fn draw(&mut self, grid: &CellGrid) -> Result<()> {
        self.buf.clear();
        encode_grid_into(grid, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_grid_into(grid: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Color> = None;
    for column in 0..grid.columns() {
        out.queue(cursor::MoveTo(0, column as u16))?;
        out.queue(Print(' '))?;
        for (ch, color) in grid.column_cells(column) {
            if current != Some(color) {
                out.queue(SetForegroundColor(to_crossterm(color)))?;
                current = Some(color);
            }
            out.queue(Print(ch))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Transparent cells fall back to the classic phosphor green instead of the
/// terminal default, so untagged rain still reads as rain.
fn to_crossterm(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as C;
    match color {
        Color::Transparent => C::Rgb { r: 0, g: 255, b: 65 },
        Color::Black => C::Black,
        Color::White => C::White,
        Color::Gray => C::Grey,
        Color::Red => C::Red,
        Color::Green => C::Green,
        Color::Blue => C::Blue,
        Color::Yellow => C::Yellow,
        Color::Cyan => C::Cyan,
        Color::Magenta => C::Magenta,
        Color::Rgb(r, g, b) => C::Rgb { r, g, b },
    }
}
