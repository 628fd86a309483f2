//! Digital rain demo (default binary).
//!
//! Thin host glue around the engine: sizes the grid to the terminal,
//! drives ticks on a timer, and wires two keys — `q`/Esc quits, `b` spawns
//! a button at a random spot, standing in for the click-activated "spawn a
//! new button" action a real UI would wire to the engine.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_rain::core::{RainEngine, SimpleRng};
use tui_rain::term::TerminalRenderer;
use tui_rain::types::{Color, TICK_MS};

/// Fraction of label characters corrupted per tick.
const GLITCH_FRACTION: f32 = 0.15;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    // One terminal row per grid column, minus the leading separator cell.
    let rows = (w.max(2) - 1) as usize;
    let columns = h as usize;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut engine = RainEngine::new(rows, columns, seed);
    engine.configure_lines(columns / 2 + 4, columns.min(20));

    let title = "wake up, neo";
    engine.add_text(
        rows.saturating_sub(title.len()) / 2,
        columns / 3,
        title,
        Color::White,
    );
    let _ = engine.add_button(
        "follow",
        1,
        14,
        5,
        rows.saturating_sub(14) / 2,
        columns * 2 / 3,
        Color::Red,
    );

    let mut host_rng = SimpleRng::new(seed.wrapping_add(1));
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(GLITCH_FRACTION)?;
            term.draw(engine.grid())?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('b') => spawn_button(&mut engine, &mut host_rng),
                    _ => {}
                }
            }
        }
    }
}

/// Drop a small button somewhere random. Placement that ends up partly off
/// the grid is fine — off-grid cells are skipped at draw time.
fn spawn_button(engine: &mut RainEngine, rng: &mut SimpleRng) {
    let width = 12;
    let height = 3;
    let row = rng.next_range(engine.rows().saturating_sub(width) as u32) as usize;
    let column = rng.next_range(engine.columns().saturating_sub(height) as u32) as usize;
    let _ = engine.add_button("enter", 1, width, height, row, column, Color::Cyan);
}
