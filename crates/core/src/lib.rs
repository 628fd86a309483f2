//! Core engine module - pure, deterministic, and testable
//!
//! This crate contains the whole digital-rain animation engine. It has
//! **zero dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical animation
//! - **Testable**: every tick effect can be asserted cell by cell
//! - **Portable**: any host that can display a string can drive it
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size character/color cell buffer (column-major)
//! - [`line`]: falling rain streaks with a grow/shrink lifecycle
//! - [`text`]: labels that glitch a fraction of their characters per tick
//! - [`button`]: boxes with flickering digit borders and centered labels
//! - [`engine`]: the compositor owning all of the above plus the RNG
//! - [`markup`]: the color-tagged, column-major wire format
//! - [`rng`]: seeded LCG behind every random draw
//!
//! # Example
//!
//! ```
//! use tui_rain_core::RainEngine;
//! use tui_rain_types::Color;
//!
//! let mut engine = RainEngine::new(40, 20, 12345);
//! engine.configure_lines(12, 15);
//! engine.add_text(5, 10, "wake up", Color::Green);
//!
//! engine.tick(0.2).unwrap();
//! let frame = engine.render();
//! assert_eq!(frame.lines().count(), 20);
//! ```

pub mod button;
pub mod engine;
pub mod grid;
pub mod line;
pub mod markup;
pub mod rng;
pub mod text;

pub use tui_rain_types as types;

// Re-export commonly used types for convenience
pub use button::Button;
pub use engine::RainEngine;
pub use grid::CellGrid;
pub use line::{Line, LinePhase};
pub use markup::grid_to_markup;
pub use rng::SimpleRng;
pub use text::Text;
