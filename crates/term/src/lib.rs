//! Terminal surface module.
//!
//! A thin crossterm-based display for the rain engine. The engine itself
//! never touches a terminal; this crate consumes its composed grid and owns
//! raw mode, the alternate screen, and color output.

pub mod renderer;

pub use tui_rain_core as core;
pub use tui_rain_types as types;

pub use renderer::{encode_grid_into, TerminalRenderer};
