//! Digital rain (workspace facade crate).
//!
//! This package keeps a single `tui_rain::{core,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_rain_core as core;
pub use tui_rain_term as term;
pub use tui_rain_types as types;
