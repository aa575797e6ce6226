//! Frontend layer.
//!
//! Everything that touches the terminal lives here: crossterm event
//! translation, terminal lifecycle, and the demo page rendering. The core
//! behavior layer never imports from this module; clicks cross the boundary
//! as plain `PageEvent` coordinates and visibility flows back out through
//! element markers.

pub mod events;
pub mod tui;

pub use events::PageEvent;
pub use tui::TuiShell;
