//! Click-driven show/hide behaviors for terminal pages.
//!
//! `peekaboo` implements two small UI behaviors as a headless library: a
//! dropdown menu that toggles from a trigger button and dismisses on any
//! outside click, and a disclosure pair that reveals two panels together
//! while suppressing the trigger's default action. A page is a plain
//! element store (rectangular bounds plus named visibility markers);
//! behaviors bind to elements by id and observe clicks as bare coordinates,
//! so they run identically against a live terminal or a test fixture.
//!
//! The `core` module is frontend-agnostic and imports nothing from the
//! rendering stack beyond the shared `Rect` geometry type. The `frontend`
//! module hosts the ratatui demo page the binary runs.

pub mod config;
pub mod core;
pub mod frontend;

pub use crate::config::Config;
pub use crate::core::{ClickOutcome, DisclosurePair, DropdownToggle, Element, Page};
