//! TUI frontend (ratatui-based).
//!
//! This module owns the terminal lifecycle and renders the demo page whose
//! regions the click behaviors are attached to. It wraps crossterm for
//! terminal management; event translation lives in `frontend::events`.

pub mod page_view;
pub mod shell;

pub use page_view::PageView;
pub use shell::TuiShell;
