//! Frontend-agnostic page events.
//!
//! The TUI layer translates its native crossterm stream into this enum so
//! the page dispatch only ever sees one event shape. A click carries nothing
//! but coordinates; the behaviors inspect no other event data.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// Events the demo loop feeds to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// A primary-button press at terminal cell (x, y)
    Click { x: u16, y: u16 },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Application quit signal
    Quit,
}

impl PageEvent {
    /// Create a click event
    pub fn click(x: u16, y: u16) -> Self {
        Self::Click { x, y }
    }

    /// Create a resize event
    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    /// Create a quit event
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Translate a crossterm event. Returns `None` for everything the page
    /// does not care about: key releases, mouse movement, scroll, drags and
    /// non-left buttons.
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(Self::click(mouse.column, mouse.row))
                }
                _ => None,
            },
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Self::quit()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Self::quit())
                }
                _ => None,
            },
            Event::Resize(width, height) => Some(Self::resize(width, height)),
            _ => None,
        }
    }
}
