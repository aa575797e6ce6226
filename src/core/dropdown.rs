//! Dropdown toggle behavior.
//!
//! A trigger element flips a menu element's visibility marker, and any click
//! landing outside both the trigger and the menu forces the menu hidden.
//! Clicking the trigger itself is excluded from the outside test, so the
//! toggle and the dismissal compose on the same click without fighting.

use crate::config::DropdownConfig;
use crate::core::element::Element;
use std::collections::HashMap;
use tracing::debug;

/// An attached dropdown: owns the resolved element ids and the marker name.
///
/// The controller itself is immutable after binding; all state lives on the
/// page's elements.
#[derive(Debug, Clone)]
pub struct DropdownToggle {
    trigger: String,
    menu: String,
    marker: String,
}

impl DropdownToggle {
    /// Bind against the element store. Returns None when the trigger or the
    /// menu id is missing; the behavior then never attaches and the page
    /// works as if the dropdown were intentionally absent.
    pub fn bind(
        config: &DropdownConfig,
        elements: &HashMap<String, Element>,
    ) -> Option<Self> {
        if !elements.contains_key(&config.trigger) || !elements.contains_key(&config.menu) {
            debug!(
                "Dropdown not attached: missing '{}' or '{}'",
                config.trigger, config.menu
            );
            return None;
        }

        Some(Self {
            trigger: config.trigger.clone(),
            menu: config.menu.clone(),
            marker: config.marker.clone(),
        })
    }

    /// Trigger phase: a click on the trigger flips the menu marker.
    /// Returns true if the click hit the trigger.
    pub fn on_trigger_click(
        &self,
        elements: &mut HashMap<String, Element>,
        x: u16,
        y: u16,
    ) -> bool {
        let hit = elements
            .get(&self.trigger)
            .map(|el| el.hit(x, y))
            .unwrap_or(false);
        if hit {
            if let Some(menu) = elements.get_mut(&self.menu) {
                let shown = menu.toggle_marker(&self.marker);
                debug!("Dropdown '{}' toggled, now shown={}", self.menu, shown);
            }
        }
        hit
    }

    /// Document phase: a click outside both the trigger and the menu hides
    /// the menu. Runs for every click on the page; hiding an already-hidden
    /// menu is a no-op. Returns true if the marker was actually cleared.
    pub fn on_document_click(
        &self,
        elements: &mut HashMap<String, Element>,
        x: u16,
        y: u16,
    ) -> bool {
        let inside_trigger = elements
            .get(&self.trigger)
            .map(|el| el.hit(x, y))
            .unwrap_or(false);
        let inside_menu = elements
            .get(&self.menu)
            .map(|el| el.hit(x, y))
            .unwrap_or(false);

        if inside_trigger || inside_menu {
            return false;
        }

        let dismissed = elements
            .get_mut(&self.menu)
            .map(|menu| menu.clear_marker(&self.marker))
            .unwrap_or(false);
        if dismissed {
            debug!("Dropdown '{}' dismissed by outside click", self.menu);
        }
        dismissed
    }

    /// True if the menu's marker is currently set.
    pub fn is_open(&self, elements: &HashMap<String, Element>) -> bool {
        elements
            .get(&self.menu)
            .map(|el| el.has_marker(&self.marker))
            .unwrap_or(false)
    }
}
