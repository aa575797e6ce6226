//! Page assembly and click dispatch.
//!
//! A `Page` owns the element store and every behavior attached to it, and
//! routes each click through all of them. Behaviors are attached while the
//! page is assembled (elements registered, first event not yet dispatched)
//! and stay attached for the page's lifetime. There is no detach.

use crate::config::{DisclosureConfig, DropdownConfig};
use crate::core::disclosure::DisclosurePair;
use crate::core::dropdown::DropdownToggle;
use crate::core::element::Element;
use ratatui::layout::Rect;
use std::collections::HashMap;
use tracing::debug;

/// What a dispatched click did, reported back to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// A disclosure trigger was hit; the host must not run the click's
    /// default action (e.g. follow the link).
    pub default_prevented: bool,
    /// At least one visibility marker changed.
    pub changed: bool,
}

impl ClickOutcome {
    /// True when the click neither changed a marker nor suppressed a
    /// default action.
    pub fn is_idle(&self) -> bool {
        !self.default_prevented && !self.changed
    }
}

/// The element store plus attached behaviors.
///
/// Multiple dropdowns and disclosures may be attached to one page; every
/// attached behavior observes every click. Dispatch is synchronous and runs
/// to completion before returning; the behaviors never suspend or re-enter.
#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
    dropdowns: Vec<DropdownToggle>,
    disclosures: Vec<DisclosurePair>,
}

impl Page {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under its id with no markers set. Registering an
    /// id twice replaces the previous element, markers included.
    pub fn register(&mut self, id: impl Into<String>, bounds: Rect) {
        self.elements.insert(id.into(), Element::new(bounds));
    }

    /// Re-place an existing element after layout ran again. Marker state is
    /// preserved. Unknown ids are ignored; a layout may know about regions
    /// this page never registered.
    pub fn place(&mut self, id: &str, bounds: Rect) {
        if let Some(element) = self.elements.get_mut(id) {
            element.place(bounds);
        }
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// True if the element exists and currently carries the marker.
    pub fn is_marked(&self, id: &str, marker: &str) -> bool {
        self.elements
            .get(id)
            .map(|el| el.has_marker(marker))
            .unwrap_or(false)
    }

    /// Attach a dropdown toggle. Returns false (and attaches nothing) when
    /// a required element id is missing; the page then behaves as if the
    /// dropdown were intentionally absent.
    pub fn attach_dropdown(&mut self, config: &DropdownConfig) -> bool {
        match DropdownToggle::bind(config, &self.elements) {
            Some(dropdown) => {
                debug!(
                    "Attached dropdown: trigger='{}' menu='{}' marker='{}'",
                    config.trigger, config.menu, config.marker
                );
                self.dropdowns.push(dropdown);
                true
            }
            None => false,
        }
    }

    /// Attach a disclosure pair. Returns false (and attaches nothing) when
    /// the trigger or the primary panel id is missing.
    pub fn attach_disclosure(&mut self, config: &DisclosureConfig) -> bool {
        match DisclosurePair::bind(config, &self.elements) {
            Some(disclosure) => {
                debug!(
                    "Attached disclosure: trigger='{}' primary='{}'",
                    config.trigger, config.primary
                );
                self.disclosures.push(disclosure);
                true
            }
            None => false,
        }
    }

    /// Dispatch one click through every attached behavior.
    ///
    /// Phases mirror the browser's event order: every trigger handler runs
    /// first, then every document-level handler observes the same click.
    /// The trigger exclusion inside the document phase is what keeps a
    /// trigger click from dismissing the menu it just opened.
    pub fn handle_click(&mut self, x: u16, y: u16) -> ClickOutcome {
        let mut outcome = ClickOutcome::default();

        // Trigger phase
        for dropdown in &self.dropdowns {
            if dropdown.on_trigger_click(&mut self.elements, x, y) {
                outcome.changed = true;
            }
        }
        for disclosure in &self.disclosures {
            if disclosure.on_trigger_click(&mut self.elements, x, y) {
                outcome.changed = true;
                outcome.default_prevented = true;
            }
        }

        // Document phase (dropdowns only; disclosures have no outside dismissal)
        for dropdown in &self.dropdowns {
            if dropdown.on_document_click(&mut self.elements, x, y) {
                outcome.changed = true;
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixture page: navbar dropdown at the top, disclosure block below.
    fn page() -> Page {
        let mut page = Page::new();
        page.register("hamburger", Rect::new(70, 0, 5, 3));
        page.register("dropdown-menu", Rect::new(60, 3, 18, 6));
        page.register("faq_link", Rect::new(4, 12, 9, 1));
        page.register("faq_text", Rect::new(4, 14, 40, 5));
        page.register("command", Rect::new(4, 19, 40, 5));
        page
    }

    fn full_page() -> Page {
        let mut page = page();
        assert!(page.attach_dropdown(&DropdownConfig::default()));
        assert!(page.attach_disclosure(&DisclosureConfig::default()));
        page
    }

    fn menu_open(page: &Page) -> bool {
        page.is_marked("dropdown-menu", "show")
    }

    #[test]
    fn test_attach_reports_missing_elements() {
        let mut empty = Page::new();
        assert!(!empty.attach_dropdown(&DropdownConfig::default()));
        assert!(!empty.attach_disclosure(&DisclosureConfig::default()));

        // A page missing the whole disclosure block still hosts the dropdown
        let mut partial = Page::new();
        partial.register("hamburger", Rect::new(0, 0, 3, 1));
        partial.register("dropdown-menu", Rect::new(0, 1, 10, 4));
        assert!(partial.attach_dropdown(&DropdownConfig::default()));
        assert!(!partial.attach_disclosure(&DisclosureConfig::default()));
    }

    #[test]
    fn test_trigger_click_opens_then_closes() {
        let mut page = full_page();

        let first = page.handle_click(72, 1);
        assert!(menu_open(&page));
        assert!(first.changed);
        assert!(!first.default_prevented);

        let second = page.handle_click(72, 1);
        assert!(!menu_open(&page));
        assert!(second.changed);
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut page = full_page();

        page.handle_click(72, 1);
        assert!(menu_open(&page));

        let outcome = page.handle_click(10, 25);
        assert!(!menu_open(&page));
        assert!(outcome.changed);
    }

    #[test]
    fn test_outside_click_on_closed_menu_is_idle() {
        let mut page = full_page();

        let outcome = page.handle_click(10, 25);
        assert!(outcome.is_idle());
        assert!(!menu_open(&page));
    }

    #[test]
    fn test_click_inside_menu_does_not_dismiss() {
        let mut page = full_page();

        page.handle_click(72, 1);
        let outcome = page.handle_click(65, 5);
        assert!(menu_open(&page));
        assert!(outcome.is_idle());
    }

    #[test]
    fn test_faq_click_prevents_default_and_flips_both() {
        let mut page = full_page();

        let outcome = page.handle_click(6, 12);
        assert!(outcome.default_prevented);
        assert!(outcome.changed);
        assert!(page.is_marked("faq_text", "faq-visible"));
        assert!(page.is_marked("command", "command-visible"));

        // A click elsewhere never reports suppression
        let outcome = page.handle_click(30, 25);
        assert!(!outcome.default_prevented);
    }

    #[test]
    fn test_faq_click_also_dismisses_open_dropdown() {
        let mut page = full_page();

        page.handle_click(72, 1);
        assert!(menu_open(&page));

        // The faq link is outside the dropdown's trigger and menu, so the
        // dropdown's document phase closes the menu on the same click.
        let outcome = page.handle_click(6, 12);
        assert!(!menu_open(&page));
        assert!(outcome.default_prevented);
        assert!(page.is_marked("faq_text", "faq-visible"));
    }

    #[test]
    fn test_faq_click_without_command_panel_still_suppresses() {
        let mut page = Page::new();
        page.register("faq_link", Rect::new(4, 12, 9, 1));
        page.register("faq_text", Rect::new(4, 14, 40, 5));
        assert!(page.attach_disclosure(&DisclosureConfig::default()));

        let outcome = page.handle_click(6, 12);
        assert!(outcome.default_prevented);
        assert!(outcome.changed);
        assert!(page.is_marked("faq_text", "faq-visible"));
    }

    #[test]
    fn test_two_dropdowns_dismiss_each_other() {
        let mut page = Page::new();
        page.register("left-burger", Rect::new(0, 0, 5, 1));
        page.register("left-menu", Rect::new(0, 1, 10, 4));
        page.register("right-burger", Rect::new(40, 0, 5, 1));
        page.register("right-menu", Rect::new(35, 1, 10, 4));

        let left = DropdownConfig {
            trigger: "left-burger".to_string(),
            menu: "left-menu".to_string(),
            marker: "show".to_string(),
        };
        let right = DropdownConfig {
            trigger: "right-burger".to_string(),
            menu: "right-menu".to_string(),
            marker: "show".to_string(),
        };
        assert!(page.attach_dropdown(&left));
        assert!(page.attach_dropdown(&right));

        page.handle_click(1, 0);
        assert!(page.is_marked("left-menu", "show"));

        // Opening the right menu is an outside click for the left one
        page.handle_click(41, 0);
        assert!(page.is_marked("right-menu", "show"));
        assert!(!page.is_marked("left-menu", "show"));
    }

    #[test]
    fn test_click_on_page_without_behaviors_is_idle() {
        let mut page = page();
        let outcome = page.handle_click(72, 1);
        assert!(outcome.is_idle());
        assert!(!menu_open(&page));
    }

    #[test]
    fn test_place_moves_hit_targets_and_keeps_markers() {
        let mut page = full_page();

        page.handle_click(72, 1);
        assert!(menu_open(&page));

        // Layout ran again: the navbar moved left
        page.place("hamburger", Rect::new(20, 0, 5, 3));
        page.place("dropdown-menu", Rect::new(10, 3, 18, 6));
        assert!(menu_open(&page));

        // The old trigger spot is now plain page background: outside click
        page.handle_click(72, 1);
        assert!(!menu_open(&page));

        // The new trigger spot toggles again
        page.handle_click(22, 1);
        assert!(menu_open(&page));
    }

    #[test]
    fn test_click_outcome_helpers() {
        assert!(ClickOutcome::default().is_idle());
        assert!(!ClickOutcome {
            default_prevented: true,
            changed: false,
        }
        .is_idle());
        assert!(!ClickOutcome {
            default_prevented: false,
            changed: true,
        }
        .is_idle());
    }
}
