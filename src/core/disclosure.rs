//! Disclosure pair behavior.
//!
//! A trigger link jointly flips the visibility markers of a primary and an
//! optional secondary panel, and suppresses the click's default action so
//! the host never follows the link. There is no outside-click dismissal;
//! the panels stay as toggled until the trigger is clicked again.

use crate::config::DisclosureConfig;
use crate::core::element::Element;
use std::collections::HashMap;
use tracing::debug;

/// An attached disclosure pair: owns the resolved ids and marker names.
///
/// The secondary panel is optional at bind time; when its id is missing the
/// joint flip degrades to the primary panel alone.
#[derive(Debug, Clone)]
pub struct DisclosurePair {
    trigger: String,
    primary: String,
    secondary: Option<String>,
    primary_marker: String,
    secondary_marker: String,
}

impl DisclosurePair {
    /// Bind against the element store. Returns None when the trigger or the
    /// primary panel id is missing; a missing secondary only narrows the
    /// flip to the primary.
    pub fn bind(
        config: &DisclosureConfig,
        elements: &HashMap<String, Element>,
    ) -> Option<Self> {
        if !elements.contains_key(&config.trigger) || !elements.contains_key(&config.primary) {
            debug!(
                "Disclosure not attached: missing '{}' or '{}'",
                config.trigger, config.primary
            );
            return None;
        }

        let secondary = if elements.contains_key(&config.secondary) {
            Some(config.secondary.clone())
        } else {
            debug!(
                "Disclosure secondary '{}' missing, flipping '{}' only",
                config.secondary, config.primary
            );
            None
        };

        Some(Self {
            trigger: config.trigger.clone(),
            primary: config.primary.clone(),
            secondary,
            primary_marker: config.primary_marker.clone(),
            secondary_marker: config.secondary_marker.clone(),
        })
    }

    /// Trigger phase: a click on the trigger flips both panels' markers in
    /// the same step. Returns true if the click hit the trigger; the caller
    /// must then treat the click's default action (link navigation) as
    /// suppressed.
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
        if !hit {
            return false;
        }

        let expanded = elements
            .get_mut(&self.primary)
            .map(|panel| panel.toggle_marker(&self.primary_marker))
            .unwrap_or(false);
        if let Some(ref secondary) = self.secondary {
            if let Some(panel) = elements.get_mut(secondary) {
                panel.toggle_marker(&self.secondary_marker);
            }
        }
        debug!(
            "Disclosure '{}' flipped, now expanded={}",
            self.primary, expanded
        );
        true
    }

    /// True if the primary panel's marker is currently set.
    pub fn is_expanded(&self, elements: &HashMap<String, Element>) -> bool {
        elements
            .get(&self.primary)
            .map(|el| el.has_marker(&self.primary_marker))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    // Fixture: link at (4,10) 9x1, panels stacked below it.
    fn store() -> HashMap<String, Element> {
        let mut elements = HashMap::new();
        elements.insert("faq_link".to_string(), Element::new(Rect::new(4, 10, 9, 1)));
        elements.insert(
            "faq_text".to_string(),
            Element::new(Rect::new(4, 12, 40, 6)),
        );
        elements.insert("command".to_string(), Element::new(Rect::new(4, 18, 40, 8)));
        elements
    }

    fn panels_marked(elements: &HashMap<String, Element>) -> (bool, bool) {
        (
            elements["faq_text"].has_marker("faq-visible"),
            elements["command"].has_marker("command-visible"),
        )
    }

    #[test]
    fn test_trigger_click_flips_both_panels_together() {
        let mut elements = store();
        let pair = DisclosurePair::bind(&DisclosureConfig::default(), &elements).unwrap();

        assert_eq!(panels_marked(&elements), (false, false));

        assert!(pair.on_trigger_click(&mut elements, 6, 10));
        assert_eq!(panels_marked(&elements), (true, true));
        assert!(pair.is_expanded(&elements));

        assert!(pair.on_trigger_click(&mut elements, 6, 10));
        assert_eq!(panels_marked(&elements), (false, false));
        assert!(!pair.is_expanded(&elements));
    }

    #[test]
    fn test_panels_never_disagree() {
        let mut elements = store();
        let pair = DisclosurePair::bind(&DisclosureConfig::default(), &elements).unwrap();

        for _ in 0..5 {
            pair.on_trigger_click(&mut elements, 6, 10);
            let (primary, secondary) = panels_marked(&elements);
            assert_eq!(primary, secondary);
        }
    }

    #[test]
    fn test_click_off_trigger_changes_nothing() {
        let mut elements = store();
        let pair = DisclosurePair::bind(&DisclosureConfig::default(), &elements).unwrap();

        // Clicks on the panels themselves are not trigger clicks
        assert!(!pair.on_trigger_click(&mut elements, 10, 14));
        assert!(!pair.on_trigger_click(&mut elements, 0, 0));
        assert_eq!(panels_marked(&elements), (false, false));
    }

    #[test]
    fn test_missing_secondary_still_attaches() {
        let mut elements = store();
        elements.remove("command");

        let pair = DisclosurePair::bind(&DisclosureConfig::default(), &elements)
            .expect("trigger and primary are enough to attach");

        assert!(pair.on_trigger_click(&mut elements, 6, 10));
        assert!(elements["faq_text"].has_marker("faq-visible"));
        assert!(pair.is_expanded(&elements));
    }

    #[test]
    fn test_bind_requires_trigger_and_primary() {
        let config = DisclosureConfig::default();

        let mut elements = store();
        elements.remove("faq_link");
        assert!(DisclosurePair::bind(&config, &elements).is_none());

        let mut elements = store();
        elements.remove("faq_text");
        assert!(DisclosurePair::bind(&config, &elements).is_none());
    }
}
