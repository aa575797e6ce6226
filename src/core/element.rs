//! Element model for page behaviors.
//!
//! An `Element` is the behavior layer's view of one addressable page region:
//! screen-space bounds plus a set of named visibility markers. A marker is a
//! binary presentation flag; whether the configured marker is present is the
//! single source of truth for whether the region renders its shown form.

use ratatui::layout::Rect;
use std::collections::HashSet;

/// One addressable region of the page.
///
/// Elements are registered once when the page is assembled and live as long
/// as the page. Bounds get re-placed whenever layout runs; marker state
/// survives re-placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Screen-space bounds used for hit testing.
    pub bounds: Rect,
    markers: HashSet<String>,
}

impl Element {
    /// Create an element with the given bounds and no markers set.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            markers: HashSet::new(),
        }
    }

    /// Move/resize the element. Markers are untouched.
    pub fn place(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Check whether a click at (x, y) lands inside this element.
    pub fn hit(&self, x: u16, y: u16) -> bool {
        x >= self.bounds.x
            && x < self.bounds.x + self.bounds.width
            && y >= self.bounds.y
            && y < self.bounds.y + self.bounds.height
    }

    /// True if the named marker is currently set.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    /// Set the named marker (no-op if already set).
    pub fn set_marker(&mut self, marker: &str) {
        self.markers.insert(marker.to_string());
    }

    /// Clear the named marker. Returns true if it was set.
    pub fn clear_marker(&mut self, marker: &str) -> bool {
        self.markers.remove(marker)
    }

    /// Flip the named marker. Returns true if the marker is now set.
    pub fn toggle_marker(&mut self, marker: &str) -> bool {
        if self.markers.remove(marker) {
            false
        } else {
            self.markers.insert(marker.to_string());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, w: u16, h: u16) -> Rect {
        Rect::new(x, y, w, h)
    }

    #[test]
    fn test_hit_inside_and_outside() {
        let el = Element::new(rect(2, 1, 4, 3));

        assert!(el.hit(2, 1)); // top-left corner
        assert!(el.hit(5, 3)); // bottom-right cell
        assert!(!el.hit(6, 1)); // one past the right edge
        assert!(!el.hit(2, 4)); // one past the bottom edge
        assert!(!el.hit(1, 1));
        assert!(!el.hit(0, 0));
    }

    #[test]
    fn test_marker_toggle_flips_both_ways() {
        let mut el = Element::new(rect(0, 0, 1, 1));

        assert!(!el.has_marker("show"));
        assert!(el.toggle_marker("show"));
        assert!(el.has_marker("show"));
        assert!(!el.toggle_marker("show"));
        assert!(!el.has_marker("show"));
    }

    #[test]
    fn test_markers_are_independent() {
        let mut el = Element::new(rect(0, 0, 1, 1));

        el.set_marker("faq-visible");
        el.set_marker("command-visible");
        assert!(el.clear_marker("faq-visible"));
        assert!(!el.has_marker("faq-visible"));
        assert!(el.has_marker("command-visible"));
    }

    #[test]
    fn test_clear_absent_marker_is_noop() {
        let mut el = Element::new(rect(0, 0, 1, 1));

        assert!(!el.clear_marker("show"));
        assert!(!el.has_marker("show"));
    }

    #[test]
    fn test_place_preserves_markers() {
        let mut el = Element::new(rect(0, 0, 10, 2));
        el.set_marker("show");

        el.place(rect(5, 5, 20, 4));
        assert_eq!(el.bounds, rect(5, 5, 20, 4));
        assert!(el.has_marker("show"));
        assert!(el.hit(5, 5));
        assert!(!el.hit(0, 0));
    }
}
