//! Frontend-agnostic page behavior.
//!
//! This layer owns the element store and every click-driven visibility rule:
//! dropdown toggles with outside-click dismissal, and disclosure pairs that
//! reveal two panels together. Nothing in here renders or reads terminal
//! events. Frontends feed clicks in as plain coordinates and draw whatever
//! the visibility markers say is on screen.

pub mod disclosure;
pub mod dropdown;
pub mod element;
pub mod page;

pub use disclosure::DisclosurePair;
pub use dropdown::DropdownToggle;
pub use element::Element;
pub use page::{ClickOutcome, Page};
