/// Element id of the menu toggle control
pub const NAV_TOGGLE_ID: &str = "navToggle";

/// Element id of the menu container
pub const NAV_MENU_ID: &str = "navMenu";

pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const CONTENT_SECTION_SELECTOR: &str = ".content-section";

/// Class on the menu and toggle while open, and on the highlighted nav link
pub const ACTIVE_CLASS: &str = "active";

/// Class applied to a content section once revealed
pub const REVEALED_CLASS: &str = "is-visible";

/// Fraction of a section that must be in the viewport to count as visible
pub const REVEAL_THRESHOLD: f64 = 0.2;
