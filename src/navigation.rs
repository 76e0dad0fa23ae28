//! Mobile menu state and in-page anchor handling.

/// Class marking the mobile menu container as open.
pub const MENU_OPEN_CLASS: &str = "active";

/// Anchors whose destination is an in-page fragment.
pub const FRAGMENT_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Clicks outside this region dismiss the open menu.
pub const NAV_REGION_SELECTOR: &str = "nav";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// The document's marker class is the source of truth; callers read it before each event.
    pub fn from_open(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Document-wide click; only clicks landing outside the nav region close the menu.
    pub fn on_document_click(&mut self, inside_nav: bool) -> bool {
        if inside_nav {
            return false;
        }
        self.close()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Not an in-page link; leave the browser alone.
    PassThrough,
    /// Bare `#`: suppress the jump and do nothing else.
    Suppress,
    /// Suppress the jump and smooth-scroll to the element matching this selector.
    ScrollTo(&'a str),
}

pub fn anchor_action(href: &str) -> AnchorAction<'_> {
    if !href.starts_with('#') {
        return AnchorAction::PassThrough;
    }
    if href == "#" {
        return AnchorAction::Suppress;
    }
    AnchorAction::ScrollTo(href)
}
