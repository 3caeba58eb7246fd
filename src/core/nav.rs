//! Navigation bar model: scroll styling, the mobile menu and section anchors.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Page offset past which the bar switches to its condensed style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Height reserved for the fixed bar when jumping to a section.
pub const HEADER_OFFSET_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Section {
    Introduction,
    Leaderboard,
    Methodology,
    Training,
    Innovation,
    Results,
    Impact,
    Authors,
}

impl Section {
    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::Leaderboard => "leaderboard",
            Section::Methodology => "methodology",
            Section::Training => "training",
            Section::Innovation => "innovation",
            Section::Results => "results",
            Section::Impact => "impact",
            Section::Authors => "authors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Introduction => "Introduction",
            Section::Leaderboard => "Leaderboard",
            Section::Methodology => "Methodology",
            Section::Training => "Training",
            Section::Innovation => "Innovation",
            Section::Results => "Results",
            Section::Impact => "Impact",
            Section::Authors => "Authors",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    /// Sections linked from the navigation bar, in display order.
    pub fn nav_links() -> &'static [Section] {
        &[
            Section::Introduction,
            Section::Leaderboard,
            Section::Methodology,
            Section::Results,
        ]
    }

    pub fn all() -> &'static [Section] {
        &[
            Section::Introduction,
            Section::Leaderboard,
            Section::Methodology,
            Section::Training,
            Section::Innovation,
            Section::Results,
            Section::Impact,
            Section::Authors,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns true when the scrolled flag flipped.
    pub fn on_scroll(&mut self, page_y: f64) -> bool {
        let scrolled = page_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Following a link always closes the mobile menu.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.close_menu();
        section.id()
    }
}

/// Absolute page offset to scroll to so that an element whose viewport-relative
/// top is `element_top` lands just below the fixed bar.
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET_PX
}
