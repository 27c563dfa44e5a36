//! In-page navigation: anchors, scroll-spy and the progress bar.

pub const SCROLL_SPY_OFFSET: f64 = 100.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "services", label: "Services" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "gallery", label: "Gallery" },
    NavItem { id: "contact", label: "Contact" },
];

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// The last section whose box contains `scroll_y + SCROLL_SPY_OFFSET`.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&'static str> {
    let marker = scroll_y + SCROLL_SPY_OFFSET;
    sections
        .iter()
        .rev()
        .find(|section| marker >= section.top && marker < section.top + section.height)
        .map(|section| section.id)
}

/// Fraction of the page scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavState {
    pub active: &'static str,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: NAV_ITEMS[0].id,
            menu_open: false,
        }
    }
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a link always closes the mobile menu.
    pub fn navigate(&mut self) {
        self.menu_open = false;
    }

    pub fn observe_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        if let Some(id) = active_section(scroll_y, sections) {
            self.active = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(index, item)| SectionBounds {
                id: item.id,
                top: index as f64 * 800.0,
                height: 800.0,
            })
            .collect()
    }

    #[test]
    fn spy_uses_offset_marker() {
        let sections = layout();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(699.0, &sections), Some("home"));
        assert_eq!(active_section(700.0, &sections), Some("about"));
        assert_eq!(active_section(4_900.0, &sections), Some("contact"));
    }

    #[test]
    fn spy_keeps_last_match_when_nothing_contains_marker() {
        let mut state = NavState::default();
        let sections = layout();

        state.observe_scroll(1_700.0, &sections);
        assert_eq!(state.active, "services");

        state.observe_scroll(99_999.0, &sections);
        assert_eq!(state.active, "services");
    }

    #[test]
    fn navigation_closes_mobile_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);

        state.navigate();
        assert!(!state.menu_open);
    }

    #[test]
    fn progress_is_clamped_and_safe_for_short_pages() {
        assert_eq!(scroll_progress(0.0, 3_000.0, 1_000.0), 0.0);
        assert_eq!(scroll_progress(1_000.0, 3_000.0, 1_000.0), 0.5);
        assert_eq!(scroll_progress(5_000.0, 3_000.0, 1_000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }
}
