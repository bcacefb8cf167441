use std::collections::HashMap;

use shared::domain::SectionAnchor;

/// Height kept clear above a section so the fixed header does not cover it.
pub const HEADER_CLEARANCE: u32 = 80;

pub fn scroll_target(section_top: u32) -> u32 {
    section_top.saturating_sub(HEADER_CLEARANCE)
}

/// Measured top offsets of the page sections, in document coordinates.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    tops: HashMap<SectionAnchor, u32>,
}

impl SectionLayout {
    pub fn record(&mut self, anchor: SectionAnchor, top: u32) {
        self.tops.insert(anchor, top);
    }

    pub fn top(&self, anchor: SectionAnchor) -> Option<u32> {
        self.tops.get(&anchor).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub anchor: SectionAnchor,
    pub offset: u32,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationMenu {
    open: bool,
}

impl NavigationMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Resolves a nav click into a scroll request; the menu closes only when the section exists.
    pub fn navigate(
        &mut self,
        layout: &SectionLayout,
        anchor: SectionAnchor,
    ) -> Option<ScrollRequest> {
        let top = layout.top(anchor)?;
        self.open = false;
        Some(ScrollRequest {
            anchor,
            offset: scroll_target(top),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_leaves_room_for_header() {
        assert_eq!(scroll_target(1_200), 1_120);
        assert_eq!(scroll_target(30), 0);
    }

    #[test]
    fn navigating_to_known_section_closes_menu() {
        let mut layout = SectionLayout::default();
        layout.record(SectionAnchor::Rsvp, 2_400);
        let mut menu = NavigationMenu::default();
        menu.toggle();
        assert!(menu.is_open());

        let request = menu.navigate(&layout, SectionAnchor::Rsvp).expect("request");
        assert_eq!(request.offset, 2_320);
        assert!(!menu.is_open());
    }

    #[test]
    fn unknown_section_is_a_no_op() {
        let layout = SectionLayout::default();
        let mut menu = NavigationMenu::default();
        menu.toggle();

        assert!(menu.navigate(&layout, SectionAnchor::Travel).is_none());
        assert!(menu.is_open());
    }
}
