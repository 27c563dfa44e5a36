//! Event gallery: category filter plus a single-item lightbox.

use crate::motion::{Pose, Tween};
use crate::overlay::{OverlayPolicy, OverlayTarget};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Category {
    All,
    Devfest,
    TechEvents,
    Volunteering,
    Networking,
    Community,
}

impl Category {
    pub const ORDERED: [Category; 6] = [
        Self::All,
        Self::Devfest,
        Self::TechEvents,
        Self::Volunteering,
        Self::Networking,
        Self::Community,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Devfest => "Devfest",
            Self::TechEvents => "Tech Events",
            Self::Volunteering => "Volunteering",
            Self::Networking => "Networking",
            Self::Community => "Community",
        }
    }

    pub fn matches(self, item: &GalleryItem) -> bool {
        self == Self::All || item.category == self
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::All
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GalleryItem {
    pub id: i32,
    pub image: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub location: &'static str,
}

/// Text shown under the enlarged image.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LightboxCaption {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub location: &'static str,
}

impl GalleryItem {
    pub fn caption(&self) -> LightboxCaption {
        LightboxCaption {
            category: self.category.label(),
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
        }
    }
}

/// Replayed over the grid on every category change.
pub const ITEM_TWEEN: Tween = Tween::new(Pose::HIDDEN.scaled(0.9), Pose::REST, 400).staggered(100);

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        image: "/assets/gallery/thank-you-organizer.jpg",
        category: Category::Devfest,
        title: "Lead Organizer: GDG DevFest Salem.",
        description: "Orchestrating large-scale community events to foster developer growth.",
        date: "Dec 2025",
        location: "Salem",
    },
    GalleryItem {
        id: 2,
        image: "/assets/gallery/tech-session.jpg",
        category: Category::TechEvents,
        title: "Tech Session",
        description: "Conducted a hands-on session on Chatbots.",
        date: "Sep 2024",
        location: "Paavai Engineering College",
    },
    GalleryItem {
        id: 3,
        image: "/assets/gallery/volunteering.jpg",
        category: Category::Volunteering,
        title: "TQI Volunteer",
        description: "Volunteering my time to mentor students at government schools.",
        date: "Aug 2024",
        location: "Namakkal",
    },
    GalleryItem {
        id: 4,
        image: "/assets/gallery/devfest-planning.jpg",
        category: Category::TechEvents,
        title: "GDG DevFest",
        description: "Planning and organizing GDG DevFest Salem.",
        date: "Nov 2024",
        location: "Salem",
    },
    GalleryItem {
        id: 5,
        image: "/assets/gallery/networking.jpg",
        category: Category::Networking,
        title: "Team Collaboration",
        description: "Networking with industry experts at Google Developer Groups DevFest.",
        date: "Dec 2025",
        location: "Salem DevFest",
    },
    GalleryItem {
        id: 6,
        image: "/assets/gallery/student-leader.jpg",
        category: Category::Community,
        title: "Student Leadership",
        description: "Addressing the student body as a technical club lead.",
        date: "Jan 2025",
        location: "Auditorium",
    },
];

/// Stable filter: declaration order is preserved.
pub fn filter_items(items: &[GalleryItem], category: Category) -> Vec<&GalleryItem> {
    items.iter().filter(|item| category.matches(item)).collect()
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GalleryState {
    items: &'static [GalleryItem],
    active: Category,
    selected: Option<i32>,
    generation: u32,
}

impl GalleryState {
    pub fn new(items: &'static [GalleryItem]) -> Self {
        Self {
            items,
            active: Category::All,
            selected: None,
            generation: 0,
        }
    }

    pub fn active_category(&self) -> Category {
        self.active
    }

    /// Bumped whenever the visible set is recomputed; drives the entrance animation.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn visible(&self) -> Vec<&'static GalleryItem> {
        filter_items(self.items, self.active)
    }

    /// Returns whether the category actually changed.
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.active == category {
            return false;
        }
        self.active = category;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    pub fn open(&mut self, id: i32) {
        if self.visible().iter().any(|item| item.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn click(&mut self, target: OverlayTarget) {
        if OverlayPolicy::LIGHTBOX.dismisses(target) {
            self.selected = None;
        }
    }

    pub fn selected(&self) -> Option<&'static GalleryItem> {
        let id = self.selected?;
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn item_tween_scales_up_quickly_with_stagger() {
        assert_eq!(ITEM_TWEEN.duration_ms, 400);
        assert_eq!(ITEM_TWEEN.from.scale, 0.9);
        assert_eq!(ITEM_TWEEN.from.opacity, 0.0);
        assert_eq!(ITEM_TWEEN.start_delay_ms(3), 300);
    }

    #[test]
    fn caption_carries_category_and_details() {
        let caption = GALLERY_ITEMS[0].caption();
        assert_eq!(
            caption,
            LightboxCaption {
                category: "Devfest",
                title: "Lead Organizer: GDG DevFest Salem.",
                description: "Orchestrating large-scale community events to foster developer growth.",
                date: "Dec 2025",
                location: "Salem",
            }
        );

        for item in GALLERY_ITEMS {
            assert_eq!(item.caption().category, item.category.label());
        }
    }

    #[test]
    fn all_returns_every_item_in_declaration_order() {
        let ids: Vec<i32> = filter_items(GALLERY_ITEMS, Category::All)
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn each_category_yields_only_its_items_in_order() {
        for category in Category::ORDERED.into_iter().skip(1) {
            let filtered = filter_items(GALLERY_ITEMS, category);
            assert!(filtered.iter().all(|item| item.category == category));

            let expected: Vec<i32> = GALLERY_ITEMS
                .iter()
                .filter(|item| item.category == category)
                .map(|item| item.id)
                .collect();
            let actual: Vec<i32> = filtered.iter().map(|item| item.id).collect();
            assert_eq!(actual, expected, "{}", category.label());
        }
    }

    #[test]
    fn tech_events_keeps_both_entries_in_order() {
        let ids: Vec<i32> = filter_items(GALLERY_ITEMS, Category::TechEvents)
            .iter()
            .map(|item| item.id)
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn items_have_unique_ids_and_concrete_categories() {
        let ids: HashSet<i32> = GALLERY_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), GALLERY_ITEMS.len());
        assert!(GALLERY_ITEMS.iter().all(|item| item.category != Category::All));
    }

    #[test]
    fn changing_category_bumps_generation_once() {
        let mut state = GalleryState::new(GALLERY_ITEMS);

        assert!(!state.select_category(Category::All));
        assert_eq!(state.generation(), 0);

        assert!(state.select_category(Category::Networking));
        assert!(!state.select_category(Category::Networking));
        assert_eq!(state.generation(), 1);
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn backdrop_click_closes_lightbox() {
        let mut state = GalleryState::new(GALLERY_ITEMS);
        state.open(3);
        assert_eq!(state.selected().map(|item| item.id), Some(3));

        state.click(OverlayTarget::Backdrop);
        assert!(state.selected().is_none());
    }

    #[test]
    fn panel_click_is_contained() {
        let mut state = GalleryState::new(GALLERY_ITEMS);
        state.open(3);

        state.click(OverlayTarget::Panel);
        assert_eq!(state.selected().map(|item| item.title), Some("TQI Volunteer"));

        state.click(OverlayTarget::CloseControl);
        assert!(state.selected().is_none());
    }

    #[test]
    fn hidden_or_unknown_items_cannot_be_opened() {
        let mut state = GalleryState::new(GALLERY_ITEMS);
        state.select_category(Category::Community);

        state.open(3);
        assert!(state.selected().is_none());

        state.open(99);
        assert!(state.selected().is_none());

        state.open(6);
        assert_eq!(state.selected().map(|item| item.id), Some(6));
    }
}
