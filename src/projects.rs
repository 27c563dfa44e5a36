//! Project catalog, grouped for display and searchable by id for the modal.

use crate::overlay::{OverlayPolicy, OverlayTarget};

pub const CARD_TAG_LIMIT: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProjectItem {
    pub id: i32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub repo_url: &'static str,
    pub featured: bool,
}

pub const MAJOR_PROJECTS: &[ProjectItem] = &[
    ProjectItem {
        id: 1,
        title: "Left2Feed – Real-Time Food Redistribution Platform",
        category: "Major Project",
        description: "A full-stack social impact platform designed to reduce food waste. It utilizes AI and geolocation to connect food donors with those in need in real-time.",
        image: "https://images.pexels.com/photos/6995201/pexels-photo-6995201.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["React", "Node.js", "MongoDB", "OpenAI Vision", "Geolocation"],
        live_url: "https://left2feed.netlify.app/",
        repo_url: "https://github.com/Rajesh-k11/Left2feed-Public",
        featured: true,
    },
    ProjectItem {
        id: 2,
        title: "Intelligent Multimodal System",
        category: "Major Project",
        description: "An AI-powered automation system using Computer Vision for gesture and voice-based interaction, enabling hands-free control of devices.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800",
        technologies: &["Python", "OpenCV", "MediaPipe", "Speech Recognition", "AI"],
        live_url: "https://github.com/Rajesh-k11/Multimodal_System",
        repo_url: "https://github.com/Rajesh-k11/Multimodal_System",
        featured: true,
    },
];

pub const WEB_PROJECTS: &[ProjectItem] = &[ProjectItem {
    id: 3,
    title: "CENCON – Symposium Website",
    category: "Web Development",
    description: "The official symposium website for Alagappa Chettiar Engineering College. A live, production-deployed project handling event details and registrations.",
    image: "https://images.pexels.com/photos/270408/pexels-photo-270408.jpeg?auto=compress&cs=tinysrgb&w=800",
    technologies: &["HTML/CSS", "JavaScript", "Responsive Design"],
    live_url: "https://cencon.online/",
    repo_url: "https://github.com",
    featured: false,
}];

pub const PERSONAL_PROJECTS: &[ProjectItem] = &[ProjectItem {
    id: 4,
    title: "Portfolio Website",
    category: "Personal Branding",
    description: "A personal developer portfolio showcasing projects, skills, and contact information. Features smooth animations and a modern dark-themed design.",
    image: "https://images.pexels.com/photos/1779487/pexels-photo-1779487.jpeg?auto=compress&cs=tinysrgb&w=800",
    technologies: &["Rust", "Yew", "WebAssembly", "CSS"],
    live_url: "#",
    repo_url: "https://github.com",
    featured: true,
}];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectGroup {
    Major,
    Web,
    Personal,
}

impl ProjectGroup {
    pub const ORDERED: [ProjectGroup; 3] = [Self::Major, Self::Web, Self::Personal];

    pub fn items(self) -> &'static [ProjectItem] {
        match self {
            Self::Major => MAJOR_PROJECTS,
            Self::Web => WEB_PROJECTS,
            Self::Personal => PERSONAL_PROJECTS,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Major => "Major Projects",
            Self::Web => "Web Development Projects",
            Self::Personal => "Personal Branding Project",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Major => "(High impact, complex, long-term)",
            Self::Web => "(Client work + real deployment)",
            Self::Personal => "(Showcases you)",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Major => "accent-primary",
            Self::Web => "accent-secondary",
            Self::Personal => "accent-tertiary",
        }
    }
}

pub fn all_projects() -> impl Iterator<Item = &'static ProjectItem> {
    ProjectGroup::ORDERED
        .into_iter()
        .flat_map(|group| group.items().iter())
}

pub fn find_project(id: i32) -> Option<&'static ProjectItem> {
    all_projects().find(|project| project.id == id)
}

/// Tags shown on a card plus how many were left out.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TagPreview {
    pub shown: &'static [&'static str],
    pub hidden: usize,
}

impl TagPreview {
    pub fn of(tags: &'static [&'static str], limit: usize) -> Self {
        let cut = tags.len().min(limit);
        Self {
            shown: &tags[..cut],
            hidden: tags.len() - cut,
        }
    }

    pub fn badge(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{}", self.hidden))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ProjectSelection {
    selected: Option<i32>,
}

impl ProjectSelection {
    pub fn open(&mut self, id: i32) {
        self.selected = Some(id);
    }

    pub fn click(&mut self, target: OverlayTarget) {
        if OverlayPolicy::DIALOG.dismisses(target) {
            self.selected = None;
        }
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Resolves the selection; an id missing from the catalog closes the modal.
    pub fn resolve(&mut self) -> Option<&'static ProjectItem> {
        let project = self.selected.and_then(find_project);
        if project.is_none() {
            self.selected = None;
        }
        project
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_across_groups() {
        let ids: Vec<i32> = all_projects().map(|project| project.id).collect();
        let unique: HashSet<i32> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn every_declared_id_resolves_to_its_item() {
        for project in all_projects() {
            let found = find_project(project.id).expect("declared project");
            assert_eq!(found, project);
        }
    }

    #[test]
    fn unknown_ids_are_not_found() {
        for id in [0, -1, -42, 5, i32::MAX] {
            assert!(find_project(id).is_none(), "id {id}");
        }
    }

    #[test]
    fn concatenation_keeps_group_order() {
        let ids: Vec<i32> = all_projects().map(|project| project.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn cards_show_three_tags_and_a_badge_for_the_rest() {
        let preview = TagPreview::of(MAJOR_PROJECTS[0].technologies, CARD_TAG_LIMIT);
        assert_eq!(preview.shown, &["React", "Node.js", "MongoDB"]);
        assert_eq!(preview.badge().as_deref(), Some("+2"));
    }

    #[test]
    fn short_tag_lists_have_no_badge() {
        let preview = TagPreview::of(WEB_PROJECTS[0].technologies, CARD_TAG_LIMIT);
        assert_eq!(preview.shown.len(), 3);
        assert_eq!(preview.badge(), None);
    }

    #[test]
    fn selection_with_unknown_id_resolves_to_nothing_and_closes() {
        let mut selection = ProjectSelection::default();
        selection.open(-7);

        assert!(selection.resolve().is_none());
        assert!(!selection.is_open());
    }

    #[test]
    fn modal_closes_only_from_close_control() {
        let mut selection = ProjectSelection::default();
        selection.open(2);

        selection.click(OverlayTarget::Backdrop);
        assert_eq!(selection.resolve().map(|project| project.id), Some(2));

        selection.click(OverlayTarget::CloseControl);
        assert!(!selection.is_open());
    }
}
