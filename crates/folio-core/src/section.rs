//! Page sections of the main view.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a section, equal to the DOM anchor id it renders with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub const HOME: &'static str = "home";
    pub const ABOUT: &'static str = "about";
    pub const SKILLS: &'static str = "skills";
    pub const EXPERIENCE: &'static str = "experience";
    pub const PROJECTS: &'static str = "projects";
    pub const BLOG: &'static str = "blog";
    /// Footer anchor; reachable from hero buttons but not part of the nav
    pub const CONTACT: &'static str = "contact";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn home() -> Self {
        Self::new(Self::HOME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label: the identifier with its first character upper-cased
    pub fn label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A navigable section with its position in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub ordinal: usize,
}

impl Section {
    pub fn label(&self) -> String {
        self.id.label()
    }
}

/// Sections shown in the navigation bar, in document order.
pub const NAV_SECTIONS: [&str; 6] = [
    SectionId::HOME,
    SectionId::ABOUT,
    SectionId::SKILLS,
    SectionId::EXPERIENCE,
    SectionId::PROJECTS,
    SectionId::BLOG,
];

/// The main view's sections, ordered.
pub fn main_sections() -> Vec<Section> {
    NAV_SECTIONS
        .iter()
        .enumerate()
        .map(|(ordinal, id)| Section {
            id: SectionId::new(*id),
            ordinal,
        })
        .collect()
}

/// Whether `id` names one of the navigable sections.
pub fn is_nav_section(id: &str) -> bool {
    NAV_SECTIONS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_capitalizes() {
        assert_eq!(SectionId::new("experience").label(), "Experience");
        assert_eq!(SectionId::new("").label(), "");
    }

    #[test]
    fn test_main_sections_are_ordered() {
        let sections = main_sections();
        assert_eq!(sections.len(), NAV_SECTIONS.len());
        assert_eq!(sections[0].id, "home");
        assert_eq!(sections[5].id, "blog");
        assert!(sections.windows(2).all(|w| w[0].ordinal < w[1].ordinal));
    }

    #[test]
    fn test_contact_is_not_a_nav_section() {
        assert!(!is_nav_section(SectionId::CONTACT));
        assert!(is_nav_section("skills"));
    }
}
