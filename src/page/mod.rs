//! The portfolio page: a fixed, top-to-bottom sequence of static sections.
//!
//! Nothing here is configuration. `Page::portfolio()` always builds the same page; the
//! types exist so the HTML renderer, the JSON export and the browser glue agree on one
//! description of it.

mod content;
pub mod html;
pub mod icons;

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::Result;
pub use icons::Icon;

/// Anchor id the hero's "Explore More" button scrolls to
pub const ABOUT_ANCHOR: &str = "about";
pub const CONTACT_ANCHOR: &str = "contact";

/// Colour family used for badges, card borders and bullet dots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Cyan,
    Blue,
    Purple,
    Pink,
    Orange,
    Amber,
    Yellow,
    Green,
    Emerald,
    Teal,
}

impl Accent {
    pub fn class_name(self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Blue => "accent-blue",
            Accent::Purple => "accent-purple",
            Accent::Pink => "accent-pink",
            Accent::Orange => "accent-orange",
            Accent::Amber => "accent-amber",
            Accent::Yellow => "accent-yellow",
            Accent::Green => "accent-green",
            Accent::Emerald => "accent-emerald",
            Accent::Teal => "accent-teal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Mail,
    Web,
    Phone,
}

/// Outbound anchor. `href` is rendered verbatim (escaped only for HTML).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: LinkKind,
    pub icon: Option<Icon>,
    /// Open in a new tab with `rel="noopener noreferrer"`
    pub new_tab: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<Accent>,
}

impl Link {
    pub fn external(label: &'static str, href: &'static str, kind: LinkKind, icon: Icon) -> Self {
        Self {
            label,
            href,
            kind,
            icon: Some(icon),
            new_tab: true,
            accent: None,
        }
    }

    pub fn same_tab(label: &'static str, href: &'static str, kind: LinkKind, icon: Icon) -> Self {
        Self {
            label,
            href,
            kind,
            icon: Some(icon),
            new_tab: false,
            accent: None,
        }
    }

    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = Some(accent);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub accent: Accent,
}

/// Small uppercase eyebrow plus the large gradient title above each section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub eyebrow: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hero {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub actions: Vec<Link>,
    pub scroll_label: &'static str,
    pub scroll_target: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactDetail {
    pub icon: Icon,
    pub accent: Accent,
    pub text: &'static str,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct About {
    pub heading: Heading,
    pub objective_title: &'static str,
    pub objective: &'static str,
    pub details_title: &'static str,
    pub details: Vec<ContactDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub heading: Heading,
    pub title: &'static str,
    pub company: &'static str,
    pub stack: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub accent: Accent,
    pub badges: Vec<Badge>,
    pub summary: &'static str,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projects {
    pub heading: Heading,
    pub items: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skills {
    pub heading: Heading,
    pub groups: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Degree {
    pub title: &'static str,
    pub institution: &'static str,
    pub details: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Education {
    pub heading: Heading,
    pub degrees: Vec<Degree>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub emblem: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recognition {
    pub achievements_heading: Heading,
    pub achievements: Vec<Achievement>,
    pub strengths_heading: Heading,
    pub strengths: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub actions: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub heading: Heading,
    pub intro: &'static str,
    pub profile: ProfileCard,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    pub name: &'static str,
    pub role: &'static str,
    pub links: Vec<Link>,
    pub copyright: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum Section {
    Hero(Hero),
    About(About),
    Experience(Experience),
    Projects(Projects),
    Skills(Skills),
    Education(Education),
    Recognition(Recognition),
    Contact(Contact),
    Footer(Footer),
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero(_) => "hero",
            Section::About(_) => "about",
            Section::Experience(_) => "experience",
            Section::Projects(_) => "projects",
            Section::Skills(_) => "skills",
            Section::Education(_) => "education",
            Section::Recognition(_) => "recognition",
            Section::Contact(_) => "contact",
            Section::Footer(_) => "footer",
        }
    }

    /// Element id other parts of the page can scroll to
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            Section::About(_) => Some(ABOUT_ANCHOR),
            Section::Contact(_) => Some(CONTACT_ANCHOR),
            _ => None,
        }
    }

    /// Whether a particle background is mounted behind this section
    pub fn has_particles(&self) -> bool {
        matches!(self, Section::Hero(_) | Section::Contact(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: &'static str,
    pub description: &'static str,
    pub sections: Vec<Section>,
}

impl Page {
    /// The one page this crate renders
    pub fn portfolio() -> Self {
        content::portfolio()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section a scroll action with `id` lands on, if any. A missing id means the scroll
    /// does nothing.
    pub fn scroll_target(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.anchor() == Some(id))
    }

    pub fn particle_hosts(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.has_particles())
    }

    /// Every outbound link on the page, in document order
    pub fn links(&self) -> Vec<&Link> {
        let mut links = Vec::new();
        for section in &self.sections {
            match section {
                Section::Hero(hero) => links.extend(hero.actions.iter()),
                Section::About(about) => {
                    links.extend(about.details.iter().filter_map(|d| d.link.as_ref()))
                }
                Section::Contact(contact) => {
                    links.push(&contact.profile.link);
                    links.extend(contact.call_to_action.actions.iter());
                }
                Section::Footer(footer) => links.extend(footer.links.iter()),
                _ => {}
            }
        }
        links
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render to HTML and write it to `path`, creating parent directories
    pub fn write_html(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let document = html::render(self);
        fs::write(path, &document)?;
        log::info!("Wrote {} bytes to {}", document.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        let page = Page::portfolio();
        let names: Vec<&str> = page.sections().iter().map(Section::name).collect();
        assert_eq!(
            names,
            [
                "hero",
                "about",
                "experience",
                "projects",
                "skills",
                "education",
                "recognition",
                "contact",
                "footer"
            ]
        );
    }

    #[test]
    fn test_particles_behind_hero_and_contact() {
        let page = Page::portfolio();
        let hosts: Vec<&str> = page.particle_hosts().map(Section::name).collect();
        assert_eq!(hosts, ["hero", "contact"]);
    }

    #[test]
    fn test_scroll_target_lookup() {
        let page = Page::portfolio();
        assert_eq!(page.scroll_target("about").map(Section::name), Some("about"));
        assert!(page.scroll_target("missing").is_none());
    }

    #[test]
    fn test_hero_scrolls_to_existing_anchor() {
        let page = Page::portfolio();
        let Section::Hero(hero) = &page.sections()[0] else {
            panic!("first section must be the hero");
        };
        assert!(page.scroll_target(hero.scroll_target).is_some());
    }

    #[test]
    fn test_four_projects() {
        let page = Page::portfolio();
        let projects = page
            .sections()
            .iter()
            .find_map(|s| match s {
                Section::Projects(p) => Some(p),
                _ => None,
            })
            .unwrap();
        assert_eq!(projects.items.len(), 4);
        assert!(projects.items.iter().all(|p| p.highlights.len() == 3));
    }

    #[test]
    fn test_link_schemes() {
        let page = Page::portfolio();
        for link in page.links() {
            match link.kind {
                LinkKind::Phone => assert!(link.href.starts_with("tel:")),
                LinkKind::Mail => assert!(
                    link.href.starts_with("mailto:")
                        || link.href.starts_with("https://mail.google.com/")
                ),
                LinkKind::Web => assert!(link.href.starts_with("https://")),
            }
            if link.href.starts_with("https://") {
                assert!(link.new_tab, "{} should open in a new tab", link.href);
            }
        }
    }

    #[test]
    fn test_json_export_tags_sections() {
        let json = Page::portfolio().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sections"][0]["section"], "hero");
        assert_eq!(value["sections"][0]["name"], "Ayush Kumar");
        assert_eq!(value["sections"].as_array().unwrap().len(), 9);
    }
}
