//! HTML rendering for `Page`.
//!
//! Produces one self-contained document: inline stylesheet, inline SVG icons, and a module
//! script that loads the wasm package (`pkg/portfolio.js`) to start the particle layers.
//! Without the script the page is still complete, just without animation.

use std::borrow::Cow;

use super::*;

const STYLESHEET: &str = include_str!("../../assets/portfolio.css");

/// Class the browser glue looks for when mounting particle layers
pub const PARTICLE_CANVAS_CLASS: &str = "particle-background";

/// Attribute carrying the anchor id a button scrolls to
pub const SCROLL_TARGET_ATTR: &str = "data-scroll-target";

/// Hero content that fades in once the app has mounted
pub const HERO_CONTENT_CLASS: &str = "hero-content";
pub const MOUNTED_CLASS: &str = "is-mounted";

/// Set on `<html>` while the wasm package loads
pub const LOADING_CLASS: &str = "wasm-loading";

const LOADING_SCRIPT: &str = r#"document.documentElement.classList.add("wasm-loading");"#;

const BOOT_SCRIPT: &str = r#"
import("./pkg/portfolio.js")
  .then(async (pkg) => {
    await pkg.default();
    window.portfolio = pkg.PortfolioApp.mount();
  })
  .catch((err) => {
    console.warn("particle background unavailable:", err);
    document.documentElement.classList.remove("wasm-loading");
  });
"#;

/// Escape text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(|c| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Minimal tag writer. Attribute values and text go through `escape`.
struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self {
            buf: String::with_capacity(32 * 1024),
        }
    }

    fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }

    fn close(&mut self, tag: &str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    fn text(&mut self, text: &str) {
        self.buf.push_str(&escape(text));
    }

    fn raw(&mut self, markup: &str) {
        self.buf.push_str(markup);
    }

    /// `<tag class=..>text</tag>`, no class attribute when `class` is empty
    fn el(&mut self, tag: &str, class: &str, text: &str) {
        if class.is_empty() {
            self.open(tag, &[]);
        } else {
            self.open(tag, &[("class", class)]);
        }
        self.text(text);
        self.close(tag);
    }

    fn finish(self) -> String {
        self.buf
    }
}

pub fn render(page: &Page) -> String {
    let mut html = Html::new();

    html.raw("<!DOCTYPE html>");
    html.open("html", &[("lang", "en")]);
    html.open("head", &[]);
    html.raw(r#"<meta charset="utf-8">"#);
    html.raw(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    html.el("title", "", page.title);
    html.open("meta", &[("name", "description"), ("content", page.description)]);
    html.open("style", &[]);
    html.raw(STYLESHEET);
    html.close("style");
    html.open("script", &[]);
    html.raw(LOADING_SCRIPT);
    html.close("script");
    html.close("head");

    html.open("body", &[]);
    html.open("main", &[("class", "page")]);
    for section in page.sections() {
        match section {
            Section::Hero(hero) => render_hero(&mut html, hero),
            Section::About(about) => render_about(&mut html, about),
            Section::Experience(experience) => render_experience(&mut html, experience),
            Section::Projects(projects) => render_projects(&mut html, projects),
            Section::Skills(skills) => render_skills(&mut html, skills),
            Section::Education(education) => render_education(&mut html, education),
            Section::Recognition(recognition) => render_recognition(&mut html, recognition),
            Section::Contact(contact) => render_contact(&mut html, contact),
            Section::Footer(footer) => render_footer(&mut html, footer),
        }
    }
    html.close("main");
    html.open("script", &[("type", "module")]);
    html.raw(BOOT_SCRIPT);
    html.close("script");
    html.close("body");
    html.close("html");

    html.finish()
}

fn particle_canvas(html: &mut Html) {
    html.open("canvas", &[("class", PARTICLE_CANVAS_CLASS), ("aria-hidden", "true")]);
    html.close("canvas");
}

fn section_heading(html: &mut Html, heading: &Heading) {
    html.el("h2", "eyebrow", heading.eyebrow);
    html.el("h3", "section-title", heading.title);
}

fn link(html: &mut Html, link: &Link, class: &str, icon_only: bool) {
    let class = match link.accent {
        Some(accent) => format!("{} {}", class, accent.class_name()),
        None => class.to_string(),
    };
    let mut attrs = vec![("href", link.href), ("class", class.trim())];
    if link.new_tab {
        attrs.push(("target", "_blank"));
        attrs.push(("rel", "noopener noreferrer"));
    }
    html.open("a", &attrs);
    if let Some(icon) = link.icon {
        html.raw(&icon.svg(if icon_only { "icon-lg" } else { "icon-inline" }));
    }
    if icon_only {
        html.el("span", "sr-only", link.label);
    } else {
        html.text(link.label);
    }
    html.close("a");
}

fn badge(html: &mut Html, badge: &Badge, class: &str) {
    html.el("span", &format!("{} {}", class, badge.accent.class_name()), badge.label);
}

fn render_hero(html: &mut Html, hero: &Hero) {
    html.open("section", &[("class", "hero")]);
    html.open("div", &[("class", "hero-backdrop")]);
    html.close("div");
    particle_canvas(html);

    html.open("div", &[("class", HERO_CONTENT_CLASS)]);
    html.el("h1", "hero-name", hero.name);
    html.el("p", "hero-role", hero.role);
    html.el("p", "hero-tagline", hero.tagline);

    html.open("div", &[("class", "actions")]);
    for (i, action) in hero.actions.iter().enumerate() {
        link(html, action, if i == 0 { "button primary" } else { "button outline" }, false);
    }
    html.close("div");

    html.open(
        "button",
        &[
            ("type", "button"),
            ("class", "scroll-hint"),
            (SCROLL_TARGET_ATTR, hero.scroll_target),
            ("aria-label", "Scroll to content"),
        ],
    );
    html.el("span", "", hero.scroll_label);
    html.raw(&Icon::ChevronDown.svg("bounce"));
    html.close("button");

    html.close("div");
    html.close("section");
}

fn render_about(html: &mut Html, about: &About) {
    html.open("section", &[("id", ABOUT_ANCHOR), ("class", "band shaded")]);
    html.open("div", &[("class", "container")]);
    section_heading(html, &about.heading);
    html.open("div", &[("class", "grid two")]);

    html.open("article", &[("class", "card accent-cyan")]);
    html.el("h4", "card-title ruled", about.objective_title);
    html.el("p", "card-body", about.objective);
    html.close("article");

    html.open("article", &[("class", "card accent-purple")]);
    html.el("h4", "card-title ruled", about.details_title);
    html.open("ul", &[("class", "contact-details")]);
    for detail in &about.details {
        html.open("li", &[("class", detail.accent.class_name())]);
        html.raw(&detail.icon.svg("icon-chip"));
        match &detail.link {
            Some(target) => {
                let mut shown = target.clone();
                shown.icon = None;
                shown.label = detail.text;
                link(html, &shown, "detail-link", false);
            }
            None => html.el("span", "", detail.text),
        }
        html.close("li");
    }
    html.close("ul");
    html.close("article");

    html.close("div");
    html.close("div");
    html.close("section");
}

fn render_experience(html: &mut Html, experience: &Experience) {
    html.open("section", &[("class", "band")]);
    html.open("div", &[("class", "container")]);
    section_heading(html, &experience.heading);

    html.open("article", &[("class", "card edge accent-cyan")]);
    html.open("header", &[("class", "card-header split")]);
    html.open("div", &[]);
    html.el("h4", "card-title large", experience.title);
    html.el("p", "card-subtitle", experience.company);
    html.close("div");
    html.el("span", "badge gradient", experience.stack);
    html.close("header");
    html.el("p", "card-body", experience.summary);
    html.close("article");

    html.close("div");
    html.close("section");
}

fn render_projects(html: &mut Html, projects: &Projects) {
    html.open("section", &[("class", "band shaded")]);
    html.open("div", &[("class", "container")]);
    section_heading(html, &projects.heading);
    html.open("div", &[("class", "stack")]);

    for project in &projects.items {
        let class = format!("card project {}", project.accent.class_name());
        html.open("article", &[("class", class.as_str())]);
        html.open("header", &[("class", "card-header split")]);
        html.el("h4", "card-title", project.title);
        html.raw(&Icon::ExternalLink.svg("icon-muted"));
        html.close("header");

        html.open("div", &[("class", "badges")]);
        for b in &project.badges {
            badge(html, b, "badge soft");
        }
        html.close("div");

        html.el("p", "card-body", project.summary);
        html.open("ul", &[("class", "highlights")]);
        for highlight in &project.highlights {
            html.el("li", "", highlight);
        }
        html.close("ul");
        html.close("article");
    }

    html.close("div");
    html.close("div");
    html.close("section");
}

fn render_skills(html: &mut Html, skills: &Skills) {
    html.open("section", &[("class", "band")]);
    html.open("div", &[("class", "container")]);
    section_heading(html, &skills.heading);
    html.open("div", &[("class", "grid two")]);

    for group in &skills.groups {
        html.open("article", &[("class", format!("card {}", group.accent.class_name()).as_str())]);
        html.el("h4", "card-title swatch", group.title);
        html.open("div", &[("class", "badges")]);
        for skill in &group.skills {
            badge(html, skill, "badge outline");
        }
        html.close("div");
        html.close("article");
    }

    html.close("div");
    html.close("div");
    html.close("section");
}

fn render_education(html: &mut Html, education: &Education) {
    html.open("section", &[("class", "band shaded")]);
    html.open("div", &[("class", "container")]);
    section_heading(html, &education.heading);
    html.open("div", &[("class", "stack")]);

    for degree in &education.degrees {
        let class = format!("card edge {}", degree.accent.class_name());
        html.open("article", &[("class", class.as_str())]);
        html.el("h4", "card-title", degree.title);
        html.el("p", "card-subtitle strong", degree.institution);
        html.el("p", "card-subtitle", degree.details);
        html.close("article");
    }

    html.close("div");
    html.close("div");
    html.close("section");
}

fn render_recognition(html: &mut Html, recognition: &Recognition) {
    html.open("section", &[("class", "band")]);
    html.open("div", &[("class", "container grid two wide-gap")]);

    html.open("div", &[]);
    section_heading(html, &recognition.achievements_heading);
    html.open("div", &[("class", "stack")]);
    for achievement in &recognition.achievements {
        let class = format!("card achievement {}", achievement.accent.class_name());
        html.open("article", &[("class", class.as_str())]);
        html.el("div", "emblem", achievement.emblem);
        html.open("div", &[]);
        html.el("p", "achievement-title", achievement.title);
        html.el("p", "card-subtitle", achievement.detail);
        html.close("div");
        html.close("article");
    }
    html.close("div");
    html.close("div");

    html.open("div", &[]);
    section_heading(html, &recognition.strengths_heading);
    html.open("div", &[("class", "stack tight")]);
    for strength in &recognition.strengths {
        let class = format!("card strength {}", strength.accent.class_name());
        html.open("article", &[("class", class.as_str())]);
        html.open("span", &[("class", "dot")]);
        html.close("span");
        html.el("span", "strength-label", strength.label);
        html.close("article");
    }
    html.close("div");
    html.close("div");

    html.close("div");
    html.close("section");
}

fn render_contact(html: &mut Html, contact: &Contact) {
    html.open("section", &[("id", CONTACT_ANCHOR), ("class", "band contact")]);
    html.open("div", &[("class", "contact-backdrop")]);
    html.close("div");
    particle_canvas(html);

    html.open("div", &[("class", "container narrow")]);
    html.open("div", &[("class", "centered")]);
    section_heading(html, &contact.heading);
    html.el("p", "intro", contact.intro);
    html.close("div");

    let profile = &contact.profile;
    html.open("article", &[("class", "card profile accent-purple")]);
    let mut attrs = vec![("href", profile.link.href), ("class", "profile-link")];
    if profile.link.new_tab {
        attrs.push(("target", "_blank"));
        attrs.push(("rel", "noopener noreferrer"));
    }
    html.open("a", &attrs);
    if let Some(icon) = profile.link.icon {
        html.raw(&icon.svg("icon-tile"));
    }
    html.open("div", &[]);
    html.el("h4", "card-title", profile.title);
    html.el("p", "card-subtitle", profile.subtitle);
    html.open("p", &[("class", "cta")]);
    html.text(profile.cta);
    html.raw(&Icon::ExternalLink.svg("icon-sm"));
    html.close("p");
    html.close("div");
    html.close("a");
    html.close("article");

    let cta = &contact.call_to_action;
    html.open("article", &[("class", "card call-to-action")]);
    html.el("h4", "card-title large", cta.title);
    html.el("p", "card-body", cta.body);
    html.open("div", &[("class", "actions")]);
    for (i, action) in cta.actions.iter().enumerate() {
        link(html, action, if i == 0 { "button primary" } else { "button outline" }, false);
    }
    html.close("div");
    html.close("article");

    html.close("div");
    html.close("section");
}

fn render_footer(html: &mut Html, footer: &Footer) {
    html.open("footer", &[("class", "footer")]);
    html.open("div", &[("class", "container")]);
    html.open("div", &[("class", "footer-row")]);
    html.open("div", &[]);
    html.el("h4", "footer-name", footer.name);
    html.el("p", "card-subtitle", footer.role);
    html.close("div");
    html.open("nav", &[("class", "footer-links")]);
    for target in &footer.links {
        link(html, target, "round-link", true);
    }
    html.close("nav");
    html.close("div");
    html.el("p", "copyright", footer.copyright);
    html.close("div");
    html.close("footer");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert_eq!(escape("HTML & CSS"), "HTML &amp; CSS");
        assert_eq!(escape(r#"<a href="x">'"#), "&lt;a href=&quot;x&quot;&gt;&#39;");
    }

    #[test]
    fn test_query_string_is_escaped_in_href() {
        let document = render(&Page::portfolio());
        assert!(document.contains("view=cm&amp;fs=1&amp;to=ayushkumar07012005@gmail.com"));
        assert!(!document.contains("view=cm&fs=1"));
    }

    #[test]
    fn test_two_particle_canvases() {
        let document = render(&Page::portfolio());
        let needle = format!(r#"<canvas class="{}""#, PARTICLE_CANVAS_CLASS);
        assert_eq!(document.matches(&needle).count(), 2);
    }

    #[test]
    fn test_scroll_button_targets_about() {
        let document = render(&Page::portfolio());
        assert!(document.contains(r#"data-scroll-target="about""#));
        assert!(document.contains(r#"<section id="about""#));
    }

    #[test]
    fn test_loading_class_matches_scripts() {
        assert!(LOADING_SCRIPT.contains(LOADING_CLASS));
        assert!(BOOT_SCRIPT.contains(LOADING_CLASS));
    }

    #[test]
    fn test_external_links_open_new_tab() {
        let mut html = Html::new();
        let linkedin =
            Link::external("LinkedIn", "https://example.com", LinkKind::Web, Icon::Linkedin);
        link(&mut html, &linkedin, "button", false);
        let out = html.finish();
        assert!(out.contains(r#"target="_blank""#));
        assert!(out.contains(r#"rel="noopener noreferrer""#));

        let mut html = Html::new();
        let phone = Link::same_tab("+91", "tel:+91", LinkKind::Phone, Icon::Phone);
        link(&mut html, &phone, "", false);
        assert!(!html.finish().contains("_blank"));
    }

    #[test]
    fn test_footer_link_colours_follow_accent() {
        let mut footer = match Page::portfolio().sections().last() {
            Some(Section::Footer(footer)) => footer.clone(),
            other => panic!("expected footer last, got {:?}", other),
        };
        footer.links.reverse();

        let mut html = Html::new();
        render_footer(&mut html, &footer);
        let out = html.finish();

        let phone = out.find(r#"class="round-link accent-green""#).unwrap();
        let linkedin = out.find(r#"class="round-link accent-blue""#).unwrap();
        assert!(out.contains(r#"class="round-link accent-purple""#));
        assert!(phone < linkedin);
    }

    #[test]
    fn test_skills_text_is_escaped() {
        let document = render(&Page::portfolio());
        assert!(document.contains("HTML &amp; CSS"));
    }
}
