//! Project records and the closed category set.

use serde::{Deserialize, Serialize};

/// Category tag for a project. The set is closed: every record in the
/// catalog carries exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Video,
    Audio,
    Design,
    Writing,
}

impl ProjectKind {
    /// Returns the capitalized display label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Video => "Video",
            ProjectKind::Audio => "Audio",
            ProjectKind::Design => "Design",
            ProjectKind::Writing => "Writing",
        }
    }

    /// Returns all kinds in filter-bar order.
    pub fn all() -> &'static [ProjectKind] {
        &[
            ProjectKind::Video,
            ProjectKind::Audio,
            ProjectKind::Design,
            ProjectKind::Writing,
        ]
    }
}

/// Category selector for the filter bar: every record, or a single kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Kind(ProjectKind),
}

impl CategoryFilter {
    /// Returns the display label for this selector.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Kind(kind) => kind.label(),
        }
    }

    /// Returns whether the given record passes this selector.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Kind(kind) => record.kind == *kind,
        }
    }

    /// Returns all selectors in filter-bar order, `All` first.
    pub fn all() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(ProjectKind::all().iter().copied().map(CategoryFilter::Kind))
            .collect()
    }
}

/// Icon glyph attached to a project or social link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Play,
    Document,
    Link,
    Github,
    Linkedin,
    Mail,
}

impl IconKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Play => "\u{25B6}",
            IconKind::Document => "\u{1F4C4}",
            IconKind::Link => "\u{1F517}",
            IconKind::Github => "\u{2387}",
            IconKind::Linkedin => "\u{1F4BC}",
            IconKind::Mail => "\u{2709}",
        }
    }
}

/// An outbound link attached to a project, shown in the detail overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
    pub icon: IconKind,
}

/// A social/contact link shown in the hero and contact blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: IconKind,
}

/// A single portfolio entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub year: u16,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover: String,
    pub description: String,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

impl ProjectRecord {
    /// Lowercased text the query filter searches: title, description,
    /// tags, then tools, space-joined. Category labels and link labels
    /// are deliberately not searched.
    pub(crate) fn search_haystack(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.title, &self.description];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.extend(self.tools.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Comma-joined tool list for the card and overlay metadata lines.
    pub fn tools_display(&self) -> String {
        self.tools.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: ProjectKind) -> ProjectRecord {
        ProjectRecord {
            id: "p01".into(),
            title: "Motion Ident".into(),
            kind,
            year: 2025,
            tools: vec!["After Effects".into()],
            tags: vec!["Branding".into(), "Motion".into()],
            cover: "https://example.com/cover.jpg".into(),
            description: "A crisp motion ident.".into(),
            links: vec![],
        }
    }

    #[test]
    fn test_category_filter_matches() {
        let design = record(ProjectKind::Design);
        assert!(CategoryFilter::All.matches(&design));
        assert!(CategoryFilter::Kind(ProjectKind::Design).matches(&design));
        assert!(!CategoryFilter::Kind(ProjectKind::Audio).matches(&design));
    }

    #[test]
    fn test_category_filter_order() {
        let selectors = CategoryFilter::all();
        assert_eq!(selectors.len(), 5);
        assert_eq!(selectors[0], CategoryFilter::All);
        assert_eq!(selectors[1], CategoryFilter::Kind(ProjectKind::Video));
    }

    #[test]
    fn test_kind_parses_lowercase() {
        let kind: ProjectKind = serde_json::from_str(r#""audio""#).unwrap();
        assert_eq!(kind, ProjectKind::Audio);
    }

    #[test]
    fn test_search_haystack_is_lowercase() {
        let design = record(ProjectKind::Design);
        let haystack = design.search_haystack();
        assert!(haystack.contains("motion ident"));
        assert!(haystack.contains("branding"));
        assert!(haystack.contains("after effects"));
        assert_eq!(haystack, haystack.to_lowercase());
    }
}
