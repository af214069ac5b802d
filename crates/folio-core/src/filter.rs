//! Pure filtering over the catalog: category selection plus substring search.

use crate::record::{CategoryFilter, ProjectRecord};

/// Returns the projects matching both the category selector and the search
/// query, preserving catalog order.
///
/// The query is trimmed and lowercased; a record matches when the lowercase
/// space-join of its title, description, tags, and tools contains the query
/// as a contiguous substring. A blank query matches everything. No ranking,
/// no fuzzy matching.
pub fn filter_projects<'a>(
    projects: &'a [ProjectRecord],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a ProjectRecord> {
    let needle = query.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| category.matches(p))
        .filter(|p| needle.is_empty() || p.search_haystack().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ProjectKind, ProjectRecord};

    fn record(id: &str, kind: ProjectKind, title: &str, tags: &[&str], tools: &[&str]) -> ProjectRecord {
        ProjectRecord {
            id: id.into(),
            title: title.into(),
            kind,
            year: 2025,
            tools: tools.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            cover: format!("https://example.com/{id}.jpg"),
            description: format!("Description for {title}."),
            links: vec![],
        }
    }

    /// Six records mirroring the sample catalog: audio, video, audio,
    /// design, writing, video.
    fn catalog() -> Vec<ProjectRecord> {
        vec![
            record("p01", ProjectKind::Audio, "Creative Inside Podcast", &["Podcast", "Interview"], &["Reaper"]),
            record("p02", ProjectKind::Video, "Short-form Ad", &["Commercial", "Color"], &["DaVinci Resolve"]),
            record("p03", ProjectKind::Audio, "Filtervrij", &["Podcast", "Production"], &["Audition"]),
            record("p04", ProjectKind::Design, "Motion Ident", &["Branding", "Motion"], &["After Effects"]),
            record("p05", ProjectKind::Writing, "Interactive Article", &["Web", "Storytelling"], &["Svelte"]),
            record("p06", ProjectKind::Video, "University Reel", &["Montage", "Sound Design"], &["Premiere"]),
        ]
    }

    fn ids(results: &[&ProjectRecord]) -> Vec<String> {
        results.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_all_with_empty_query_is_identity() {
        let projects = catalog();
        let results = filter_projects(&projects, CategoryFilter::All, "");
        assert_eq!(results.len(), projects.len());
        assert_eq!(ids(&results), vec!["p01", "p02", "p03", "p04", "p05", "p06"]);
    }

    #[test]
    fn test_category_returns_subsequence_in_order() {
        let projects = catalog();
        let results = filter_projects(&projects, CategoryFilter::Kind(ProjectKind::Audio), "");
        assert_eq!(ids(&results), vec!["p01", "p03"]);

        let results = filter_projects(&projects, CategoryFilter::Kind(ProjectKind::Video), "");
        assert_eq!(ids(&results), vec!["p02", "p06"]);
    }

    #[test]
    fn test_query_matches_tags() {
        let projects = catalog();
        // "Motion" appears in p04's tags; no other record carries the substring.
        let results = filter_projects(&projects, CategoryFilter::All, "motion");
        assert_eq!(ids(&results), vec!["p04"]);
    }

    #[test]
    fn test_query_matches_tools() {
        let projects = catalog();
        let results = filter_projects(&projects, CategoryFilter::All, "davinci");
        assert_eq!(ids(&results), vec!["p02"]);
    }

    #[test]
    fn test_case_insensitive() {
        let projects = catalog();
        let upper = filter_projects(&projects, CategoryFilter::All, "PODCAST");
        let lower = filter_projects(&projects, CategoryFilter::All, "podcast");
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(ids(&lower), vec!["p01", "p03"]);
    }

    #[test]
    fn test_whitespace_query_equals_empty() {
        let projects = catalog();
        let blank = filter_projects(&projects, CategoryFilter::Kind(ProjectKind::Design), "   ");
        let empty = filter_projects(&projects, CategoryFilter::Kind(ProjectKind::Design), "");
        assert_eq!(ids(&blank), ids(&empty));
    }

    #[test]
    fn test_category_and_query_combine() {
        let projects = catalog();
        // "interview" matches only p01; both predicates must hold.
        let results =
            filter_projects(&projects, CategoryFilter::Kind(ProjectKind::Audio), "interview");
        assert_eq!(ids(&results), vec!["p01"]);

        // Query matches but category does not
        let results =
            filter_projects(&projects, CategoryFilter::Kind(ProjectKind::Video), "interview");
        assert!(results.is_empty());
    }

    #[test]
    fn test_soundness_and_completeness() {
        let projects = catalog();
        let category = CategoryFilter::Kind(ProjectKind::Video);
        let results = filter_projects(&projects, category, "reel");
        assert!(!results.is_empty());
        for p in &results {
            assert!(category.matches(p));
            assert!(p.search_haystack().contains("reel"));
        }
        for p in &projects {
            let matches = category.matches(p) && p.search_haystack().contains("reel");
            assert_eq!(matches, results.iter().any(|r| r.id == p.id));
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        let projects = catalog();
        let results = filter_projects(&projects, CategoryFilter::All, "zzz-no-match");
        assert!(results.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let projects = catalog();
        let first = filter_projects(&projects, CategoryFilter::Kind(ProjectKind::Audio), "podcast");
        let second = filter_projects(&projects, CategoryFilter::Kind(ProjectKind::Audio), "podcast");
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_empty_catalog() {
        let results = filter_projects(&[], CategoryFilter::All, "anything");
        assert!(results.is_empty());
    }
}
