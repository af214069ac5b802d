//! Session-scoped UI state: category, search query, and selection.

use folio_core::{filter_projects, Catalog, CategoryFilter, ProjectRecord};

/// Ephemeral per-session UI state. Category, query, and selection are
/// independent toggles; nothing here persists beyond the session.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Active category tab.
    pub category: CategoryFilter,

    /// Search text, bound to the gallery search input.
    pub query: String,

    /// Id of the project shown in the detail overlay, if any. Selection
    /// holds the immutable id and resolves the record by catalog lookup.
    selected_id: Option<String>,
}

impl UiState {
    /// Creates the default state: all categories, empty query, nothing
    /// selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!("category filter set to {}", category.label());
        self.category = category;
    }

    pub fn set_query(&mut self, query: String) {
        tracing::debug!("search query set to {query:?}");
        self.query = query;
    }

    /// Opens the detail overlay for the given project id. A second select
    /// replaces the first; the overlay is a single optional slot.
    pub fn select(&mut self, id: &str) {
        tracing::debug!("project selected: {id}");
        self.selected_id = Some(id.to_string());
    }

    /// Dismisses the detail overlay.
    pub fn clear_selection(&mut self) {
        tracing::debug!("selection cleared");
        self.selected_id = None;
    }

    /// The record behind the detail overlay, if one is open.
    pub fn active_project<'a>(&self, catalog: &'a Catalog) -> Option<&'a ProjectRecord> {
        self.selected_id
            .as_deref()
            .and_then(|id| catalog.get(id))
    }

    /// Projects matching the current category and query, in catalog order.
    pub fn filtered<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProjectRecord> {
        filter_projects(&catalog.projects, self.category, &self.query)
    }
}
