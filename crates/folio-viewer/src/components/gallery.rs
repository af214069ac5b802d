//! Project gallery: category tabs, search input, and the card grid.

use dioxus::prelude::*;

use folio_core::{CategoryFilter, ProjectRecord};

use crate::state::UiState;

/// Gallery section: filter bar plus the grid of project cards.
#[component]
pub fn ProjectGallery(state: Signal<UiState>) -> Element {
    let mut state_write = state;
    let catalog = crate::catalog();
    let category = state.read().category;
    let query = state.read().query.clone();

    // Recomputed from scratch on every input change; the catalog is small.
    let filtered: Vec<ProjectRecord> = state
        .read()
        .filtered(catalog)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section {
            id: "projects",
            class: "gallery",

            div {
                class: "gallery-header",

                h2 { class: "gallery-title", "Projects" }

                div {
                    class: "gallery-tabs",
                    for tab in CategoryFilter::all() {
                        button {
                            key: "{tab.label()}",
                            class: if tab == category { "gallery-tab active" } else { "gallery-tab" },
                            onclick: move |_| state_write.write().set_category(tab),
                            "{tab.label()}"
                        }
                    }
                }
            }

            input {
                class: "gallery-search",
                r#type: "text",
                placeholder: "Search title, tools, or tags...",
                value: "{query}",
                oninput: move |e| state_write.write().set_query(e.value()),
            }

            if filtered.is_empty() {
                div {
                    class: "gallery-empty",
                    "No results. Try a different filter or search."
                }
            } else {
                div {
                    class: "gallery-grid",
                    for project in filtered.iter() {
                        ProjectCard {
                            key: "{project.id}",
                            project: project.clone(),
                            on_open: move |id: String| state_write.write().select(&id),
                        }
                    }
                }
            }
        }
    }
}

/// A single project card. Dispatches the record's id through `on_open`
/// rather than capturing the record itself.
#[component]
fn ProjectCard(project: ProjectRecord, on_open: EventHandler<String>) -> Element {
    let id = project.id.clone();

    rsx! {
        article {
            class: "project-card",

            button {
                class: "project-card-hit",
                onclick: move |_| on_open.call(id.clone()),

                div {
                    class: "project-card-cover",
                    img { src: "{project.cover}", alt: "{project.title}" }
                }

                div {
                    class: "project-card-body",

                    div {
                        class: "project-card-top",
                        h3 { class: "project-card-title", "{project.title}" }
                        span { class: "kind-badge", "{project.kind.label()}" }
                    }

                    p { class: "project-card-desc", "{project.description}" }

                    div {
                        class: "project-card-tags",
                        for tag in project.tags.iter() {
                            span { key: "{tag}", class: "tag-badge", "{tag}" }
                        }
                    }

                    div {
                        class: "project-card-meta",
                        span { "{project.year}" }
                        span { class: "meta-sep", "\u{2022}" }
                        span { class: "project-card-tools", "{project.tools_display()}" }
                    }
                }
            }
        }
    }
}
