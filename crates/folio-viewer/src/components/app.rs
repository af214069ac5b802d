//! Root application component.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::state::UiState;
use crate::theme::{ThemeToggle, ThemedRoot};

use super::{AboutPanel, ContactPanel, DetailOverlay, Hero, ProjectGallery};

/// Root application component.
#[component]
pub fn App() -> Element {
    let mut state = use_signal(UiState::new);
    let catalog = crate::catalog();

    // Clone the active record out so the read guard drops before render.
    let active = state.read().active_project(catalog).cloned();

    rsx! {
        ThemedRoot {
            div {
                class: "portfolio",

                Header {}

                Hero { socials: catalog.socials.clone() }

                ProjectGallery { state }

                // About & contact
                section {
                    class: "about-contact",
                    AboutPanel {}
                    ContactPanel { socials: catalog.socials.clone() }
                }

                Footer {}

                // Detail overlay, shown iff a project is active
                if let Some(project) = active {
                    DetailOverlay {
                        project,
                        on_close: move |_| state.write().clear_selection(),
                    }
                }
            }
        }
    }
}

/// Sticky header with brand and theme toggle.
#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "header",

            div {
                class: "header-brand",
                span { class: "header-glyph", "\u{1F3AE}" }
                span { class: "header-title", "Noah \u{2013} Portfolio" }
            }

            div {
                class: "header-actions",
                ThemeToggle {}
            }
        }
    }
}

/// Footer with the copyright line.
#[component]
fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            class: "footer",
            p { "\u{00A9} {year} Noah. Built with \u{2764} and coffee." }
            p {
                class: "footer-link",
                span { class: "footer-link-icon", "\u{1F517}" }
                span { "noahvt.dev" }
            }
        }
    }
}
