//! Detail overlay for the active project.

use dioxus::prelude::*;

use folio_core::ProjectRecord;

/// Modal overlay showing the full record for the active project.
/// Clicking the backdrop or the close button dismisses it.
#[component]
pub fn DetailOverlay(project: ProjectRecord, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "overlay-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "overlay-panel",
                // Clicks inside the panel must not reach the backdrop.
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "overlay-header",
                    h2 { class: "overlay-title", "{project.title}" }
                    span { class: "kind-badge", "{project.kind.label()}" }
                    button {
                        class: "overlay-close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }

                img {
                    class: "overlay-cover",
                    src: "{project.cover}",
                    alt: "{project.title}",
                }

                p { class: "overlay-desc", "{project.description}" }

                div {
                    class: "overlay-tags",
                    for tag in project.tags.iter() {
                        span { key: "{tag}", class: "tag-badge", "{tag}" }
                    }
                }

                div {
                    class: "overlay-meta",
                    span { "{project.year}" }
                    span { class: "meta-sep", "\u{2022}" }
                    span { "{project.tools_display()}" }
                }

                if !project.links.is_empty() {
                    div {
                        class: "overlay-links",
                        for link in project.links.iter() {
                            a {
                                key: "{link.label}",
                                class: "overlay-link",
                                href: "{link.href}",
                                target: "_blank",
                                span { class: "overlay-link-icon", "{link.icon.glyph()}" }
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
