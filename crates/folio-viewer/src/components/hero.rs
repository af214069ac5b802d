//! Hero section: headline, blurb, social links, showreel placeholder.

use dioxus::prelude::*;

use folio_core::SocialLink;

/// Hero block shown at the top of the page.
#[component]
pub fn Hero(socials: Vec<SocialLink>) -> Element {
    rsx! {
        section {
            class: "hero",

            div {
                class: "hero-copy",

                h1 {
                    class: "hero-headline",
                    "Smart Media student crafting "
                    span { class: "hero-accent", "audio, video & interactive" }
                    " stories."
                }

                p {
                    class: "hero-blurb",
                    "I make podcasts, short-form ads, motion idents, and \
                     interactive articles. Below is a curated selection of \
                     my recent work."
                }

                div {
                    class: "hero-actions",

                    for social in socials.iter() {
                        a {
                            key: "{social.label}",
                            class: "hero-social",
                            href: "{social.href}",
                            target: "_blank",
                            span { class: "hero-social-icon", "{social.icon.glyph()}" }
                            "{social.label}"
                        }
                    }

                    a {
                        class: "hero-cta",
                        href: "#projects",
                        "See projects"
                    }
                }
            }

            // Showreel placeholder box
            div {
                class: "hero-media",
                div {
                    class: "hero-media-placeholder",
                    p { class: "hero-media-title", "Drop a showreel image or video here" }
                    p { class: "hero-media-hint", "Replace this box with your hero media or a headshot." }
                }
            }
        }
    }
}
