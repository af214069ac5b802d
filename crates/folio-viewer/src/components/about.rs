//! About and contact panels. Static content, edited at build time.

use dioxus::prelude::*;

use folio_core::SocialLink;

/// Skill badges shown under the about text.
const SKILLS: &[&str] = &[
    "Podcast Production",
    "Video Editing",
    "Motion Basics",
    "Content Strategy",
    "Sound Design",
];

/// About panel with the bio and skill badges.
#[component]
pub fn AboutPanel() -> Element {
    rsx! {
        div {
            class: "panel about-panel",

            h2 { class: "panel-title", "About" }

            div {
                class: "about-body",

                p {
                    "Hey! I'm Noah, a Smart Media student at the University \
                     of Amsterdam. I'm into podcasts, game-adjacent \
                     storytelling, and quick, clean edits that punch above \
                     their weight."
                }
                p {
                    "I also nerd out on workflows: versioning, templates, and \
                     loudness-safe delivery. If you dig tidy projects and \
                     reliable turnarounds, we'll get along."
                }

                div {
                    class: "about-skills",
                    for skill in SKILLS.iter() {
                        span { key: "{skill}", class: "tag-badge", "{skill}" }
                    }
                }
            }
        }
    }
}

/// Contact panel with the email field, social links, and CV download.
#[component]
pub fn ContactPanel(socials: Vec<SocialLink>) -> Element {
    rsx! {
        div {
            class: "panel contact-panel",

            h2 { class: "panel-title", "Contact" }

            div {
                class: "contact-body",

                div {
                    class: "contact-row",
                    input {
                        class: "contact-email",
                        r#type: "text",
                        placeholder: "Your email",
                    }
                    button { class: "contact-send", "Say hi" }
                }

                div {
                    class: "contact-socials",
                    for social in socials.iter() {
                        a {
                            key: "{social.label}",
                            class: "contact-social",
                            href: "{social.href}",
                            target: "_blank",
                            span { class: "contact-social-icon", "{social.icon.glyph()}" }
                            span { "{social.label}" }
                        }
                    }
                }

                a {
                    class: "contact-cv",
                    href: "/Noah_CV.pdf",
                    span { class: "contact-social-icon", "\u{1F4C4}" }
                    " Download CV"
                }
            }
        }
    }
}
