//! Light/dark theme state applied at the presentation root.

use std::sync::OnceLock;

use dioxus::prelude::*;

/// Theme forced from the command line, taking precedence over the
/// environment preference.
static THEME_OVERRIDE: OnceLock<Theme> = OnceLock::new();

/// Forces the initial theme. Call once from `main`, before launch.
pub fn set_override(theme: Theme) {
    THEME_OVERRIDE.set(theme).ok();
}

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parses a theme name as given on the command line or in the
    /// environment.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Reads the preferred color scheme from the environment, falling
    /// back to light when no preference is set.
    pub fn from_environment() -> Self {
        std::env::var("FOLIO_THEME")
            .ok()
            .as_deref()
            .and_then(Self::from_name)
            .unwrap_or(Theme::Light)
    }

    /// Initial theme: CLI override first, then environment preference.
    fn initial() -> Self {
        THEME_OVERRIDE
            .get()
            .copied()
            .unwrap_or_else(Self::from_environment)
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::initial);

/// Root component that applies the current theme to the visual tree.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Header button that flips between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = CURRENT_THEME.read().toggled();
                *CURRENT_THEME.write() = next;
            },
            if theme == Theme::Dark { "\u{2600}" } else { "\u{263E}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_ne!(Theme::Light.toggled(), Theme::Light);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name(" Light "), Some(Theme::Light));
        assert_eq!(Theme::from_name("solarized"), None);
    }
}
