//! Light/dark theme shared through context.
//!
//! The chosen theme is persisted in `localStorage` and applied as the `data-theme`
//! attribute of the document root, which the stylesheet keys its colors on.

use std::fmt;

use dioxus::prelude::*;

const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Name of the matching built-in Monaco editor theme
    pub fn editor_theme(&self) -> &'static str {
        match self {
            Self::Light => "vs-light",
            Self::Dark => "vs-dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provide the theme signal to the app and keep the document in sync with it.
///
/// The stored theme is restored once on mount, falling back to the system preference.
pub fn use_theme_provider() -> Signal<Theme> {
    let mut theme = use_context_provider(|| Signal::new(Theme::default()));
    let mut restored = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let stored = document::eval(&format!(
                r#"return localStorage.getItem("{THEME_STORAGE_KEY}")
                    ?? (window.matchMedia("(prefers-color-scheme: dark)").matches ? "dark" : "light");"#
            ))
            .join::<String>()
            .await;

            if let Some(stored) = stored.ok().as_deref().and_then(Theme::parse) {
                theme.set(stored);
            }
            restored.set(true);
        });
    });

    use_effect(move || {
        let current = theme();
        if !restored() {
            return;
        }

        document::eval(&format!(
            r#"document.documentElement.setAttribute("data-theme", "{current}");
            localStorage.setItem("{THEME_STORAGE_KEY}", "{current}");"#
        ));
    });

    theme
}

/// The theme signal provided by [`use_theme_provider`]
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}
