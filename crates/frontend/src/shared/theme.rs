//! Theme management for the site.
//!
//! Two modes, dark by default. The preference is the only state that
//! survives a reload: it is read from localStorage once at startup and
//! written back on every toggle.

use leptos::prelude::*;
use web_sys::window;

const THEME_STORAGE_KEY: &str = "theme";

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Name used for the storage value and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value; anything but "light" means dark.
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Load the preferred theme from localStorage.
fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// Persist the theme to localStorage.
fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Apply the theme to the document: `dark` class on the root element plus a
/// `data-theme` attribute on the body for styling hooks.
fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let class_list = root.class_list();
        let _ = match theme {
            Theme::Dark => class_list.add_1("dark"),
            Theme::Light => class_list.remove_1("dark"),
        };
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn set(&self, theme: Theme) {
        self.current.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set(self.current.get().toggled());
    }
}

/// Provides the theme context and applies the saved preference on mount.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial = load_theme_from_storage();
    let current = RwSignal::new(initial);

    apply_theme(initial);
    // The saved default is written back so a first visit records "dark".
    save_theme_to_storage(initial);

    provide_context(ThemeContext { current });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_dark() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("garbage"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
