use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted preference wins, then the OS color-scheme signal, then light.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Theme flag for the whole page. Every change is written back to local
/// storage and mirrored as a `dark` class on the document root; storage
/// failures are ignored and the page falls back to the default.
pub fn use_theme() -> Signal<Theme> {
    let theme = use_signal(initial_theme);
    use_effect(move || {
        apply(theme());
    });
    theme
}

fn initial_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let stored: Option<String> = LocalStorage::get(STORAGE_KEY).ok();
        resolve_initial(stored.as_deref(), os_prefers_dark())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::Light
    }
}

#[cfg(target_arch = "wasm32")]
fn os_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = LocalStorage::set(STORAGE_KEY, theme.as_str());
        if let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stored_preference_wins_over_os_signal() {
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_os_signal_then_light() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
        assert_eq!(resolve_initial(Some("solarized"), false), Theme::Light);
    }

    #[test]
    fn storage_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse("purple"), None);
    }

    #[test]
    fn toggle_flips_the_flag() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
