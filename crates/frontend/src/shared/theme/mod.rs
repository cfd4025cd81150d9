//! Theme management: light/dark selection persisted in localStorage and
//! applied as a class on `<body>` (the CSS ships with the static assets).

use leptos::prelude::*;
use web_sys::window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used for both the body class and the localStorage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn apply_theme_class(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    for t in Theme::all() {
        let _ = classes.remove_1(&format!("theme-{}", t.as_str()));
    }
    let _ = classes.add_1(&format!("theme-{}", theme.as_str()));
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

/// Provides [`ThemeContext`] and keeps the body class and localStorage in
/// sync with the selected theme.
#[component]
pub fn ThemeProviderCtx(children: Children) -> impl IntoView {
    let theme = RwSignal::new(load_theme_from_storage());
    provide_context(ThemeContext { theme });

    Effect::new(move |_| {
        let current = theme.get();
        apply_theme_class(current);
        save_theme_to_storage(current);
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found in component tree")
}

/// Small select for the top header.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <select
            class="theme-select"
            title="Theme"
            on:change=move |ev| {
                ctx.theme.set(Theme::from_str(&event_target_value(&ev)));
            }
            prop:value=move || ctx.theme.get().as_str().to_string()
        >
            {Theme::all()
                .into_iter()
                .map(|t| {
                    view! {
                        <option value=t.as_str() selected=move || ctx.theme.get() == t>
                            {t.display_name()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
