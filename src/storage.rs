//! Browser local-storage persistence for the wishlist and theme
//!
//! Storage can be missing or blocked (private mode, quota); every call
//! degrades to in-memory defaults and logs instead of surfacing an error.

use std::collections::HashSet;
use web_sys::{console, Storage};

const WISHLIST_KEY: &str = "dealdeck.wishlist";
const THEME_KEY: &str = "dealdeck.theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_wishlist() -> HashSet<String> {
    let Some(storage) = local_storage() else {
        return HashSet::new();
    };
    let Ok(Some(raw)) = storage.get_item(WISHLIST_KEY) else {
        return HashSet::new();
    };
    match serde_json::from_str(&raw) {
        Ok(ids) => ids,
        Err(e) => {
            console::warn_1(&format!("Discarding malformed wishlist entry: {}", e).into());
            HashSet::new()
        }
    }
}

pub fn save_wishlist(ids: &HashSet<String>) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(ids) {
        Ok(raw) => {
            if let Err(e) = storage.set_item(WISHLIST_KEY, &raw) {
                console::warn_1(&format!("Failed to persist wishlist: {:?}", e).into());
            }
        }
        Err(e) => console::warn_1(&format!("Failed to encode wishlist: {}", e).into()),
    }
}

pub fn load_theme() -> Theme {
    local_storage()
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
        .and_then(|raw| Theme::from_str(&raw))
        .unwrap_or_default()
}

pub fn save_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(THEME_KEY, theme.as_str()) {
            console::warn_1(&format!("Failed to persist theme: {:?}", e).into());
        }
    }
}
