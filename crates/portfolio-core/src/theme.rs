//! Theme flag, its two fixed palettes, and persistence behind a small trait.

use glam::Vec4;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored value. Anything other than `light` is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK_PALETTE,
            Theme::Light => LIGHT_PALETTE,
        }
    }
}

/// Colour constants used while drawing. Components are linear 0..1 RGBA.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Vec4,
    pub particle: Vec4,
    pub glow: Vec4,
    pub edge: Vec4,
    pub overlay_text: Vec4,
    pub overlay_track: Vec4,
    /// Glows and point sprites add light instead of covering.
    pub additive: bool,
}

pub const DARK_PALETTE: Palette = Palette {
    background: Vec4::new(0.02, 0.027, 0.05, 1.0),
    particle: Vec4::new(0.0, 0.95, 1.0, 1.0),
    glow: Vec4::new(0.0, 0.75, 1.0, 1.0),
    edge: Vec4::new(0.35, 0.85, 1.0, 1.0),
    overlay_text: Vec4::new(0.8, 0.9, 1.0, 0.85),
    overlay_track: Vec4::new(0.3, 0.43, 0.59, 0.35),
    additive: true,
};

pub const LIGHT_PALETTE: Palette = Palette {
    background: Vec4::new(0.96, 0.965, 0.98, 1.0),
    particle: Vec4::new(0.15, 0.35, 0.65, 1.0),
    glow: Vec4::new(0.25, 0.45, 0.75, 1.0),
    edge: Vec4::new(0.2, 0.35, 0.6, 1.0),
    overlay_text: Vec4::new(0.12, 0.18, 0.3, 0.85),
    overlay_track: Vec4::new(0.6, 0.66, 0.76, 0.45),
    additive: false,
};

/// Single key/value store holding the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Theme flag tied to its persisted value.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted preference, defaulting to dark.
    pub fn load(store: S) -> Self {
        let theme = Theme::from_stored(store.load(THEME_STORAGE_KEY).as_deref());
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Flip the theme and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(THEME_STORAGE_KEY, self.theme.as_str());
        log::debug!("[theme] -> {}", self.theme.as_str());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-memory store for hosts without persistent storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: fnv::FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_stored_value_is_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn palettes_differ_in_blending() {
        assert!(Theme::Dark.palette().additive);
        assert!(!Theme::Light.palette().additive);
    }

    #[test]
    fn controller_reads_persisted_value() {
        let mut store = MemoryStore::default();
        store.save(THEME_STORAGE_KEY, "light");
        let ctl = ThemeController::load(store);
        assert_eq!(ctl.theme(), Theme::Light);
    }
}
