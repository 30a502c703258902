use crate::constants::{THEME_ATTR, THEME_TOGGLE_ID};
use crate::dom;
use portfolio_core::{PreferenceStore, Theme, ThemeController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `localStorage`-backed preference store. Storage can be unavailable
/// (private browsing, sandboxed iframes); reads then miss and writes are
/// dropped with a warning.
pub struct LocalStorageStore {
    storage: Option<web::Storage>,
}

impl LocalStorageStore {
    pub fn new(window: &web::Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(key, value) {
                log::warn!("[theme] could not persist {}={}: {:?}", key, value, e);
            }
        }
    }
}

pub type SharedTheme = Rc<RefCell<ThemeController<LocalStorageStore>>>;

/// Reflect the theme on the root element: light sets the attribute, dark
/// removes it.
pub fn apply(document: &web::Document, theme: Theme) {
    let Some(root) = document.document_element() else {
        return;
    };
    _ = match theme {
        Theme::Light => root.set_attribute(THEME_ATTR, Theme::Light.as_str()),
        Theme::Dark => root.remove_attribute(THEME_ATTR),
    };
}

pub fn wire_toggle(document: &web::Document, theme: SharedTheme) {
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = theme.borrow_mut().toggle();
        apply(&doc, next);
        log::info!("[theme] {}", next.as_str());
    });
}
