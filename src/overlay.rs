use crate::constants::{CLASS_HIDDEN, CLASS_VISIBLE, HERO_ID, LOADER_DELAY_MS, LOADER_ID};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide_loader(document: &web::Document) {
    dom::set_class_by_id(document, LOADER_ID, CLASS_HIDDEN, true);
}

#[inline]
pub fn is_loader_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(LOADER_ID)
        .map(|el| el.class_list().contains(CLASS_HIDDEN))
        .unwrap_or(true)
}

#[inline]
pub fn reveal_hero(document: &web::Document) {
    dom::set_class_by_id(document, HERO_ID, CLASS_VISIBLE, true);
}

/// Drop the loading screen after a short delay and show the hero section.
pub fn schedule_reveal(window: &web::Window) {
    let cb = Closure::once(move || {
        if let Some(document) = dom::window_document() {
            if !is_loader_hidden(&document) {
                hide_loader(&document);
            }
            reveal_hero(&document);
        }
    });
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        LOADER_DELAY_MS,
    ) {
        log::error!("[loader] setTimeout failed: {:?}", e);
    }
    cb.forget();
}

/// Run `on_load` once the page has loaded. The module may start after the
/// `load` event already fired, in which case it runs right away.
pub fn on_page_load(
    window: &web::Window,
    document: &web::Document,
    on_load: impl FnOnce() + 'static,
) {
    if document.ready_state() == "complete" {
        on_load();
        return;
    }
    let closure = Closure::once(on_load);
    _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}
