use crate::constants::{NAV_DOT_SELECTOR, NAV_TARGET_ATTR};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Navigation dots scroll smoothly to the section named by their
/// `data-section` attribute.
pub fn wire_nav_dots(document: &web::Document) {
    for dot in dom::query_all(document, NAV_DOT_SELECTOR) {
        let Some(target_id) = dot.get_attribute(NAV_TARGET_ATTR) else {
            log::warn!("[nav] dot without {}", NAV_TARGET_ATTR);
            continue;
        };
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(target) = doc.get_element_by_id(&target_id) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }) as Box<dyn FnMut()>);
        _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
