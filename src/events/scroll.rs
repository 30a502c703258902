use crate::constants::{CLASS_ACTIVE, CLASS_VISIBLE, NAV_DOT_SELECTOR, SECTION_SELECTOR};
use crate::dom;
use crate::input::PageInput;
use portfolio_core::{scroll_progress, section_activity, SectionRect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Update scroll progress and section/nav-dot classes for the current
/// scroll position.
pub fn sync_scroll(window: &web::Window, document: &web::Document, input: &RefCell<PageInput>) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_h = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    input.borrow_mut().scroll = scroll_progress(scroll_y, scroll_h, viewport_h);

    let sections = dom::query_all(document, SECTION_SELECTOR);
    let rects: Vec<SectionRect> = sections
        .iter()
        .map(|s| {
            let r = s.get_bounding_client_rect();
            SectionRect {
                top: r.top(),
                bottom: r.bottom(),
            }
        })
        .collect();
    let activity = section_activity(&rects, viewport_h);
    for &i in &activity.revealed {
        dom::set_class(&sections[i], CLASS_VISIBLE, true);
    }
    if let Some(active) = activity.active {
        for (i, dot) in dom::query_all(document, NAV_DOT_SELECTOR).iter().enumerate() {
            dom::set_class(dot, CLASS_ACTIVE, i == active);
        }
    }
}

pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    input: Rc<RefCell<PageInput>>,
) {
    sync_scroll(window, document, &input);
    let win = window.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_scroll(&win, &doc, &input);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}
