use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::input::backing_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[dom] #{} not found; click handler skipped", element_id),
    }
}

/// Add or remove a class on the element with `element_id`, if present.
#[inline]
pub fn set_class_by_id(document: &web::Document, element_id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        set_class(&el, class, on);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let rect = canvas.get_bounding_client_rect();
        let (w_px, h_px) = backing_size(
            rect.width(),
            rect.height(),
            w.device_pixel_ratio(),
            MAX_DEVICE_PIXEL_RATIO,
        );
        if canvas.width() != w_px || canvas.height() != h_px {
            canvas.set_width(w_px);
            canvas.set_height(h_px);
        }
    }
}

/// Window inner size in CSS pixels.
pub fn window_size(window: &web::Window) -> [f32; 2] {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    [w as f32, h as f32]
}
