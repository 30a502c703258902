use crate::dom;
use crate::input::PageInput;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole window; the visual is a full-page
/// backdrop so window coordinates are canvas coordinates.
pub fn wire_pointer(window: &web::Window, input: Rc<RefCell<PageInput>>) {
    let move_input = input.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut inp = move_input.borrow_mut();
        inp.mouse.x = ev.client_x() as f32;
        inp.mouse.y = ev.client_y() as f32;
        inp.mouse.present = true;
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();

    let resize_input = input;
    let resize_window = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        resize_input.borrow_mut().viewport = dom::window_size(&resize_window);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
