use super::ExitTrigger;
use crate::entry::is_enter_key;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, on_enter: &ExitTrigger) {
    if ev.repeat() {
        return;
    }
    if is_enter_key(&ev.key()) {
        on_enter();
    }
}

// Enter or Space anywhere on the page dismisses the overlay
pub fn wire_global_keydown(on_enter: ExitTrigger) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &on_enter);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
