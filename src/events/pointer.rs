use crate::dom;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last known cursor position in client (CSS px) coordinates.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub pos: Option<Vec2>,
}

pub fn wire_mousemove(mouse: Rc<RefCell<MouseState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        mouse.borrow_mut().pos = Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

/// Keep the canvas backing store in step with the overlay size. The latest
/// viewport is published through `viewport` for the frame loop to pick up.
pub fn wire_resize(
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Rc<Cell<Vec2>>,
) {
    viewport.set(dom::sync_canvas_backing_size(&container, &canvas, &ctx));
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if container.is_connected() {
            viewport.set(dom::sync_canvas_backing_size(&container, &canvas, &ctx));
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
