use crate::render::effective_pixel_ratio;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Wire a click handler on the element with `element_id`. Returns false
/// when the element does not exist.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    effective_pixel_ratio(web::window().map(|w| w.device_pixel_ratio()))
}

/// Size the canvas to cover `container` and match its backing store to the
/// device pixel ratio. Returns the viewport in CSS pixels.
pub fn sync_canvas_backing_size(
    container: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Vec2 {
    let dpr = device_pixel_ratio();
    let w = container.client_width().max(1);
    let h = container.client_height().max(1);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", w));
    _ = style.set_property("height", &format!("{}px", h));
    canvas.set_width((w as f64 * dpr).floor() as u32);
    canvas.set_height((h as f64 * dpr).floor() as u32);
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    Vec2::new(w as f32, h as f32)
}
