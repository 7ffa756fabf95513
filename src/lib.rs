//! Animated entry overlay: orbit rings, stars, particles and comets drawn on
//! a 2D canvas, dismissed by click, Enter or Space.
//!
//! The scene, renderer composition, entry timeline and avatar probe are
//! plain Rust and build on any target. Browser wiring is wasm32-only.

pub mod avatar;
pub mod constants;
pub mod core;
pub mod entry;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::canvas::CanvasRenderer;
    use crate::core::{Scene, SceneParams};
    use crate::entry::{EntryConfig, EntryController};
    use crate::events::{self, ExitTrigger, MouseState};
    use crate::frame::{self, Clock, FrameContext};
    use crate::overlay::{self, EntryPage};
    use crate::dom;
    use glam::Vec2;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("orbit-entry starting");

        let config = EntryConfig::default();
        if let Err(e) = init(&config) {
            log::error!("init error: {:?}", e);
            // Never leave the visitor behind a dead overlay
            if let Some(document) = dom::window_document() {
                EntryPage::new(&document, &config).reveal_immediately();
            }
        }
        Ok(())
    }

    fn init(config: &EntryConfig) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let page = EntryPage::new(&document, config);
        let overlay_el = page
            .overlay()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing #{}", config.overlay_id))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(config.canvas_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", config.canvas_id))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let renderer = CanvasRenderer::new(&canvas)?;

        let viewport = Rc::new(Cell::new(Vec2::ONE));
        events::wire_resize(
            overlay_el.clone(),
            canvas.clone(),
            renderer.context().clone(),
            viewport.clone(),
        );
        let scene = Scene::from_entropy(SceneParams::default(), viewport.get());
        log::info!(
            "[scene] {}x{} particles={} stars={} arcs={}",
            viewport.get().x,
            viewport.get().y,
            scene.particles.len(),
            scene.stars.len(),
            scene.arcs.len()
        );

        let clock = Clock::new();
        let entry = Rc::new(RefCell::new(EntryController::new(config)));
        let on_enter: ExitTrigger = {
            let entry = entry.clone();
            let overlay_el = overlay_el.clone();
            let exit_class = config.exit_class;
            Rc::new(move || {
                if entry.borrow_mut().trigger(clock.now_ms()) {
                    overlay::begin_exit(&overlay_el, exit_class);
                }
            })
        };

        let on_click = on_enter.clone();
        dom::add_click_listener(&document, config.overlay_id, move || on_click());
        let on_button = on_enter.clone();
        if !dom::add_click_listener(&document, config.button_id, move || on_button()) {
            log::debug!("[entry] no #{}; overlay click and keys only", config.button_id);
        }
        events::wire_global_keydown(on_enter);

        let mouse = Rc::new(RefCell::new(MouseState::default()));
        events::wire_mousemove(mouse.clone());

        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            scene,
            renderer,
            page,
            entry,
            mouse,
            viewport,
            clock,
        }));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
