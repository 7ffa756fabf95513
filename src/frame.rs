use crate::canvas::CanvasRenderer;
use crate::core::Scene;
use crate::entry::{EntryController, EntryEvent};
use crate::events::MouseState;
use crate::overlay::EntryPage;
use crate::render;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Millisecond clock shared by the frame loop and the input handlers.
#[derive(Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub scene: Scene,
    pub renderer: CanvasRenderer,
    pub page: EntryPage,
    pub entry: Rc<RefCell<EntryController>>,
    pub mouse: Rc<RefCell<MouseState>>,
    pub viewport: Rc<Cell<Vec2>>,
    pub clock: Clock,
}

impl FrameContext {
    /// One animation frame. Returns false once there is nothing left to
    /// draw or schedule.
    pub fn frame(&mut self) -> bool {
        let now = self.clock.now_ms();
        let due = self.entry.borrow_mut().poll(now);
        for ev in due {
            match ev {
                EntryEvent::Dismiss => self.dismiss(now),
                EntryEvent::Reveal(i) => self.page.reveal(i),
            }
        }

        if self.page.overlay_present() {
            let viewport = self.viewport.get();
            if viewport != self.scene.viewport() {
                self.scene.resize(viewport);
            }
            if let Some(pos) = self.mouse.borrow().pos {
                self.scene.set_mouse(pos);
            }
            render::frame(&mut self.scene, &mut self.renderer);
            return true;
        }

        !self.entry.borrow().is_done()
    }

    fn dismiss(&mut self, now: f64) {
        self.page.remove_overlay();
        self.page.show_site();
        let n = self.page.mark_reveal_targets();
        self.entry.borrow_mut().schedule_reveals(n, now);
        log::info!("[entry] overlay removed, revealing {} elements", n);
        if self.page.spawn_avatar_probe() {
            log::info!("[avatar] current image missing, probing fallbacks");
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow_mut().frame() {
            log::info!("[frame] loop finished");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
