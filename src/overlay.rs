use crate::avatar::{self, HtmlImageLoader, ProbeHandle};
use crate::entry::EntryConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// DOM side of the entry screen: the overlay, the site behind it, and the
/// reveal targets collected once the overlay is gone.
pub struct EntryPage {
    document: web::Document,
    overlay: Option<web::HtmlElement>,
    site: Option<web::HtmlElement>,
    targets: Vec<web::Element>,
    avatar_probe: Option<ProbeHandle>,
    config: EntryConfig,
}

impl EntryPage {
    pub fn new(document: &web::Document, config: &EntryConfig) -> Self {
        let overlay = find_html(document, config.overlay_id);
        let site = find_html(document, config.site_id);
        if site.is_none() {
            log::warn!("[overlay] missing #{}", config.site_id);
        }
        Self {
            document: document.clone(),
            overlay,
            site,
            targets: Vec::new(),
            avatar_probe: None,
            config: config.clone(),
        }
    }

    pub fn overlay(&self) -> Option<&web::HtmlElement> {
        self.overlay.as_ref()
    }

    #[inline]
    pub fn overlay_present(&self) -> bool {
        self.overlay.as_ref().map(|o| o.is_connected()).unwrap_or(false)
    }

    pub fn remove_overlay(&self) {
        if let Some(el) = &self.overlay {
            el.remove();
        }
    }

    pub fn show_site(&self) {
        if let Some(site) = &self.site {
            site.set_hidden(false);
        }
    }

    /// Collect the reveal targets in document order and prime them with the
    /// pre-reveal class. Returns how many were found.
    pub fn mark_reveal_targets(&mut self) -> usize {
        self.targets.clear();
        if let Ok(list) = self.document.query_selector_all(self.config.reveal_selector) {
            for i in 0..list.length() {
                if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                    _ = el.class_list().add_1(self.config.will_reveal_class);
                    self.targets.push(el);
                }
            }
        }
        self.targets.len()
    }

    pub fn reveal(&self, index: usize) {
        if let Some(el) = self.targets.get(index) {
            _ = el.class_list().add_1(self.config.reveal_class);
        }
    }

    /// Skip the transition entirely; used when the animation cannot start.
    pub fn reveal_immediately(&mut self) {
        self.remove_overlay();
        self.show_site();
        let n = self.mark_reveal_targets();
        for i in 0..n {
            self.reveal(i);
        }
    }

    /// Start the avatar fallback probe if the current image failed or is
    /// still loading. Returns true when a probe was started.
    pub fn spawn_avatar_probe(&mut self) -> bool {
        let Some(img) = self
            .document
            .query_selector(self.config.avatar_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        else {
            return false;
        };
        if !avatar::needs_probe(img.complete(), img.natural_width()) {
            return false;
        }
        if let Some(previous) = self.avatar_probe.take() {
            previous.cancel();
        }
        let handle = ProbeHandle::new();

        // A late load of the original image wins over any fallback.
        let on_load = handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            if !on_load.is_cancelled() {
                log::debug!("[avatar] original image loaded; cancelling probe");
                on_load.cancel();
            }
        }) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();

        let probe_handle = handle.clone();
        let candidates = self.config.avatar_candidates;
        spawn_local(async move {
            let stamp = || js_sys::Date::now() as u64;
            if let Some(src) =
                avatar::probe_first(&HtmlImageLoader, candidates, stamp, &probe_handle).await
            {
                img.set_src(&src);
            }
        });
        self.avatar_probe = Some(handle);
        true
    }
}

/// Add the exit class that starts the CSS fade-out.
#[inline]
pub fn begin_exit(overlay: &web::HtmlElement, exit_class: &str) {
    _ = overlay.class_list().add_1(exit_class);
}

fn find_html(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
