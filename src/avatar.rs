//! Avatar fallback: try a fixed list of image paths, first success wins.
use std::cell::Cell;
use std::rc::Rc;

/// Something that can attempt to load an image URL.
#[allow(async_fn_in_trait)]
pub trait ImageLoader {
    /// Resolves to true once the image decoded, false on error.
    async fn load(&self, src: &str) -> bool;
}

/// Cancels an in-flight probe. Cloning shares the flag.
#[derive(Clone, Debug, Default)]
pub struct ProbeHandle {
    cancelled: Rc<Cell<bool>>,
}

impl ProbeHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Probing is only worth it when the current image did not load.
#[inline]
pub fn needs_probe(complete: bool, natural_width: u32) -> bool {
    !complete || natural_width == 0
}

#[inline]
pub fn cache_busted(candidate: &str, stamp: u64) -> String {
    format!("{}?v={}", candidate, stamp)
}

/// Try `candidates` one at a time and return the first that loads. The
/// returned path is the bare candidate, without the cache-busting query.
/// `stamp` is read once per attempt. Returns `None` when every candidate
/// fails or the handle was cancelled.
pub async fn probe_first<L, S>(
    loader: &L,
    candidates: &[&str],
    mut stamp: S,
    handle: &ProbeHandle,
) -> Option<String>
where
    L: ImageLoader + ?Sized,
    S: FnMut() -> u64,
{
    for candidate in candidates {
        if handle.is_cancelled() {
            log::debug!("[avatar] probe cancelled before {}", candidate);
            return None;
        }
        let ok = loader.load(&cache_busted(candidate, stamp())).await;
        if handle.is_cancelled() {
            return None;
        }
        if ok {
            log::info!("[avatar] using {}", candidate);
            return Some((*candidate).to_string());
        }
        log::debug!("[avatar] {} failed", candidate);
    }
    log::debug!("[avatar] no candidate loaded; keeping current src");
    None
}

#[cfg(target_arch = "wasm32")]
pub use web_loader::HtmlImageLoader;

#[cfg(target_arch = "wasm32")]
mod web_loader {
    use super::ImageLoader;
    use wasm_bindgen_futures::JsFuture;
    use web_sys as web;

    /// Loads through a detached `<img>` element.
    pub struct HtmlImageLoader;

    impl ImageLoader for HtmlImageLoader {
        async fn load(&self, src: &str) -> bool {
            let img = match web::HtmlImageElement::new() {
                Ok(i) => i,
                Err(_) => return false,
            };
            let promise = js_sys::Promise::new(&mut |resolve, reject| {
                img.set_onload(Some(&resolve));
                img.set_onerror(Some(&reject));
            });
            img.set_src(src);
            let ok = JsFuture::from(promise).await.is_ok();
            img.set_onload(None);
            img.set_onerror(None);
            ok
        }
    }
}
