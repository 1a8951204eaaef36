use crate::animation::scheduler::{FrameCallback, FrameScheduler};
use crate::web::js_error;
use crate::{Result, SiteError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `requestAnimationFrame` on the current window.
pub struct BrowserFrameScheduler {
    window: web_sys::Window,
}

impl BrowserFrameScheduler {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| SiteError::Host("no global window".to_string()))?;
        Ok(Self { window })
    }
}

impl FrameScheduler for BrowserFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<()> {
        let callback = Closure::once_into_js(move |timestamp_ms: f64| callback(timestamp_ms));
        self.window
            .request_animation_frame(callback.unchecked_ref())
            .map(|_| ())
            .map_err(|e| js_error("requestAnimationFrame failed", e))
    }
}
