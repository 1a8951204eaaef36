use crate::core::config::AnalyticsConfig;
use crate::site::host::Analytics;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = gtag, catch)]
    fn gtag(command: &str, target: &JsValue, params: &JsValue) -> Result<(), JsValue>;
}

/// Google Analytics through the global `gtag` function installed by the page shell.
///
/// Automatic page views are turned off so that a view is only sent once the
/// document title reflects the active route.
pub struct GtagAnalytics {
    config: AnalyticsConfig,
    initialized: bool,
}

impl GtagAnalytics {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            initialized: false,
        }
    }
}

fn params(entries: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let object = js_sys::Object::new();
    for (key, value) in entries {
        js_sys::Reflect::set(&object, &JsValue::from_str(key), value)?;
    }
    Ok(object.into())
}

impl Analytics for GtagAnalytics {
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let result = gtag("js", &js_sys::Date::new_0().into(), &JsValue::UNDEFINED).and_then(|_| {
            let options = params(&[("send_page_view", JsValue::FALSE)])?;
            gtag(
                "config",
                &JsValue::from_str(&self.config.measurement_id),
                &options,
            )
        });
        match result {
            Ok(()) => log::debug!("analytics initialised for {}", self.config.measurement_id),
            Err(e) => log::warn!("analytics initialisation failed: {:?}", e),
        }
    }

    fn track_page_view(&mut self, title: &str, path: &str) {
        let result = params(&[
            ("page_title", JsValue::from_str(title)),
            ("page_path", JsValue::from_str(path)),
            ("send_to", JsValue::from_str(&self.config.measurement_id)),
        ])
        .and_then(|event| gtag("event", &JsValue::from_str("page_view"), &event));
        if let Err(e) = result {
            log::warn!("page view not sent: {:?}", e);
        }
    }
}
