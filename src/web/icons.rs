use crate::site::host::IconReplacer;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = feather, js_name = replace, catch)]
    fn feather_replace() -> Result<(), JsValue>;
}

/// Swaps `<i data-feather="...">` placeholders for Feather SVG icons.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatherIcons;

impl IconReplacer for FeatherIcons {
    fn replace(&self) {
        if let Err(e) = feather_replace() {
            log::warn!("feather.replace() failed: {:?}", e);
        }
    }
}
