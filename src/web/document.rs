use crate::site::host::PageHost;
use crate::surface::{DisplaySurface, StyleTarget};
use crate::web::js_error;
use crate::{Result, SiteError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// The live document of the current window.
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| SiteError::Host("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| SiteError::Host("window has no document".to_string()))?;
        Ok(Self { window, document })
    }
}

impl PageHost for BrowserPage {
    fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_else(|e| {
            log::warn!("could not read location.pathname: {:?}", e);
            "/".to_string()
        })
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn route_container(&mut self, id: &str) -> Option<Box<dyn DisplaySurface>> {
        self.document.get_element_by_id(id).map(|element| {
            Box::new(HtmlContainer {
                document: self.document.clone(),
                element,
            }) as Box<dyn DisplaySurface>
        })
    }

    fn on_structure_ready(&mut self, callback: Box<dyn FnOnce()>) -> Result<()> {
        if self.document.ready_state() != "loading" {
            callback();
            return Ok(());
        }

        let listener = Closure::once_into_js(move || callback());
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", listener.unchecked_ref())
            .map_err(|e| js_error("could not listen for DOMContentLoaded", e))
    }
}

/// An element routes render into.
pub struct HtmlContainer {
    document: Document,
    element: Element,
}

impl DisplaySurface for HtmlContainer {
    fn set_content(&mut self, markup: &str) -> Result<()> {
        self.element.set_inner_html(markup);
        Ok(())
    }

    fn append_element(&mut self, tag: &str, text: &str) -> Result<Box<dyn StyleTarget>> {
        let child = self
            .document
            .create_element(tag)
            .map_err(|e| js_error("createElement failed", e))?;
        child.set_text_content(Some(text));
        self.element
            .append_child(&child)
            .map_err(|e| js_error("appendChild failed", e))?;

        let child = child
            .dyn_into::<HtmlElement>()
            .map_err(|_| SiteError::Host(format!("<{}> is not an HTML element", tag)))?;
        Ok(Box::new(HtmlStyle { element: child }))
    }
}

struct HtmlStyle {
    element: HtmlElement,
}

impl StyleTarget for HtmlStyle {
    fn set_style_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.element
            .style()
            .set_property(name, value)
            .map_err(|e| js_error("style.setProperty failed", e))
    }
}
