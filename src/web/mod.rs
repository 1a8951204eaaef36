//! Browser implementations of the page collaborators and the wasm entry point.

pub mod analytics;
pub mod document;
pub mod icons;
pub mod scheduler;

pub use analytics::GtagAnalytics;
pub use document::{BrowserPage, HtmlContainer};
pub use icons::FeatherIcons;
pub use scheduler::BrowserFrameScheduler;

use crate::core::config::SiteConfig;
use crate::site::app::App;
use crate::site::host::{Analytics, NoAnalytics};
use crate::SiteError;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub(crate) fn js_error(context: &str, value: JsValue) -> SiteError {
    SiteError::Host(format!(
        "{}: {}",
        context,
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    ))
}

fn to_js(error: SiteError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Main WASM entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = SiteConfig::default();
    log::debug!("booting in {:?}", config.environment);

    let analytics: Box<dyn Analytics> = match &config.analytics {
        Some(analytics) => Box::new(GtagAnalytics::new(analytics.clone())),
        None => Box::new(NoAnalytics),
    };

    let mut app = App::new(
        config,
        Box::new(BrowserPage::new().map_err(to_js)?),
        analytics,
        Rc::new(FeatherIcons),
        Rc::new(BrowserFrameScheduler::new().map_err(to_js)?),
    )
    .map_err(to_js)?;

    app.start().map_err(to_js)?;
    Ok(())
}
