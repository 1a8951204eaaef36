//! Collaborators the page bootstrap talks to.

use crate::surface::DisplaySurface;
use crate::Result;

/// The document a route is activated in.
pub trait PageHost {
    /// Path component of the current location.
    fn current_path(&self) -> String;

    fn set_title(&mut self, title: &str);

    /// The element with id `id`, if the page has one.
    fn route_container(&mut self, id: &str) -> Option<Box<dyn DisplaySurface>>;

    /// Run `callback` once the document structure has been parsed. Runs it right
    /// away when that has already happened.
    fn on_structure_ready(&mut self, callback: Box<dyn FnOnce()>) -> Result<()>;
}

/// Page-view analytics. Both calls are fire-and-forget.
pub trait Analytics {
    /// Set up the analytics client. Calling it again has no effect.
    fn initialize(&mut self);

    /// Record one view of the page currently shown.
    fn track_page_view(&mut self, title: &str, path: &str);
}

/// Replaces icon placeholders in the document with rendered icons.
pub trait IconReplacer {
    fn replace(&self);
}

/// Analytics that records nothing, used when a build has no analytics configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAnalytics;

impl Analytics for NoAnalytics {
    fn initialize(&mut self) {}

    fn track_page_view(&mut self, _title: &str, _path: &str) {}
}
