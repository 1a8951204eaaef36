//! In-memory collaborators for rendering pages without a browser
//!
//! Every handle here is a cheap `Rc` clone of shared state, so a test (or a
//! pre-renderer) can give one copy to [`App`] and inspect another afterwards.
//! All of them write into one [`EventLog`] so the order of title updates,
//! analytics calls and icon replacement can be checked.

use crate::animation::scheduler::ManualFrameScheduler;
use crate::core::config::Environment;
use crate::core::constants::ROUTE_CONTAINER_ID;
use crate::site::app::App;
use crate::site::host::{Analytics, IconReplacer, PageHost};
use crate::surface::{DisplaySurface, StyleTarget};
use crate::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    TitleSet(String),
    AnalyticsInitialized,
    PageViewTracked { title: String, path: String },
    IconsReplaced,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<PageEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: PageEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    pub fn position(&self, event: &PageEvent) -> Option<usize> {
        self.events.borrow().iter().position(|e| e == event)
    }

    pub fn count(&self, predicate: impl Fn(&PageEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| predicate(e)).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    pub tag: String,
    pub text: String,
    pub style: BTreeMap<String, String>,
}

impl MemoryElement {
    fn to_markup(&self) -> String {
        if self.style.is_empty() {
            format!("<{tag}>{}</{tag}>", self.text, tag = self.tag)
        } else {
            let style: Vec<String> = self
                .style
                .iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect();
            format!(
                "<{tag} style=\"{}\">{}</{tag}>",
                style.join("; "),
                self.text,
                tag = self.tag
            )
        }
    }
}

#[derive(Debug, Default)]
struct SurfaceState {
    content: String,
    elements: Vec<MemoryElement>,
    writes: usize,
    // Bumped whenever the contents are replaced.
    generation: u64,
}

/// A display surface backed by a string and a list of appended elements.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    state: Rc<RefCell<SurfaceState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents as markup.
    pub fn markup(&self) -> String {
        let state = self.state.borrow();
        let mut markup = state.content.clone();
        for element in &state.elements {
            markup.push_str(&element.to_markup());
        }
        markup
    }

    pub fn elements(&self) -> Vec<MemoryElement> {
        self.state.borrow().elements.clone()
    }

    /// Number of times the contents were replaced or appended to.
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl DisplaySurface for MemorySurface {
    fn set_content(&mut self, markup: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.content = markup.to_string();
        state.elements.clear();
        state.writes += 1;
        state.generation += 1;
        Ok(())
    }

    fn append_element(&mut self, tag: &str, text: &str) -> Result<Box<dyn StyleTarget>> {
        let mut state = self.state.borrow_mut();
        state.elements.push(MemoryElement {
            tag: tag.to_string(),
            text: text.to_string(),
            style: BTreeMap::new(),
        });
        state.writes += 1;
        Ok(Box::new(MemoryElementHandle {
            state: self.state.clone(),
            generation: state.generation,
            index: state.elements.len() - 1,
        }))
    }
}

/// Points at one appended element. Replacing the surface contents detaches it.
struct MemoryElementHandle {
    state: Rc<RefCell<SurfaceState>>,
    generation: u64,
    index: usize,
}

impl StyleTarget for MemoryElementHandle {
    fn set_style_property(&mut self, name: &str, value: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.generation != self.generation {
            return Err(crate::SiteError::Host(format!(
                "element {} was detached when the surface was replaced",
                self.index
            )));
        }
        match state.elements.get_mut(self.index) {
            Some(element) => {
                element.style.insert(name.to_string(), value.to_string());
                Ok(())
            }
            None => Err(crate::SiteError::Host(format!(
                "element {} was removed from the surface",
                self.index
            ))),
        }
    }
}

struct PageState {
    path: String,
    title: Option<String>,
    container: Option<(String, MemorySurface)>,
    ready: Vec<Box<dyn FnOnce()>>,
    structure_ready: bool,
}

/// A document with a location, a title and optionally a route container.
#[derive(Clone)]
pub struct MemoryPage {
    state: Rc<RefCell<PageState>>,
    log: EventLog,
}

impl MemoryPage {
    pub fn new(path: impl Into<String>, log: EventLog) -> Self {
        Self::with_container_id(path, ROUTE_CONTAINER_ID, log)
    }

    /// A page whose container element carries `id` instead of the usual one.
    pub fn with_container_id(
        path: impl Into<String>,
        id: impl Into<String>,
        log: EventLog,
    ) -> Self {
        Self::with_container(path, Some((id.into(), MemorySurface::new())), log)
    }

    /// A page without the route container element.
    pub fn without_container(path: impl Into<String>, log: EventLog) -> Self {
        Self::with_container(path, None, log)
    }

    fn with_container(
        path: impl Into<String>,
        container: Option<(String, MemorySurface)>,
        log: EventLog,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(PageState {
                path: path.into(),
                title: None,
                container,
                ready: Vec::new(),
                structure_ready: false,
            })),
            log,
        }
    }

    pub fn title(&self) -> Option<String> {
        self.state.borrow().title.clone()
    }

    pub fn container(&self) -> Option<MemorySurface> {
        self.state
            .borrow()
            .container
            .as_ref()
            .map(|(_, surface)| surface.clone())
    }

    /// Mark the document as parsed and run the callbacks waiting for it.
    pub fn fire_structure_ready(&self) {
        let callbacks = {
            let mut state = self.state.borrow_mut();
            state.structure_ready = true;
            std::mem::take(&mut state.ready)
        };
        for callback in callbacks {
            callback();
        }
    }
}

impl PageHost for MemoryPage {
    fn current_path(&self) -> String {
        self.state.borrow().path.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.state.borrow_mut().title = Some(title.to_string());
        self.log.record(PageEvent::TitleSet(title.to_string()));
    }

    fn route_container(&mut self, id: &str) -> Option<Box<dyn DisplaySurface>> {
        let state = self.state.borrow();
        match &state.container {
            Some((container_id, surface)) if container_id == id => {
                Some(Box::new(surface.clone()) as Box<dyn DisplaySurface>)
            }
            _ => None,
        }
    }

    fn on_structure_ready(&mut self, callback: Box<dyn FnOnce()>) -> Result<()> {
        let ready = self.state.borrow().structure_ready;
        if ready {
            callback();
        } else {
            self.state.borrow_mut().ready.push(callback);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingAnalytics {
    log: EventLog,
    initialized: bool,
}

impl RecordingAnalytics {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            initialized: false,
        }
    }
}

impl Analytics for RecordingAnalytics {
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.log.record(PageEvent::AnalyticsInitialized);
    }

    fn track_page_view(&mut self, title: &str, path: &str) {
        self.log.record(PageEvent::PageViewTracked {
            title: title.to_string(),
            path: path.to_string(),
        });
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingIcons {
    log: EventLog,
}

impl RecordingIcons {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl IconReplacer for RecordingIcons {
    fn replace(&self) {
        self.log.record(PageEvent::IconsReplaced);
    }
}

/// A page rendered by [`render_path`].
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub path: String,
    pub route_path: &'static str,
    pub title: String,
    pub markup: String,
    pub events: Vec<PageEvent>,
}

/// Boot the site for `path` against in-memory collaborators and return what
/// ended up in the document.
///
/// Animated routes are rendered as of their first frame.
pub fn render_path(path: &str, environment: Environment) -> Result<RenderedPage> {
    let log = EventLog::new();
    let page = MemoryPage::new(path, log.clone());
    let scheduler = Rc::new(ManualFrameScheduler::new());

    let mut app = App::new(
        environment.config(),
        Box::new(page.clone()),
        Box::new(RecordingAnalytics::new(log.clone())),
        Rc::new(RecordingIcons::new(log.clone())),
        scheduler.clone(),
    )?;
    let route_path = app.start()?.path;

    page.fire_structure_ready();
    scheduler.fire(0.0);

    Ok(RenderedPage {
        path: path.to_string(),
        route_path,
        title: page.title().unwrap_or_default(),
        markup: page.container().map(|c| c.markup()).unwrap_or_default(),
        events: log.events(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_replaces_content() {
        let mut surface = MemorySurface::new();
        surface.set_content("<p>one</p>").unwrap();
        let mut handle = surface.append_element("p", "two").unwrap();
        handle.set_style_property("margin-left", "10px").unwrap();
        assert_eq!(
            surface.markup(),
            "<p>one</p><p style=\"margin-left: 10px\">two</p>"
        );

        surface.set_content("<p>three</p>").unwrap();
        assert_eq!(surface.markup(), "<p>three</p>");
        assert!(handle.set_style_property("margin-left", "20px").is_err());
    }

    #[test]
    fn test_detached_handle_leaves_new_elements_alone() {
        let mut surface = MemorySurface::new();
        let mut old = surface.append_element("p", "old").unwrap();
        surface.set_content("").unwrap();
        let mut new = surface.append_element("p", "new").unwrap();

        let result = old.set_style_property("margin-left", "99px");
        assert!(matches!(result, Err(crate::SiteError::Host(_))));
        assert_eq!(surface.markup(), "<p>new</p>");

        new.set_style_property("margin-left", "5px").unwrap();
        assert_eq!(surface.markup(), "<p style=\"margin-left: 5px\">new</p>");
    }

    #[test]
    fn test_route_container_matches_id() {
        let log = EventLog::new();
        let mut page = MemoryPage::with_container_id("/", "main", log);
        assert!(page.route_container(ROUTE_CONTAINER_ID).is_none());
        assert!(page.route_container("main").is_some());

        let mut standard = MemoryPage::new("/", EventLog::new());
        assert!(standard.route_container(ROUTE_CONTAINER_ID).is_some());
    }

    #[test]
    fn test_structure_ready_callbacks() {
        let log = EventLog::new();
        let mut page = MemoryPage::new("/", log.clone());
        let icons = RecordingIcons::new(log.clone());

        let queued = icons.clone();
        page.on_structure_ready(Box::new(move || queued.replace()))
            .unwrap();
        assert!(log.events().is_empty());

        page.fire_structure_ready();
        assert_eq!(log.events(), vec![PageEvent::IconsReplaced]);

        page.on_structure_ready(Box::new(move || icons.replace()))
            .unwrap();
        assert_eq!(log.count(|e| *e == PageEvent::IconsReplaced), 2);
    }

    #[test]
    fn test_recording_analytics_initializes_once() {
        let log = EventLog::new();
        let mut analytics = RecordingAnalytics::new(log.clone());
        analytics.initialize();
        analytics.initialize();
        assert_eq!(log.events(), vec![PageEvent::AnalyticsInitialized]);
    }
}
