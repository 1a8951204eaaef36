use crate::animation::scheduler::FrameScheduler;
use crate::surface::DisplaySurface;
use crate::Result;
use std::fmt;
use std::rc::Rc;

/// Everything a route may use while rendering.
pub struct RenderContext<'a> {
    /// The container the route owns for as long as it is active.
    pub surface: &'a mut dyn DisplaySurface,
    /// Frame scheduler for routes that animate after rendering.
    pub scheduler: Rc<dyn FrameScheduler>,
}

impl<'a> RenderContext<'a> {
    pub fn new(surface: &'a mut dyn DisplaySurface, scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self { surface, scheduler }
    }
}

pub type RenderFn = fn(&mut RenderContext<'_>) -> Result<()>;

/// A path, an optional page title and the procedure that renders the page.
#[derive(Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub title: Option<&'static str>,
    render: RenderFn,
}

impl Route {
    pub const fn new(path: &'static str, title: Option<&'static str>, render: RenderFn) -> Self {
        Self {
            path,
            title,
            render,
        }
    }

    pub fn render(&self, context: &mut RenderContext<'_>) -> Result<()> {
        (self.render)(context)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
