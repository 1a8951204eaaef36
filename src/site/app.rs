use crate::animation::scheduler::FrameScheduler;
use crate::core::config::SiteConfig;
use crate::routing::{site_routes, Route, RouteTable};
use crate::site::activation::activate;
use crate::site::host::{Analytics, IconReplacer, PageHost};
use crate::Result;
use std::rc::Rc;

/// The page bootstrap: one route table and the collaborators it activates into.
pub struct App {
    config: SiteConfig,
    routes: RouteTable,
    host: Box<dyn PageHost>,
    analytics: Box<dyn Analytics>,
    icons: Rc<dyn IconReplacer>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl App {
    pub fn new(
        config: SiteConfig,
        host: Box<dyn PageHost>,
        analytics: Box<dyn Analytics>,
        icons: Rc<dyn IconReplacer>,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> Result<Self> {
        let routes = site_routes(config.environment)?;
        Ok(Self {
            config,
            routes,
            host,
            analytics,
            icons,
            scheduler,
        })
    }

    /// Activate the route for the current location and queue icon replacement.
    pub fn start(&mut self) -> Result<&Route> {
        let path = self.host.current_path();
        let route = self.routes.resolve(&path);

        activate(
            route,
            &self.config,
            self.host.as_mut(),
            self.analytics.as_mut(),
            self.scheduler.clone(),
        )?;

        let icons = self.icons.clone();
        self.host
            .on_structure_ready(Box::new(move || icons.replace()))?;

        Ok(route)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }
}
