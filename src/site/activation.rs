use crate::animation::scheduler::FrameScheduler;
use crate::core::config::SiteConfig;
use crate::routing::route::{RenderContext, Route};
use crate::site::host::{Analytics, PageHost};
use crate::{Result, SiteError};
use std::rc::Rc;

/// Show `route` in `host`.
///
/// Fails with [`SiteError::MissingContainer`] before touching the document when
/// the route container is absent. Otherwise the title is set first, then
/// analytics are notified (outside development), then the route renders once.
pub fn activate(
    route: &Route,
    config: &SiteConfig,
    host: &mut dyn PageHost,
    analytics: &mut dyn Analytics,
    scheduler: Rc<dyn FrameScheduler>,
) -> Result<()> {
    let mut container = host
        .route_container(&config.container_id)
        .ok_or_else(|| SiteError::MissingContainer(config.container_id.clone()))?;

    let title = config.document_title(route.title);
    host.set_title(&title);
    log::info!("activating {} ({:?})", route.path, title);

    if !config.is_dev_env() {
        analytics.initialize();
        analytics.track_page_view(&title, &host.current_path());
    }

    route.render(&mut RenderContext::new(container.as_mut(), scheduler))
}
