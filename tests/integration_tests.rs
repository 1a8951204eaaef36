use scholarchart::prelude::*;

/// Integration tests for booting the site against in-memory collaborators.
/// These tests walk through what a visitor's page load does end to end.
#[cfg(test)]
mod integration_tests {
    use super::*;

    struct Harness {
        log: EventLog,
        page: MemoryPage,
        scheduler: Rc<ManualFrameScheduler>,
        app: App,
    }

    fn boot(path: &str, environment: Environment) -> Harness {
        #[cfg(feature = "debug")]
        scholarchart::init_logging();

        let log = EventLog::new();
        let page = MemoryPage::new(path, log.clone());
        let scheduler = Rc::new(ManualFrameScheduler::new());
        let app = App::new(
            environment.config(),
            Box::new(page.clone()),
            Box::new(RecordingAnalytics::new(log.clone())),
            Rc::new(RecordingIcons::new(log.clone())),
            scheduler.clone(),
        )
        .unwrap();

        Harness {
            log,
            page,
            scheduler,
            app,
        }
    }

    #[test]
    fn test_unknown_paths_render_not_found() {
        for path in ["/nope", "/sql-server", "", "/404/extra"] {
            let mut harness = boot(path, Environment::Production);
            let route = harness.app.start().unwrap();
            assert_eq!(route.title, Some(NOT_FOUND_TITLE));
            assert_eq!(route.path, NOT_FOUND_PATH);

            assert_eq!(
                harness.page.title().as_deref(),
                Some("404 Not Found - ScholarChart")
            );
            let markup = harness.page.container().unwrap().markup();
            assert!(markup.contains("Sorry, the page you're looking for doesn't exist."));
        }
    }

    #[test]
    fn test_home_uses_bare_site_name() {
        let mut harness = boot("/", Environment::Production);
        harness.app.start().unwrap();

        assert_eq!(harness.page.title().as_deref(), Some("ScholarChart"));
        let markup = harness.page.container().unwrap().markup();
        assert!(markup.contains("Learn with interactive, animated visualizations!"));
    }

    #[test]
    fn test_titled_route_title_and_content() {
        let mut harness = boot("/sql-server-transaction-isolation-levels", Environment::Production);
        let route: *const Route = harness.app.start().unwrap();

        assert!(std::ptr::eq(
            route,
            harness
                .app
                .routes()
                .resolve("/sql-server-transaction-isolation-levels")
        ));
        assert_eq!(
            harness.page.title().as_deref(),
            Some("SQL Server Transaction Isolation Levels - ScholarChart")
        );

        let container = harness.page.container().unwrap();
        assert_eq!(container.writes(), 1);
        assert!(container.markup().contains("<h2>Read Phenomena</h2>"));
    }

    #[test]
    fn test_analytics_follow_title_in_production() {
        let mut harness = boot("/", Environment::Production);
        harness.app.start().unwrap();

        let events = harness.log.events();
        assert_eq!(
            events,
            vec![
                PageEvent::TitleSet("ScholarChart".to_string()),
                PageEvent::AnalyticsInitialized,
                PageEvent::PageViewTracked {
                    title: "ScholarChart".to_string(),
                    path: "/".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_no_analytics_in_development() {
        let mut harness = boot("/", Environment::Development);
        harness.app.start().unwrap();

        assert_eq!(
            harness.log.count(|e| matches!(
                e,
                PageEvent::AnalyticsInitialized | PageEvent::PageViewTracked { .. }
            )),
            0
        );
        assert_eq!(
            harness.log.events(),
            vec![PageEvent::TitleSet("ScholarChart".to_string())]
        );
    }

    #[test]
    fn test_icons_replaced_once_document_is_ready() {
        let mut harness = boot("/sql-server-transaction-isolation-levels", Environment::Production);
        harness.app.start().unwrap();
        assert_eq!(harness.log.position(&PageEvent::IconsReplaced), None);

        harness.page.fire_structure_ready();
        assert_eq!(harness.log.count(|e| *e == PageEvent::IconsReplaced), 1);
        assert_eq!(harness.log.position(&PageEvent::IconsReplaced), Some(3));
    }

    #[test]
    fn test_missing_container_is_fatal() {
        let log = EventLog::new();
        let page = MemoryPage::without_container("/", log.clone());
        let mut app = App::new(
            Environment::Production.config(),
            Box::new(page.clone()),
            Box::new(RecordingAnalytics::new(log.clone())),
            Rc::new(RecordingIcons::new(log.clone())),
            Rc::new(ManualFrameScheduler::new()),
        )
        .unwrap();

        let result = app.start();
        assert!(matches!(result, Err(SiteError::MissingContainer(id)) if id == ROUTE_CONTAINER_ID));
        assert_eq!(page.title(), None);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_container_looked_up_by_configured_id() {
        let mut config = Environment::Production.config();
        config.container_id = "main".to_string();

        let log = EventLog::new();
        let page = MemoryPage::new("/", log.clone());
        let mut app = App::new(
            config.clone(),
            Box::new(page.clone()),
            Box::new(RecordingAnalytics::new(log.clone())),
            Rc::new(RecordingIcons::new(log.clone())),
            Rc::new(ManualFrameScheduler::new()),
        )
        .unwrap();
        let result = app.start();
        assert!(matches!(result, Err(SiteError::MissingContainer(id)) if id == "main"));
        assert!(log.events().is_empty());

        let page = MemoryPage::with_container_id("/", "main", log.clone());
        let mut app = App::new(
            config,
            Box::new(page.clone()),
            Box::new(RecordingAnalytics::new(log.clone())),
            Rc::new(RecordingIcons::new(log.clone())),
            Rc::new(ManualFrameScheduler::new()),
        )
        .unwrap();
        app.start().unwrap();
        assert_eq!(page.title().as_deref(), Some("ScholarChart"));
        assert!(page.container().unwrap().markup().contains("StudyChart is still"));
    }

    #[test]
    fn test_dev_route_only_in_development() {
        let mut production = boot("/dev", Environment::Production);
        assert_eq!(production.app.start().unwrap().path, NOT_FOUND_PATH);
        assert!(production.scheduler.is_idle());

        let mut development = boot("/dev", Environment::Development);
        let route = development.app.start().unwrap();
        assert_eq!(route.path, "/dev");
        assert_eq!(development.page.title().as_deref(), Some("Dev - ScholarChart"));
        assert_eq!(development.scheduler.pending(), 1);
    }

    #[test]
    fn test_dev_route_animates_margin() {
        let mut harness = boot("/dev", Environment::Development);
        harness.app.start().unwrap();
        let container = harness.page.container().unwrap();

        let margin = || {
            container.elements()[0]
                .style
                .get("margin-left")
                .cloned()
        };

        assert_eq!(container.elements().len(), 1);
        assert_eq!(container.elements()[0].text, "This is a dev route!");
        assert_eq!(margin(), None);

        harness.scheduler.fire(1000.0);
        assert_eq!(margin().as_deref(), Some("10px"));

        harness.scheduler.fire(2000.0);
        assert_eq!(margin().as_deref(), Some("105px"));

        harness.scheduler.fire(3000.0);
        assert_eq!(margin().as_deref(), Some("200px"));
        assert!(harness.scheduler.is_idle());
    }

    #[test]
    fn test_render_path_headless() {
        let page = render_path("/dev", Environment::Development).unwrap();
        assert_eq!(page.route_path, "/dev");
        assert_eq!(page.title, "Dev - ScholarChart");
        assert_eq!(
            page.markup,
            "<p style=\"margin-left: 10px\">This is a dev route!</p>"
        );
        assert_eq!(
            page.events,
            vec![
                PageEvent::TitleSet("Dev - ScholarChart".to_string()),
                PageEvent::IconsReplaced,
            ]
        );

        let missing = render_path("/dev", Environment::Production).unwrap();
        assert_eq!(missing.route_path, "/404");
        assert_eq!(missing.title, "404 Not Found - ScholarChart");
    }
}
