//! Site configuration
//!
//! The only runtime switch the site has is its [`Environment`]. Everything else
//! in [`SiteConfig`] is resolved from that profile once at startup, the same way
//! every activation sees the same answer to "is this a development build?".

use crate::core::constants::{ENV_VAR, ROUTE_CONTAINER_ID, SITE_NAME};

/// Google Analytics measurement id used by production builds.
pub const DEFAULT_MEASUREMENT_ID: &str = "G-SCHOLARCHART";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Resolve the environment the crate was built for.
    ///
    /// `SCHOLARCHART_ENV` wins when set at compile time; otherwise debug builds are
    /// development builds and release builds are production builds.
    pub fn detect() -> Self {
        match option_env!("SCHOLARCHART_ENV") {
            Some(value) => Self::parse(value).unwrap_or_else(|| {
                log::warn!("unrecognised {}={:?}, falling back to build profile", ENV_VAR, value);
                Self::from_build_profile()
            }),
            None => Self::from_build_profile(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn config(&self) -> SiteConfig {
        match self {
            Self::Development => SiteConfig {
                site_name: SITE_NAME.to_string(),
                container_id: ROUTE_CONTAINER_ID.to_string(),
                environment: *self,
                analytics: None,
            },
            Self::Production => SiteConfig {
                site_name: SITE_NAME.to_string(),
                container_id: ROUTE_CONTAINER_ID.to_string(),
                environment: *self,
                analytics: Some(AnalyticsConfig::default()),
            },
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::detect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub site_name: String,
    pub container_id: String,
    pub environment: Environment,
    pub analytics: Option<AnalyticsConfig>,
}

impl SiteConfig {
    pub fn is_dev_env(&self) -> bool {
        self.environment.is_development()
    }

    /// Title shown for a route: `"<title> - <site>"`, or the bare site name.
    pub fn document_title(&self, route_title: Option<&str>) -> String {
        match route_title {
            Some(title) => format!(
                "{}{}{}",
                title,
                crate::core::constants::TITLE_SEPARATOR,
                self.site_name
            ),
            None => self.site_name.clone(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Environment::default().config()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub measurement_id: String,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            measurement_id: DEFAULT_MEASUREMENT_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_presets() {
        let dev = Environment::Development.config();
        let prod = Environment::Production.config();

        assert!(dev.is_dev_env());
        assert!(dev.analytics.is_none());

        assert!(!prod.is_dev_env());
        assert_eq!(prod.analytics, Some(AnalyticsConfig::default()));
        assert_eq!(prod.container_id, "route-container");
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(Environment::parse(" Production "), Some(Environment::Production));
        assert_eq!(Environment::parse("staging"), None);
    }

    #[test]
    fn test_document_title() {
        let config = Environment::Production.config();
        assert_eq!(
            config.document_title(Some("SQL Server Transaction Isolation Levels")),
            "SQL Server Transaction Isolation Levels - ScholarChart"
        );
        assert_eq!(config.document_title(None), "ScholarChart");
    }
}
