//! # ScholarChart
//!
//! Client-side router, static reference content and a keyframe animator for the
//! ScholarChart site.
//!
//! The core (route resolution, page activation, keyframe interpolation) only
//! talks to the page through the capability traits in [`surface`],
//! [`site::host`] and [`animation::scheduler`]. With the `wasm` feature the
//! [`web`] module implements them on top of the DOM and boots the page;
//! [`headless`] implements them in memory for tests and pre-rendering.

pub mod animation;
pub mod content;
pub mod core;
pub mod headless;
pub mod prelude;
pub mod routing;
pub mod site;
pub mod surface;
#[cfg(feature = "wasm")]
pub mod web;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::config::{Environment, SiteConfig};

pub use animation::{
    interpolate, AnimationRun, FrameScheduler, Keyframe, KeyframeTrack, Sample,
};

pub use routing::{site_routes, Route, RouteTable};

pub use site::{activate, App};

pub use surface::{DisplaySurface, StyleTarget};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, SiteError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("route container #{0} not found")]
    MissingContainer(String),

    #[error("duplicate route: {0}")]
    DuplicateRoute(String),

    #[error("invalid keyframes: {0}")]
    InvalidKeyframes(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = SiteError;

/// Install `env_logger` for native builds. Safe to call more than once.
#[cfg(all(feature = "debug", not(target_arch = "wasm32")))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
