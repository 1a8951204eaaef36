//! Prelude module for common scholarchart types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use scholarchart::prelude::*;`

pub use crate::core::{
    config::{AnalyticsConfig, Environment, SiteConfig},
    constants::{NOT_FOUND_PATH, NOT_FOUND_TITLE, ROUTE_CONTAINER_ID, SITE_NAME},
};

pub use crate::animation::{
    interpolate, play, AnimationRun, FrameCallback, FrameScheduler, FrameStep, Interpolation,
    Keyframe, KeyframeTrack, ManualFrameScheduler, Sample, StyleProperty, ValueObserver,
};

pub use crate::routing::{site_routes, RenderContext, RenderFn, Route, RouteTable};

pub use crate::site::{activate, Analytics, App, IconReplacer, PageHost};

pub use crate::surface::{DisplaySurface, StyleTarget};

pub use crate::headless::{
    render_path, EventLog, MemoryPage, MemorySurface, PageEvent, RecordingAnalytics,
    RecordingIcons,
};

#[cfg(feature = "wasm")]
pub use crate::web::{BrowserFrameScheduler, BrowserPage, FeatherIcons, GtagAnalytics};

pub use crate::{Error as SiteError, Result};

pub use std::rc::Rc;
