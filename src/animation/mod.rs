pub mod interpolation;
pub mod keyframe;
pub mod playback;
pub mod run;
pub mod scheduler;

// Re-export commonly used types and functions for convenience
pub use interpolation::{Interpolatable, Interpolation};
pub use keyframe::{interpolate, prev_keyframe_index, Keyframe, KeyframeTrack, Sample};
pub use playback::{play, StyleProperty, ValueObserver};
pub use run::{AnimationRun, FrameStep};
pub use scheduler::{FrameCallback, FrameScheduler, ManualFrameScheduler};
