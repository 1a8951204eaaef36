//! Development-only animation demo: slides a paragraph's left margin from
//! 10px to 200px over two seconds.

use crate::animation::keyframe::{Keyframe, KeyframeTrack};
use crate::animation::playback::{play, StyleProperty};
use crate::animation::run::AnimationRun;
use crate::routing::route::RenderContext;
use crate::Result;

pub const TEXT: &str = "This is a dev route!";
pub const ANIMATED_PROPERTY: &str = "margin-left";

pub const KEYFRAMES: [Keyframe; 2] = [Keyframe::new(0.0, 10.0), Keyframe::new(2.0, 200.0)];

pub fn track() -> Result<KeyframeTrack> {
    KeyframeTrack::new(KEYFRAMES.to_vec())
}

pub(crate) fn render(context: &mut RenderContext<'_>) -> Result<()> {
    let track = track()?;

    context.surface.clear()?;
    let text = context.surface.append_element("p", TEXT)?;

    play(
        AnimationRun::new(track),
        StyleProperty::new(text, ANIMATED_PROPERTY),
        context.scheduler.clone(),
    )
}
