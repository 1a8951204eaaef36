use crate::animation::run::{AnimationRun, FrameStep};
use crate::animation::scheduler::FrameScheduler;
use crate::surface::{px, StyleTarget};
use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Receives each interpolated value of a run.
pub trait ValueObserver {
    fn apply(&mut self, value: f64) -> Result<()>;
}

impl<F> ValueObserver for F
where
    F: FnMut(f64) -> Result<()>,
{
    fn apply(&mut self, value: f64) -> Result<()> {
        self(value)
    }
}

/// Observer writing each value to a CSS length property, e.g. `margin-left`.
pub struct StyleProperty {
    target: Box<dyn StyleTarget>,
    property: String,
}

impl StyleProperty {
    pub fn new(target: Box<dyn StyleTarget>, property: impl Into<String>) -> Self {
        Self {
            target,
            property: property.into(),
        }
    }
}

impl ValueObserver for StyleProperty {
    fn apply(&mut self, value: f64) -> Result<()> {
        self.target.set_style_property(&self.property, &px(value))
    }
}

struct Playback {
    run: AnimationRun,
    observer: Box<dyn ValueObserver>,
}

impl Playback {
    fn frame(&mut self, timestamp_ms: f64) -> FrameStep {
        let step = self.run.advance(timestamp_ms);
        if let Some(value) = step.value() {
            if let Err(e) = self.observer.apply(value) {
                log::warn!("failed to apply animated value {}: {}", value, e);
            }
        }
        step
    }
}

/// Start playing `run` on `scheduler`, feeding every value to `observer`.
///
/// The run requests a new frame after every callback until it reaches its final
/// keyframe. There is no way to stop it early.
pub fn play(
    run: AnimationRun,
    observer: impl ValueObserver + 'static,
    scheduler: Rc<dyn FrameScheduler>,
) -> Result<()> {
    log::debug!(
        "starting animation over {} keyframes ({}s)",
        run.track().len(),
        run.track().duration()
    );
    let playback = Rc::new(RefCell::new(Playback {
        run,
        observer: Box::new(observer),
    }));
    schedule(playback, scheduler)
}

fn schedule(playback: Rc<RefCell<Playback>>, scheduler: Rc<dyn FrameScheduler>) -> Result<()> {
    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move |timestamp_ms: f64| {
        let step = playback.borrow_mut().frame(timestamp_ms);
        if step.reschedules() {
            if let Err(e) = schedule(playback, next) {
                log::warn!("animation stopped, could not schedule next frame: {}", e);
            }
        } else {
            log::debug!("animation finished at {}ms", timestamp_ms);
        }
    }))
}
