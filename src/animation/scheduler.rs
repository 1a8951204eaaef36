//! Frame scheduling
//!
//! A [`FrameScheduler`] runs a callback once on the next display refresh and
//! passes it the frame timestamp in milliseconds. In the browser this is
//! `requestAnimationFrame`; headless code and tests pump frames by hand.

use crate::Result;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Callback invoked with the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait FrameScheduler {
    /// Run `callback` once on the next frame.
    fn request_frame(&self, callback: FrameCallback) -> Result<()>;
}

/// Scheduler that queues callbacks until [`ManualFrameScheduler::fire`] is called.
#[derive(Default)]
pub struct ManualFrameScheduler {
    pending: RefCell<VecDeque<FrameCallback>>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every callback requested before this call with `timestamp_ms`.
    ///
    /// Callbacks requested while firing wait for the next call, the same way a
    /// browser defers a `requestAnimationFrame` made inside a frame.
    /// Returns how many callbacks ran.
    pub fn fire(&self, timestamp_ms: f64) -> usize {
        let due: Vec<FrameCallback> = self.pending.borrow_mut().drain(..).collect();
        let count = due.len();
        for callback in due {
            callback(timestamp_ms);
        }
        count
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<()> {
        self.pending.borrow_mut().push_back(callback);
        Ok(())
    }
}

impl std::fmt::Debug for ManualFrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualFrameScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}
