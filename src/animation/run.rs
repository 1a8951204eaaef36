use crate::animation::keyframe::{KeyframeTrack, Sample};

/// What a single frame produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    /// Before the first keyframe. Nothing to apply, ask for another frame.
    Pending,
    /// A new value to apply, ask for another frame.
    Updated(f64),
    /// The final value. The run is over.
    Finished(f64),
}

impl FrameStep {
    pub fn value(&self) -> Option<f64> {
        match self {
            FrameStep::Pending => None,
            FrameStep::Updated(value) | FrameStep::Finished(value) => Some(*value),
        }
    }

    pub fn reschedules(&self) -> bool {
        !matches!(self, FrameStep::Finished(_))
    }
}

/// State of one playback of a keyframe track.
///
/// The clock starts at the timestamp of the first frame, so the value at any
/// frame depends only on how much time has passed, not on how many frames ran.
#[derive(Debug, Clone)]
pub struct AnimationRun {
    track: KeyframeTrack,
    start_timestamp: Option<f64>,
    current_value: Option<f64>,
    finished: bool,
}

impl AnimationRun {
    pub fn new(track: KeyframeTrack) -> Self {
        Self {
            track,
            start_timestamp: None,
            current_value: None,
            finished: false,
        }
    }

    /// Advance to a frame timestamp in milliseconds.
    pub fn advance(&mut self, timestamp_ms: f64) -> FrameStep {
        if self.finished {
            return match self.current_value {
                Some(value) => FrameStep::Finished(value),
                None => FrameStep::Pending,
            };
        }

        let start = *self.start_timestamp.get_or_insert(timestamp_ms);
        let elapsed = (timestamp_ms - start) / 1000.0;

        match self.track.sample(elapsed) {
            Sample::BeforeStart => FrameStep::Pending,
            Sample::Between(value) => {
                self.current_value = Some(value);
                FrameStep::Updated(value)
            }
            Sample::Final(value) => {
                self.current_value = Some(value);
                self.finished = true;
                FrameStep::Finished(value)
            }
        }
    }

    pub fn start_timestamp(&self) -> Option<f64> {
        self.start_timestamp
    }

    pub fn current_value(&self) -> Option<f64> {
        self.current_value
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn track(&self) -> &KeyframeTrack {
        &self.track
    }
}
