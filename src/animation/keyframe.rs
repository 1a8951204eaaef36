use crate::animation::interpolation::{Interpolatable, Interpolation};
use crate::{Result, SiteError};
use serde::{Deserialize, Serialize};

/// A (time, value) anchor point. `time` is in seconds from the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f64,
    pub value: f64,
}

impl Keyframe {
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Outcome of sampling a keyframe sequence at some elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Elapsed time is before the first keyframe; nothing to apply yet.
    BeforeStart,
    /// Elapsed time falls between two keyframes.
    Between(f64),
    /// The final keyframe has been reached or passed.
    Final(f64),
}

impl Sample {
    pub fn value(&self) -> Option<f64> {
        match self {
            Sample::BeforeStart => None,
            Sample::Between(value) | Sample::Final(value) => Some(*value),
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Sample::Final(_))
    }
}

/// Index of the last keyframe with `time <= elapsed`.
///
/// Among keyframes sharing a time the last one in forward order is returned, so the
/// following segment always has a non-zero length.
pub fn prev_keyframe_index(keyframes: &[Keyframe], elapsed: f64) -> Option<usize> {
    keyframes
        .partition_point(|keyframe| keyframe.time <= elapsed)
        .checked_sub(1)
}

/// Sample a sorted keyframe sequence at `elapsed` seconds.
pub fn interpolate(keyframes: &[Keyframe], elapsed: f64) -> Sample {
    let Some(prev_index) = prev_keyframe_index(keyframes, elapsed) else {
        return Sample::BeforeStart;
    };

    let prev = keyframes[prev_index];
    match keyframes.get(prev_index + 1) {
        None => Sample::Final(prev.value),
        Some(next) => {
            let t = Interpolation::progress(prev.time, next.time, elapsed);
            Sample::Between(prev.value.lerp(&next.value, t))
        }
    }
}

/// A validated keyframe sequence: non-empty, finite, non-negative and strictly
/// ascending in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct KeyframeTrack {
    keyframes: Vec<Keyframe>,
}

impl KeyframeTrack {
    pub fn new(keyframes: Vec<Keyframe>) -> Result<Self> {
        if keyframes.is_empty() {
            return Err(SiteError::InvalidKeyframes(
                "a track needs at least one keyframe".to_string(),
            ));
        }

        for (index, keyframe) in keyframes.iter().enumerate() {
            if !keyframe.time.is_finite() || keyframe.time < 0.0 {
                return Err(SiteError::InvalidKeyframes(format!(
                    "keyframe {} has invalid time {}",
                    index, keyframe.time
                )));
            }
            if !keyframe.value.is_finite() {
                return Err(SiteError::InvalidKeyframes(format!(
                    "keyframe {} has invalid value {}",
                    index, keyframe.value
                )));
            }
        }

        if let Some(pair) = keyframes.windows(2).find(|pair| pair[1].time <= pair[0].time) {
            return Err(SiteError::InvalidKeyframes(format!(
                "keyframe times must be strictly ascending ({} follows {})",
                pair[1].time, pair[0].time
            )));
        }

        Ok(Self { keyframes })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Time of the final keyframe, after which a run stops.
    pub fn duration(&self) -> f64 {
        self.keyframes.last().map(|k| k.time).unwrap_or(0.0)
    }

    pub fn sample(&self, elapsed: f64) -> Sample {
        interpolate(&self.keyframes, elapsed)
    }
}

impl TryFrom<Vec<Keyframe>> for KeyframeTrack {
    type Error = SiteError;

    fn try_from(keyframes: Vec<Keyframe>) -> Result<Self> {
        Self::new(keyframes)
    }
}

impl From<KeyframeTrack> for Vec<Keyframe> {
    fn from(track: KeyframeTrack) -> Self {
        track.keyframes
    }
}
