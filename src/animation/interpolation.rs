/// Values that can be blended between two keyframes
pub trait Interpolatable {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

/// Main interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values.
    ///
    /// `t` is not clamped; callers pass the progress through a bracketing segment.
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + t * (end - start)
    }

    /// Progress of `elapsed` through the segment `[start_time, end_time)`.
    pub fn progress(start_time: f64, end_time: f64, elapsed: f64) -> f64 {
        (elapsed - start_time) / (end_time - start_time)
    }
}

impl Interpolatable for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Interpolation::linear(*self, *other, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_interpolation() {
        assert_eq!(Interpolation::linear(10.0, 200.0, 0.0), 10.0);
        assert_eq!(Interpolation::linear(10.0, 200.0, 0.5), 105.0);
        assert_eq!(Interpolation::linear(10.0, 200.0, 1.0), 200.0);
    }

    #[test]
    fn test_linear_is_unclamped() {
        assert_eq!(Interpolation::linear(0.0, 10.0, 1.5), 15.0);
        assert_eq!(Interpolation::linear(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_progress() {
        assert_eq!(Interpolation::progress(0.0, 2.0, 1.0), 0.5);
        assert_eq!(Interpolation::progress(1.0, 3.0, 1.0), 0.0);
    }

    #[test]
    fn test_f64_lerp_matches_linear() {
        let start: f64 = 10.0;
        assert_eq!(start.lerp(&200.0, 0.5), Interpolation::linear(10.0, 200.0, 0.5));
    }
}
