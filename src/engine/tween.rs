// Scalar tweening for door swings and UI fades
//
// Tweens here are fire-and-forget: whoever owns one advances it every frame
// and is free to drop it and start a new one at any time (kill-and-replace).
// There is no scheduler and no callback chain; completion is polled.

/// Easing curves for tween interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    /// Constant speed
    Linear,
    /// Accelerate from zero speed
    InQuad,
    /// Decelerate to zero speed
    OutQuad,
    /// Accelerate, then decelerate
    InOutQuad,
}

impl Ease {
    /// Map a linear progress value `t` in [0, 1] through the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// An in-flight interpolation between two scalar values
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    /// Start a new tween from `from` to `to` over `duration` seconds
    ///
    /// A non-positive duration produces a tween that is already finished
    /// and reports the target value.
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// Advance the tween and return the current value
    pub fn update(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.ease.apply(self.elapsed / self.duration);
        crate::core::math::lerp(self.from, self.to, t)
    }

    /// Linear progress in [0, 1], before easing
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Whether the tween has reached its target
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// The value the tween is heading towards
    pub fn target(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::InQuad, Ease::OutQuad, Ease::InOutQuad] {
            assert_relative_eq!(ease.apply(0.0), 0.0);
            assert_relative_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(Ease::Linear.apply(-1.0), 0.0);
        assert_eq!(Ease::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn test_in_out_quad_midpoint() {
        // Symmetric curve passes through the midpoint exactly
        assert_relative_eq!(Ease::InOutQuad.apply(0.5), 0.5);
    }

    #[test]
    fn test_out_quad_front_loaded() {
        // OutQuad covers more than half the distance in the first half
        assert!(Ease::OutQuad.apply(0.5) > 0.5);
        assert!(Ease::InQuad.apply(0.5) < 0.5);
    }

    #[test]
    fn test_tween_linear_progression() {
        let mut tween = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
        assert_relative_eq!(tween.update(0.5), 5.0);
        assert!(!tween.finished());
        assert_relative_eq!(tween.update(0.5), 10.0);
        assert!(tween.finished());
    }

    #[test]
    fn test_tween_overshoot_clamps() {
        let mut tween = Tween::new(0.0, 1.0, 0.5, Ease::Linear);
        assert_relative_eq!(tween.update(10.0), 1.0);
        assert!(tween.finished());
        assert_relative_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn test_tween_zero_duration() {
        let tween = Tween::new(3.0, 7.0, 0.0, Ease::InOutQuad);
        assert!(tween.finished());
        assert_relative_eq!(tween.value(), 7.0);
    }

    #[test]
    fn test_tween_descending() {
        let mut tween = Tween::new(90.0, 0.0, 1.0, Ease::Linear);
        assert_relative_eq!(tween.update(0.25), 67.5);
        assert_eq!(tween.target(), 0.0);
    }

    #[test]
    fn test_tween_negative_dt_ignored() {
        let mut tween = Tween::new(0.0, 1.0, 1.0, Ease::Linear);
        tween.update(0.5);
        assert_relative_eq!(tween.update(-0.5), 0.5);
    }
}
