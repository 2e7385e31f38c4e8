//! Time-based interpolation between two visual states

use std::time::Duration;

use super::CubicBezier;

/// Animated visual properties of a wrapped element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub opacity: f64,
    /// Vertical translation in px
    pub offset_y: f64,
}

impl Visual {
    pub const fn new(opacity: f64, offset_y: f64) -> Self {
        Self { opacity, offset_y }
    }

    fn lerp(&self, to: &Visual, t: f64) -> Visual {
        Visual {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
        }
    }

    /// Inline style for the element
    pub fn style(&self) -> String {
        format!(
            "opacity:{:.3};transform:translateY({:.2}px)",
            self.opacity, self.offset_y
        )
    }
}

/// One animation from `from` to `to`
#[derive(Debug, Clone)]
pub struct Tween {
    from: Visual,
    to: Visual,
    duration: Duration,
    elapsed: Duration,
    easing: CubicBezier,
}

impl Tween {
    pub fn new(from: Visual, to: Visual, duration: Duration, easing: CubicBezier) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Advance the clock; returns `true` once the tween has finished
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Linear progress in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> Visual {
        self.from.lerp(&self.to, self.easing.ease(self.progress()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tween() -> Tween {
        Tween::new(
            Visual::new(0.0, 24.0),
            Visual::new(1.0, 0.0),
            Duration::from_millis(400),
            CubicBezier::LINEAR,
        )
    }

    #[test]
    fn test_progress_and_value() {
        let mut t = tween();
        assert_eq!(t.value(), Visual::new(0.0, 24.0));
        assert!(!t.advance(Duration::from_millis(200)));
        let mid = t.value();
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!((mid.offset_y - 12.0).abs() < 1e-3);
        assert!(t.advance(Duration::from_millis(300)));
        assert_eq!(t.value(), Visual::new(1.0, 0.0));
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let t = Tween::new(
            Visual::new(0.0, 0.0),
            Visual::new(1.0, 0.0),
            Duration::ZERO,
            CubicBezier::EASE,
        );
        assert!(t.is_finished());
        assert_eq!(t.value().opacity, 1.0);
    }

    #[test]
    fn test_style() {
        assert_eq!(
            Visual::new(1.0, -16.0).style(),
            "opacity:1.000;transform:translateY(-16.00px)"
        );
    }
}
