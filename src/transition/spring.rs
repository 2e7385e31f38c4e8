//! Damped spring used to smooth pointer-following motion

use std::time::Duration;

use crate::config::PointerConfig;

/// Largest integration step; longer frames are split
const MAX_STEP: f64 = 1.0 / 240.0;
/// Distance and speed below which the spring snaps to rest
const REST_THRESHOLD: f64 = 0.01;

/// One-dimensional damped spring
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: &PointerConfig, initial: f64) -> Self {
        Self {
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass.max(f64::EPSILON),
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.position
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_resting(&self) -> bool {
        (self.position - self.target).abs() < REST_THRESHOLD && self.velocity.abs() < REST_THRESHOLD
    }

    /// Integrate the spring over `dt` (semi-implicit Euler)
    pub fn step(&mut self, dt: Duration) {
        if self.is_resting() {
            self.position = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if self.is_resting() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_converges() {
        let mut spring = Spring::new(&PointerConfig::default(), 0.0);
        spring.set_target(100.0);
        assert!(!spring.is_resting());

        let mut max = 0.0_f64;
        for _ in 0..600 {
            spring.step(Duration::from_millis(16));
            max = max.max(spring.value());
        }
        assert!(spring.is_resting());
        assert_eq!(spring.value(), 100.0);
        // stiffness 60 / damping 20 is overdamped
        assert!(max < 100.5);
    }

    #[test]
    fn test_resting_spring_does_not_move() {
        let mut spring = Spring::new(&PointerConfig::default(), 5.0);
        spring.step(Duration::from_millis(16));
        assert_eq!(spring.value(), 5.0);
    }
}
