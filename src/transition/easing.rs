//! Cubic-bezier easing curves (CSS `cubic-bezier()` semantics)

const NEWTON_ITERATIONS: usize = 8;
const EPSILON: f64 = 1e-7;

/// A timing function through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

/// Polynomial coefficients of one axis: `((a*t + b)*t + c)*t`
#[derive(Debug, Clone, Copy)]
struct Axis {
    a: f64,
    b: f64,
    c: f64,
}

impl Axis {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn sample(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn derivative(&self, t: f64) -> f64 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

impl CubicBezier {
    /// CSS `ease`
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-out`
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

    /// Build a curve; `x1` and `x2` are clamped to `[0, 1]` when sampled so
    /// time stays monotonic
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_points(points: [f64; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }

    fn x_axis(&self) -> Axis {
        Axis::new(self.x1.clamp(0.0, 1.0), self.x2.clamp(0.0, 1.0))
    }

    fn y_axis(&self) -> Axis {
        Axis::new(self.y1, self.y2)
    }

    /// Eased value for a linear progress in `[0, 1]`
    pub fn ease(&self, progress: f64) -> f64 {
        if progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        self.y_axis().sample(self.solve_x(progress))
    }

    /// Parameter `t` whose x coordinate is `x`
    fn solve_x(&self, x: f64) -> f64 {
        let axis = self.x_axis();
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = axis.sample(t) - x;
            if err.abs() < EPSILON {
                return t;
            }
            let d = axis.derivative(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Newton did not converge; bisect
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while hi - lo > EPSILON {
            let sx = axis.sample(t);
            if (sx - x).abs() < EPSILON {
                break;
            }
            if sx < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}
