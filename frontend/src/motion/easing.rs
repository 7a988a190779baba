/// A CSS-style cubic bezier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

const NEWTON_ITERATIONS: usize = 8;
const SOLVE_EPSILON: f64 = 1e-7;

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }

    fn sample_axis(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        ((a * t + b) * t + c) * t
    }

    fn sample_axis_derivative(p1: f64, p2: f64, t: f64) -> f64 {
        let (a, b, c) = Self::coefficients(p1, p2);
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Curve parameter whose x equals `x`: Newton first, bisection if that
    /// stalls on a flat derivative.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = Self::sample_axis(self.x1, self.x2, t) - x;
            if err.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = Self::sample_axis_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while lo < hi {
            let sampled = Self::sample_axis(self.x1, self.x2, t);
            if (sampled - x).abs() < SOLVE_EPSILON {
                break;
            }
            if x > sampled {
                lo = t;
            } else {
                hi = t;
            }
            let next = (hi - lo) * 0.5 + lo;
            if next == t {
                break;
            }
            t = next;
        }
        t
    }

    /// Eased value for linear time `x` in `[0, 1]`; clamped outside.
    pub fn ease(&self, x: f64) -> f64 {
        if x.is_nan() || x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample_axis(self.y1, self.y2, self.solve_t(x))
    }
}

/// CSS `ease-out`, the curve every entrance uses.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(EASE_OUT)]
    #[case(CubicBezier::new(0.42, 0.0, 1.0, 1.0))]
    #[case(CubicBezier::new(0.25, 0.1, 0.25, 1.0))]
    fn pinned_at_both_ends_and_monotonic(#[case] curve: CubicBezier) {
        assert_eq!(curve.ease(0.0), 0.0);
        assert_eq!(curve.ease(1.0), 1.0);
        assert_eq!(curve.ease(-2.0), 0.0);
        assert_eq!(curve.ease(3.0), 1.0);
        assert_eq!(curve.ease(f64::NAN), 0.0);

        let mut previous = 0.0;
        for i in 1..=100 {
            let value = curve.ease(i as f64 / 100.0);
            assert!(value >= previous - 1e-9, "{curve:?} dipped at {i}");
            previous = value;
        }
    }

    #[test]
    fn ease_out_front_loads_motion() {
        assert!(EASE_OUT.ease(0.5) > 0.5);
        assert!(CubicBezier::new(0.42, 0.0, 1.0, 1.0).ease(0.5) < 0.5);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let curve = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for x in [0.1, 0.25, 0.5, 0.9] {
            assert!((curve.ease(x) - x).abs() < 1e-6);
        }
    }
}
