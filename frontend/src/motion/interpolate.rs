/// Clamp a progress value into `[0, 1]`. NaN maps to 0.
pub fn clamp_progress(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Ordered `(input, output)` control points of a piecewise-linear mapping.
///
/// Inputs must be non-decreasing. Sampling outside the covered domain returns
/// the nearest endpoint value; there is no extrapolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints<'a> {
    stops: &'a [(f64, f64)],
}

impl<'a> Breakpoints<'a> {
    pub const fn new(stops: &'a [(f64, f64)]) -> Self {
        Self { stops }
    }

    pub fn stops(&self) -> &'a [(f64, f64)] {
        self.stops
    }

    /// True when the table has at least one stop, every value is finite and
    /// inputs never decrease.
    pub fn is_well_formed(&self) -> bool {
        !self.stops.is_empty()
            && self
                .stops
                .iter()
                .all(|(p, v)| p.is_finite() && v.is_finite())
            && self.stops.windows(2).all(|pair| pair[0].0 <= pair[1].0)
    }

    /// Sample the mapping at `p`. Total for every `f64`, including NaN and the
    /// infinities.
    pub fn sample(&self, p: f64) -> f64 {
        let (Some(&(first_p, first_v)), Some(&(last_p, last_v))) =
            (self.stops.first(), self.stops.last())
        else {
            return 0.0;
        };

        if p.is_nan() || p <= first_p {
            return first_v;
        }
        if p >= last_p {
            return last_v;
        }

        for pair in self.stops.windows(2) {
            let (p0, v0) = pair[0];
            let (p1, v1) = pair[1];
            if p <= p1 {
                let span = p1 - p0;
                if span <= 0.0 {
                    return v1;
                }
                return v0 + (p - p0) / span * (v1 - v0);
            }
        }

        last_v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FALLING: Breakpoints<'static> = Breakpoints::new(&[(0.0, 1.0), (0.7, 0.25)]);
    const THREE_STOPS: Breakpoints<'static> =
        Breakpoints::new(&[(0.0, 0.0), (0.5, 10.0), (1.0, 4.0)]);

    #[rstest]
    #[case(-3.0, 0.0)]
    #[case(-0.0001, 0.0)]
    #[case(0.42, 0.42)]
    #[case(1.5, 1.0)]
    #[case(f64::INFINITY, 1.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(f64::NAN, 0.0)]
    fn clamps_progress_into_unit_range(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(clamp_progress(input), expected);
    }

    #[test]
    fn endpoints_are_exact() {
        for table in [FALLING, THREE_STOPS] {
            let stops = table.stops();
            let (p0, v0) = stops[0];
            let (pn, vn) = stops[stops.len() - 1];
            assert!((table.sample(p0) - v0).abs() < 1e-12);
            assert!((table.sample(pn) - vn).abs() < 1e-12);
        }
    }

    #[test]
    fn interior_breakpoint_is_hit() {
        assert!((THREE_STOPS.sample(0.5) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn clamps_outside_domain() {
        assert_eq!(FALLING.sample(-1.0), 1.0);
        assert_eq!(FALLING.sample(0.9), 0.25);
        assert_eq!(FALLING.sample(f64::INFINITY), 0.25);
        assert_eq!(FALLING.sample(f64::NEG_INFINITY), 1.0);
        assert_eq!(FALLING.sample(f64::NAN), 1.0);
    }

    #[test]
    fn monotonic_within_each_segment() {
        let mut previous = THREE_STOPS.sample(0.0);
        for i in 1..=50 {
            let value = THREE_STOPS.sample(i as f64 * 0.01);
            assert!(value >= previous, "rising segment dipped at step {i}");
            previous = value;
        }
        for i in 51..=100 {
            let value = THREE_STOPS.sample(i as f64 * 0.01);
            assert!(value <= previous, "falling segment rose at step {i}");
            previous = value;
        }
    }

    #[test]
    fn zero_width_segment_jumps_to_next_value() {
        let step = Breakpoints::new(&[(0.0, 0.0), (0.5, 0.0), (0.5, 1.0), (1.0, 1.0)]);
        assert!(step.is_well_formed());
        assert_eq!(step.sample(0.25), 0.0);
        assert_eq!(step.sample(0.75), 1.0);
    }

    #[test]
    fn single_stop_is_constant() {
        let flat = Breakpoints::new(&[(0.3, 7.0)]);
        assert_eq!(flat.sample(0.0), 7.0);
        assert_eq!(flat.sample(0.3), 7.0);
        assert_eq!(flat.sample(1.0), 7.0);
    }

    #[test]
    fn malformed_tables_are_detected() {
        assert!(!Breakpoints::new(&[]).is_well_formed());
        assert!(!Breakpoints::new(&[(0.5, 0.0), (0.1, 1.0)]).is_well_formed());
        assert!(!Breakpoints::new(&[(0.0, f64::NAN)]).is_well_formed());
        assert_eq!(Breakpoints::new(&[]).sample(0.5), 0.0);
    }
}
