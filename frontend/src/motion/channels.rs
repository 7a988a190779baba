//! Scroll-linked visual channels and their breakpoint tables.
//!
//! Region-local channels read raw progress. Only the page-wide progress bar is
//! smoothed, see [`crate::motion::spring`].

use super::interpolate::Breakpoints;

/// How a channel value is written into a style declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Ratio,
    Percent,
}

impl Unit {
    pub fn format(self, value: f64) -> String {
        match self {
            Unit::Px => format!("{value}px"),
            Unit::Ratio => format!("{value}"),
            Unit::Percent => format!("{value}%"),
        }
    }
}

/// A named output driven by one progress stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    breakpoints: Breakpoints<'static>,
    unit: Unit,
}

impl Channel {
    pub const fn new(stops: &'static [(f64, f64)], unit: Unit) -> Self {
        Self {
            breakpoints: Breakpoints::new(stops),
            unit,
        }
    }

    pub fn breakpoints(&self) -> Breakpoints<'static> {
        self.breakpoints
    }

    pub fn sample(&self, progress: f64) -> f64 {
        self.breakpoints.sample(progress)
    }

    /// The sampled value with its CSS unit, e.g. `"55%"`.
    pub fn css(&self, progress: f64) -> String {
        self.unit.format(self.sample(progress))
    }
}

pub const HERO_TRANSLATE_Y: Channel = Channel::new(&[(0.0, 0.0), (0.6, -160.0)], Unit::Px);
pub const HERO_OPACITY: Channel = Channel::new(&[(0.0, 1.0), (0.7, 0.25)], Unit::Ratio);
pub const HERO_SCALE: Channel = Channel::new(&[(0.0, 1.0), (0.7, 0.85)], Unit::Ratio);
pub const TIMELINE_FILL: Channel = Channel::new(&[(0.0, 10.0), (1.0, 100.0)], Unit::Percent);

/// Inline style for the hero glass panel at the given hero progress.
pub fn hero_panel_style(progress: f64) -> String {
    format!(
        "transform: translateY({}) scale({}); opacity: {};",
        HERO_TRANSLATE_Y.css(progress),
        HERO_SCALE.css(progress),
        HERO_OPACITY.css(progress),
    )
}

/// Inline style for the page progress bar at a (smoothed) page progress.
pub fn progress_bar_style(progress: f64) -> String {
    format!(
        "transform: scaleX({});",
        super::interpolate::clamp_progress(progress)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn all_channels_are_well_formed() {
        for channel in [HERO_TRANSLATE_Y, HERO_OPACITY, HERO_SCALE, TIMELINE_FILL] {
            assert!(channel.breakpoints().is_well_formed());
        }
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.3, -80.0)]
    #[case(0.6, -160.0)]
    #[case(0.9, -160.0)]
    fn hero_translation(#[case] progress: f64, #[case] expected: f64) {
        assert!((HERO_TRANSLATE_Y.sample(progress) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0, "10%")]
    #[case(0.5, "55%")]
    #[case(1.0, "100%")]
    fn timeline_fill(#[case] progress: f64, #[case] expected: &str) {
        assert_eq!(TIMELINE_FILL.css(progress), expected);
    }

    #[test]
    fn hero_fades_and_shrinks_then_holds() {
        assert_eq!(HERO_OPACITY.sample(0.0), 1.0);
        assert!((HERO_OPACITY.sample(0.7) - 0.25).abs() < 1e-12);
        assert!((HERO_OPACITY.sample(1.0) - 0.25).abs() < 1e-12);
        assert_eq!(HERO_SCALE.sample(0.0), 1.0);
        assert!((HERO_SCALE.sample(0.35) - 0.925).abs() < 1e-9);
        assert!((HERO_SCALE.sample(1.0) - 0.85).abs() < 1e-12);
    }

    #[test]
    fn styles_render_units() {
        assert_eq!(
            hero_panel_style(0.0),
            "transform: translateY(0px) scale(1); opacity: 1;"
        );
        assert_eq!(progress_bar_style(1.4), "transform: scaleX(1);");
        assert_eq!(progress_bar_style(0.5), "transform: scaleX(0.5);");
    }
}
