//! Scroll progress through an observation window.
//!
//! A window is defined by two intersections: the scroll position at which a
//! point on the target meets a point on the viewport (progress 0), and a
//! second such position (progress 1). Edges are fractions of the respective
//! box, so `"start 80%"` means "target top meets the line 80% down the
//! viewport".

use std::fmt;
use std::str::FromStr;

use super::interpolate::clamp_progress;
use crate::error::OffsetParseError;

/// A point along one axis of a box, as a fraction of its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = OffsetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Edge::Start),
            "center" => Ok(Edge::Center),
            "end" => Ok(Edge::End),
            _ => {
                let parsed = match s.strip_suffix('%') {
                    Some(percent) => percent.parse::<f64>().map(|p| p / 100.0),
                    None => s.parse::<f64>(),
                };
                match parsed {
                    Ok(f) if f.is_finite() => Ok(Edge::Fraction(f)),
                    _ => Err(OffsetParseError::UnknownEdge(s.to_string())),
                }
            }
        }
    }
}

/// Target edge meeting container edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: Edge,
    pub container: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Scroll offset at which this intersection happens.
    fn scroll_px(&self, region: RegionMetrics, viewport_height: f64) -> f64 {
        region.offset_top + self.target.fraction() * region.height
            - self.container.fraction() * viewport_height
    }
}

impl FromStr for Intersection {
    type Err = OffsetParseError;

    /// `"start 80%"` or a single edge applied to both boxes (`"end"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err(OffsetParseError::Empty),
            [both] => {
                let edge = both.parse()?;
                Ok(Intersection::new(edge, edge))
            }
            [target, container] => Ok(Intersection::new(target.parse()?, container.parse()?)),
            _ => Err(OffsetParseError::TooManyEdges(s.to_string())),
        }
    }
}

/// Observation window of a scroll region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffset {
    /// `start start` → `end end`: the whole target scrolls through.
    pub const PAGE: ScrollOffset = ScrollOffset {
        start: Intersection::new(Edge::Start, Edge::Start),
        end: Intersection::new(Edge::End, Edge::End),
    };

    /// `start start` → `end start`: the target scrolls out past the top.
    pub const EXIT: ScrollOffset = ScrollOffset {
        start: Intersection::new(Edge::Start, Edge::Start),
        end: Intersection::new(Edge::End, Edge::Start),
    };

    /// `start 80%` → `end start`.
    pub const TIMELINE: ScrollOffset = ScrollOffset {
        start: Intersection::new(Edge::Start, Edge::Fraction(0.8)),
        end: Intersection::new(Edge::End, Edge::Start),
    };

    pub fn parse(start: &str, end: &str) -> Result<Self, OffsetParseError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Start => write!(f, "start"),
            Edge::Center => write!(f, "center"),
            Edge::End => write!(f, "end"),
            Edge::Fraction(v) => write!(f, "{}%", v * 100.0),
        }
    }
}

/// Layout of a region in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionMetrics {
    pub offset_top: f64,
    pub height: f64,
}

impl RegionMetrics {
    /// Build from a viewport-relative top (as reported by a bounding rect) and
    /// the current scroll offset.
    pub fn from_viewport_top(top: f64, height: f64, scroll_y: f64) -> Self {
        Self {
            offset_top: top + scroll_y,
            height,
        }
    }

    fn is_laid_out(&self) -> bool {
        self.offset_top.is_finite() && self.height.is_finite() && self.height > 0.0
    }
}

/// Cached anchor pixels for one region.
///
/// Scroll events only read the cache; anything that can move the anchors
/// (resize, reflow) must call [`ScrollTrack::measure`] again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollTrack {
    span: Option<(f64, f64)>,
}

impl ScrollTrack {
    pub fn measure(&mut self, offset: &ScrollOffset, region: RegionMetrics, viewport_height: f64) {
        self.span = None;
        if !region.is_laid_out() || !viewport_height.is_finite() {
            return;
        }
        let start = offset.start.scroll_px(region, viewport_height);
        let end = offset.end.scroll_px(region, viewport_height);
        if end > start {
            self.span = Some((start, end));
        }
    }

    pub fn invalidate(&mut self) {
        self.span = None;
    }

    pub fn is_measured(&self) -> bool {
        self.span.is_some()
    }

    /// Progress in `[0, 1]`; 0 while unmeasured.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        match self.span {
            Some((start, end)) if scroll_y.is_finite() => {
                clamp_progress((scroll_y - start) / (end - start))
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const VIEWPORT: f64 = 800.0;

    fn measured(offset: ScrollOffset, offset_top: f64, height: f64) -> ScrollTrack {
        let mut track = ScrollTrack::default();
        track.measure(&offset, RegionMetrics { offset_top, height }, VIEWPORT);
        track
    }

    #[test]
    fn exit_window_runs_from_top_to_bottom_edge() {
        let track = measured(ScrollOffset::EXIT, 0.0, 880.0);
        assert_eq!(track.progress(0.0), 0.0);
        assert!((track.progress(440.0) - 0.5).abs() < 1e-12);
        assert_eq!(track.progress(880.0), 1.0);
        assert_eq!(track.progress(5000.0), 1.0);
    }

    #[test]
    fn page_window_ends_when_bottom_meets_bottom() {
        let track = measured(ScrollOffset::PAGE, 0.0, 4800.0);
        assert_eq!(track.progress(0.0), 0.0);
        assert!((track.progress(2000.0) - 0.5).abs() < 1e-12);
        assert_eq!(track.progress(4000.0), 1.0);
    }

    #[test]
    fn timeline_window_starts_below_viewport_top() {
        // start: 2000 - 0.8 * 800 = 1360, end: 2000 + 600 = 2600
        let track = measured(ScrollOffset::TIMELINE, 2000.0, 600.0);
        assert_eq!(track.progress(1000.0), 0.0);
        assert_eq!(track.progress(1360.0), 0.0);
        assert!((track.progress(1980.0) - 0.5).abs() < 1e-12);
        assert_eq!(track.progress(2600.0), 1.0);
    }

    #[test]
    fn progress_is_always_clamped() {
        let track = measured(ScrollOffset::EXIT, 100.0, 500.0);
        for scroll in [-1e9, -50.0, 0.0, 99.0, 350.0, 600.0, 1e9] {
            let p = track.progress(scroll);
            assert!((0.0..=1.0).contains(&p), "{p} out of range at {scroll}");
        }
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(0.0, f64::NAN)]
    #[case(f64::NAN, 400.0)]
    fn unlaid_regions_report_zero(#[case] offset_top: f64, #[case] height: f64) {
        let track = measured(ScrollOffset::EXIT, offset_top, height);
        assert!(!track.is_measured());
        assert_eq!(track.progress(300.0), 0.0);
    }

    #[test]
    fn unmeasured_and_inverted_windows_report_zero() {
        assert_eq!(ScrollTrack::default().progress(250.0), 0.0);

        // A page shorter than the viewport never scrolls: start 0, end -400.
        let track = measured(ScrollOffset::PAGE, 0.0, 400.0);
        assert!(!track.is_measured());
        assert_eq!(track.progress(10.0), 0.0);

        let track = measured(ScrollOffset::EXIT, 0.0, 500.0);
        assert_eq!(track.progress(f64::NAN), 0.0);
    }

    #[test]
    fn remeasuring_after_reflow_moves_anchors() {
        let mut track = measured(ScrollOffset::EXIT, 0.0, 1000.0);
        assert!((track.progress(500.0) - 0.5).abs() < 1e-12);

        track.measure(
            &ScrollOffset::EXIT,
            RegionMetrics {
                offset_top: 0.0,
                height: 2000.0,
            },
            VIEWPORT,
        );
        assert!((track.progress(500.0) - 0.25).abs() < 1e-12);

        track.invalidate();
        assert_eq!(track.progress(500.0), 0.0);
    }

    #[test]
    fn moved_region_changes_progress_once_remeasured() {
        let mut track = measured(ScrollOffset::TIMELINE, 2000.0, 600.0);
        assert!((track.progress(1980.0) - 0.5).abs() < 1e-12);

        // content above grew by 300px, viewport unchanged
        let moved = RegionMetrics::from_viewport_top(2300.0 - 1980.0, 600.0, 1980.0);
        assert_eq!(moved.offset_top, 2300.0);
        track.measure(&ScrollOffset::TIMELINE, moved, VIEWPORT);
        let expected = (1980.0 - 1660.0) / (2900.0 - 1660.0);
        assert!((track.progress(1980.0) - expected).abs() < 1e-12);
        let fill = crate::motion::channels::TIMELINE_FILL.sample(track.progress(1980.0));
        assert!((fill - 33.2).abs() < 0.1);
    }

    #[test]
    fn metrics_from_bounding_rect() {
        let metrics = RegionMetrics::from_viewport_top(-120.0, 600.0, 1500.0);
        assert_eq!(metrics.offset_top, 1380.0);
        assert_eq!(metrics.height, 600.0);
    }

    #[rstest]
    #[case("start 80%", Intersection::new(Edge::Start, Edge::Fraction(0.8)))]
    #[case("end end", Intersection::new(Edge::End, Edge::End))]
    #[case("center 0.25", Intersection::new(Edge::Center, Edge::Fraction(0.25)))]
    #[case("end", Intersection::new(Edge::End, Edge::End))]
    fn parses_intersections(#[case] input: &str, #[case] expected: Intersection) {
        assert_eq!(input.parse::<Intersection>(), Ok(expected));
    }

    #[test]
    fn named_offsets_match_their_definitions() {
        assert_eq!(
            ScrollOffset::parse("start 80%", "end start"),
            Ok(ScrollOffset::TIMELINE)
        );
        assert_eq!(ScrollOffset::parse("start start", "end end"), Ok(ScrollOffset::PAGE));
        assert_eq!(ScrollOffset::parse("start start", "end start"), Ok(ScrollOffset::EXIT));
    }

    #[test]
    fn rejects_malformed_offsets() {
        assert_eq!("".parse::<Intersection>(), Err(OffsetParseError::Empty));
        assert_eq!(
            "middle 80%".parse::<Intersection>(),
            Err(OffsetParseError::UnknownEdge("middle".to_string()))
        );
        assert_eq!(
            "start end start".parse::<Intersection>(),
            Err(OffsetParseError::TooManyEdges("start end start".to_string()))
        );
        assert!(matches!(
            "start abc%".parse::<Intersection>(),
            Err(OffsetParseError::UnknownEdge(_))
        ));
    }

    #[test]
    fn edges_display_like_their_source() {
        assert_eq!(Edge::Start.to_string(), "start");
        assert_eq!(Edge::Fraction(0.5).to_string(), "50%");
    }
}
