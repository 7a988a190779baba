//! One-shot entrance animations.
//!
//! Every block starts offset and transparent, fades and rises into place the
//! first time it qualifies, and never replays for the rest of the page load.

use super::easing::{CubicBezier, EASE_OUT};

/// Visible fractions this close below the amount still count; hosts report
/// ratios that land a hair under the threshold they fired for.
const VISIBILITY_SLACK: f64 = 1e-3;

/// What starts an entrance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// As soon as the element mounts.
    Mount,
    /// The first time at least `amount` of the element is visible.
    InView { amount: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceConfig {
    /// Initial downward offset in pixels.
    pub offset_y: f64,
    pub trigger: Trigger,
    /// Seconds between triggering and the start of motion.
    pub delay: f64,
    /// Seconds of motion.
    pub duration: f64,
    pub easing: CubicBezier,
}

impl EntranceConfig {
    pub const fn in_view(offset_y: f64, amount: f64, delay: f64, duration: f64) -> Self {
        Self {
            offset_y,
            trigger: Trigger::InView { amount },
            delay,
            duration,
            easing: EASE_OUT,
        }
    }

    /// Seconds from triggering until settled.
    pub fn total(&self) -> f64 {
        self.delay.max(0.0) + self.duration.max(0.0)
    }

    pub fn feature_card(index: usize) -> Self {
        Self::in_view(40.0, 0.3, index as f64 * 0.08, 0.7)
    }

    pub fn experience_panel(index: usize) -> Self {
        Self::in_view(50.0, 0.35, index as f64 * 0.1, 0.75)
    }

    pub fn timeline_entry(index: usize) -> Self {
        Self::in_view(40.0, 0.45, index as f64 * 0.12, 0.7)
    }

    pub fn gallery_frame() -> Self {
        Self::in_view(40.0, 0.35, 0.0, 0.75)
    }

    pub fn hero_intro() -> Self {
        Self {
            offset_y: 40.0,
            trigger: Trigger::Mount,
            delay: 0.6,
            duration: 0.9,
            easing: EASE_OUT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntranceState {
    NotTriggered,
    Animating { started_at: f64 },
    Settled,
}

/// Sampled style of an entrance element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceStyle {
    pub opacity: f64,
    pub y: f64,
}

impl EntranceStyle {
    pub const SETTLED: EntranceStyle = EntranceStyle { opacity: 1.0, y: 0.0 };

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity, self.y
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntranceAnimation {
    cfg: EntranceConfig,
    state: EntranceState,
}

impl EntranceAnimation {
    pub fn new(cfg: EntranceConfig) -> Self {
        Self {
            cfg,
            state: EntranceState::NotTriggered,
        }
    }

    pub fn config(&self) -> &EntranceConfig {
        &self.cfg
    }

    pub fn state(&self) -> EntranceState {
        self.state
    }

    /// Start animating at `now` (seconds). Returns true only on the single
    /// `NotTriggered -> Animating` transition.
    pub fn trigger(&mut self, now: f64) -> bool {
        if self.state != EntranceState::NotTriggered {
            return false;
        }
        self.state = EntranceState::Animating { started_at: now };
        true
    }

    /// Feed a visibility report. Fires when the visible fraction first reaches
    /// the configured amount; mount-triggered entrances ignore it.
    pub fn observe(&mut self, visible_fraction: f64, now: f64) -> bool {
        match self.cfg.trigger {
            Trigger::InView { amount } if visible_fraction + VISIBILITY_SLACK >= amount => {
                self.trigger(now)
            }
            _ => false,
        }
    }

    /// Jump straight to the final style, e.g. when the host cannot report
    /// visibility.
    pub fn settle(&mut self) {
        self.state = EntranceState::Settled;
    }

    /// Advance the clock; `Animating` becomes `Settled` once the delay and
    /// duration have both elapsed.
    pub fn tick(&mut self, now: f64) -> EntranceState {
        if let EntranceState::Animating { started_at } = self.state {
            if now - started_at >= self.cfg.total() {
                self.state = EntranceState::Settled;
            }
        }
        self.state
    }

    pub fn style_at(&self, now: f64) -> EntranceStyle {
        let initial = EntranceStyle {
            opacity: 0.0,
            y: self.cfg.offset_y,
        };
        match self.state {
            EntranceState::NotTriggered => initial,
            EntranceState::Settled => EntranceStyle::SETTLED,
            EntranceState::Animating { started_at } => {
                let elapsed = now - started_at - self.cfg.delay.max(0.0);
                if elapsed <= 0.0 {
                    return initial;
                }
                let linear = if self.cfg.duration > 0.0 {
                    elapsed / self.cfg.duration
                } else {
                    1.0
                };
                let eased = self.cfg.easing.ease(linear);
                EntranceStyle {
                    opacity: eased,
                    y: self.cfg.offset_y * (1.0 - eased),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_across_repeated_visibility_cycles() {
        let mut anim = EntranceAnimation::new(EntranceConfig::feature_card(0));
        let mut fired = 0;
        let mut now = 0.0;
        for _ in 0..5 {
            for fraction in [0.0, 0.1, 0.5, 1.0, 0.4, 0.0] {
                if anim.observe(fraction, now) {
                    fired += 1;
                }
                now += 0.05;
                anim.tick(now);
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(anim.state(), EntranceState::Settled);
    }

    #[test]
    fn below_threshold_does_not_trigger() {
        let mut anim = EntranceAnimation::new(EntranceConfig::timeline_entry(0));
        assert!(!anim.observe(0.44, 1.0));
        assert!(!anim.observe(f64::NAN, 1.5));
        assert_eq!(anim.state(), EntranceState::NotTriggered);
        assert!(anim.observe(0.4499, 2.0));
        assert_eq!(anim.state(), EntranceState::Animating { started_at: 2.0 });
    }

    #[test]
    fn mount_trigger_ignores_visibility() {
        let mut anim = EntranceAnimation::new(EntranceConfig::hero_intro());
        assert!(!anim.observe(1.0, 0.0));
        assert!(anim.trigger(0.0));
        assert!(!anim.trigger(0.1));
    }

    #[test]
    fn holds_initial_style_through_delay() {
        let mut anim = EntranceAnimation::new(EntranceConfig::hero_intro());
        assert_eq!(anim.style_at(0.0), EntranceStyle { opacity: 0.0, y: 40.0 });

        anim.trigger(10.0);
        assert_eq!(anim.style_at(10.3), EntranceStyle { opacity: 0.0, y: 40.0 });
        assert_eq!(anim.tick(10.3), EntranceState::Animating { started_at: 10.0 });

        let mid = anim.style_at(10.6 + 0.45);
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.y > 0.0 && mid.y < 20.0);
    }

    #[test]
    fn settles_at_delay_plus_duration() {
        let mut anim = EntranceAnimation::new(EntranceConfig::experience_panel(2));
        let cfg = *anim.config();
        assert!((cfg.delay - 0.2).abs() < 1e-12);

        anim.trigger(0.0);
        assert!(matches!(anim.tick(cfg.total() - 0.01), EntranceState::Animating { .. }));
        assert_eq!(anim.tick(cfg.total()), EntranceState::Settled);
        assert_eq!(anim.style_at(cfg.total()), EntranceStyle::SETTLED);

        // settled is terminal
        assert!(!anim.trigger(5.0));
        assert!(!anim.observe(1.0, 5.0));
        assert_eq!(anim.tick(100.0), EntranceState::Settled);
    }

    #[test]
    fn rises_monotonically_while_animating() {
        let mut anim = EntranceAnimation::new(EntranceConfig::gallery_frame());
        anim.trigger(0.0);
        let mut previous = anim.style_at(0.0);
        for i in 1..=75 {
            let style = anim.style_at(i as f64 * 0.01);
            assert!(style.opacity >= previous.opacity - 1e-9);
            assert!(style.y <= previous.y + 1e-9);
            previous = style;
        }
        assert!((previous.opacity - 1.0).abs() < 1e-9);
        assert!(previous.y.abs() < 1e-9);
    }

    #[test]
    fn settle_skips_the_transition() {
        let mut anim = EntranceAnimation::new(EntranceConfig::feature_card(1));
        anim.settle();
        assert_eq!(anim.style_at(0.0), EntranceStyle::SETTLED);
        assert!(!anim.observe(1.0, 0.0));
    }

    #[test]
    fn staggered_delays_grow_with_index() {
        let delays: Vec<f64> = (0..3).map(|i| EntranceConfig::feature_card(i).delay).collect();
        assert_eq!(delays[0], 0.0);
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
        assert!((EntranceConfig::timeline_entry(2).delay - 0.24).abs() < 1e-12);
    }

    #[test]
    fn every_preset_eases_out() {
        let presets = [
            EntranceConfig::feature_card(0),
            EntranceConfig::experience_panel(1),
            EntranceConfig::timeline_entry(2),
            EntranceConfig::gallery_frame(),
            EntranceConfig::hero_intro(),
        ];
        assert!(presets.iter().all(|cfg| cfg.easing == EASE_OUT));
    }

    #[test]
    fn css_renders_offset() {
        assert_eq!(
            EntranceStyle { opacity: 0.0, y: 40.0 }.css(),
            "opacity: 0; transform: translateY(40px);"
        );
    }
}
