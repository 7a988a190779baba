use crate::motion::spring::SpringConfig;

/// Frame clock period used by springs and entrance animations.
pub fn get_frame_interval_ms() -> u32 {
    option_env!("LIQUIDGLASS_FRAME_MS")
        .and_then(|ms| ms.parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(16)
}

pub fn get_log_level() -> log::Level {
    if let Some(level) = option_env!("LIQUIDGLASS_LOG_LEVEL").and_then(|l| l.parse().ok()) {
        return level;
    }
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Motion tuning shared through context by every animated component.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    pub progress_spring: SpringConfig,
    pub frame_interval_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            progress_spring: SpringConfig::default(),
            frame_interval_ms: get_frame_interval_ms(),
        }
    }
}

impl MotionConfig {
    pub fn frame_secs(&self) -> f64 {
        f64::from(self.frame_interval_ms) / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_progress_spring_tuning() {
        let cfg = MotionConfig::default();
        assert_eq!(cfg.progress_spring.stiffness, 180.0);
        assert_eq!(cfg.progress_spring.damping, 28.0);
        assert_eq!(cfg.progress_spring.mass, 0.8);
        assert!(cfg.frame_interval_ms > 0);
        assert!(cfg.frame_secs() > 0.0);
    }
}
