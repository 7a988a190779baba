/// Physical parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    /// Tuning for the page progress bar.
    fn default() -> Self {
        Self {
            stiffness: 180.0,
            damping: 28.0,
            mass: 0.8,
            rest_delta: 0.005,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    /// Damping ratio; above 1 the response never oscillates.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Integration step upper bound, in seconds.
const SUBSTEP_SECS: f64 = 0.001;
/// Longest frame delta fed into the integrator, in seconds. Longer gaps (a
/// backgrounded tab) are treated as this long.
pub const MAX_FRAME_SECS: f64 = 0.1;

/// A scalar that follows its target through a damped spring.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    cfg: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl Spring {
    /// A spring resting at `initial`.
    pub fn new(cfg: SpringConfig, initial: f64) -> Self {
        Self {
            cfg,
            position: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retarget without resetting position or velocity.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.target = target;
        self.at_rest = false;
    }

    /// Advance by `dt` seconds and return the new position.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.at_rest {
            return self.position;
        }

        let mut remaining = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_SECS)
        } else {
            0.0
        };
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.cfg;
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let accel = (-stiffness * (self.position - self.target) - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.position - self.target).abs() <= self.cfg.rest_delta
            && self.velocity.abs() <= self.cfg.rest_speed
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        self.position
    }
}
