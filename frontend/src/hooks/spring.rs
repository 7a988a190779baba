use yew::prelude::*;

use super::use_frame_clock;
use crate::config::MotionConfig;
use crate::motion::spring::{Spring, SpringConfig};

/// Follow `target` through a damped spring. The frame clock only runs while
/// the spring is moving.
#[hook]
pub fn use_spring_value(target: f64, cfg: SpringConfig) -> f64 {
    let frame_secs = use_context::<MotionConfig>()
        .unwrap_or_default()
        .frame_secs();
    let spring = use_mut_ref(|| Spring::new(cfg, target));
    let last_frame = use_mut_ref(|| None::<f64>);
    let value = use_state_eq(|| target);
    let running = use_state_eq(|| false);

    {
        let spring = spring.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |target| {
                let mut spring = spring.borrow_mut();
                spring.set_target(*target);
                running.set(!spring.is_at_rest());
                || ()
            },
            target,
        );
    }

    let on_frame = {
        let running = running.clone();
        let value = value.clone();
        Callback::from(move |now: f64| {
            let previous = last_frame.borrow_mut().replace(now);
            let dt = previous.map_or(frame_secs, |prev| now - prev);
            let mut spring = spring.borrow_mut();
            value.set(spring.step(dt));
            if spring.is_at_rest() {
                last_frame.borrow_mut().take();
                running.set(false);
            }
        })
    };
    use_frame_clock(*running, on_frame);

    *value
}
