use yew::prelude::*;

use super::use_frame_clock;
use crate::motion::entrance::{EntranceAnimation, EntranceConfig, EntranceState, EntranceStyle, Trigger};
use crate::utils::dom::{self, VisibilityObserver};

/// Drive a one-shot entrance for the element behind `node` and return its
/// current style.
///
/// In-view entrances observe visibility only until they trigger; the observer
/// is disconnected afterwards so the animation can never replay.
#[hook]
pub fn use_entrance(node: NodeRef, cfg: EntranceConfig) -> EntranceStyle {
    let anim = use_mut_ref(|| EntranceAnimation::new(cfg));
    let style = use_state_eq(|| anim.borrow().style_at(0.0));
    let phase = use_state_eq(|| anim.borrow().state());
    let waiting = matches!(*phase, EntranceState::NotTriggered);

    {
        let anim = anim.clone();
        let style = style.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |(node, waiting)| {
                let mut observer = None;
                if *waiting {
                    match cfg.trigger {
                        Trigger::Mount => {
                            if anim.borrow_mut().trigger(dom::now_secs()) {
                                phase.set(anim.borrow().state());
                            }
                        }
                        Trigger::InView { amount } => {
                            let on_fraction = {
                                let anim = anim.clone();
                                let phase = phase.clone();
                                move |fraction: f64| {
                                    let mut anim = anim.borrow_mut();
                                    if anim.observe(fraction, dom::now_secs()) {
                                        log::debug!("Entrance triggered at {:.2} visible", fraction);
                                        phase.set(anim.state());
                                    }
                                }
                            };
                            match dom::element(node)
                                .and_then(|el| VisibilityObserver::observe(&el, amount, on_fraction))
                            {
                                Ok(obs) => observer = Some(obs),
                                Err(e) => {
                                    log::warn!("Visibility observer unavailable, showing content: {}", e);
                                    let mut anim = anim.borrow_mut();
                                    anim.settle();
                                    style.set(EntranceStyle::SETTLED);
                                    phase.set(anim.state());
                                }
                            }
                        }
                    }
                }
                move || drop(observer)
            },
            (node, waiting),
        );
    }

    let on_frame = {
        let style = style.clone();
        let phase = phase.clone();
        Callback::from(move |now: f64| {
            let mut anim = anim.borrow_mut();
            let state = anim.tick(now);
            style.set(anim.style_at(now));
            phase.set(state);
        })
    };
    use_frame_clock(matches!(*phase, EntranceState::Animating { .. }), on_frame);

    *style
}
