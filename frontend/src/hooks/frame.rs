use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::MotionConfig;
use crate::utils::dom;

/// Emit the current time in seconds on every frame while `running`.
///
/// The interval is dropped, and so cancelled, as soon as `running` turns false
/// or the component unmounts.
///
/// Frames come from a fixed `gloo_timers` interval (16 ms unless
/// `LIQUIDGLASS_FRAME_MS` says otherwise), not from the host's paint cadence.
/// On high refresh displays motion is sampled below the paint rate, and a
/// throttled tab simply delivers fewer, longer frames.
#[hook]
pub fn use_frame_clock(running: bool, on_frame: Callback<f64>) {
    let interval_ms = use_context::<MotionConfig>()
        .unwrap_or_default()
        .frame_interval_ms;

    use_effect_with_deps(
        move |(running, interval_ms)| {
            let interval = running
                .then(|| Interval::new(*interval_ms, move || on_frame.emit(dom::now_secs())));
            move || drop(interval)
        },
        (running, interval_ms),
    );
}
