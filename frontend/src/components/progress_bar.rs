use yew::prelude::*;

use crate::config::MotionConfig;
use crate::hooks::use_spring_value;
use crate::motion::channels::progress_bar_style;

#[derive(Properties, PartialEq)]
pub struct ScrollProgressBarProps {
    /// Raw page progress; smoothed here before it reaches the bar.
    pub progress: f64,
}

#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar(props: &ScrollProgressBarProps) -> Html {
    let cfg = use_context::<MotionConfig>().unwrap_or_default();
    let smoothed = use_spring_value(props.progress, cfg.progress_spring);

    let css = r#"
        .scroll-progress {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            height: 3px;
            z-index: 50;
            transform-origin: 0% 50%;
            background: linear-gradient(90deg, #7dd3fc, #ffffff, #f9a8d4);
            box-shadow: 0 0 12px rgba(125, 211, 252, 0.6);
        }
    "#;

    html! {
        <>
            <style>{css}</style>
            <span class="scroll-progress" style={progress_bar_style(smoothed)} />
        </>
    }
}
