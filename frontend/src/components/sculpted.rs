use yew::prelude::*;

/// Static "sculpted glass" showcase with a mock live-feedback card.
#[function_component(SculptedPanel)]
pub fn sculpted_panel() -> Html {
    let css = r#"
        .sculpted-frame {
            width: 100%;
            max-width: 64rem;
            margin: 0 auto;
            padding: 0.25rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 46px;
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(40px);
        }
        .sculpted-inner {
            display: flex;
            flex-wrap: wrap;
            justify-content: space-between;
            gap: 2.5rem;
            padding: 2.5rem 1.5rem;
            border-radius: 42px;
            background: rgba(0, 0, 0, 0.4);
        }
        .sculpted-copy {
            max-width: 36rem;
        }
        .sculpted-copy h2 {
            font-size: 2rem;
            line-height: 1.2;
        }
        .sculpted-copy p {
            color: rgba(255, 255, 255, 0.65);
        }
        .feedback-card {
            display: flex;
            width: 100%;
            max-width: 24rem;
            height: 18rem;
            flex-direction: column;
            justify-content: space-between;
            padding: 1.5rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 36px;
            background: linear-gradient(135deg, rgba(255, 255, 255, 0.15), rgba(255, 255, 255, 0.05), transparent);
        }
        .feedback-title {
            margin: 0;
            font-size: 1.5rem;
            font-weight: 600;
        }
        .ripple {
            position: relative;
            overflow: hidden;
            padding: 1.25rem;
            border-radius: 1.5rem;
            background: rgba(0, 0, 0, 0.6);
        }
        .ripple-row {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-top: 1rem;
        }
        .ripple-dot {
            display: flex;
            width: 2.5rem;
            height: 2.5rem;
            align-items: center;
            justify-content: center;
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.1);
        }
        .ripple-dot span {
            width: 0.5rem;
            height: 0.5rem;
            border-radius: 9999px;
            background: #7dd3fc;
        }
    "#;

    html! {
        <section class="section">
            <style>{css}</style>
            <div class="sculpted-frame">
                <div class="sculpted-inner">
                    <div class="sculpted-copy">
                        <p class="eyebrow">{"Sculpted glass"}</p>
                        <h2>{"Precision layers that feel like a living surface."}</h2>
                        <p>
                            {"Inspired by Apple's liquid design language, the surface reflects the world in gradients of light. Each swipe triggers a fluid response in the UI that follows your motion."}
                        </p>
                    </div>
                    <div class="feedback-card glass-panel">
                        <span class="caption">{"Live feedback"}</span>
                        <div>
                            <p class="feedback-title">{"Adaptive tone"}</p>
                            <p class="caption">{"in 18 ms"}</p>
                        </div>
                        <div class="ripple">
                            <span>{"Touch ripple"}</span>
                            <div class="ripple-row">
                                <span class="ripple-dot"><span /></span>
                                <div>
                                    <p>{"Gesture intensity"}</p>
                                    <p class="caption">{"adaptive curve"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
