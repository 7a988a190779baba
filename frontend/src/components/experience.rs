use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::EXPERIENCE_MOMENTS;
use crate::motion::entrance::EntranceConfig;

#[function_component(ExperienceGrid)]
pub fn experience_grid() -> Html {
    let css = r#"
        .moment {
            padding: 1px;
            overflow: hidden;
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 36px;
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(40px);
        }
        .moment-inner {
            position: relative;
            display: flex;
            height: 18rem;
            flex-direction: column;
            gap: 1rem;
            padding: 2rem;
            overflow: hidden;
            border-radius: 32px;
            background-color: rgba(0, 0, 0, 0.6);
        }
        .moment-index {
            display: flex;
            align-items: center;
            gap: 0.75rem;
        }
        .moment-index .rule {
            height: 1px;
            flex: 1;
            background: rgba(255, 255, 255, 0.2);
        }
        .moment-inner h3 {
            margin: 0;
            font-size: 1.5rem;
        }
        .moment-inner p {
            margin: auto 0 0;
            font-size: 0.9rem;
            line-height: 1.6;
            color: rgba(255, 255, 255, 0.7);
        }
    "#;

    html! {
        <section class="section">
            <style>{css}</style>
            <div class="section-heading">
                <span class="eyebrow">{"Immersion"}</span>
                <h2>{"Motion crafted for a fluid, glassy moment."}</h2>
            </div>
            <div class="card-grid">
                { for EXPERIENCE_MOMENTS.iter().enumerate().map(|(index, moment)| html! {
                    <Reveal key={moment.heading} entrance={EntranceConfig::experience_panel(index)} class="moment">
                        <div class="moment-inner" style={format!("background-image: {};", moment.tint)}>
                            <div class="moment-index caption">
                                <span>{"LiquidGlass"}</span>
                                <span class="rule" />
                                <span>{format!("0{}", index + 1)}</span>
                            </div>
                            <h3>{moment.heading}</h3>
                            <p>{moment.copy}</p>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
