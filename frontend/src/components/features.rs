use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::FEATURES;
use crate::motion::entrance::EntranceConfig;

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    let css = r#"
        .feature-card {
            position: relative;
            display: flex;
            flex-direction: column;
            gap: 1.25rem;
            padding: 2.25rem 1.5rem;
            overflow: hidden;
            text-align: left;
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 32px;
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(40px);
        }
        .feature-card h3 {
            margin: 0;
            font-size: 1.5rem;
            font-weight: 600;
        }
        .feature-card p {
            margin: 0;
            font-size: 0.9rem;
            line-height: 1.6;
            color: rgba(255, 255, 255, 0.7);
        }
        .feature-sheen {
            position: absolute;
            right: -2rem;
            top: -2.5rem;
            width: 7rem;
            height: 7rem;
            border-radius: 9999px;
            background: linear-gradient(135deg, rgba(255, 255, 255, 0.4), rgba(255, 255, 255, 0.05), transparent);
            filter: blur(20px);
        }
    "#;

    html! {
        <section class="section">
            <style>{css}</style>
            <div class="section-heading">
                <span class="eyebrow">{"Features"}</span>
                <h2>{"A liquid glass story told in motion."}</h2>
                <p>
                    {"Scroll to reveal how LiquidGlass reacts. Each moment unfolds with a weighted animation that guides your focus and invites touch."}
                </p>
            </div>
            <div class="card-grid">
                { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                    <Reveal key={feature.title} entrance={EntranceConfig::feature_card(index)} class="feature-card">
                        <span class="caption">{feature.metric}</span>
                        <h3>{feature.title}</h3>
                        <p>{feature.description}</p>
                        <span class="caption">{feature.footnote}</span>
                        <div class="feature-sheen" />
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
