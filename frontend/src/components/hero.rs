use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{HeroStat, HERO_STATS};
use crate::hooks::use_scroll_progress;
use crate::motion::channels::{hero_panel_style, HERO_OPACITY};
use crate::motion::entrance::EntranceConfig;
use crate::motion::progress::ScrollOffset;

#[derive(Properties, PartialEq)]
struct HeroStatCardProps {
    stat: HeroStat,
}

#[function_component(HeroStatCard)]
fn hero_stat_card(props: &HeroStatCardProps) -> Html {
    html! {
        <div class="hero-stat">
            <span class="hero-stat-value">{props.stat.value}</span>
            <span class="hero-stat-label">{props.stat.label}</span>
            <span class="hero-stat-glint" />
        </div>
    }
}

/// Opening section. The glass panel drifts up, fades and shrinks as the
/// section scrolls out of view.
#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), ScrollOffset::EXIT);

    let css = r#"
        .hero {
            position: relative;
            display: flex;
            min-height: 110vh;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            padding: 8rem 1.5rem 4rem;
        }
        .hero-glow {
            position: absolute;
            left: 50%;
            top: 33%;
            width: 640px;
            height: 640px;
            transform: translate(-50%, -50%);
            border-radius: 9999px;
            background: radial-gradient(circle, rgba(255, 255, 255, 0.25), transparent 65%);
            filter: blur(40px);
            pointer-events: none;
        }
        .hero-panel {
            position: relative;
            display: flex;
            width: 100%;
            max-width: 72rem;
            flex-direction: column;
            align-items: center;
            gap: 3.5rem;
            padding: 4rem 2rem;
            text-align: center;
            border-radius: 48px;
            overflow: hidden;
            box-shadow: 0 60px 120px rgba(15, 12, 60, 0.55);
            will-change: transform, opacity;
        }
        .hero-copy {
            display: flex;
            max-width: 48rem;
            flex-direction: column;
            gap: 1.5rem;
        }
        .hero-copy h1 {
            margin: 0;
            font-size: clamp(2.25rem, 6vw, 3.75rem);
            font-weight: 500;
            line-height: 1.05;
            letter-spacing: -0.02em;
        }
        .hero-copy p {
            margin: 0;
            font-size: 1.15rem;
            color: rgba(255, 255, 255, 0.7);
        }
        .hero-actions {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1rem;
        }
        .hero-button {
            border-radius: 9999px;
            padding: 0.75rem 1.75rem;
            font-size: 0.875rem;
            font-weight: 600;
            letter-spacing: 0.3em;
            text-transform: uppercase;
            cursor: pointer;
            transition: background 0.2s ease, border-color 0.2s ease;
        }
        .hero-button.ghost {
            border: 1px solid rgba(255, 255, 255, 0.2);
            background: rgba(255, 255, 255, 0.1);
            color: rgba(255, 255, 255, 0.9);
        }
        .hero-button.ghost:hover {
            border-color: rgba(255, 255, 255, 0.5);
            background: rgba(255, 255, 255, 0.2);
        }
        .hero-button.solid {
            border: none;
            background: #fff;
            color: #000;
        }
        .hero-stats {
            display: grid;
            width: 100%;
            max-width: 48rem;
            grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
            gap: 1rem;
        }
        .hero-stat {
            position: relative;
            display: flex;
            flex-direction: column;
            align-items: center;
            padding: 1rem 1.5rem;
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 1.5rem;
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(24px);
        }
        .hero-stat-value {
            font-size: 1.75rem;
            font-weight: 600;
        }
        .hero-stat-label {
            font-size: 0.8rem;
            letter-spacing: 0.25em;
            text-transform: uppercase;
            color: rgba(255, 255, 255, 0.6);
        }
        .hero-stat-glint {
            position: absolute;
            top: -0.75rem;
            width: 3rem;
            height: 1.25rem;
            border-radius: 9999px;
            background: linear-gradient(90deg, rgba(125, 211, 252, 0.7), rgba(255, 255, 255, 0.8), rgba(249, 168, 212, 0.7));
            filter: blur(4px);
        }
        .hero-intro {
            max-width: 64rem;
            padding: 0.25rem;
            border-radius: 32px;
        }
        .hero-intro-inner {
            display: flex;
            align-items: center;
            justify-content: space-between;
            gap: 2rem;
            padding: 1.25rem 1.5rem;
            border-radius: 28px;
            background: rgba(0, 0, 0, 0.4);
            text-align: left;
        }
        .hero-intro-inner h2 {
            margin: 0;
            font-size: 1.5rem;
            font-weight: 600;
        }
        .hero-intro-inner p {
            margin: 0.75rem 0 0;
            font-size: 0.9rem;
            color: rgba(255, 255, 255, 0.6);
        }
        .hero-intro-spec {
            display: flex;
            flex-direction: column;
            align-items: flex-end;
            font-size: 0.75rem;
            letter-spacing: 0.5em;
            text-transform: uppercase;
            color: rgba(255, 255, 255, 0.5);
        }
        @media (max-width: 640px) {
            .hero-intro { display: none; }
        }
    "#;

    html! {
        <section ref={section} class="hero">
            <style>{css}</style>
            <div class="hero-glow" style={format!("opacity: {};", HERO_OPACITY.sample(progress))} />

            <div class="hero-panel glass-panel" style={hero_panel_style(progress)}>
                <div class="hero-copy">
                    <p class="eyebrow">{"Introducing"}</p>
                    <h1>{"LiquidGlass"}</h1>
                    <p>
                        {"An Apple-inspired exploration of glass that thinks, adapts, and transforms with every scroll. Designed for a world where the interface feels alive beneath your fingertips."}
                    </p>
                </div>

                <div class="hero-actions">
                    <button class="hero-button ghost">{"Experience"}</button>
                    <button class="hero-button solid">{"Discover"}</button>
                </div>

                <div class="hero-stats">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <HeroStatCard key={stat.label} stat={*stat} />
                    }) }
                </div>

                <Reveal entrance={EntranceConfig::hero_intro()} class="hero-intro glass-panel">
                    <div class="hero-intro-inner">
                        <div>
                            <h2>{"Liquid optics engineered to disappear."}</h2>
                            <p>
                                {"Every atom is aligned by light, then sealed with a thermal wave. The result is glass that bends to light and touch like water."}
                            </p>
                        </div>
                        <div class="hero-intro-spec">
                            <span>{"Ultra Thin"}</span>
                            <span>{"0.11 mm"}</span>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
