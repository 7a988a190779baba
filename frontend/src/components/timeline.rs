use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::TIMELINE;
use crate::hooks::use_scroll_progress;
use crate::motion::channels::TIMELINE_FILL;
use crate::motion::entrance::EntranceConfig;
use crate::motion::progress::ScrollOffset;

/// Phases with a rail that fills as the section scrolls past.
#[function_component(Timeline)]
pub fn timeline() -> Html {
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone(), ScrollOffset::TIMELINE);

    let css = r#"
        .timeline-body {
            position: relative;
        }
        .timeline-rail {
            position: absolute;
            left: 0.5rem;
            top: 1.5rem;
            width: 2px;
            transform-origin: top;
            background: linear-gradient(180deg, rgba(255, 255, 255, 0.8), rgba(255, 255, 255, 0.4), transparent);
        }
        .timeline-entries {
            display: flex;
            flex-direction: column;
            gap: 3.5rem;
            padding-left: 2.5rem;
        }
        .timeline-entry {
            position: relative;
        }
        .timeline-node {
            position: absolute;
            left: -2rem;
            top: 0.25rem;
            width: 1rem;
            height: 1rem;
            border: 1px solid rgba(255, 255, 255, 0.5);
            border-radius: 9999px;
            background: rgba(0, 0, 0, 0.8);
            box-shadow: 0 0 0 6px rgba(255, 255, 255, 0.05);
        }
        .timeline-card {
            display: flex;
            flex-direction: column;
            gap: 1rem;
            padding: 2rem 1.5rem;
            text-align: left;
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 32px;
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(40px);
        }
        .timeline-card h3 {
            margin: 0;
            font-size: 1.6rem;
        }
        .timeline-card p {
            margin: 0;
            color: rgba(255, 255, 255, 0.65);
        }
    "#;

    html! {
        <section ref={section} class="section">
            <style>{css}</style>
            <div class="section-heading">
                <span class="eyebrow">{"Evolution"}</span>
                <h2>{"A kinetic narrative, synced to your scroll."}</h2>
                <p>
                    {"Follow the phases of LiquidGlass as it awakens. The progress bar grows in sync with each reveal, mirroring the rhythm of responsive Apple scroll stories."}
                </p>
            </div>

            <div class="timeline-body">
                <div class="timeline-rail" style={format!("height: {};", TIMELINE_FILL.css(progress))} />
                <div class="timeline-entries">
                    { for TIMELINE.iter().enumerate().map(|(index, phase)| html! {
                        <Reveal key={phase.title} entrance={EntranceConfig::timeline_entry(index)} class="timeline-entry">
                            <span class="timeline-node" />
                            <div class="timeline-card">
                                <h3>{phase.title}</h3>
                                <p>{phase.summary}</p>
                                <div class="caption">{format!("Phase {}", index + 1)}</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
