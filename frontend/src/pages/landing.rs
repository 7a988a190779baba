use yew::prelude::*;

use crate::components::closing::Closing;
use crate::components::experience::ExperienceGrid;
use crate::components::features::FeatureGrid;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::orbs::BackgroundOrbs;
use crate::components::progress_bar::ScrollProgressBar;
use crate::components::sculpted::SculptedPanel;
use crate::components::timeline::Timeline;
use crate::hooks::use_scroll_progress;
use crate::motion::progress::ScrollOffset;

#[function_component(Landing)]
pub fn landing() -> Html {
    let page = use_node_ref();
    let page_progress = use_scroll_progress(page.clone(), ScrollOffset::PAGE);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let landing_css = r#"
        .landing-page {
            position: relative;
            display: flex;
            min-height: 100vh;
            width: 100%;
            flex-direction: column;
            overflow-x: hidden;
            padding-bottom: 6rem;
        }
        .glass-panel {
            background: linear-gradient(135deg, rgba(255, 255, 255, 0.12), rgba(255, 255, 255, 0.03));
            border: 1px solid rgba(255, 255, 255, 0.15);
            backdrop-filter: blur(32px) saturate(160%);
            -webkit-backdrop-filter: blur(32px) saturate(160%);
        }
        .section {
            position: relative;
            display: flex;
            flex-direction: column;
            gap: 3rem;
            margin-top: 7rem;
            padding: 0 1.5rem;
        }
        .section-heading {
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
        }
        .section-heading h2 {
            margin: 0;
            font-size: clamp(1.875rem, 4vw, 2.25rem);
            font-weight: 600;
            letter-spacing: -0.01em;
        }
        .section-heading p {
            max-width: 42rem;
            margin: 0;
            color: rgba(255, 255, 255, 0.65);
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
            gap: 1.5rem;
        }
        .eyebrow {
            margin: 0;
            font-size: 0.75rem;
            letter-spacing: 0.55em;
            text-transform: uppercase;
            color: rgba(255, 255, 255, 0.5);
        }
        .caption {
            font-size: 0.75rem;
            letter-spacing: 0.35em;
            text-transform: uppercase;
            color: rgba(255, 255, 255, 0.45);
        }
        @media (min-width: 768px) {
            .section {
                padding: 0 3rem;
            }
            .section-heading {
                text-align: left;
            }
        }
        @media (min-width: 1024px) {
            .section {
                padding: 0 6rem;
            }
        }
    "#;

    html! {
        <main ref={page} class="landing-page">
            <style>{landing_css}</style>
            <ScrollProgressBar progress={page_progress} />
            <BackgroundOrbs />
            <Hero />
            <FeatureGrid />
            <SculptedPanel />
            <ExperienceGrid />
            <Timeline />
            <Gallery />
            <Closing />
        </main>
    }
}
