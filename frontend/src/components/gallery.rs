use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::GALLERY;
use crate::motion::entrance::EntranceConfig;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let css = r#"
        .frame {
            padding: 0.25rem;
            overflow: hidden;
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 38px;
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(40px);
        }
        .frame-inner {
            position: relative;
            display: flex;
            height: 18rem;
            flex-direction: column;
            justify-content: space-between;
            padding: 1.5rem;
            overflow: hidden;
            border-radius: 34px;
            background-color: rgba(0, 0, 0, 0.6);
        }
        .frame-meta {
            display: flex;
            justify-content: space-between;
        }
        .frame-foot {
            display: flex;
            align-items: center;
            gap: 1rem;
        }
        .frame-badge {
            display: flex;
            width: 3rem;
            height: 3rem;
            flex-shrink: 0;
            align-items: center;
            justify-content: center;
            border: 1px solid rgba(255, 255, 255, 0.2);
            border-radius: 1rem;
            background: rgba(255, 255, 255, 0.1);
            font-size: 0.875rem;
        }
        .frame-foot p {
            margin: 0;
            font-size: 0.875rem;
            color: rgba(255, 255, 255, 0.7);
        }
    "#;

    html! {
        <section class="section">
            <style>{css}</style>
            <div class="section-heading">
                <span class="eyebrow">{"Visual Atmosphere"}</span>
                <h2>{"Light, refraction, and impossibly thin edges."}</h2>
            </div>
            <div class="card-grid">
                { for GALLERY.iter().map(|frame| html! {
                    <Reveal key={frame.label} entrance={EntranceConfig::gallery_frame()} class="frame">
                        <div class="frame-inner" style={format!("background-image: {};", frame.accent)}>
                            <div class="frame-meta caption">
                                <span>{frame.label}</span>
                                <span>{frame.angle}</span>
                            </div>
                            <div class="frame-foot">
                                <div class="frame-badge">{"LG"}</div>
                                <p>
                                    {"A crystalline surface that bends light softly, revealing the depth beneath each pixel."}
                                </p>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
