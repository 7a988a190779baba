use yew::prelude::*;

use crate::content::CLOSING_TAGS;

/// Closing call-to-action and footer.
#[function_component(Closing)]
pub fn closing() -> Html {
    let css = r#"
        .closing-panel {
            position: relative;
            overflow: hidden;
            padding: 2.5rem 2rem;
            text-align: center;
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 44px;
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(40px);
        }
        .closing-panel::before {
            content: "";
            position: absolute;
            inset: 0;
            opacity: 0.7;
            background: radial-gradient(circle at center, rgba(255, 255, 255, 0.25) 0%, transparent 55%);
        }
        .closing-copy {
            position: relative;
            display: flex;
            max-width: 48rem;
            margin: 0 auto;
            flex-direction: column;
            gap: 1.5rem;
        }
        .closing-copy p {
            color: rgba(255, 255, 255, 0.7);
        }
        .closing-tags {
            position: relative;
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1rem;
            margin-top: 3rem;
        }
        .closing-tag {
            padding: 0.75rem 1.5rem;
            border: 1px solid rgba(255, 255, 255, 0.15);
            border-radius: 9999px;
            backdrop-filter: blur(40px);
        }
        .footer {
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 1.5rem;
            padding-bottom: 2.5rem;
            text-align: center;
        }
        .footer-mark {
            display: flex;
            align-items: center;
            gap: 0.75rem;
        }
        .footer-dot {
            width: 0.5rem;
            height: 0.5rem;
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.5);
        }
        .footer p {
            max-width: 36rem;
            font-size: 0.7rem;
            line-height: 1.7;
            letter-spacing: 0.2em;
            color: rgba(255, 255, 255, 0.35);
        }
    "#;

    html! {
        <section class="section">
            <style>{css}</style>
            <div class="closing-panel glass-panel">
                <div class="closing-copy">
                    <span class="eyebrow">{"Inspired by Cupertino"}</span>
                    <h2>{"A liquid glass journey that responds to you."}</h2>
                    <p>
                        {"This concept site channels Apple's love for minimalism, glass, and motion. Each scroll invites a new layer of depth. LiquidGlass is not a product, it's a story told in refraction, blur, and light."}
                    </p>
                </div>
                <div class="closing-tags caption">
                    { for CLOSING_TAGS.iter().map(|tag| html! {
                        <span key={*tag} class="closing-tag">{*tag}</span>
                    }) }
                </div>
            </div>

            <footer class="footer caption">
                <div class="footer-mark">
                    <span class="footer-dot" />
                    <span>{"LiquidGlass"}</span>
                    <span class="footer-dot" />
                </div>
                <p>
                    {"Concept experience. Crafted with Rust, Yew, and WebAssembly. Designed to be explored in motion on every screen."}
                </p>
            </footer>
        </section>
    }
}
