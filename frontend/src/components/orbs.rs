use yew::prelude::*;

/// Blurred background orbs behind the whole page.
#[function_component(BackgroundOrbs)]
pub fn background_orbs() -> Html {
    let css = r#"
        .orbs {
            position: absolute;
            inset: 0;
            z-index: -10;
            pointer-events: none;
        }
        .orb {
            position: absolute;
            border-radius: 9999px;
            filter: blur(80px);
            opacity: 0.55;
            background: radial-gradient(circle, rgba(125, 211, 252, 0.45), rgba(192, 132, 252, 0.25) 55%, transparent 70%);
        }
        .orb-a { left: 12%; top: 12%; width: 340px; height: 340px; }
        .orb-b { right: 10%; top: 22%; width: 380px; height: 380px; }
        .orb-c { left: 20%; bottom: 10%; width: 420px; height: 420px; }
    "#;

    html! {
        <section class="orbs">
            <style>{css}</style>
            <div class="orb orb-a"></div>
            <div class="orb orb-b"></div>
            <div class="orb orb-c"></div>
        </section>
    }
}
