//! LiquidGlass: a scroll-animated landing page rendered with Yew.
//!
//! The [`motion`] module holds all animation math and has no browser
//! dependency; [`hooks`] and [`components`] bind it to the DOM.

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod motion;
pub mod pages;
pub mod utils;

use yew::prelude::*;

use crate::config::MotionConfig;
use crate::pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    let motion = MotionConfig::default();

    html! {
        <ContextProvider<MotionConfig> context={motion}>
            <Landing />
        </ContextProvider<MotionConfig>>
    }
}
