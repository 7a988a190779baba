use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::NodeRef;

use crate::error::HostError;
use crate::motion::progress::RegionMetrics;

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

/// High resolution timestamp in seconds. 0 when there is no performance clock.
pub fn now_secs() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn element(node: &NodeRef) -> Result<Element, HostError> {
    node.cast::<Element>().ok_or(HostError::Detached)
}

/// Document-space layout of the element behind `node`.
pub fn region_metrics(node: &NodeRef, window: &Window) -> Result<RegionMetrics, HostError> {
    let rect = element(node)?.get_bounding_client_rect();
    Ok(RegionMetrics::from_viewport_top(
        rect.top(),
        rect.height(),
        scroll_y(window),
    ))
}

/// A window event listener, removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl Fn() + 'static) -> Result<Self, HostError> {
        let window = window()?;
        let callback = Closure::<dyn Fn()>::new(callback);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Reports the visible fraction of one element each time it crosses
/// `threshold`. Disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl VisibilityObserver {
    pub fn observe(
        element: &Element,
        threshold: f64,
        mut on_fraction: impl FnMut(f64) + 'static,
    ) -> Result<Self, HostError> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let fraction = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                on_fraction(fraction);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
