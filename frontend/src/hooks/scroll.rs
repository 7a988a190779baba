use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::error::HostError;
use crate::motion::progress::{ScrollOffset, ScrollTrack};
use crate::utils::dom::{self, WindowListener};

/// Raw scroll progress of the element behind `target` through `offset`.
///
/// Anchors are re-measured on every scroll, resize and load event, so content
/// reflow that moves the region is picked up without a window resize.
#[hook]
pub fn use_scroll_progress(target: NodeRef, offset: ScrollOffset) -> f64 {
    let progress = use_state_eq(|| 0.0);
    let track = use_mut_ref(ScrollTrack::default);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |(target, offset)| {
                let listeners = match bind(target.clone(), *offset, track, progress) {
                    Ok(listeners) => listeners,
                    Err(e) => {
                        log::warn!("Scroll tracking unavailable: {}", e);
                        Vec::new()
                    }
                };
                move || drop(listeners)
            },
            (target, offset),
        );
    }

    *progress
}

fn bind(
    target: NodeRef,
    offset: ScrollOffset,
    track: Rc<RefCell<ScrollTrack>>,
    progress: UseStateHandle<f64>,
) -> Result<Vec<WindowListener>, HostError> {
    let remeasure = move || {
        let Ok(window) = dom::window() else {
            return;
        };
        let mut track = track.borrow_mut();
        match dom::region_metrics(&target, &window) {
            Ok(metrics) => {
                track.measure(&offset, metrics, dom::viewport_height(&window));
                log::trace!(
                    "Measured region {} {} -> {} {}: {:?}",
                    offset.start.target,
                    offset.start.container,
                    offset.end.target,
                    offset.end.container,
                    metrics
                );
            }
            Err(e) => {
                log::trace!("Region not measurable yet: {}", e);
                track.invalidate();
            }
        }
        progress.set(track.progress(dom::scroll_y(&window)));
    };
    remeasure();

    Ok(vec![
        WindowListener::new("scroll", remeasure.clone())?,
        WindowListener::new("resize", remeasure.clone())?,
        WindowListener::new("load", remeasure)?,
    ])
}
