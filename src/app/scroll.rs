use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::browser::{scroll_offset, section_marks, BrowserScheduler};
use crate::motion::{ChromeState, ScrollConfig, ScrollTracker};

/// Scroll-derived state read by the navbar, back-to-top and parallax layers.
#[derive(Debug, Clone, Copy)]
pub struct ScrollSignals {
    pub chrome: RwSignal<ChromeState>,
    pub active: RwSignal<Option<String>>,
    /// Offset as of the last rendered parallax frame.
    pub parallax: RwSignal<f64>,
}

pub fn provide_scroll_tracking(config: ScrollConfig) -> ScrollSignals {
    let signals = ScrollSignals {
        chrome: RwSignal::new(ChromeState::default()),
        active: RwSignal::new(None),
        parallax: RwSignal::new(0.0),
    };
    let tracker = StoredValue::new_local(ScrollTracker::new(config));

    let recompute = move || {
        let offset = scroll_offset();
        let sections = section_marks();
        let parallax = signals.parallax;
        let update = tracker.with_value(|t| {
            t.on_scroll(offset, &sections, &BrowserScheduler, move || {
                parallax.set(scroll_offset())
            })
        });
        log::trace!("scroll {offset} ({:+})", update.delta);

        if signals.chrome.get_untracked() != update.chrome {
            signals.chrome.set(update.chrome);
        }
        if signals.active.get_untracked() != update.active {
            signals.active.set(update.active);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| recompute());
    // pick up the position restored on reload
    Effect::new(move |_| recompute());

    provide_context(signals);
    signals
}
