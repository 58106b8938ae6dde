use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use leptos::{ev::MouseEvent, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{
    contact::{SubmitControl, SubmitState},
    motion::{pointer::Bounds, ScrollConfig, SectionMark, Sink},
    schedule::{Scheduler, Task},
};

/// State shared between components that is only ever touched from event
/// handlers.
pub type Shared<T> = StoredValue<Arc<Mutex<T>>>;

pub fn shared<T: Send + Sync + 'static>(value: T) -> Shared<T> {
    StoredValue::new(Arc::new(Mutex::new(value)))
}

pub fn with_shared<T, U>(shared: Shared<T>, f: impl FnOnce(&mut T) -> U) -> U
where
    T: Send + Sync + 'static,
{
    shared.with_value(|v| f(&mut *v.lock().expect("should be able to lock shared state")))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Task) {
        set_timeout(task, delay);
    }

    fn next_frame(&self, task: Task) {
        request_animation_frame(task);
    }
}

impl Sink for RwSignal<String> {
    fn apply(&self, value: String) {
        self.set(value);
    }
}

impl SubmitControl for RwSignal<SubmitState> {
    fn set_state(&self, state: SubmitState) {
        self.set(state);
    }
}

pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// Every `<section id=..>` on the page, in document order.
pub fn section_marks() -> Vec<SectionMark> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionMark {
            id: el.id(),
            top: f64::from(el.offset_top()),
        })
        .collect()
}

pub fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Click handler body for `#id` links. Targets that do not exist are ignored.
pub fn scroll_to_anchor(ev: &MouseEvent, href: &str, config: &ScrollConfig) {
    let Some(id) = href.strip_prefix('#') else {
        return;
    };
    ev.prevent_default();
    let target = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(target) = target {
        smooth_scroll_to(config.anchor_top(f64::from(target.offset_top())));
    }
}

pub fn bounds_of(el: &web_sys::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}
