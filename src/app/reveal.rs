use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::browser::{shared, with_shared, Shared};
use crate::{
    config::SiteConfig,
    motion::{RevealHandle, RevealKind, RevealRegistry},
};

pub fn provide_reveal_registry() {
    provide_context(shared(RevealRegistry::new()));
}

/// Wraps content that fades in the first time it scrolls into view.
///
/// `on_reveal` runs once, together with the `visible` class being added.
#[component]
pub fn Reveal(
    #[prop(into, optional)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(default = RevealKind::Plain)] kind: RevealKind,
    #[prop(optional)] on_reveal: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let registry = expect_context::<Shared<RevealRegistry>>();
    let options = expect_context::<SiteConfig>().reveal;
    let target = NodeRef::<html::Div>::new();
    let handle = RwSignal::new(None::<RevealHandle>);
    let revealed = RwSignal::new(false);

    // register once the element is actually mounted
    Effect::new(move |_| {
        if handle.get_untracked().is_some() {
            return;
        }
        let registered = with_shared(registry, |r| r.observe_present(target.get(), kind));
        if let Some((_, h)) = registered {
            handle.set(Some(h));
        }
    });

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let Some(h) = handle.get_untracked() else {
                return;
            };
            for entry in entries {
                if with_shared(registry, |r| r.intersect(h, entry.is_intersecting())).is_some() {
                    revealed.set(true);
                    if let Some(on_reveal) = on_reveal {
                        on_reveal.run(());
                    }
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(options.root_margin)
            .thresholds(vec![options.threshold]),
    );

    view! {
        <div node_ref=target id=id class=class class:visible=move || revealed.get()>
            {children()}
        </div>
    }
}
