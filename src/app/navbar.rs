use leptos::{ev::MouseEvent, html, prelude::*};

use super::{
    browser::{bounds_of, scroll_to_anchor, smooth_scroll_to},
    scroll::ScrollSignals,
};
use crate::{
    config::SiteConfig,
    motion::{pointer::magnetic_transform, scroll::is_link_active},
    page::OWNER,
};

const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = expect_context::<ScrollSignals>();
    let config = expect_context::<SiteConfig>().scroll;
    let (menu_open, set_menu_open) = signal(false);

    let links = NAV_LINKS
        .into_iter()
        .map(|(href, label)| {
            let is_active = move || scroll.active.with(|a| is_link_active(href, a.as_deref()));
            view! {
                <li>
                    <a
                        href=href
                        class="nav-link"
                        class:active=is_active
                        on:click=move |ev| {
                            set_menu_open(false);
                            scroll_to_anchor(&ev, href, &config);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" class:scrolled=move || scroll.chrome.get().scrolled>
            <div class="nav-container">
                <a
                    href="#home"
                    class="nav-logo glitch"
                    on:click=move |ev| scroll_to_anchor(&ev, "#home", &config)
                >
                    {OWNER}
                </a>
                <ul class="nav-menu" class:active=menu_open>
                    {links}
                </ul>
                <button
                    class="hamburger"
                    class:active=menu_open
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll = expect_context::<ScrollSignals>();

    view! {
        <button
            id="backToTop"
            class="back-to-top"
            class:visible=move || scroll.chrome.get().back_to_top
            aria-label="Back to top"
            on:click=move |_| smooth_scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

/// An in-page link that leans towards the pointer while hovered.
#[component]
pub fn MagneticLink(
    href: &'static str,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>().scroll;
    let link = NodeRef::<html::A>::new();
    let transform = RwSignal::new(String::new());

    let on_move = move |ev: MouseEvent| {
        if let Some(el) = link.get_untracked() {
            let bounds = bounds_of(&el);
            transform.set(magnetic_transform(
                bounds,
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            ));
        }
    };

    view! {
        <a
            node_ref=link
            href=href
            class=class
            style:transform=move || transform.get()
            on:mousemove=on_move
            on:mouseleave=move |_| transform.set(String::new())
            on:click=move |ev| scroll_to_anchor(&ev, href, &config)
        >
            {children()}
        </a>
    }
}
