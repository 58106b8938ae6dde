mod browser;
mod contact_form;
mod navbar;
mod reveal;
mod scroll;
mod sections;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_document_visibility;
use web_sys::VisibilityState;

use crate::{config::SiteConfig, page::page_title};
use navbar::{BackToTop, Navbar};
use reveal::provide_reveal_registry;
use scroll::provide_scroll_tracking;
use sections::HomePage;
use toast::{ToastHost, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/neon-portfolio.css" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
                />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::default();
    provide_context(Toaster::new(config.notification));
    provide_reveal_registry();
    provide_scroll_tracking(config.scroll);
    provide_context(config);

    let visibility = use_document_visibility();
    let title = move || page_title(visibility.get() == VisibilityState::Hidden).to_string();

    view! {
        <Title text=title />
        <Meta name="description" content="Portfolio of a front-end developer." />

        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <BackToTop />
            <ToastHost />
        </Router>
    }
}
