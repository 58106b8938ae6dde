use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};

use super::{browser::BrowserScheduler, toast::Toaster};
use crate::{
    config::SiteConfig,
    contact::{
        validate::email_needs_attention, ContactController, ContactFields, EmailJsRelay,
        SubmitOutcome, SubmitState,
    },
};

type BrowserController =
    ContactController<EmailJsRelay, BrowserScheduler, Toaster, RwSignal<SubmitState>>;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toaster = expect_context::<Toaster>();

    let form = NodeRef::<html::Form>::new();
    let name = NodeRef::<html::Input>::new();
    let email = NodeRef::<html::Input>::new();
    let subject = NodeRef::<html::Input>::new();
    let message = NodeRef::<html::Textarea>::new();

    let state = RwSignal::new(SubmitState::Ready);
    let email_flagged = RwSignal::new(false);

    let controller: StoredValue<BrowserController> = StoredValue::new(
        ContactController::new(
            EmailJsRelay::new(config.relay.clone()),
            BrowserScheduler,
            toaster,
            state,
        )
        .with_restore_delay(config.submit_restore()),
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // one send at a time, including the restore window
        if state.get_untracked().is_disabled() {
            return;
        }
        let fields = ContactFields {
            name: name.get_untracked().map(|el| el.value()).unwrap_or_default(),
            email: email.get_untracked().map(|el| el.value()).unwrap_or_default(),
            subject: subject.get_untracked().map(|el| el.value()).unwrap_or_default(),
            message: message.get_untracked().map(|el| el.value()).unwrap_or_default(),
        };
        let controller = controller.get_value();
        spawn_local(async move {
            if controller.submit(fields).await == SubmitOutcome::Sent {
                if let Some(form) = form.get_untracked() {
                    form.reset();
                }
                email_flagged.set(false);
            }
        });
    };

    let check_email = move |_| {
        let value = email.get_untracked().map(|el| el.value()).unwrap_or_default();
        email_flagged.set(email_needs_attention(value.trim()));
    };

    view! {
        <form node_ref=form id="contactForm" class="contact-form" novalidate on:submit=on_submit>
            <div class="form-group">
                <input node_ref=name type="text" id="name" name="name" placeholder="Your Name" />
            </div>
            <div class="form-group">
                <input
                    node_ref=email
                    type="email"
                    id="email"
                    name="email"
                    placeholder="Your Email"
                    class:input-error=move || email_flagged.get()
                    on:blur=check_email
                    on:input=move |_| email_flagged.set(false)
                />
            </div>
            <div class="form-group">
                <input
                    node_ref=subject
                    type="text"
                    id="subject"
                    name="subject"
                    placeholder="Subject"
                />
            </div>
            <div class="form-group">
                <textarea
                    node_ref=message
                    id="message"
                    name="message"
                    rows="5"
                    placeholder="Your Message"
                ></textarea>
            </div>
            <button
                type="submit"
                class="btn btn-primary btn-submit"
                disabled=move || state.get().is_disabled()
                style:background=move || state.get().background().unwrap_or_default()
            >
                <span>{move || state.get().label()}</span>
                <i class=move || state.get().icon()></i>
            </button>
        </form>
    }
}
