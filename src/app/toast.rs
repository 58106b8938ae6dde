use leptos::prelude::*;

use super::browser::BrowserScheduler;
use crate::contact::{
    notify::{schedule_toast, ToastPhase, ToastStep},
    Notification, NotificationTiming, Notifier, ToastStack,
};

#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    stack: RwSignal<ToastStack>,
    timing: NotificationTiming,
}

impl Toaster {
    pub fn new(timing: NotificationTiming) -> Self {
        Self {
            stack: RwSignal::new(ToastStack::default()),
            timing,
        }
    }

    fn phase(&self, id: u64) -> Option<ToastPhase> {
        self.stack.with(|s| s.phase(id))
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        let mut id = 0;
        self.stack.update(|s| id = s.push(notification));
        let stack = self.stack;
        schedule_toast(&BrowserScheduler, self.timing, move |step| {
            stack.update(|s| match step {
                ToastStep::Show => s.set_phase(id, ToastPhase::Shown),
                ToastStep::Hide => s.set_phase(id, ToastPhase::Leaving),
                ToastStep::Remove => s.remove(id),
            })
        });
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || toaster.stack.with(|s| s.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let kind = toast.notification.kind;
                    let on_screen = move || toaster.phase(id) == Some(ToastPhase::Shown);
                    view! {
                        <div
                            class=format!("notification {}", kind.class())
                            style:background=kind.background()
                            style:transform=move || {
                                if on_screen() { "translateX(0)" } else { "translateX(400px)" }
                            }
                        >
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
