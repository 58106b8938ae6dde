use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::schedule::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "linear-gradient(135deg, #00ff88 0%, #00d4ff 100%)",
            Self::Error => "linear-gradient(135deg, #ff6b6b 0%, #ff8e53 100%)",
            Self::Info => "linear-gradient(135deg, #00d4ff 0%, #7b2ff7 100%)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }
}

/// Surface for transient banners. Several may be on screen at once.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationTiming {
    pub enter_ms: u64,
    pub hold_ms: u64,
    pub exit_ms: u64,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            enter_ms: 100,
            hold_ms: 5000,
            exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Rendered off-screen, about to slide in.
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    pub phase: ToastPhase,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            notification,
            phase: ToastPhase::Entering,
        });
        id
    }

    pub fn set_phase(&mut self, id: u64, phase: ToastPhase) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn phase(&self, id: u64) -> Option<ToastPhase> {
        self.toasts.iter().find(|t| t.id == id).map(|t| t.phase)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStep {
    Show,
    Hide,
    Remove,
}

/// Schedules the slide-in, slide-out and removal of one toast.
pub fn schedule_toast<S, F>(scheduler: &S, timing: NotificationTiming, step: F)
where
    S: Scheduler,
    F: Fn(ToastStep) + Clone + 'static,
{
    let show = step.clone();
    scheduler.after(
        Duration::from_millis(timing.enter_ms),
        Box::new(move || show(ToastStep::Show)),
    );
    let hide = step.clone();
    scheduler.after(
        Duration::from_millis(timing.hold_ms),
        Box::new(move || hide(ToastStep::Hide)),
    );
    scheduler.after(
        Duration::from_millis(timing.hold_ms + timing.exit_ms),
        Box::new(move || step(ToastStep::Remove)),
    );
}
