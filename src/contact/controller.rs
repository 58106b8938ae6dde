use std::time::Duration;

use super::{
    notify::{Notification, Notifier},
    relay::{MessageRelay, RelayError},
    validate::{ContactFields, ValidationErrors},
};
use crate::schedule::Scheduler;

pub const SENT_NOTICE: &str = "Thank you for your message! I'll get back to you soon.";
pub const FAILED_NOTICE: &str = "Sorry, there was an error sending your message. Please try again.";
pub const DEFAULT_RESTORE_MS: u64 = 3000;

/// What the submit button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Ready,
    Sending,
    Sent,
    Failed,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "Send Message",
            Self::Sending => "Sending...",
            Self::Sent => "Message Sent!",
            Self::Failed => "Failed to Send",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Ready => "fas fa-paper-plane",
            Self::Sending => "fas fa-spinner fa-spin",
            Self::Sent => "fas fa-check",
            Self::Failed => "fas fa-exclamation-triangle",
        }
    }

    /// The button stays disabled from send until it is restored.
    pub fn is_disabled(self) -> bool {
        !matches!(self, Self::Ready)
    }

    pub fn background(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("linear-gradient(135deg, #00ff88 0%, #00d4ff 100%)"),
            Self::Failed => Some("linear-gradient(135deg, #ff6b6b 0%, #ff8e53 100%)"),
            Self::Ready | Self::Sending => None,
        }
    }
}

pub trait SubmitControl: Clone + 'static {
    fn set_state(&self, state: SubmitState);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationErrors),
    Sent,
    Failed(RelayError),
}

/// Puts the button back to `Ready` a fixed delay after it goes out of scope,
/// whichever way the send ended.
struct RestoreOnDrop<S: Scheduler, C: SubmitControl> {
    scheduler: S,
    control: C,
    delay: Duration,
}

impl<S: Scheduler, C: SubmitControl> Drop for RestoreOnDrop<S, C> {
    fn drop(&mut self) {
        let control = self.control.clone();
        self.scheduler
            .after(self.delay, Box::new(move || control.set_state(SubmitState::Ready)));
    }
}

#[derive(Debug, Clone)]
pub struct ContactController<R, S, N, C> {
    relay: R,
    scheduler: S,
    notifier: N,
    control: C,
    restore_after: Duration,
}

impl<R, S, N, C> ContactController<R, S, N, C>
where
    R: MessageRelay,
    S: Scheduler + Clone,
    N: Notifier,
    C: SubmitControl,
{
    pub fn new(relay: R, scheduler: S, notifier: N, control: C) -> Self {
        Self {
            relay,
            scheduler,
            notifier,
            control,
            restore_after: Duration::from_millis(DEFAULT_RESTORE_MS),
        }
    }

    pub fn with_restore_delay(mut self, delay: Duration) -> Self {
        self.restore_after = delay;
        self
    }

    /// Validates and sends one submission. The caller resets the form on
    /// [`SubmitOutcome::Sent`].
    pub async fn submit(&self, fields: ContactFields) -> SubmitOutcome {
        let message = match fields.validate() {
            Ok(message) => message,
            Err(errors) => {
                self.notifier.notify(Notification::error(errors.to_string()));
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.control.set_state(SubmitState::Sending);
        let _restore = RestoreOnDrop {
            scheduler: self.scheduler.clone(),
            control: self.control.clone(),
            delay: self.restore_after,
        };

        match self.relay.send(&message).await {
            Ok(()) => {
                self.control.set_state(SubmitState::Sent);
                self.notifier.notify(Notification::success(SENT_NOTICE));
                SubmitOutcome::Sent
            }
            Err(err) => {
                log::warn!("contact form send failed: {err}");
                self.control.set_state(SubmitState::Failed);
                self.notifier.notify(Notification::error(FAILED_NOTICE));
                SubmitOutcome::Failed(err)
            }
        }
    }
}
