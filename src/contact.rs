pub mod controller;
pub mod notify;
pub mod relay;
pub mod validate;

pub use controller::{ContactController, SubmitControl, SubmitOutcome, SubmitState};
pub use notify::{Notification, NotificationKind, NotificationTiming, Notifier, ToastStack};
pub use relay::{EmailJsRelay, MessageRelay, RelayConfig, RelayError};
pub use validate::{ContactFields, ContactMessage, FieldError, ValidationErrors};
