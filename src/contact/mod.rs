//! Lead-capture contact form: field model, validation rules, and the
//! submission state machine.

mod controller;
mod fields;
pub mod rules;

pub use controller::{
    ContactFormController, FormEvent, Notification, NotificationKind, SubmissionStatus,
    SubmitOutcome,
};
pub use fields::{ContactFormFields, Field, FieldErrors, Lead};
pub use rules::{validate, Validation};
