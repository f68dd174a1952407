//! Contact form controller: owns the form fields and drives submission.
//!
//! ```text
//! Idle --submit--> validate
//!    fails  -> Idle, errors populated, nothing delivered
//!    passes -> Submitting
//! Submitting --delivered--> Succeeded -> fields cleared, success notice -> Idle
//! Submitting --failed-----> Idle, fields kept, failure notice
//! Submitting --cancelled or dropped--> Idle, fields kept, no notice
//! ```
//!
//! State lives behind a mutex that is never held across the delivery await,
//! so edits and status reads stay responsive while a lead is in flight.

use crate::contact::fields::{ContactFormFields, Field, FieldErrors};
use crate::contact::rules::{self, Validation};
use crate::delivery::{DeliveryError, LeadDelivery};
use crate::i18n::{strings, LanguageResolver, LocalizedPair};
use serde::Serialize;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A localized toast/banner for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn localized(
        kind: NotificationKind,
        resolver: &LanguageResolver,
        title: LocalizedPair<'_>,
        description: LocalizedPair<'_>,
    ) -> Self {
        Self {
            kind,
            title: resolver.resolve(title).to_string(),
            description: resolver.resolve(description).to_string(),
        }
    }
}

/// Everything the controller publishes to subscribers, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    StatusChanged(SubmissionStatus),
    ValidationFailed(FieldErrors),
    Notified(Notification),
}

/// Result of one call to `submit`.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing changed.
    AlreadySubmitting,
    Invalid(FieldErrors),
    Delivered(Notification),
    Failed {
        notification: Notification,
        error: DeliveryError,
    },
    /// The caller's cancel future fired before delivery finished.
    Cancelled,
}

#[derive(Debug, Default)]
struct FormState {
    fields: ContactFormFields,
    errors: FieldErrors,
    status: SubmissionStatus,
}

pub struct ContactFormController {
    resolver: Arc<LanguageResolver>,
    delivery: Arc<dyn LeadDelivery>,
    timeout: Duration,
    state: Mutex<FormState>,
    events: broadcast::Sender<FormEvent>,
}

impl ContactFormController {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    pub fn new(resolver: Arc<LanguageResolver>, delivery: Arc<dyn LeadDelivery>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            resolver,
            delivery,
            timeout: Self::DEFAULT_TIMEOUT,
            state: Mutex::new(FormState::default()),
            events,
        }
    }

    /// Set how long a delivery may take before it counts as failed.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Receive every `FormEvent` published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.lock().status
    }

    pub fn fields(&self) -> ContactFormFields {
        self.lock().fields.clone()
    }

    pub fn errors(&self) -> FieldErrors {
        self.lock().errors.clone()
    }

    /// Apply a user edit. Any error shown for that field is cleared at once.
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut state = self.lock();
        state.fields.set(field, value);
        if state.errors.clear(field) {
            debug!("Cleared error for {} after edit", field);
        }
    }

    /// Replace all four fields, as if the user had typed each one.
    pub fn fill(&self, fields: ContactFormFields) {
        let ContactFormFields {
            name,
            email,
            phone,
            message,
        } = fields;
        self.set_field(Field::Name, name);
        self.set_field(Field::Email, email);
        self.set_field(Field::Phone, phone);
        self.set_field(Field::Message, message);
    }

    /// Validate and, if valid, deliver the lead.
    pub async fn submit(&self) -> SubmitOutcome {
        self.submit_until(std::future::pending::<()>()).await
    }

    /// Like `submit`, but gives up when `cancel` completes first.
    ///
    /// Cancellation returns the form to `Idle` with its fields untouched and
    /// publishes no notification.
    pub async fn submit_until<C>(&self, cancel: C) -> SubmitOutcome
    where
        C: Future<Output = ()>,
    {
        let lead = {
            let mut state = self.lock();

            if state.status == SubmissionStatus::Submitting {
                debug!("Submit ignored: a submission is already in flight");
                return SubmitOutcome::AlreadySubmitting;
            }

            match rules::validate(&state.fields, &self.resolver) {
                Validation::Invalid(errors) => {
                    state.errors = errors.clone();
                    drop(state);
                    debug!("Validation failed for {} field(s)", errors.len());
                    self.emit(FormEvent::ValidationFailed(errors.clone()));
                    return SubmitOutcome::Invalid(errors);
                }
                Validation::Valid(lead) => {
                    state.errors.clear_all();
                    state.status = SubmissionStatus::Submitting;
                    lead
                }
            }
        };
        let in_flight = InFlight::new(self);
        self.emit(FormEvent::StatusChanged(SubmissionStatus::Submitting));
        info!("Submitting lead via {}", self.delivery.name());

        let delivery = tokio::time::timeout(self.timeout, self.delivery.deliver(&lead));
        let race = tokio::select! {
            outcome = delivery => Race::Settled(match outcome {
                Ok(result) => result,
                Err(_) => Err(DeliveryError::Timeout(self.timeout)),
            }),
            () = cancel => Race::Cancelled,
        };

        match race {
            Race::Settled(Ok(())) => {
                in_flight.settle();
                self.finish_success()
            }
            Race::Settled(Err(error)) => {
                in_flight.settle();
                self.finish_failure(error)
            }
            Race::Cancelled => {
                info!("Lead submission cancelled");
                drop(in_flight);
                SubmitOutcome::Cancelled
            }
        }
    }

    fn finish_success(&self) -> SubmitOutcome {
        let notification = Notification::localized(
            NotificationKind::Success,
            &self.resolver,
            strings::SUCCESS_TITLE,
            strings::SUCCESS_DESCRIPTION,
        );

        self.lock().status = SubmissionStatus::Succeeded;
        self.emit(FormEvent::StatusChanged(SubmissionStatus::Succeeded));

        {
            let mut state = self.lock();
            state.fields = ContactFormFields::default();
            state.status = SubmissionStatus::Idle;
        }
        self.emit(FormEvent::Notified(notification.clone()));
        self.emit(FormEvent::StatusChanged(SubmissionStatus::Idle));

        info!("Lead delivered");
        SubmitOutcome::Delivered(notification)
    }

    fn finish_failure(&self, error: DeliveryError) -> SubmitOutcome {
        warn!("Lead delivery failed: {}", error);

        let notification = Notification::localized(
            NotificationKind::Failure,
            &self.resolver,
            strings::FAILURE_TITLE,
            strings::FAILURE_DESCRIPTION,
        );

        self.lock().status = SubmissionStatus::Idle;
        self.emit(FormEvent::Notified(notification.clone()));
        self.emit(FormEvent::StatusChanged(SubmissionStatus::Idle));

        SubmitOutcome::Failed {
            notification,
            error,
        }
    }

    fn emit(&self, event: FormEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// How the delivery race in `submit_until` ended.
enum Race {
    Settled(Result<(), DeliveryError>),
    Cancelled,
}

/// Marks one submission as in flight.
///
/// Unless `settle` is called, dropping it returns the form to `Idle` with its
/// fields kept. This covers caller cancellation and a `submit` future that is
/// dropped mid-delivery.
struct InFlight<'a> {
    form: &'a ContactFormController,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(form: &'a ContactFormController) -> Self {
        Self {
            form,
            settled: false,
        }
    }

    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        debug!("Submission abandoned before delivery finished, form back to Idle");
        self.form.lock().status = SubmissionStatus::Idle;
        self.form.emit(FormEvent::StatusChanged(SubmissionStatus::Idle));
    }
}
