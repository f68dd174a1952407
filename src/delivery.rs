//! Lead delivery: the seam between the contact form and whatever backend
//! receives validated leads.
//!
//! The form controller only sees `LeadDelivery`, so the simulated stub can be
//! swapped for Telegram or WhatsApp without touching the state machine.

use crate::config::{Config, DeliveryBackend};
use crate::contact::Lead;
use crate::telegram::TelegramDelivery;
use crate::whatsapp::WhatsAppDelivery;
use futures::future::BoxFuture;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Why a lead could not be delivered.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery timed out after {0:?}")]
    Timeout(Duration),

    #[error("backend rejected the lead ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("could not reach delivery backend: {0}")]
    Transport(String),

    /// The backend itself gave up on the lead.
    #[error("delivery cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for DeliveryError {
    fn from(err: reqwest::Error) -> Self {
        DeliveryError::Transport(err.to_string())
    }
}

/// A backend that accepts validated leads.
///
/// Implementations resolve to `Ok(())` once the lead has been handed off, or
/// to a `DeliveryError` with a human-readable reason.
pub trait LeadDelivery: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    fn deliver<'a>(&'a self, lead: &'a Lead) -> BoxFuture<'a, Result<(), DeliveryError>>;
}

/// Stand-in backend: waits a fixed delay and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedDelivery {
    delay: Duration,
}

impl SimulatedDelivery {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl LeadDelivery for SimulatedDelivery {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn deliver<'a>(&'a self, lead: &'a Lead) -> BoxFuture<'a, Result<(), DeliveryError>> {
        Box::pin(async move {
            debug!("Simulating delivery of lead from {} ({:?})", lead.email, self.delay);
            tokio::time::sleep(self.delay).await;
            Ok(())
        })
    }
}

/// Build the delivery backend selected in the configuration.
pub fn from_config(config: &Config) -> Arc<dyn LeadDelivery> {
    let delivery: Arc<dyn LeadDelivery> = match &config.delivery {
        DeliveryBackend::Simulated { delay } => Arc::new(SimulatedDelivery::new(*delay)),
        DeliveryBackend::Telegram(settings) => Arc::new(TelegramDelivery::new(settings.clone())),
        DeliveryBackend::WhatsApp(settings) => Arc::new(WhatsAppDelivery::new(settings.clone())),
    };

    info!("Lead delivery backend: {}", delivery.name());
    delivery
}
