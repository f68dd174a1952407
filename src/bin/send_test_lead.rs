//! Send a sample lead through the configured delivery backend
//!
//! Usage:
//!   cargo run --bin send-test-lead
//!
//! Uses the same environment as the server (DELIVERY_BACKEND and its
//! credentials), so it is a quick way to check Telegram/Twilio setup.

use anyhow::{bail, Result};
use site_ti::{
    config::Config,
    contact::{ContactFormController, ContactFormFields, SubmitOutcome},
    delivery,
    i18n::LanguageResolver,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_ti=debug".parse()?)
                .add_directive("send_test_lead=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let resolver = Arc::new(LanguageResolver::new(config.default_locale));
    let form = ContactFormController::new(resolver, delivery::from_config(&config))
        .with_timeout(config.delivery_timeout);

    form.fill(ContactFormFields {
        name: "Test Lead".to_string(),
        email: "test@example.com".to_string(),
        phone: "85 0000-0000".to_string(),
        message: "Test message from send-test-lead. Please ignore.".to_string(),
    });

    match form.submit().await {
        SubmitOutcome::Delivered(notification) => {
            info!("✓ {}: {}", notification.title, notification.description);
            Ok(())
        }
        SubmitOutcome::Failed { error, .. } => bail!("Delivery failed: {}", error),
        SubmitOutcome::Invalid(errors) => bail!("Sample lead failed validation: {:?}", errors),
        other => bail!("Unexpected outcome: {:?}", other),
    }
}
