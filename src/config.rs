use crate::i18n::Locale;
use anyhow::{bail, Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub default_locale: Locale,

    // Delivery
    pub delivery: DeliveryBackend,
    pub delivery_timeout: Duration,

    // Public contact details
    pub whatsapp_number: String,
    /// How the WhatsApp number is printed on the page
    pub whatsapp_display: String,
    pub contact_email: String,
}

/// Where validated leads are sent.
#[derive(Debug, Clone)]
pub enum DeliveryBackend {
    /// Fixed delay, always succeeds
    Simulated { delay: Duration },
    Telegram(TelegramSettings),
    WhatsApp(WhatsAppSettings),
}

#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
}

/// Twilio credentials for WhatsApp delivery.
#[derive(Debug, Clone)]
pub struct WhatsAppSettings {
    pub account_sid: String,
    pub auth_token: String,
    pub from: String,
    pub to: String,
    pub api_url: String,
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("{} not set", key))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_locale = match std::env::var("DEFAULT_LOCALE") {
            Ok(code) => Locale::from_code(&code).context("Invalid DEFAULT_LOCALE")?,
            Err(_) => Locale::default(),
        };

        Ok(Self {
            // Server
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            default_locale,

            // Delivery
            delivery: DeliveryBackend::from_env()?,
            delivery_timeout: Duration::from_secs(
                std::env::var("DELIVERY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(15),
            ),

            // Public contact details
            whatsapp_number: std::env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "5585921861059".to_string()),
            whatsapp_display: std::env::var("WHATSAPP_DISPLAY")
                .unwrap_or_else(|_| "(85) 92186-1059".to_string()),
            contact_email: std::env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "fortalflixentreterimento@gmail.com".to_string()),
        })
    }

    /// Simulated delivery with defaults, for unit tests.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            port: 8080,
            default_locale: Locale::Pt,
            delivery: DeliveryBackend::Simulated {
                delay: Duration::from_millis(1500),
            },
            delivery_timeout: Duration::from_secs(15),
            whatsapp_number: "5585921861059".to_string(),
            whatsapp_display: "(85) 92186-1059".to_string(),
            contact_email: "fortalflixentreterimento@gmail.com".to_string(),
        }
    }
}

impl DeliveryBackend {
    /// Read `DELIVERY_BACKEND` and the credentials that backend needs.
    pub fn from_env() -> Result<Self> {
        let backend = std::env::var("DELIVERY_BACKEND").unwrap_or_else(|_| "simulated".to_string());

        match backend.trim().to_ascii_lowercase().as_str() {
            "simulated" => Ok(DeliveryBackend::Simulated {
                delay: Duration::from_millis(
                    std::env::var("SIMULATED_DELAY_MS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(1500),
                ),
            }),
            "telegram" => Ok(DeliveryBackend::Telegram(TelegramSettings {
                bot_token: required("TELEGRAM_BOT_TOKEN")?,
                chat_id: required("TELEGRAM_CHAT_ID")?,
                api_url: std::env::var("TELEGRAM_API_URL")
                    .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
            })),
            "whatsapp" => Ok(DeliveryBackend::WhatsApp(WhatsAppSettings {
                account_sid: required("TWILIO_ACCOUNT_SID")?,
                auth_token: required("TWILIO_AUTH_TOKEN")?,
                from: required("TWILIO_WHATSAPP_FROM")?,
                to: required("WHATSAPP_TO")?,
                api_url: std::env::var("TWILIO_API_URL")
                    .unwrap_or_else(|_| "https://api.twilio.com".to_string()),
            })),
            other => bail!(
                "Unknown DELIVERY_BACKEND '{}'. Expected simulated, telegram or whatsapp",
                other
            ),
        }
    }
}
