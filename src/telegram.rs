use crate::config::TelegramSettings;
use crate::contact::Lead;
use crate::delivery::{DeliveryError, LeadDelivery};
use chrono::Utc;
use futures::future::BoxFuture;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
    parse_mode: String,
}

/// Escape text for Telegram's MarkdownV2 parse mode.
///
/// Lead fields are visitor input, so every one of the 18 MarkdownV2 special
/// characters is escaped, plus the backslash itself:
/// _ * [ ] ( ) ~ ` > # + - = | { } . !
///
/// Reference: https://core.telegram.org/bots/api#markdownv2-style
pub fn escape_markdownv2(text: &str) -> String {
    const SPECIAL_CHARS: [char; 19] = [
        '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.',
        '!',
    ];

    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

/// Format a lead as a MarkdownV2 Telegram message.
pub fn format_lead_message(lead: &Lead) -> String {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();

    format!(
        "📩 *New contact request*\n_{}_\n\n*Name:* {}\n*Email:* {}\n*Phone:* {}\n\n{}",
        escape_markdownv2(&timestamp),
        escape_markdownv2(&lead.name),
        escape_markdownv2(&lead.email),
        escape_markdownv2(&lead.phone),
        escape_markdownv2(&lead.message),
    )
}

/// Delivers leads to a Telegram chat through the Bot API.
pub struct TelegramDelivery {
    client: reqwest::Client,
    settings: TelegramSettings,
}

impl TelegramDelivery {
    pub fn new(settings: TelegramSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    async fn send_message(&self, text: &str) -> Result<(), DeliveryError> {
        let url = format!(
            "{}/bot{}/sendMessage",
            self.settings.api_url.trim_end_matches('/'),
            self.settings.bot_token
        );

        let request = SendMessageRequest {
            chat_id: self.settings.chat_id.clone(),
            text: text.to_string(),
            parse_mode: "MarkdownV2".to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Telegram API error ({}): {}", status, body);
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

impl LeadDelivery for TelegramDelivery {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn deliver<'a>(&'a self, lead: &'a Lead) -> BoxFuture<'a, Result<(), DeliveryError>> {
        Box::pin(async move {
            self.send_message(&format_lead_message(lead)).await?;
            info!("Lead forwarded to Telegram chat {}", self.settings.chat_id);
            Ok(())
        })
    }
}
