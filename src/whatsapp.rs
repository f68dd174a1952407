use crate::config::WhatsAppSettings;
use crate::contact::Lead;
use crate::delivery::{DeliveryError, LeadDelivery};
use crate::i18n::{strings, LanguageResolver};
use chrono::Utc;
use futures::future::BoxFuture;
use reqwest::Url;
use tracing::{info, warn};

/// Build a `wa.me` link that opens a chat prefilled with a localized greeting.
pub fn whatsapp_quote_link(resolver: &LanguageResolver, number: &str) -> String {
    let greeting = resolver.resolve(strings::WHATSAPP_GREETING);
    let base = format!("https://wa.me/{}", number);

    match Url::parse(&base) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("text", greeting);
            url.to_string()
        }
        Err(_) => base,
    }
}

/// Format a lead as a plain WhatsApp message body.
pub fn format_lead_message(lead: &Lead) -> String {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M UTC");
    format!(
        "📩 *New contact request*\n_{}_\n\nName: {}\nEmail: {}\nPhone: {}\n\n{}",
        timestamp, lead.name, lead.email, lead.phone, lead.message
    )
}

/// Delivers leads as WhatsApp messages through the Twilio API.
pub struct WhatsAppDelivery {
    client: reqwest::Client,
    settings: WhatsAppSettings,
}

impl WhatsAppDelivery {
    pub fn new(settings: WhatsAppSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    async fn send_message(&self, body: &str) -> Result<(), DeliveryError> {
        // Twilio API endpoint for sending messages
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.settings.api_url.trim_end_matches('/'),
            self.settings.account_sid
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.settings.account_sid, Some(&self.settings.auth_token))
            .form(&[
                ("From", self.settings.from.as_str()),
                ("To", self.settings.to.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Twilio API error ({}): {}", status, body);
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

impl LeadDelivery for WhatsAppDelivery {
    fn name(&self) -> &'static str {
        "whatsapp"
    }

    fn deliver<'a>(&'a self, lead: &'a Lead) -> BoxFuture<'a, Result<(), DeliveryError>> {
        Box::pin(async move {
            self.send_message(&format_lead_message(lead)).await?;
            info!("Lead forwarded to WhatsApp {}", self.settings.to);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use wiremock::{
        matchers::{body_string_contains, header_exists, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn settings(api_url: &str) -> WhatsAppSettings {
        WhatsAppSettings {
            account_sid: "AC123".to_string(),
            auth_token: "secret".to_string(),
            from: "whatsapp:+14155238886".to_string(),
            to: "whatsapp:+5585921861059".to_string(),
            api_url: api_url.to_string(),
        }
    }

    fn sample_lead() -> Lead {
        Lead {
            name: "Ana".to_string(),
            email: "ana@empresa.com.br".to_string(),
            phone: "85999999999".to_string(),
            message: "Preciso de suporte de rede".to_string(),
        }
    }

    // ==================== Quote Link Tests ====================

    #[test]
    fn test_quote_link_in_portuguese() {
        let resolver = LanguageResolver::default();
        let link = whatsapp_quote_link(&resolver, "5585921861059");

        assert!(link.starts_with("https://wa.me/5585921861059?text="));
        assert!(link.contains("Ol%C3%A1%21"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_quote_link_follows_locale() {
        let resolver = LanguageResolver::new(Locale::En);
        let link = whatsapp_quote_link(&resolver, "5585921861059");

        assert!(link.contains("text=Hello%21+I+would+like+to+request+a+quote."));
    }

    // ==================== Message Format Tests ====================

    #[test]
    fn test_format_lead_message_lists_fields() {
        let message = format_lead_message(&sample_lead());

        assert!(message.contains("Name: Ana"));
        assert!(message.contains("Email: ana@empresa.com.br"));
        assert!(message.contains("Phone: 85999999999"));
        assert!(message.ends_with("Preciso de suporte de rede"));
    }

    // ==================== Delivery Tests ====================

    #[tokio::test]
    async fn test_deliver_posts_form_to_twilio() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC123/Messages.json"))
            .and(header_exists("authorization"))
            .and(body_string_contains("To=whatsapp%3A%2B5585921861059"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"sid": "SM1"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let delivery = WhatsAppDelivery::new(settings(&mock_server.uri()));
        let result = delivery.deliver(&sample_lead()).await;

        assert!(result.is_ok(), "unexpected error: {:?}", result);
    }

    #[tokio::test]
    async fn test_deliver_maps_twilio_error_to_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC123/Messages.json"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Authenticate"))
            .mount(&mock_server)
            .await;

        let delivery = WhatsAppDelivery::new(settings(&mock_server.uri()));
        let result = delivery.deliver(&sample_lead()).await;

        match result {
            Err(DeliveryError::Rejected { status, body }) => {
                assert_eq!(status, 401);
                assert_eq!(body, "Authenticate");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }
}
