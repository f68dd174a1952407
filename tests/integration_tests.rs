//! Integration tests for the Site TI server
//!
//! These tests start the real axum router on a random local port and talk to
//! it over HTTP, with delivery either simulated or pointed at a wiremock
//! server standing in for the Telegram Bot API.

use std::sync::Arc;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use site_ti::{
    config::{Config, DeliveryBackend, TelegramSettings},
    delivery::{LeadDelivery, SimulatedDelivery},
    i18n::Locale,
    server::{self, AppState},
};

// ==================== Test Helpers ====================

fn create_test_config(delivery: DeliveryBackend) -> Config {
    Config {
        port: 0,
        default_locale: Locale::Pt,
        delivery,
        delivery_timeout: Duration::from_secs(5),
        whatsapp_number: "5585921861059".to_string(),
        whatsapp_display: "(85) 92186-1059".to_string(),
        contact_email: "fortalflixentreterimento@gmail.com".to_string(),
    }
}

fn simulated() -> DeliveryBackend {
    DeliveryBackend::Simulated {
        delay: Duration::from_millis(10),
    }
}

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");

    tokio::spawn(async move {
        axum::serve(listener, server::router(state))
            .await
            .expect("Server error");
    });

    format!("http://{}", addr)
}

/// A client that keeps cookies, like a browser session.
fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client")
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jo",
        "email": "jo@x.com",
        "phone": "8599999999",
        "message": "Hello there friend"
    })
}

// ==================== Health & Page Tests ====================

#[tokio::test]
async fn test_health_endpoint() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_index_renders_in_default_locale() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;

    let html = reqwest::get(format!("{}/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"<html lang="pt">"#));
    assert!(html.contains("Solicitar Orçamento"));
}

// ==================== Locale Tests ====================

#[tokio::test]
async fn test_locale_toggle_round_trip() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;
    let client = browser();

    let current: serde_json::Value = client
        .get(format!("{}/api/locale", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(current["locale"], "pt");

    let toggled: serde_json::Value = client
        .post(format!("{}/api/locale/toggle", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled["locale"], "en");

    let toggled_back: serde_json::Value = client
        .post(format!("{}/api/locale/toggle", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled_back["locale"], "pt");
}

#[tokio::test]
async fn test_page_language_button_switches_whole_page() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;
    let client = browser();

    // The form post redirects back to the page
    let html = client
        .post(format!("{}/locale", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains("Request Quote"));
    assert!(html.contains("Send Message"));
}

#[tokio::test]
async fn test_toggle_affects_contact_messages() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;
    let client = browser();

    client
        .post(format!("{}/api/locale/toggle", base))
        .send()
        .await
        .unwrap();

    let response = client
        .post(format!("{}/api/contact", base))
        .json(&valid_body())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["title"], "Message Sent!");
}

#[tokio::test]
async fn test_toggle_sets_locale_cookie() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/locale/toggle", base))
        .send()
        .await
        .unwrap();

    let cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("locale=en;"));
}

#[tokio::test]
async fn test_one_visitors_toggle_does_not_change_another_visitors_page() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;
    let alice = browser();
    let bob = browser();

    alice
        .post(format!("{}/locale", base))
        .send()
        .await
        .unwrap();

    let alice_page = alice
        .get(format!("{}/", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    let bob_page = bob
        .get(format!("{}/", base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(alice_page.contains(r#"<html lang="en">"#));
    assert!(bob_page.contains(r#"<html lang="pt">"#));

    // Validation messages follow each visitor's own locale
    let invalid = serde_json::json!({
        "name": "J",
        "email": "jo@x.com",
        "phone": "8599999999",
        "message": "Hello there friend"
    });
    let alice_errors: serde_json::Value = alice
        .post(format!("{}/api/contact", base))
        .json(&invalid)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let bob_errors: serde_json::Value = bob
        .post(format!("{}/api/contact", base))
        .json(&invalid)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(alice_errors["errors"]["name"], "Name must be at least 2 characters");
    assert_eq!(bob_errors["errors"]["name"], "Nome deve ter pelo menos 2 caracteres");
}

#[tokio::test]
async fn test_locale_cookie_overrides_default() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;

    let html = reqwest::Client::new()
        .get(format!("{}/", base))
        .header(reqwest::header::COOKIE, "locale=en")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains(r#"<html lang="en">"#));
}

// ==================== Contact Tests ====================

#[tokio::test]
async fn test_contact_success_returns_localized_notification() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&valid_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["kind"], "success");
    assert_eq!(body["title"], "Mensagem Enviada!");
    assert_eq!(
        body["description"],
        "Obrigado pelo contato. Retornaremos em breve!"
    );
}

#[tokio::test]
async fn test_contact_validation_failure_reports_every_field() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&serde_json::json!({
            "name": "J",
            "email": "bad",
            "phone": "123",
            "message": "hi"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    let errors = body["errors"].as_object().expect("errors map");
    assert_eq!(errors.len(), 4);
    assert_eq!(errors["name"], "Nome deve ter pelo menos 2 caracteres");
    assert_eq!(errors["email"], "Email inválido");
    assert_eq!(errors["phone"], "Telefone inválido");
    assert_eq!(errors["message"], "Mensagem deve ter pelo menos 10 caracteres");
}

#[tokio::test]
async fn test_contact_partial_failure_reports_only_failing_fields() {
    let base = spawn_app(AppState::from_config(create_test_config(simulated()))).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&serde_json::json!({
            "name": "Maria",
            "email": "maria@example.com",
            "phone": "123"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    let errors = body["errors"].as_object().expect("errors map");
    let mut keys: Vec<&str> = errors.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["message", "phone"]);
}

#[tokio::test]
async fn test_contact_delivered_to_telegram() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(DeliveryBackend::Telegram(TelegramSettings {
        bot_token: "test-token".to_string(),
        chat_id: "123456789".to_string(),
        api_url: mock_server.uri(),
    }));
    let base = spawn_app(AppState::from_config(config)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&valid_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_contact_backend_failure_returns_bad_gateway() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(DeliveryBackend::Telegram(TelegramSettings {
        bot_token: "test-token".to_string(),
        chat_id: "123456789".to_string(),
        api_url: mock_server.uri(),
    }));
    let base = spawn_app(AppState::from_config(config)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&valid_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["kind"], "failure");
    assert_eq!(body["title"], "Falha no Envio");
}

#[tokio::test]
async fn test_contact_slow_backend_times_out() {
    let mut config = create_test_config(simulated());
    config.delivery_timeout = Duration::from_millis(50);

    let delivery: Arc<dyn LeadDelivery> = Arc::new(SimulatedDelivery::new(Duration::from_secs(10)));
    let base = spawn_app(AppState::new(config, delivery)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", base))
        .json(&valid_body())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
}
