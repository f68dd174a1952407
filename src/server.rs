//! HTTP surface: the landing page, the locale toggle, and the contact endpoint.
//!
//! Each visitor carries their own locale in a `locale` cookie. Handlers turn
//! it into a request-scoped `LanguageResolver`, so one visitor's toggle never
//! changes the language another visitor sees.

use crate::config::Config;
use crate::contact::{ContactFormController, ContactFormFields, FieldErrors, SubmitOutcome};
use crate::delivery::{self, LeadDelivery};
use crate::i18n::{LanguageResolver, Locale};
use crate::page;
use anyhow::{Context, Result};
use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Cookie holding the visitor's locale code.
pub const LOCALE_COOKIE: &str = "locale";

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub delivery: Arc<dyn LeadDelivery>,
}

impl AppState {
    /// Build state from configuration, choosing the configured delivery backend.
    pub fn from_config(config: Config) -> Self {
        let delivery = delivery::from_config(&config);
        Self::new(config, delivery)
    }

    pub fn new(config: Config, delivery: Arc<dyn LeadDelivery>) -> Self {
        Self {
            config: Arc::new(config),
            delivery,
        }
    }
}

/// The requesting visitor's locale: their cookie, or the configured default.
#[derive(Debug, Clone, Copy)]
pub struct ClientLocale(pub Locale);

impl ClientLocale {
    /// A resolver scoped to this request.
    pub fn resolver(self) -> Arc<LanguageResolver> {
        Arc::new(LanguageResolver::new(self.0))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for ClientLocale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let locale = locale_from_cookies(&parts.headers).unwrap_or(state.config.default_locale);
        Ok(ClientLocale(locale))
    }
}

/// Read the locale cookie. Unknown codes are ignored.
fn locale_from_cookies(headers: &HeaderMap) -> Option<Locale> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LOCALE_COOKIE)
        .and_then(|(_, code)| Locale::from_code(code).ok())
}

fn locale_cookie(locale: Locale) -> String {
    format!(
        "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
        LOCALE_COOKIE,
        locale.code()
    )
}

#[derive(Debug, Serialize)]
struct LocaleResponse {
    locale: Locale,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    errors: FieldErrors,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/locale", post(toggle_locale_redirect))
        .route("/api/locale", get(current_locale))
        .route("/api/locale/toggle", post(toggle_locale))
        .route("/api/contact", post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured port and serve until the process exits.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

async fn index(State(state): State<AppState>, locale: ClientLocale) -> Html<String> {
    Html(page::render_index(&locale.resolver(), &state.config))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn current_locale(ClientLocale(locale): ClientLocale) -> Json<LocaleResponse> {
    Json(LocaleResponse { locale })
}

async fn toggle_locale(locale: ClientLocale) -> impl IntoResponse {
    let locale = locale.resolver().toggle_locale();
    (
        [(header::SET_COOKIE, locale_cookie(locale))],
        Json(LocaleResponse { locale }),
    )
}

/// Form-post variant of the toggle used by the page's language button.
async fn toggle_locale_redirect(locale: ClientLocale) -> impl IntoResponse {
    let locale = locale.resolver().toggle_locale();
    ([(header::SET_COOKIE, locale_cookie(locale))], Redirect::to("/"))
}

/// Each request is one form-filling session with its own controller.
async fn submit_contact(
    State(state): State<AppState>,
    locale: ClientLocale,
    Json(fields): Json<ContactFormFields>,
) -> Response {
    let form = ContactFormController::new(locale.resolver(), Arc::clone(&state.delivery))
        .with_timeout(state.config.delivery_timeout);
    form.fill(fields);

    match form.submit().await {
        SubmitOutcome::Delivered(notification) => (StatusCode::OK, Json(notification)).into_response(),
        SubmitOutcome::Invalid(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationResponse { errors }),
        )
            .into_response(),
        SubmitOutcome::Failed { notification, .. } => {
            (StatusCode::BAD_GATEWAY, Json(notification)).into_response()
        }
        SubmitOutcome::AlreadySubmitting | SubmitOutcome::Cancelled => {
            StatusCode::CONFLICT.into_response()
        }
    }
}
