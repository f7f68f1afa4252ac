//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page (featured products)
//! GET  /gallery?category=         - Catalog with category filter
//! GET  /product/{slug}            - Product detail
//! GET  /product/{slug}/whatsapp   - Redirect to the WhatsApp inquiry link
//! GET  /about                     - About page
//! GET  /contact?product=          - Contact form
//! POST /contact                   - Submit an inquiry
//! GET  /lang/{code}?next=         - Switch display language
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Backend readiness check
//!
//! # Admin (all but login require an admin session)
//! GET  /admin                     - Redirect to /admin/products
//! GET  /admin/login               - Login page
//! POST /admin/login               - Login action
//! POST /admin/logout              - Logout action
//! GET  /admin/products            - Product table (?q=, ?category=)
//! GET  /admin/products/new        - Create form
//! POST /admin/products/new        - Create (multipart, image upload)
//! GET  /admin/products/{id}       - Edit form
//! POST /admin/products/{id}       - Update (multipart, image upload/removal)
//! POST /admin/products/{id}/delete - Delete product and its images
//! GET  /admin/inquiries?status=   - Inquiry list
//! POST /admin/inquiries/{id}/status - Change status
//! POST /admin/inquiries/{id}/delete - Delete inquiry
//! ```

pub mod admin;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod lang;
pub mod pages;
pub mod products;

use axum::{
    Router,
    extract::{FromRequestParts, State},
    http::{StatusCode, request::Parts},
    middleware::from_fn,
    middleware::from_fn_with_state,
    routing::get,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use decors_core::Locale;

use crate::i18n::{Translations, contact_details};
use crate::middleware::{
    CurrentLocale, create_session_layer, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Directory served under `/static`.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Per-request data every page template needs.
pub struct PageContext {
    pub t: &'static Translations,
    pub locale: Locale,
    /// Current path, used by the language switcher to come back here.
    pub path: String,
    /// Generic WhatsApp chat link, when a number is configured.
    pub whatsapp_url: Option<String>,
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

impl PageContext {
    /// Build a context for a locale.
    #[must_use]
    pub fn new(state: &AppState, locale: Locale, path: &str) -> Self {
        Self {
            t: Translations::for_locale(locale),
            locale,
            path: path.to_string(),
            whatsapp_url: state
                .config()
                .whatsapp_number
                .as_ref()
                .map(|n| format!("https://wa.me/{n}")),
            address: contact_details::ADDRESS,
            phone: contact_details::PHONE,
            email: contact_details::EMAIL,
        }
    }

    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.locale.code()
    }

    #[must_use]
    pub const fn dir(&self) -> &'static str {
        self.locale.dir()
    }

    /// The language the switcher offers.
    #[must_use]
    pub const fn other_lang(&self) -> &'static str {
        match self.locale {
            Locale::Fr => "ar",
            Locale::Ar => "fr",
        }
    }

    /// Link that switches language and returns to this page.
    #[must_use]
    pub fn switch_url(&self) -> String {
        format!(
            "/lang/{}?next={}",
            self.other_lang(),
            urlencoding::encode(&self.path)
        )
    }
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentLocale(locale) = CurrentLocale::from_request_parts(parts, state).await?;
        let path = parts
            .uri
            .path_and_query()
            .map_or("/", axum::http::uri::PathAndQuery::as_str);
        Ok(Self::new(state, locale, path))
    }
}

/// Create the public site routes.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/gallery", get(gallery::index))
        .route("/product/{slug}", get(products::show))
        .route("/product/{slug}/whatsapp", get(products::whatsapp))
        .route("/about", get(pages::about))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/lang/{code}", get(lang::switch))
}

/// Create the full application router with its middleware stack.
///
/// Sentry layers are added by the binary, outside this router.
pub fn app(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(public_routes())
        .nest("/admin", admin::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(pages::not_found)
        .layer(from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(session_layer)
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::extract::Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            },
        ))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the backend is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.catalog().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
