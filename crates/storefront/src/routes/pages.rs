//! Static page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::filters;
use crate::routes::PageContext;

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub page: PageContext,
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub page: PageContext,
}

/// Display the about page.
pub async fn about(page: PageContext) -> AboutTemplate {
    AboutTemplate { page }
}

/// Fallback for unknown paths.
pub async fn not_found(page: PageContext) -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate { page }).into_response()
}
