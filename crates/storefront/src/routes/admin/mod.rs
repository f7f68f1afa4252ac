//! Admin panel route handlers.
//!
//! Everything except the login screen requires [`RequireAdmin`].
//!
//! [`RequireAdmin`]: crate::middleware::RequireAdmin

pub mod auth;
pub mod inquiries;
pub mod products;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::Redirect,
    routing::{get, post},
};

use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Largest accepted product form body (several photos).
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Create the product management routes.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/new", get(products::new_page).post(products::create))
        .route("/{id}", get(products::edit_page).post(products::update))
        .route("/{id}/delete", post(products::delete))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Create the inquiry management routes.
pub fn inquiry_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(inquiries::index))
        .route("/{id}/status", post(inquiries::update_status))
        .route("/{id}/delete", post(inquiries::delete))
}

/// Create all admin routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .nest("/products", product_routes())
        .nest("/inquiries", inquiry_routes())
}

/// The panel opens on the product table.
async fn dashboard(_admin: RequireAdmin) -> Redirect {
    Redirect::to("/admin/products")
}
