//! Admin login and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::middleware::{IsAdmin, clear_admin, password_matches, set_admin};
use crate::routes::PageContext;
use crate::state::AppState;

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub error: Option<&'static str>,
}

/// Display the login page.
pub async fn login_page(IsAdmin(is_admin): IsAdmin, page: PageContext) -> Response {
    if is_admin {
        return Redirect::to("/admin/products").into_response();
    }
    LoginTemplate { page, error: None }.into_response()
}

/// Check the shared password.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if !password_matches(&form.password, &state.config().admin_password) {
        tracing::warn!("Admin login failed");
        let template = LoginTemplate {
            error: Some(page.t.login_error),
            page,
        };
        return Ok((StatusCode::UNAUTHORIZED, template).into_response());
    }

    set_admin(&session).await?;
    add_breadcrumb("auth", "Admin logged in", None);
    tracing::info!("Admin logged in");
    Ok(Redirect::to("/admin/products").into_response())
}

/// Clear the admin session.
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    clear_admin(&session).await?;
    add_breadcrumb("auth", "Admin logged out", None);
    Ok(Redirect::to("/admin/login"))
}
